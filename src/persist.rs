//! Whole-table JSON persistence.
//!
//! The table is written as one pretty-printed document:
//!
//! ```text
//! {
//!     "matches": {
//!         "A": [
//!             {
//!                 "base_semantic_id": "A",
//!                 "match_semantic_id": "B",
//!                 "score": 0.9,
//!                 "meta_information": {}
//!             }
//!         ]
//!     }
//! }
//! ```
//!
//! There is no partial or streaming form. Loading checks the table
//! invariants as well as the schema, and never touches a live table unless
//! the whole document is good.

use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::table::EquivalenceTable;
use crate::{Error, Result};

const INDENT: &[u8] = b"    ";

impl EquivalenceTable {
    /// Write the whole table as a JSON document.
    ///
    /// Fails before writing anything when a score is not finite, since JSON
    /// has no encoding for it and the document could not be loaded again.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        if let Some(m) = self.iter_matches().find(|m| !m.score.is_finite()) {
            return Err(Error::InvalidTable(format!("match {m} has a non-finite score")));
        }
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut ser).map_err(Error::Serialization)
    }

    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.to_writer(&mut buf)?;
        // serde_json only emits UTF-8
        String::from_utf8(buf)
            .map_err(|e| Error::Serialization(serde::ser::Error::custom(e)))
    }

    /// Parse a table document. The result uses the default traversal config.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let table: EquivalenceTable = serde_json::from_str(raw).map_err(Error::Deserialization)?;
        table.check_invariants()?;
        Ok(table)
    }

    /// Read a whole document from `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Self::from_json_str(&raw)
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut buf = Vec::new();
        self.to_writer(&mut buf)?;
        std::fs::write(path, buf)?;
        info!(
            path = %path.display(),
            semantic_ids = self.semantic_id_count(),
            matches = self.len(),
            "equivalence table saved"
        );
        Ok(())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            semantic_ids = table.semantic_id_count(),
            matches = table.len(),
            "equivalence table loaded"
        );
        Ok(table)
    }

    /// Replace this table's matches with the contents of `path`, keeping the
    /// current traversal config. On error the table is left as it was.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let loaded = Self::from_file(path)?;
        self.replace_matches(loaded);
        Ok(())
    }

    pub(crate) fn replace_matches(&mut self, other: EquivalenceTable) {
        self.matches = other.matches;
    }
}
