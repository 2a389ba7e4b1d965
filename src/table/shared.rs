//! Lock-protected table handle for services.
//!
//! Writers take the write lock for the whole mutation. Lookups only need the
//! read lock because the traversal never writes to the table, so any number
//! of them can run side by side.

use std::path::Path;
use std::sync::Arc;
use parking_lot::RwLock;

use crate::model::*;
use crate::Result;
use super::EquivalenceTable;

/// Cloneable, thread-safe handle to one [`EquivalenceTable`].
#[derive(Debug, Clone, Default)]
pub struct SharedEquivalenceTable {
    inner: Arc<RwLock<EquivalenceTable>>,
}

impl SharedEquivalenceTable {
    pub fn new(table: EquivalenceTable) -> Self {
        Self { inner: Arc::new(RwLock::new(table)) }
    }

    pub fn add_semantic_match(&self, semantic_match: SemanticMatch) -> bool {
        self.inner.write().add_semantic_match(semantic_match)
    }

    pub fn remove_semantic_match(&self, semantic_match: &SemanticMatch) -> Result<SemanticMatch> {
        self.inner.write().remove_semantic_match(semantic_match)
    }

    pub fn remove_all_semantic_matches(&self) {
        self.inner.write().remove_all_semantic_matches();
    }

    pub fn get_local_matches(&self, semantic_id: &str, score_limit: f64) -> Result<Vec<SemanticMatch>> {
        self.inner.read().get_local_matches(semantic_id, score_limit)
    }

    pub fn traverse(&self, semantic_id: &str, score_limit: f64) -> Result<Vec<LocalMatch>> {
        self.inner.read().traverse(semantic_id, score_limit)
    }

    pub fn answer(&self, request: &MatchRequest, score_limit: f64) -> Result<MatchResponse> {
        self.inner.read().answer(request, score_limit)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// A detached copy of the current contents.
    pub fn snapshot(&self) -> EquivalenceTable {
        self.inner.read().clone()
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.inner.read().to_file(path)
    }

    /// Replace the contents from a file. The write lock is only taken once
    /// the document has been parsed and checked.
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let loaded = EquivalenceTable::from_file(path)?;
        self.inner.write().replace_matches(loaded);
        Ok(())
    }
}

impl From<EquivalenceTable> for SharedEquivalenceTable {
    fn from(table: EquivalenceTable) -> Self {
        Self::new(table)
    }
}
