//! Catalog persistence seam.
//!
//! The import pipeline records committed files through [`CatalogWriter`] and
//! stays ignorant of the storage behind it. A real deployment backs the trait
//! with a database; [`MemoryCatalog`] is the bundled implementation for tests
//! and dry runs.

use std::sync::Mutex;

use thiserror::Error;

use crate::types::LibraryFile;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog write failed: {0}")]
    Write(String),
    #[error("catalog query failed: {0}")]
    Query(String),
}

/// Storage backend for library file records.
pub trait CatalogWriter {
    /// Persist a newly imported file record.
    fn add(&self, record: &LibraryFile) -> Result<(), CatalogError>;

    /// Records previously imported through the given download.
    ///
    /// Used upstream to detect a download that was already imported before
    /// re-running a batch; an empty result means no prior history.
    fn find_by_download_id(&self, download_id: &str) -> Result<Vec<LibraryFile>, CatalogError>;
}

/// In-memory [`CatalogWriter`].
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    records: Mutex<Vec<LibraryFile>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record added so far, in insertion order.
    pub fn records(&self) -> Result<Vec<LibraryFile>, CatalogError> {
        let records = self
            .records
            .lock()
            .map_err(|e| CatalogError::Query(e.to_string()))?;
        Ok(records.clone())
    }
}

impl CatalogWriter for MemoryCatalog {
    fn add(&self, record: &LibraryFile) -> Result<(), CatalogError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| CatalogError::Write(e.to_string()))?;
        records.push(record.clone());
        Ok(())
    }

    fn find_by_download_id(&self, download_id: &str) -> Result<Vec<LibraryFile>, CatalogError> {
        let records = self
            .records
            .lock()
            .map_err(|e| CatalogError::Query(e.to_string()))?;
        Ok(records
            .iter()
            .filter(|r| r.download_id.as_deref() == Some(download_id))
            .cloned()
            .collect())
    }
}
