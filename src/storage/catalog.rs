//! Catalog accessor seam.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::types::SystemRecord;

/// Failure to supply the corpus. The engine never returns partial results
/// on top of a failed fetch; this propagates to the caller instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog database not found at {0}")]
    NotFound(PathBuf),
    #[error("failed to open catalog database at {path}: {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },
    #[error("catalog query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

/// Supplies the full candidate corpus for a search.
///
/// Implementations return a complete snapshot ordered by ascending id —
/// no filtering, no partial fetch. The engine calls this freshly on every
/// query, so implementations must support concurrent reads.
pub trait CatalogAccessor: Send + Sync {
    fn all_records(&self) -> Result<Vec<SystemRecord>, CatalogError>;
}
