//! `SQLite` catalog backend.
//!
//! The ETL pipeline (CSV merge, wiki sync, AI enrichment) writes the
//! `systems` table; the engine only ever reads it. `all_records` pulls a
//! full fresh snapshot per query — no caching, no partial fetch — so a
//! search never sees a stale corpus.

use parking_lot::Mutex;
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::model::types::SystemRecord;
use crate::storage::catalog::{CatalogAccessor, CatalogError};

const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS systems (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_name TEXT,
    product_code TEXT,
    status TEXT,
    owner_name TEXT,
    owner_email TEXT,
    owner_telegram TEXT,
    description TEXT,
    wiki_url TEXT,
    jira_url TEXT,
    repo_url TEXT,
    wiki_content TEXT,
    ai_keywords TEXT,
    last_updated INTEGER
);
";

const SELECT_ALL: &str = "
SELECT id, product_name, product_code, status,
       owner_name, owner_email, owner_telegram,
       description, wiki_url, jira_url, repo_url,
       wiki_content, ai_keywords, last_updated
FROM systems
ORDER BY id ASC";

/// Catalog accessor backed by a local `SQLite` file.
///
/// `rusqlite::Connection` is not `Sync`, so the handle sits behind a
/// `parking_lot::Mutex`; each fetch holds it only for the duration of the
/// snapshot read.
#[derive(Debug)]
pub struct SqliteCatalog {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl SqliteCatalog {
    /// Open an existing catalog database. Missing file is the
    /// "corpus unavailable" condition, reported as [`CatalogError::NotFound`].
    pub fn open(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }
        let conn = Connection::open(path).map_err(|e| CatalogError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: path.to_path_buf(),
        })
    }

    /// Open a catalog database, creating the file and the `systems` schema
    /// when absent. Used by ingestion tooling and tests.
    pub fn open_or_create(path: &Path) -> Result<Self, CatalogError> {
        let existed = path.exists();
        let conn = Connection::open(path).map_err(|e| CatalogError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        conn.execute_batch(SCHEMA)?;
        if !existed {
            info!(path = %path.display(), "created catalog database");
        }
        Ok(Self {
            conn: Mutex::new(conn),
            path: path.to_path_buf(),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a record (the `id` field is ignored; `SQLite` assigns one)
    /// and return the assigned id. The search engine itself never writes;
    /// this exists for the ingestion side and for test fixtures.
    pub fn insert_record(&self, record: &SystemRecord) -> Result<i64, CatalogError> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO systems (
                product_name, product_code, status,
                owner_name, owner_email, owner_telegram,
                description, wiki_url, jira_url, repo_url,
                wiki_content, ai_keywords, last_updated
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                record.product_name,
                record.product_code,
                record.status,
                record.owner_name,
                record.owner_email,
                record.owner_telegram,
                record.description,
                record.wiki_url,
                record.jira_url,
                record.repo_url,
                record.wiki_content,
                record.ai_keywords,
                record.last_updated,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

impl CatalogAccessor for SqliteCatalog {
    fn all_records(&self) -> Result<Vec<SystemRecord>, CatalogError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_ALL)?;
        let rows = stmt.query_map([], |row| {
            Ok(SystemRecord {
                id: row.get(0)?,
                product_name: row.get(1)?,
                product_code: row.get(2)?,
                status: row.get(3)?,
                owner_name: row.get(4)?,
                owner_email: row.get(5)?,
                owner_telegram: row.get(6)?,
                description: row.get(7)?,
                wiki_url: row.get(8)?,
                jira_url: row.get(9)?,
                repo_url: row.get(10)?,
                wiki_content: row.get(11)?,
                ai_keywords: row.get(12)?,
                last_updated: row.get(13)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}
