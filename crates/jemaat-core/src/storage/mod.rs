//! Opt-in SQLite persistence
//!
//! The store never touches the database on its own. The app uses this
//! module to save and restore whole-state snapshots and to keep
//! `StoreSettings` between runs.

mod migrations;
mod queries;

pub use migrations::run_migrations;
pub use queries::*;

use std::path::{Path, PathBuf};

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use crate::error::{Error, Result, StorageError};

pub type DbPool = Pool<SqliteConnectionManager>;

const DB_FILE: &str = "jemaat.db";

/// `<platform data dir>/jemaat`, or `./jemaat` when the platform has none
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jemaat")
}

/// Snapshot and settings database behind a small connection pool
pub struct Storage {
    pool: DbPool,
    db_path: PathBuf,
}

impl Storage {
    /// Open `jemaat.db` inside `data_dir`, creating the directory if needed
    pub fn new_with_path(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir).map_err(|e| {
            StorageError::Database(format!("Cannot create {}: {}", data_dir.display(), e))
        })?;
        Self::from_path(data_dir.join(DB_FILE))
    }

    pub fn from_path(db_path: PathBuf) -> Result<Self> {
        info!("Opening snapshot database at {}", db_path.display());
        let manager = SqliteConnectionManager::file(&db_path);
        Self::open(manager, 4, db_path)
    }

    /// A private database that disappears with the process. The pool holds
    /// one connection so every caller sees the same memory database.
    pub fn in_memory() -> Result<Self> {
        Self::open(SqliteConnectionManager::memory(), 1, PathBuf::from(":memory:"))
    }

    fn open(manager: SqliteConnectionManager, max_size: u32, db_path: PathBuf) -> Result<Self> {
        let pool = Pool::builder()
            .max_size(max_size)
            .build(manager)
            .map_err(|e| StorageError::Pool(e.to_string()))?;

        let conn = pool.get()?;
        run_migrations(&conn).map_err(|e| StorageError::MigrationFailed(e.to_string()))?;
        drop(conn);

        Ok(Self { pool, db_path })
    }

    pub fn connection(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(Error::from)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}
