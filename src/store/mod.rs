//! SQLite-backed store.
//!
//! `Store` is only a handle to the database file. Every operation opens its
//! own connection and drops it before returning, so nothing is held between
//! requests or ingestion steps.

mod value;

pub use value::*;

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::debug;

use crate::error::Result;
use crate::schema::{generate_create_table, generate_indexes, generate_insert, ALL_TABLES};

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection scoped to the caller.
    ///
    /// Foreign keys are declared but not enforced; the bundled SQLite turns
    /// enforcement on by default, so it is switched off per connection.
    pub fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
        Ok(conn)
    }

    /// Delete the database file, and its WAL companions, if present
    pub fn reset(&self) -> Result<()> {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let file = PathBuf::from(file);
            if file.exists() {
                fs::remove_file(&file)?;
                debug!("Removed {:?}", file);
            }
        }
        Ok(())
    }

    /// Create all tables and indexes that do not exist yet
    pub fn create_tables(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = self.connect()?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        for schema in ALL_TABLES {
            conn.execute(&generate_create_table(schema), [])?;
            for index_sql in generate_indexes(schema) {
                conn.execute(&index_sql, [])?;
            }
        }

        Ok(())
    }

    /// Row count of one table
    pub fn count_rows(&self, table: &str) -> Result<i64> {
        let conn = self.connect()?;
        let count = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })?;
        Ok(count)
    }

    /// True when no table holds any rows
    pub fn is_empty(&self) -> Result<bool> {
        for schema in ALL_TABLES {
            if self.count_rows(schema.name)? > 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Insert every row in one transaction and commit
    pub fn insert_all<T: Persist>(&self, rows: &[T]) -> Result<usize> {
        let schema = T::schema();
        let insert_sql = generate_insert(schema);

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(&insert_sql)?;
            for row in rows {
                for (idx, value) in row.values().iter().enumerate() {
                    value.bind_to(idx + 1, &mut stmt)?;
                }
                stmt.raw_execute()?;
            }
        }
        tx.commit()?;

        debug!("Committed {} rows into {}", rows.len(), schema.name);
        Ok(rows.len())
    }
}
