use rusqlite::{Connection, ErrorCode, OptionalExtension, ffi};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

/// A single stored key-value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// Errors surfaced by [`Store`] operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Key must not be empty")]
    EmptyKey,

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Key not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

struct StoreInner {
    path: PathBuf,
    busy_timeout: Duration,
}

impl StoreInner {
    /// Open a fresh connection to the database file.
    ///
    /// With `synchronous = FULL` a commit is on disk before the statement returns.
    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(self.busy_timeout)?;
        conn.pragma_update(None, "synchronous", "FULL")?;
        Ok(conn)
    }
}

/// Shareable handle to the SQLite-backed entry store
///
/// Each operation runs on its own connection inside `spawn_blocking`, so
/// reads are not serialized behind writes. Key uniqueness is enforced by the
/// table's primary key, never by an application-level check.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    /// Open the store described by the configuration
    pub async fn from_config(config: &Config) -> Result<Self, StoreError> {
        Self::open(
            &config.database_path,
            Duration::from_millis(config.database_busy_timeout_ms),
        )
        .await
    }

    /// Open (or create) the database file at `path` and make sure the
    /// `entries` table exists.
    pub async fn open(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Self, StoreError> {
        let inner = Arc::new(StoreInner {
            path: path.as_ref().to_path_buf(),
            busy_timeout,
        });

        let setup = Arc::clone(&inner);
        tokio::task::spawn_blocking(move || provision(&setup))
            .await
            .map_err(|e| StoreError::Storage(format!("Store setup task failed: {}", e)))??;

        tracing::info!("Opened entry store at {}", inner.path.display());

        Ok(Self { inner })
    }

    /// Location of the backing database file
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Insert a new entry.
    ///
    /// # Errors
    /// * `StoreError::EmptyKey` - `key` is the empty string
    /// * `StoreError::DuplicateKey` - an entry with `key` already exists
    /// * `StoreError::Storage` - the database could not be written
    pub async fn create(&self, key: String, value: String) -> Result<Entry, StoreError> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }

        self.run(move |conn| {
            let inserted = conn.execute(
                "INSERT INTO entries (key, value) VALUES (?1, ?2)",
                rusqlite::params![key, value],
            );

            match inserted {
                Ok(_) => {
                    tracing::debug!("Inserted entry with key: {}", key);
                    Ok(Entry { key, value })
                }
                Err(err) if is_unique_violation(&err) => Err(StoreError::DuplicateKey(key)),
                Err(err) => Err(err.into()),
            }
        })
        .await
    }

    /// Read the entry stored under `key`
    pub async fn get(&self, key: String) -> Result<Entry, StoreError> {
        self.run(move |conn| {
            let value: Option<String> = conn
                .query_row(
                    "SELECT value FROM entries WHERE key = ?1",
                    rusqlite::params![key],
                    |row| row.get(0),
                )
                .optional()?;

            match value {
                Some(value) => {
                    tracing::debug!("Read entry with key: {}", key);
                    Ok(Entry { key, value })
                }
                None => Err(StoreError::NotFound(key)),
            }
        })
        .await
    }

    /// Remove the entry stored under `key`.
    ///
    /// Deleting a key that is not present (including one that was just
    /// deleted) fails with `StoreError::NotFound`.
    pub async fn delete(&self, key: String) -> Result<(), StoreError> {
        self.run(move |conn| {
            let removed = conn.execute(
                "DELETE FROM entries WHERE key = ?1",
                rusqlite::params![key],
            )?;

            if removed == 0 {
                return Err(StoreError::NotFound(key));
            }

            tracing::info!("Deleted entry with key: {}", key);
            Ok(())
        })
        .await
    }

    /// Verify the database file can be opened and queried
    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.run(|conn| {
            let one: i64 = conn.query_row("SELECT 1", [], |row| row.get(0))?;
            if one == 1 {
                Ok(())
            } else {
                Err(StoreError::Storage(
                    "Health check query returned an unexpected result".to_string(),
                ))
            }
        })
        .await
    }

    async fn run<F, T>(&self, op: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let conn = inner.connect()?;
            op(&conn)
        })
        .await
        .map_err(|e| StoreError::Storage(format!("Store task failed: {}", e)))?
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, _) => {
            failure.code == ErrorCode::ConstraintViolation
                && matches!(
                    failure.extended_code,
                    ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE
                )
        }
        _ => false,
    }
}

/// Create the parent directory, enable WAL and ensure the entries table exists
fn provision(inner: &StoreInner) -> Result<(), StoreError> {
    if let Some(parent) = inner.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = inner.connect()?;

    // journal_mode is persistent in the file, so one switch here covers every later connection
    let mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
    tracing::debug!("Journal mode: {}", mode);

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS entries (
            key    TEXT PRIMARY KEY NOT NULL CHECK (key <> ''),
            value  TEXT NOT NULL
        );",
    )?;

    tracing::info!("Table 'entries' is ready");
    Ok(())
}
