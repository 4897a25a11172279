use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rusqlite::{params, Connection, OptionalExtension};

use super::{Record, Result, StorageEngine, StoreError};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT)";
const UPSERT: &str = "INSERT INTO kv (key, value) VALUES (?1, ?2) \
                      ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const SELECT_ONE: &str = "SELECT value FROM kv WHERE key = ?1 AND value IS NOT NULL";
const SELECT_ALL: &str = "SELECT key, value FROM kv WHERE value IS NOT NULL";
const COUNT: &str = "SELECT COUNT(*) FROM kv WHERE value IS NOT NULL";
const SCHEMA_KIND: &str = "SELECT type FROM sqlite_master WHERE name = 'kv' AND type IN ('table', 'view')";
const TABLE_INFO: &str = "PRAGMA table_info(kv)";

/// Handle to a single on-disk key/value table.
///
/// The connection is released by [close](Store::close) or when the handle is dropped.
pub struct Store {
    path: PathBuf,
    conn: Option<Connection>,
}

impl Store {
    /// Opens the database at `path`, creating the file and the `kv` table if missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let unavailable = |source: rusqlite::Error| StoreError::StorageUnavailable {
            path: path.clone(),
            source,
        };

        let conn = Connection::open(&path).map_err(unavailable)?;
        // SQLite defers reading the header, so a non-database file only fails on first use
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
            .map_err(unavailable)?;

        conn.execute_batch(CREATE_TABLE)
            .map_err(|source| StoreError::Schema {
                path: path.clone(),
                reason: source.to_string(),
                source: Some(source),
            })?;
        verify_schema(&conn).map_err(|(reason, source)| StoreError::Schema {
            path: path.clone(),
            reason,
            source,
        })?;

        info!("opened store at {}", path.display());
        Ok(Self {
            path,
            conn: Some(conn),
        })
    }

    /// Releases the connection. Calling this on a closed handle does nothing.
    pub fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            match conn.close() {
                Ok(()) => info!("closed store at {}", self.path.display()),
                Err((_, e)) => warn!("failed to close store at {}; {e}", self.path.display()),
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records in the table
    pub fn count(&self) -> Result<u64> {
        let conn = self.conn("count")?;

        debug!("count records");
        conn.prepare_cached(COUNT)
            .and_then(|mut stmt| stmt.query_row([], |row| row.get(0)))
            .map_err(|source| StoreError::Read {
                operation: "count",
                key: None,
                source,
            })
    }

    fn conn(&self, operation: &'static str) -> Result<&Connection> {
        self.conn.as_ref().ok_or(StoreError::NotOpen { operation })
    }
}

type SchemaResult = std::result::Result<(), (String, Option<rusqlite::Error>)>;

/// Checks that `kv` is a table keyed by `key` alone, with a `value` column.
fn verify_schema(conn: &Connection) -> SchemaResult {
    let engine_err = |e: rusqlite::Error| (e.to_string(), Some(e));

    let kind: String = conn
        .query_row(SCHEMA_KIND, [], |row| row.get(0))
        .map_err(engine_err)?;
    if kind != "table" {
        return Err((format!("`kv` is a {kind}, not a table"), None));
    }

    let mut stmt = conn.prepare(TABLE_INFO).map_err(engine_err)?;
    let columns = stmt
        .query_map([], |row| Ok((row.get::<_, String>(1)?, row.get::<_, i64>(5)?)))
        .map_err(engine_err)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(engine_err)?;

    let primary_key: Vec<&str> = columns
        .iter()
        .filter(|(_, pk)| *pk > 0)
        .map(|(name, _)| name.as_str())
        .collect();
    if primary_key != ["key"] {
        return Err((
            format!("`kv` primary key is ({}), expected (key)", primary_key.join(", ")),
            None,
        ));
    }
    if !columns.iter().any(|(name, _)| name == "value") {
        return Err(("`kv` has no `value` column".to_string(), None));
    }

    Ok(())
}

impl StorageEngine for Store {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn("set")?;
        let write_err = |source: rusqlite::Error| StoreError::Write {
            key: key.to_string(),
            source,
        };

        debug!("set `{key}`");
        conn.prepare_cached(UPSERT)
            .and_then(|mut stmt| stmt.execute(params![key, value]))
            .map_err(write_err)?;

        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn("get")?;

        debug!("get `{key}`");
        conn.prepare_cached(SELECT_ONE)
            .and_then(|mut stmt| stmt.query_row(params![key], |row| row.get(0)).optional())
            .map_err(|source| StoreError::Read {
                operation: "get",
                key: Some(key.to_string()),
                source,
            })
    }

    fn list(&self) -> Result<Vec<Record>> {
        let conn = self.conn("list")?;

        debug!("list all records");
        conn.prepare_cached(SELECT_ALL)
            .and_then(|mut stmt| {
                let rows = stmt
                    .query_map([], |row| {
                        Ok(Record::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?))
                    })?
                    .collect::<rusqlite::Result<Vec<_>>>();
                rows
            })
            .map_err(|source| StoreError::Read {
                operation: "list",
                key: None,
                source,
            })
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        self.close();
    }
}
