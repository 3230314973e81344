//! Per-operation connections to one catalog database.
//!
//! # Invariants
//! - The database is migrated once, when the source is created.
//! - Every `connect` call returns a fresh connection; callers never share one.
//! - File databases run in WAL mode so readers proceed while a write is open.

use super::open::{open_with, BUSY_TIMEOUT};
use super::{DbResult, IN_MEMORY_DB_PATH};
use log::info;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

static MEMORY_DB_SEQ: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
enum Target {
    File(PathBuf),
    /// `memdb` VFS URI; named databases are visible to every connection in
    /// the process and use regular SQLite locking.
    Memory(String),
}

/// Hands out independent connections to one migrated catalog database.
///
/// Conflicting writes are serialized by SQLite itself (with the usual busy
/// timeout); nothing here holds a lock across operations.
#[derive(Debug)]
pub struct ConnectionSource {
    target: Target,
    // Keeps a named in-memory database alive between operations. Never locked.
    _anchor: Option<Mutex<Connection>>,
}

impl ConnectionSource {
    /// Opens (or creates) the catalog database at `path`, migrates it and
    /// switches it to WAL mode. `:memory:` selects [`ConnectionSource::in_memory`].
    ///
    /// # Errors
    /// - The file cannot be opened, migrated or switched to WAL.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref();
        if path.as_os_str() == IN_MEMORY_DB_PATH {
            return Self::in_memory();
        }

        let conn = open_with("file", || Connection::open(path))?;
        let journal_mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        info!("event=db_source module=db status=ok mode=file journal_mode={journal_mode}");

        Ok(Self {
            target: Target::File(path.to_path_buf()),
            _anchor: None,
        })
    }

    /// Creates an empty, migrated in-memory catalog shared by every
    /// connection taken from this source.
    ///
    /// Each call yields a distinct database; it is dropped with the source.
    pub fn in_memory() -> DbResult<Self> {
        let uri = format!(
            "file:/tacomotor-catalog-{}-{}?vfs=memdb",
            std::process::id(),
            MEMORY_DB_SEQ.fetch_add(1, Ordering::Relaxed)
        );
        let anchor = open_with("memory", || Connection::open(&uri))?;

        Ok(Self {
            target: Target::Memory(uri),
            _anchor: Some(Mutex::new(anchor)),
        })
    }

    /// Opens a new connection to the catalog.
    ///
    /// # Errors
    /// - SQLite refuses the connection.
    pub fn connect(&self) -> DbResult<Connection> {
        let conn = match &self.target {
            Target::File(path) => Connection::open(path)?,
            Target::Memory(uri) => Connection::open(uri)?,
        };
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}
