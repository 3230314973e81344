//! Repository contracts and SQLite implementations for catalog resources.
//!
//! # Responsibility
//! - Define the CRUD contract every resource repository satisfies.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths validate their input before issuing SQL.
//! - Every contract operation is a single SQL statement.
//! - Repositories return semantic errors (`NotFound`) next to storage errors.

pub mod brand_repo;
pub mod part_repo;

use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use crate::model::{timestamp_from_millis, Identified, RecordId, Timestamp, ValidationError};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use brand_repo::SqliteBrandRepository;
pub use part_repo::SqlitePartRepository;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error raised by repository and service operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    NotFound {
        resource: &'static str,
        id: RecordId,
    },
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl RepoError {
    /// Whether this error comes from storage rather than from the request.
    pub fn is_storage(&self) -> bool {
        !matches!(self, Self::Validation(_) | Self::NotFound { .. })
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { resource, id } => write!(f, "{resource} {id} not found"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it with db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// CRUD contract shared by every catalog resource.
///
/// `Draft` is the full field set (create, replace); `Patch` is the partial
/// one (update). Lookups by id return `Ok(None)` for unknown ids, mutations
/// by id return `RepoError::NotFound`.
pub trait CrudRepository {
    type Record: Identified;
    type Draft;
    type Patch;

    /// Singular resource name used in errors and log events.
    const RESOURCE: &'static str;

    fn list(&self) -> RepoResult<Vec<Self::Record>>;
    fn create(&self, draft: &Self::Draft) -> RepoResult<Self::Record>;
    fn get(&self, id: RecordId) -> RepoResult<Option<Self::Record>>;
    fn update(&self, id: RecordId, patch: &Self::Patch) -> RepoResult<Self::Record>;
    fn replace(&self, id: RecordId, draft: &Self::Draft) -> RepoResult<Self::Record>;
    fn delete(&self, id: RecordId) -> RepoResult<()>;
    /// Removes every record and restarts the id sequence at 1.
    fn truncate(&self) -> RepoResult<()>;
}

/// Verifies that `conn` is migrated and carries `table` with `columns`.
pub(crate) fn ensure_table_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let present = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    if present.is_empty() {
        return Err(RepoError::MissingRequiredTable(table));
    }
    if let Some(column) = columns
        .iter()
        .copied()
        .find(|column| !present.iter().any(|name| name == column))
    {
        return Err(RepoError::MissingRequiredColumn { table, column });
    }
    Ok(())
}

/// Clears `table` and its `AUTOINCREMENT` counter.
pub(crate) fn truncate_table(conn: &Connection, table: &'static str) -> RepoResult<()> {
    conn.execute(&format!("DELETE FROM {table};"), [])?;
    conn.execute("DELETE FROM sqlite_sequence WHERE name = ?1;", [table])?;
    Ok(())
}

pub(crate) fn parse_timestamp(
    table: &'static str,
    column: &'static str,
    millis: i64,
) -> RepoResult<Timestamp> {
    timestamp_from_millis(millis).ok_or_else(|| {
        RepoError::InvalidData(format!("timestamp `{millis}` out of range in {table}.{column}"))
    })
}
