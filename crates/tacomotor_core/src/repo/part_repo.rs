//! SQLite repository for `parts`.
//!
//! `brand_id` is stored as given; existence of the brand is not checked.

use super::{ensure_table_ready, parse_timestamp, truncate_table, CrudRepository, RepoError, RepoResult};
use crate::model::part::{NewPart, Part, PartPatch};
use crate::model::{now_millis, RecordId};
use rusqlite::{params, Connection, OptionalExtension, Params, Row};

const TABLE: &str = "parts";
const COLUMNS: &[&str] = &[
    "id",
    "brand_id",
    "name",
    "description",
    "created_at",
    "updated_at",
];

const PART_SELECT_SQL: &str =
    "SELECT id, brand_id, name, description, created_at, updated_at FROM parts";

/// SQLite-backed part repository.
pub struct SqlitePartRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePartRepository<'conn> {
    /// Wraps a connection known to be migrated (see [`Self::try_new`]).
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Wraps `conn` after checking its schema version and `parts` columns.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, TABLE, COLUMNS)?;
        Ok(Self::new(conn))
    }

    fn write_returning(&self, sql: &str, params: impl Params) -> RepoResult<Option<Part>> {
        self.conn
            .query_row(sql, params, PartRow::read)
            .optional()?
            .map(PartRow::into_part)
            .transpose()
    }

    fn not_found(id: RecordId) -> RepoError {
        RepoError::NotFound {
            resource: <Self as CrudRepository>::RESOURCE,
            id,
        }
    }
}

impl CrudRepository for SqlitePartRepository<'_> {
    type Record = Part;
    type Draft = NewPart;
    type Patch = PartPatch;

    const RESOURCE: &'static str = "part";

    fn list(&self) -> RepoResult<Vec<Part>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PART_SELECT_SQL} ORDER BY id ASC;"))?;
        let rows = stmt
            .query_map([], PartRow::read)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(PartRow::into_part).collect()
    }

    fn create(&self, draft: &NewPart) -> RepoResult<Part> {
        let fields = draft.validate()?;
        self.write_returning(
            "INSERT INTO parts (brand_id, name, description, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)
             RETURNING id, brand_id, name, description, created_at, updated_at;",
            params![fields.brand_id, fields.name, fields.description, now_millis()],
        )?
        .ok_or_else(|| RepoError::InvalidData("part insert returned no row".to_string()))
    }

    fn get(&self, id: RecordId) -> RepoResult<Option<Part>> {
        self.conn
            .query_row(
                &format!("{PART_SELECT_SQL} WHERE id = ?1;"),
                [id],
                PartRow::read,
            )
            .optional()?
            .map(PartRow::into_part)
            .transpose()
    }

    fn update(&self, id: RecordId, patch: &PartPatch) -> RepoResult<Part> {
        let fields = patch.validate()?;
        // ?5 flags an explicit description (possibly null); COALESCE cannot express clearing.
        self.write_returning(
            "UPDATE parts
             SET
                brand_id = COALESCE(?2, brand_id),
                name = COALESCE(?3, name),
                description = CASE WHEN ?5 THEN ?4 ELSE description END,
                updated_at = MAX(?6, updated_at + 1)
             WHERE id = ?1
             RETURNING id, brand_id, name, description, created_at, updated_at;",
            params![
                id,
                fields.brand_id,
                fields.name,
                fields.description.flatten(),
                fields.description.is_some(),
                now_millis(),
            ],
        )?
        .ok_or_else(|| Self::not_found(id))
    }

    fn replace(&self, id: RecordId, draft: &NewPart) -> RepoResult<Part> {
        let fields = draft.validate()?;
        self.write_returning(
            "UPDATE parts
             SET
                brand_id = ?2,
                name = ?3,
                description = ?4,
                updated_at = MAX(?5, updated_at + 1)
             WHERE id = ?1
             RETURNING id, brand_id, name, description, created_at, updated_at;",
            params![
                id,
                fields.brand_id,
                fields.name,
                fields.description,
                now_millis(),
            ],
        )?
        .ok_or_else(|| Self::not_found(id))
    }

    fn delete(&self, id: RecordId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM parts WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(Self::not_found(id));
        }
        Ok(())
    }

    fn truncate(&self) -> RepoResult<()> {
        truncate_table(self.conn, TABLE)
    }
}

struct PartRow {
    id: RecordId,
    brand_id: RecordId,
    name: String,
    description: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl PartRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            brand_id: row.get("brand_id")?,
            name: row.get("name")?,
            description: row.get("description")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    fn into_part(self) -> RepoResult<Part> {
        Ok(Part {
            id: self.id,
            brand_id: self.brand_id,
            name: self.name,
            description: self.description,
            created_at: parse_timestamp(TABLE, "created_at", self.created_at)?,
            updated_at: parse_timestamp(TABLE, "updated_at", self.updated_at)?,
        })
    }
}
