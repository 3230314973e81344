//! SQLite repository for `brands`.

use super::{ensure_table_ready, parse_timestamp, truncate_table, CrudRepository, RepoError, RepoResult};
use crate::model::brand::{Brand, BrandPatch, NewBrand};
use crate::model::{now_millis, RecordId};
use rusqlite::{params, Connection, OptionalExtension, Params, Row};

const TABLE: &str = "brands";
const COLUMNS: &[&str] = &["id", "name", "created_at", "updated_at"];

const BRAND_SELECT_SQL: &str = "SELECT id, name, created_at, updated_at FROM brands";

/// SQLite-backed brand repository.
pub struct SqliteBrandRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBrandRepository<'conn> {
    /// Wraps a connection known to be migrated (see [`Self::try_new`]).
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Wraps `conn` after checking its schema version and `brands` columns.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, TABLE, COLUMNS)?;
        Ok(Self::new(conn))
    }

    fn write_returning(&self, sql: &str, params: impl Params) -> RepoResult<Option<Brand>> {
        self.conn
            .query_row(sql, params, BrandRow::read)
            .optional()?
            .map(BrandRow::into_brand)
            .transpose()
    }
}

impl CrudRepository for SqliteBrandRepository<'_> {
    type Record = Brand;
    type Draft = NewBrand;
    type Patch = BrandPatch;

    const RESOURCE: &'static str = "brand";

    fn list(&self) -> RepoResult<Vec<Brand>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BRAND_SELECT_SQL} ORDER BY id ASC;"))?;
        let rows = stmt
            .query_map([], BrandRow::read)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(BrandRow::into_brand).collect()
    }

    fn create(&self, draft: &NewBrand) -> RepoResult<Brand> {
        let fields = draft.validate()?;
        self.write_returning(
            "INSERT INTO brands (name, created_at, updated_at)
             VALUES (?1, ?2, ?2)
             RETURNING id, name, created_at, updated_at;",
            params![fields.name, now_millis()],
        )?
        .ok_or_else(|| RepoError::InvalidData("brand insert returned no row".to_string()))
    }

    fn get(&self, id: RecordId) -> RepoResult<Option<Brand>> {
        self.conn
            .query_row(
                &format!("{BRAND_SELECT_SQL} WHERE id = ?1;"),
                [id],
                BrandRow::read,
            )
            .optional()?
            .map(BrandRow::into_brand)
            .transpose()
    }

    fn update(&self, id: RecordId, patch: &BrandPatch) -> RepoResult<Brand> {
        let fields = patch.validate()?;
        self.write_returning(
            "UPDATE brands
             SET
                name = COALESCE(?2, name),
                updated_at = MAX(?3, updated_at + 1)
             WHERE id = ?1
             RETURNING id, name, created_at, updated_at;",
            params![id, fields.name, now_millis()],
        )?
        .ok_or(RepoError::NotFound {
            resource: Self::RESOURCE,
            id,
        })
    }

    fn replace(&self, id: RecordId, draft: &NewBrand) -> RepoResult<Brand> {
        let fields = draft.validate()?;
        self.write_returning(
            "UPDATE brands
             SET
                name = ?2,
                updated_at = MAX(?3, updated_at + 1)
             WHERE id = ?1
             RETURNING id, name, created_at, updated_at;",
            params![id, fields.name, now_millis()],
        )?
        .ok_or(RepoError::NotFound {
            resource: Self::RESOURCE,
            id,
        })
    }

    fn delete(&self, id: RecordId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM brands WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                resource: Self::RESOURCE,
                id,
            });
        }
        Ok(())
    }

    fn truncate(&self) -> RepoResult<()> {
        truncate_table(self.conn, TABLE)
    }
}

struct BrandRow {
    id: RecordId,
    name: String,
    created_at: i64,
    updated_at: i64,
}

impl BrandRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    fn into_brand(self) -> RepoResult<Brand> {
        Ok(Brand {
            id: self.id,
            name: self.name,
            created_at: parse_timestamp(TABLE, "created_at", self.created_at)?,
            updated_at: parse_timestamp(TABLE, "updated_at", self.updated_at)?,
        })
    }
}
