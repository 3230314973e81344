//! Core of the Taco Motor catalog service.
//! Owns the brand/part model, SQLite persistence and the resource CRUD contract.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::brand::{Brand, BrandPatch, NewBrand};
pub use model::part::{NewPart, Part, PartPatch};
pub use model::{parse_record_id, Identified, RecordId, Timestamp, ValidationError};
pub use repo::{CrudRepository, RepoError, RepoResult, SqliteBrandRepository, SqlitePartRepository};
pub use service::admin_service::{reset_tables, ResetOptions, ResetSummary};
pub use service::resource_service::ResourceService;

/// Brand CRUD service over a borrowed connection.
pub type BrandService<'conn> = ResourceService<SqliteBrandRepository<'conn>>;
/// Part CRUD service over a borrowed connection.
pub type PartService<'conn> = ResourceService<SqlitePartRepository<'conn>>;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
