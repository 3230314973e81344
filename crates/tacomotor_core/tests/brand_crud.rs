use rusqlite::Connection;
use tacomotor_core::db::migrations::latest_version;
use tacomotor_core::db::open_db_in_memory;
use tacomotor_core::{
    BrandPatch, BrandService, CrudRepository, NewBrand, RepoError, SqliteBrandRepository,
    ValidationError,
};

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();

    let created = repo.create(&NewBrand::named("Volkswagen")).unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Volkswagen");
    assert_eq!(created.created_at, created.updated_at);

    let loaded = repo.get(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn ids_are_assigned_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();

    let first = repo.create(&NewBrand::named("Volkswagen")).unwrap();
    let second = repo.create(&NewBrand::named("Toyota")).unwrap();
    assert_eq!((first.id, second.id), (1, 2));

    let names: Vec<_> = repo.list().unwrap().into_iter().map(|b| b.name).collect();
    assert_eq!(names, ["Volkswagen", "Toyota"]);
}

#[test]
fn update_changes_only_name_and_advances_updated_at() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();
    let created = repo.create(&NewBrand::named("Volkswagen")).unwrap();

    let renamed = repo.update(created.id, &BrandPatch::rename("VW")).unwrap();
    assert_eq!(renamed.id, created.id);
    assert_eq!(renamed.name, "VW");
    assert_eq!(renamed.created_at, created.created_at);
    assert!(renamed.updated_at > created.updated_at);

    let again = repo.update(created.id, &BrandPatch::default()).unwrap();
    assert_eq!(again.name, "VW");
    assert!(again.updated_at > renamed.updated_at);
}

#[test]
fn replace_overwrites_fields_and_keeps_identity() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();
    let created = repo.create(&NewBrand::named("Volkswagen")).unwrap();

    let replaced = repo.replace(created.id, &NewBrand::named("Toyota")).unwrap();
    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.name, "Toyota");
    assert_eq!(replaced.created_at, created.created_at);
}

#[test]
fn missing_ids_fail_the_same_way_every_time() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();

    for _ in 0..2 {
        assert!(repo.get(999).unwrap().is_none());
        assert!(matches!(
            repo.update(999, &BrandPatch::rename("x")),
            Err(RepoError::NotFound { resource: "brand", id: 999 })
        ));
        assert!(matches!(
            repo.replace(999, &NewBrand::named("x")),
            Err(RepoError::NotFound { resource: "brand", id: 999 })
        ));
        assert!(matches!(
            repo.delete(999),
            Err(RepoError::NotFound { resource: "brand", id: 999 })
        ));
    }
}

#[test]
fn delete_is_permanent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();
    let created = repo.create(&NewBrand::named("Volkswagen")).unwrap();

    repo.delete(created.id).unwrap();
    assert!(repo.get(created.id).unwrap().is_none());
    assert!(repo.list().unwrap().is_empty());
    assert!(matches!(
        repo.delete(created.id),
        Err(RepoError::NotFound { .. })
    ));
}

#[test]
fn validation_failure_blocks_writes_and_leaves_state_untouched() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();

    let create_err = repo.create(&NewBrand::default()).unwrap_err();
    assert!(matches!(
        create_err,
        RepoError::Validation(ValidationError::MissingField("name"))
    ));
    assert!(repo.list().unwrap().is_empty());

    let created = repo.create(&NewBrand::named("Volkswagen")).unwrap();
    let update_err = repo.update(created.id, &BrandPatch::rename(" ")).unwrap_err();
    assert!(matches!(
        update_err,
        RepoError::Validation(ValidationError::BlankField("name"))
    ));
    assert_eq!(repo.get(created.id).unwrap().unwrap(), created);
}

#[test]
fn service_maps_missing_record_to_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = BrandService::new(SqliteBrandRepository::try_new(&conn).unwrap());

    let created = service.create(&NewBrand::named("Toyota")).unwrap();
    assert_eq!(service.get(created.id).unwrap(), created);
    assert!(service.list().unwrap().contains(&created));

    service.delete(created.id).unwrap();
    let err = service.get(created.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { resource: "brand", id } if id == created.id));
    assert_eq!(err.to_string(), format!("brand {} not found", created.id));
    assert!(!service.list().unwrap().contains(&created));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteBrandRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_brands_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteBrandRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("brands"))
    ));
}

#[test]
fn repository_rejects_brands_table_missing_a_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE brands (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteBrandRepository::try_new(&conn),
        Err(RepoError::MissingRequiredColumn {
            table: "brands",
            column: "updated_at"
        })
    ));
}
