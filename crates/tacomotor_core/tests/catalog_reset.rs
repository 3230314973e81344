use tacomotor_core::db::open_db_in_memory;
use tacomotor_core::{
    reset_tables, CrudRepository, NewBrand, NewPart, ResetOptions, ResetSummary,
    SqliteBrandRepository, SqlitePartRepository,
};

#[test]
fn reset_clears_tables_and_restarts_ids() {
    let mut conn = open_db_in_memory().unwrap();
    {
        let brands = SqliteBrandRepository::try_new(&conn).unwrap();
        let parts = SqlitePartRepository::try_new(&conn).unwrap();
        for name in ["Volkswagen", "Toyota", "Seat"] {
            brands.create(&NewBrand::named(name)).unwrap();
        }
        parts.create(&NewPart::new(3, "Taco Motor")).unwrap();
    }

    let summary = reset_tables(&mut conn, ResetOptions::default()).unwrap();
    assert_eq!(summary, ResetSummary::default());

    let brands = SqliteBrandRepository::try_new(&conn).unwrap();
    let parts = SqlitePartRepository::try_new(&conn).unwrap();
    assert!(brands.list().unwrap().is_empty());
    assert!(parts.list().unwrap().is_empty());

    assert_eq!(brands.create(&NewBrand::named("Fiat")).unwrap().id, 1);
    assert_eq!(parts.create(&NewPart::new(1, "Bujía")).unwrap().id, 1);
}

#[test]
fn reset_with_seed_inserts_demo_catalog() {
    let mut conn = open_db_in_memory().unwrap();
    SqliteBrandRepository::try_new(&conn)
        .unwrap()
        .create(&NewBrand::named("Leftover"))
        .unwrap();

    let summary = reset_tables(
        &mut conn,
        ResetOptions {
            seed_demo_data: true,
        },
    )
    .unwrap();
    assert_eq!(summary, ResetSummary { brands: 2, parts: 2 });

    let brands = SqliteBrandRepository::try_new(&conn).unwrap().list().unwrap();
    let names: Vec<_> = brands.iter().map(|brand| brand.name.as_str()).collect();
    assert_eq!(names, ["Volkswagen", "Toyota"]);
    assert_eq!(brands[0].id, 1);

    let parts = SqlitePartRepository::try_new(&conn).unwrap().list().unwrap();
    assert_eq!(parts.len(), 2);
    assert!(parts.iter().all(|part| part.brand_id == brands[0].id));
    assert_eq!(parts[0].name, "Taco Motor");
}

#[test]
fn reset_is_all_or_nothing() {
    let mut conn = open_db_in_memory().unwrap();
    SqliteBrandRepository::try_new(&conn)
        .unwrap()
        .create(&NewBrand::named("Volkswagen"))
        .unwrap();
    SqlitePartRepository::try_new(&conn)
        .unwrap()
        .create(&NewPart::new(1, "Taco Motor"))
        .unwrap();

    // Brands are cleared after parts; a failing brands delete must keep the parts too.
    conn.execute_batch(
        "CREATE TRIGGER block_brand_delete BEFORE DELETE ON brands
         BEGIN SELECT RAISE(ABORT, 'brands are locked'); END;",
    )
    .unwrap();

    assert!(reset_tables(&mut conn, ResetOptions::default()).is_err());

    assert_eq!(SqliteBrandRepository::new(&conn).list().unwrap().len(), 1);
    assert_eq!(SqlitePartRepository::new(&conn).list().unwrap().len(), 1);
}
