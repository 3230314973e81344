//! Administrative reset of the whole catalog.
//!
//! # Responsibility
//! - Truncate brands and parts and restart both id sequences.
//! - Optionally reseed the demonstration dataset.
//!
//! # Invariants
//! - The reset runs in one `IMMEDIATE` transaction: either every step
//!   applies or none does.
//! - With seeding enabled, seeded parts reference the first seeded brand.

use crate::model::brand::NewBrand;
use crate::model::part::NewPart;
use crate::repo::{CrudRepository, RepoResult, SqliteBrandRepository, SqlitePartRepository};
use log::{error, info};
use rusqlite::{Connection, TransactionBehavior};
use std::time::Instant;

const DEMO_BRANDS: &[&str] = &["Volkswagen", "Toyota"];
const DEMO_PARTS: &[&str] = &["Taco Motor", "Bujía"];

/// Reset behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetOptions {
    /// Reinsert the demonstration brands and parts after truncation.
    pub seed_demo_data: bool,
}

/// Records present once a reset has committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetSummary {
    pub brands: usize,
    pub parts: usize,
}

/// Clears every catalog table and restarts ids at 1.
///
/// # Errors
/// - Any storage failure; the transaction is rolled back on drop.
pub fn reset_tables(conn: &mut Connection, options: ResetOptions) -> RepoResult<ResetSummary> {
    let started_at = Instant::now();
    info!(
        "event=catalog_reset module=admin status=start seed={}",
        options.seed_demo_data
    );

    let result = reset_in_transaction(conn, options);
    match &result {
        Ok(summary) => info!(
            "event=catalog_reset module=admin status=ok brands={} parts={} duration_ms={}",
            summary.brands,
            summary.parts,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=catalog_reset module=admin status=error duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
    result
}

fn reset_in_transaction(conn: &mut Connection, options: ResetOptions) -> RepoResult<ResetSummary> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let summary = {
        let brands = SqliteBrandRepository::new(&tx);
        let parts = SqlitePartRepository::new(&tx);

        parts.truncate()?;
        brands.truncate()?;

        if options.seed_demo_data {
            seed_demo_data(&brands, &parts)?
        } else {
            ResetSummary::default()
        }
    };
    tx.commit()?;
    Ok(summary)
}

fn seed_demo_data(
    brands: &SqliteBrandRepository<'_>,
    parts: &SqlitePartRepository<'_>,
) -> RepoResult<ResetSummary> {
    let mut seeded_brands = Vec::with_capacity(DEMO_BRANDS.len());
    for name in DEMO_BRANDS {
        seeded_brands.push(brands.create(&NewBrand::named(*name))?);
    }

    let mut summary = ResetSummary {
        brands: seeded_brands.len(),
        parts: 0,
    };
    if let Some(first) = seeded_brands.first() {
        for name in DEMO_PARTS {
            parts.create(&NewPart::new(first.id, *name))?;
            summary.parts += 1;
        }
    }
    Ok(summary)
}
