//! Shared handler state: where catalog connections come from.

use crate::error::ApiResult;
use actix_web::web;
use rusqlite::Connection;
use std::sync::Arc;
use tacomotor_core::db::ConnectionSource;
use tacomotor_core::{RepoResult, ResetOptions, SqliteBrandRepository, SqlitePartRepository};

/// Process-wide state injected into every handler through `web::Data`.
///
/// Each operation gets its own connection on actix's blocking pool, so
/// requests only wait on each other where SQLite itself serializes writes.
#[derive(Clone)]
pub struct AppState {
    source: Arc<ConnectionSource>,
    reset: ResetOptions,
}

impl AppState {
    /// Wraps a migrated catalog source.
    ///
    /// # Errors
    /// - No connection can be opened, or the catalog lacks a table or column.
    pub fn new(source: ConnectionSource, reset: ResetOptions) -> RepoResult<Self> {
        {
            let conn = source.connect()?;
            SqliteBrandRepository::try_new(&conn)?;
            SqlitePartRepository::try_new(&conn)?;
        }
        Ok(Self {
            source: Arc::new(source),
            reset,
        })
    }

    pub fn reset_options(&self) -> ResetOptions {
        self.reset
    }

    /// Runs `op` on a fresh connection on the blocking thread pool.
    pub async fn run<T, F>(&self, op: F) -> ApiResult<T>
    where
        F: FnOnce(&mut Connection) -> RepoResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let source = Arc::clone(&self.source);
        let outcome = web::block(move || {
            let mut conn = source.connect()?;
            op(&mut conn)
        })
        .await?;
        Ok(outcome?)
    }
}
