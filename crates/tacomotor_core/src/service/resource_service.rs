//! Generic resource use-case service.
//!
//! # Responsibility
//! - Expose the CRUD contract (list/create/get/update/replace/delete) for any
//!   [`CrudRepository`].
//! - Turn "no such row" lookups into `RepoError::NotFound`.
//! - Emit one metadata-only log event per operation.
//!
//! # Invariants
//! - Never bypasses repository validation.
//! - Never retries; each call maps to exactly one repository call.

use crate::model::{Identified, RecordId};
use crate::repo::{CrudRepository, RepoError, RepoResult};
use log::{debug, error, info};

/// CRUD entry point over one resource repository.
pub struct ResourceService<R: CrudRepository> {
    repo: R,
}

impl<R: CrudRepository> ResourceService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every record, ascending id.
    pub fn list(&self) -> RepoResult<Vec<R::Record>> {
        let result = self.repo.list();
        if let Ok(records) = &result {
            debug!(
                "event=resource_list module=service resource={} status=ok count={}",
                R::RESOURCE,
                records.len()
            );
        }
        log_failure::<R, _>("list", None, result)
    }

    /// Creates a record and returns it with its assigned id and timestamps.
    pub fn create(&self, draft: &R::Draft) -> RepoResult<R::Record> {
        let result = self.repo.create(draft);
        if let Ok(record) = &result {
            info!(
                "event=resource_create module=service resource={} status=ok id={}",
                R::RESOURCE,
                record.id()
            );
        }
        log_failure::<R, _>("create", None, result)
    }

    /// Gets one record by id.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when `id` has no record.
    pub fn get(&self, id: RecordId) -> RepoResult<R::Record> {
        let result = self.repo.get(id).and_then(|found| {
            found.ok_or(RepoError::NotFound {
                resource: R::RESOURCE,
                id,
            })
        });
        log_failure::<R, _>("get", Some(id), result)
    }

    /// Applies a partial update and returns the stored record.
    pub fn update(&self, id: RecordId, patch: &R::Patch) -> RepoResult<R::Record> {
        let result = self.repo.update(id, patch);
        log_mutation::<R, _>("update", id, &result);
        log_failure::<R, _>("update", Some(id), result)
    }

    /// Replaces every mutable field and returns the stored record.
    pub fn replace(&self, id: RecordId, draft: &R::Draft) -> RepoResult<R::Record> {
        let result = self.repo.replace(id, draft);
        log_mutation::<R, _>("replace", id, &result);
        log_failure::<R, _>("replace", Some(id), result)
    }

    /// Hard-deletes a record.
    pub fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = self.repo.delete(id);
        log_mutation::<R, _>("delete", id, &result);
        log_failure::<R, _>("delete", Some(id), result)
    }
}

fn log_mutation<R: CrudRepository, T>(op: &str, id: RecordId, result: &RepoResult<T>) {
    if result.is_ok() {
        info!(
            "event=resource_{op} module=service resource={} status=ok id={id}",
            R::RESOURCE
        );
    }
}

fn log_failure<R: CrudRepository, T>(
    op: &str,
    id: Option<RecordId>,
    result: RepoResult<T>,
) -> RepoResult<T> {
    if let Err(err) = &result {
        let id = id.map_or_else(|| "-".to_string(), |id| id.to_string());
        if err.is_storage() {
            error!(
                "event=resource_{op} module=service resource={} status=error id={id} error={err}",
                R::RESOURCE
            );
        } else {
            info!(
                "event=resource_{op} module=service resource={} status=rejected id={id} reason={err}",
                R::RESOURCE
            );
        }
    }
    result
}
