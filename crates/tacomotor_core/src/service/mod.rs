//! Catalog use-case services.
//!
//! # Responsibility
//! - Wrap repositories into the resource CRUD contract.
//! - Own multi-table administrative operations.

pub mod admin_service;
pub mod resource_service;
