//! Catalog access layer.

pub mod catalog;
pub mod sqlite;
