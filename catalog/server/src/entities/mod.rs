//! `SeaORM` Entity definitions for the catalog tables.

pub mod project;
pub mod resource;
