//! Item catalog (static, read-only).

pub mod entry;

pub use entry::{Catalog, CatalogEntry};
