mod columns;

pub use columns::{CatalogError, ColumnCatalog, ColumnNames};
