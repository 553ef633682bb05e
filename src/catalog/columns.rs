use arrow::datatypes::Schema;
use std::fmt;

/// Index-to-name resolution over a table's declared columns
///
/// Predicate leaves reference columns by their position in the full table
/// schema, while partition keys are named. The catalog bridges the two.
pub trait ColumnCatalog {
    /// Name of the column at `index` in the table's full column list
    fn name_of(&self, index: usize) -> Result<&str, CatalogError>;

    /// Number of declared columns
    fn column_count(&self) -> usize;
}

impl fmt::Debug for dyn ColumnCatalog + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColumnCatalog({} columns)", self.column_count())
    }
}

impl ColumnCatalog for Schema {
    fn name_of(&self, index: usize) -> Result<&str, CatalogError> {
        self.fields()
            .get(index)
            .map(|field| field.name().as_str())
            .ok_or(CatalogError::ColumnIndexOutOfRange {
                index,
                columns: self.fields().len(),
            })
    }

    fn column_count(&self) -> usize {
        self.fields().len()
    }
}

/// Catalog backed by a plain list of column names
///
/// Useful when the host only ships column names, not a full Arrow schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnNames(Vec<String>);

impl ColumnNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }
}

impl ColumnCatalog for ColumnNames {
    fn name_of(&self, index: usize) -> Result<&str, CatalogError> {
        self.0
            .get(index)
            .map(String::as_str)
            .ok_or(CatalogError::ColumnIndexOutOfRange {
                index,
                columns: self.0.len(),
            })
    }

    fn column_count(&self) -> usize {
        self.0.len()
    }
}

/// Catalog contract violations
///
/// A predicate referencing a column the table does not have is a planner
/// bug; it is surfaced, never treated as "no match".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Column index {index} out of range for table with {columns} column(s)")]
    ColumnIndexOutOfRange { index: usize, columns: usize },
}
