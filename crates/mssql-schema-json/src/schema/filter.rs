//! Column subsets fed to the renderer.

use super::{Column, TableDescriptor};
use crate::error::{Result, SchemaGenError};

/// Row bookkeeping columns left out of generated fragments (compared lowercased).
pub const AUDIT_COLUMNS: [&str; 4] = ["added", "updated", "date_added", "date_updated"];

pub fn is_audit_column(column: &Column) -> bool {
    let name = column.name.to_lowercase();
    AUDIT_COLUMNS.contains(&name.as_str())
}

/// Fail if more than one column is flagged as primary key.
pub fn check_single_primary_key(table: &TableDescriptor) -> Result<()> {
    let count = table.columns.iter().filter(|c| c.is_primary_key).count();
    if count > 1 {
        return Err(SchemaGenError::MultiplePrimaryKeys(table.name.clone()));
    }
    Ok(())
}

/// The filtered column views of one table.
#[derive(Debug)]
pub struct ColumnViews<'a> {
    /// Every column except audit columns.
    pub base: Vec<&'a Column>,

    /// Primary key column of `base`, if any.
    pub primary_key: Vec<&'a Column>,

    /// Non-identity columns of `base`.
    pub non_identity: Vec<&'a Column>,
}

impl<'a> ColumnViews<'a> {
    /// Split a table's columns, rejecting tables with more than one primary key.
    pub fn new(table: &'a TableDescriptor) -> Result<Self> {
        check_single_primary_key(table)?;

        let base: Vec<&Column> = table
            .columns
            .iter()
            .filter(|c| !is_audit_column(c))
            .collect();
        let primary_key = base.iter().copied().filter(|c| c.is_primary_key).collect();
        let non_identity = base.iter().copied().filter(|c| !c.is_identity).collect();

        Ok(Self {
            base,
            primary_key,
            non_identity,
        })
    }
}
