//! Type mapping from SQL Server DDL types to generated C# types.

use crate::error::{Result, SchemaGenError};
use crate::schema::Column;

/// One row of the type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    /// SQL Server type name, matched as a prefix of the DDL type.
    pub sql: &'static str,

    /// .NET framework type name.
    pub logical: &'static str,

    /// C# type name used in generated code.
    pub generated: &'static str,
}

const fn entry(sql: &'static str, logical: &'static str, generated: &'static str) -> TypeMapping {
    TypeMapping {
        sql,
        logical,
        generated,
    }
}

/// Ordered type table. First prefix match wins, so order is significant.
pub static TYPE_MAP: &[TypeMapping] = &[
    entry("bigint", "Int64", "long"),
    entry("binary", "Byte[]", "byte[]"),
    entry("bit", "Boolean", "bool"),
    entry("char", "String", "string"),
    entry("date", "DateTime", "System.DateTime"),
    entry("datetime", "DateTime", "System.DateTime"),
    entry("datetime2", "DateTime", "System.DateTime"),
    entry("datetimeoffset", "DateTimeOffset", "System.DateTimeOffset"),
    entry("decimal", "Decimal", "decimal"),
    entry("float", "Double", "double"),
    entry("image", "Byte[]", "byte[]"),
    entry("int", "Int32", "int"),
    entry("money", "Decimal", "decimal"),
    entry("nchar", "String", "string"),
    entry("ntext", "String", "string"),
    entry("numeric", "Decimal", "decimal"),
    entry("nvarchar", "String", "string"),
    entry("real", "Single", "float"),
    entry("rowversion", "Byte[]", "byte[]"),
    entry("smalldatetime", "DateTime", "System.DateTime"),
    entry("smallint", "Int16", "short"),
    entry("smallmoney", "Decimal", "decimal"),
    entry("time", "TimeSpan", "System.TimeSpan"),
    entry("timestamp", "Byte[]", "byte[]"),
    entry("tinyint", "Byte", "byte"),
    entry("varbinary", "Byte[]", "byte[]"),
    entry("varchar", "String", "string"),
];

/// Find the first mapping whose SQL name is a prefix of `ddl_type`.
pub fn resolve(ddl_type: &str) -> Option<&'static TypeMapping> {
    TYPE_MAP.iter().find(|m| ddl_type.starts_with(m.sql))
}

/// Fill in the generated and logical types of a column.
///
/// Fails with [`SchemaGenError::TypeMapping`] naming `table.column` when the
/// DDL type has no entry (geography, xml, hierarchyid, ...).
pub fn resolve_column(table: &str, mut column: Column) -> Result<Column> {
    let mapping = resolve(&column.ddl_type)
        .ok_or_else(|| SchemaGenError::type_mapping(table, &column.name, &column.ddl_type))?;

    column.generated_type = mapping.generated.to_string();
    column.logical_type = mapping.logical.to_string();
    Ok(column)
}

/// Resolve every column of a table, stopping at the first failure.
pub fn resolve_columns(table: &str, columns: Vec<Column>) -> Result<Vec<Column>> {
    columns
        .into_iter()
        .map(|c| resolve_column(table, c))
        .collect()
}
