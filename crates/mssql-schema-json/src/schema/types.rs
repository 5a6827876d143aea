//! Table and column metadata types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of object listed by the metadata source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Table,
    View,
}

impl TableKind {
    /// Map an `INFORMATION_SCHEMA.TABLES.TABLE_TYPE` value.
    pub fn from_table_type(table_type: &str) -> Self {
        if table_type.eq_ignore_ascii_case("VIEW") {
            TableKind::View
        } else {
            TableKind::Table
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Table => "table",
            TableKind::View => "view",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A table or view as returned by the table listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    /// Database name.
    pub database: String,

    /// Owning schema, used to qualify metadata queries.
    pub schema: String,

    /// Table or view name.
    pub name: String,

    /// Table or view.
    pub kind: TableKind,
}

impl TableRef {
    /// Get the schema-qualified name.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}

/// Column metadata.
///
/// Field names on the wire match what the downstream templates expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    #[serde(rename = "ColumnName")]
    pub name: String,

    /// Raw type name (e.g., "varchar").
    #[serde(rename = "Type")]
    pub data_type: String,

    /// Type with length/precision folded in (e.g., "varchar(50)").
    #[serde(rename = "DDLType")]
    pub ddl_type: String,

    /// Generated-language type, empty until resolved.
    #[serde(rename = "CSType")]
    pub generated_type: String,

    /// Logical type, empty until resolved.
    #[serde(rename = "NETType")]
    pub logical_type: String,

    /// Maximum length in bytes (-1 for max).
    #[serde(rename = "MaxLength")]
    pub max_length: i32,

    /// Numeric precision.
    #[serde(rename = "Precision")]
    pub precision: i32,

    /// Numeric scale.
    #[serde(rename = "Scale")]
    pub scale: i32,

    /// Whether the column allows NULL.
    #[serde(rename = "Nullable")]
    pub is_nullable: bool,

    /// Whether the column is part of the primary key.
    #[serde(rename = "PrimaryKey")]
    pub is_primary_key: bool,

    /// Whether the column is an identity column.
    #[serde(rename = "Identity")]
    pub is_identity: bool,
}

impl Column {
    /// Create an unresolved column with no flags set.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, ddl_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            ddl_type: ddl_type.into(),
            generated_type: String::new(),
            logical_type: String::new(),
            max_length: 0,
            precision: 0,
            scale: 0,
            is_nullable: false,
            is_primary_key: false,
            is_identity: false,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    pub fn identity(mut self) -> Self {
        self.is_identity = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    /// Whether the generated and logical types have been filled in.
    pub fn is_resolved(&self) -> bool {
        !self.generated_type.is_empty()
    }
}

/// A table with its resolved, ordered columns.
#[derive(Debug, Clone)]
pub struct TableDescriptor {
    /// Database name.
    pub database: String,

    /// Table name.
    pub name: String,

    /// Table or view.
    pub kind: TableKind,

    /// Column definitions in ordinal order.
    pub columns: Vec<Column>,
}

impl TableDescriptor {
    pub fn new(table: &TableRef, columns: Vec<Column>) -> Self {
        Self {
            database: table.database.clone(),
            name: table.name.clone(),
            kind: table.kind,
            columns,
        }
    }
}

/// Per-table output record written as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    #[serde(rename = "DatabaseName")]
    pub database_name: String,

    #[serde(rename = "TableName")]
    pub table_name: String,

    #[serde(rename = "Type")]
    pub kind: TableKind,

    pub columns: Vec<Column>,

    #[serde(rename = "primaryKeyCSDeclaration")]
    pub primary_key_cs_declaration: String,

    #[serde(rename = "primaryKeyCSAssignment")]
    pub primary_key_cs_assignment: String,

    #[serde(rename = "primaryKeySqlDeclaration")]
    pub primary_key_sql_declaration: String,

    #[serde(rename = "primaryKeySqlAssignment")]
    pub primary_key_sql_assignment: String,

    #[serde(rename = "columnSqlDeclarations")]
    pub column_sql_declarations: String,

    #[serde(rename = "columnSqlDeclarationsNoIdentity")]
    pub column_sql_declarations_no_identity: String,

    #[serde(rename = "columnNamesSqlList")]
    pub column_names_sql_list: String,

    #[serde(rename = "columnValuesSqlList")]
    pub column_values_sql_list: String,

    #[serde(rename = "columnValuesAssignmentSqlList")]
    pub column_values_assignment_sql_list: String,

    #[serde(rename = "modelColumnNames")]
    pub model_column_names: String,

    #[serde(rename = "modelKeyName")]
    pub model_key_name: String,

    #[serde(rename = "csKeyName")]
    pub cs_key_name: String,

    #[serde(rename = "csKeyType")]
    pub cs_key_type: String,
}

impl TableSchema {
    /// Output filename for this record, `{database}-{table}.json`.
    pub fn file_name(&self) -> String {
        format!("{}-{}.json", self.database_name, self.table_name)
    }
}
