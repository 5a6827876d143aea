//! Schema record assembly.

use super::{ColumnViews, TableDescriptor, TableSchema};
use crate::error::Result;
use crate::render::{render, FragmentKind};

/// Build the output record for one table.
///
/// Fails before rendering anything if the table has more than one primary key.
pub fn assemble(table: &TableDescriptor) -> Result<TableSchema> {
    let views = ColumnViews::new(table)?;
    let name = table.name.as_str();

    let key = |kind| render(name, views.primary_key.iter().copied(), kind);
    let insertable = |kind| render(name, views.non_identity.iter().copied(), kind);

    Ok(TableSchema {
        database_name: table.database.clone(),
        table_name: table.name.clone(),
        kind: table.kind,
        columns: table.columns.clone(),
        primary_key_cs_declaration: key(FragmentKind::KeyDeclaration),
        primary_key_cs_assignment: key(FragmentKind::KeyAssignment),
        primary_key_sql_declaration: key(FragmentKind::SqlDeclaration),
        primary_key_sql_assignment: key(FragmentKind::SqlAssignment),
        column_sql_declarations: render(
            name,
            views.base.iter().copied(),
            FragmentKind::SqlDeclaration,
        ),
        column_sql_declarations_no_identity: insertable(FragmentKind::SqlDeclaration),
        column_names_sql_list: insertable(FragmentKind::ColumnNamesSqlList),
        column_values_sql_list: insertable(FragmentKind::ColumnValuesSqlList),
        column_values_assignment_sql_list: insertable(FragmentKind::SqlAssignment),
        model_column_names: insertable(FragmentKind::ModelColumnNames),
        model_key_name: key(FragmentKind::ModelKeyName),
        cs_key_name: key(FragmentKind::KeyName),
        cs_key_type: key(FragmentKind::KeyType),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaGenError;
    use crate::schema::{Column, TableKind};
    use crate::typemap::resolve_columns;

    fn customer() -> TableDescriptor {
        let columns = resolve_columns(
            "Customer",
            vec![
                Column::new("Id", "int", "int").primary_key().identity(),
                Column::new("Name", "varchar", "varchar(50)"),
                Column::new("Added", "datetime", "datetime"),
            ],
        )
        .unwrap();

        TableDescriptor {
            database: "Shop".to_string(),
            name: "Customer".to_string(),
            kind: TableKind::Table,
            columns,
        }
    }

    #[test]
    fn test_customer_scenario() {
        let schema = assemble(&customer()).unwrap();

        assert_eq!(schema.column_names_sql_list, "[Name]");
        assert_eq!(schema.column_values_sql_list, "@Name");
        assert_eq!(schema.primary_key_sql_declaration, "@Id int");
        assert_eq!(schema.primary_key_sql_assignment, "[Id] = @Id");
        assert_eq!(schema.primary_key_cs_declaration, "int Id");
        assert_eq!(schema.primary_key_cs_assignment, "Id = Id");
        assert_eq!(schema.cs_key_name, "Id");
        assert_eq!(schema.cs_key_type, "int");
        assert_eq!(schema.model_key_name, "customer.Id");
        assert_eq!(schema.model_column_names, "model.Name");
        assert_eq!(schema.column_values_assignment_sql_list, "[Name] = @Name");
        assert_eq!(schema.column_sql_declarations, "@Id int,\n@Name varchar(50)");
        assert_eq!(schema.column_sql_declarations_no_identity, "@Name varchar(50)");
    }

    #[test]
    fn test_record_keeps_full_column_list() {
        let schema = assemble(&customer()).unwrap();
        assert_eq!(schema.columns.len(), 3);
        assert_eq!(schema.columns[2].name, "Added");
        assert_eq!(schema.file_name(), "Shop-Customer.json");
    }

    #[test]
    fn test_table_without_primary_key_has_empty_key_fragments() {
        let columns = resolve_columns(
            "OrderItem",
            vec![
                Column::new("OrderId", "int", "int"),
                Column::new("ProductId", "int", "int"),
                Column::new("Qty", "smallint", "smallint"),
            ],
        )
        .unwrap();
        let table = TableDescriptor {
            database: "Shop".to_string(),
            name: "OrderItem".to_string(),
            kind: TableKind::View,
            columns,
        };

        let schema = assemble(&table).unwrap();
        assert_eq!(schema.column_values_sql_list, "@OrderId,\n@ProductId,\n@Qty");
        assert_eq!(schema.cs_key_name, "");
        assert_eq!(schema.primary_key_sql_declaration, "");
        assert_eq!(schema.model_key_name, "");
        assert_eq!(schema.kind, TableKind::View);
    }

    #[test]
    fn test_multiple_primary_keys_rejected() {
        let mut table = customer();
        table.columns[1].is_primary_key = true;
        assert!(matches!(
            assemble(&table),
            Err(SchemaGenError::MultiplePrimaryKeys(_))
        ));
    }

    #[test]
    fn test_json_field_names() {
        let schema = assemble(&customer()).unwrap();
        let json = serde_json::to_value(&schema).unwrap();
        for field in [
            "DatabaseName",
            "TableName",
            "Type",
            "columns",
            "primaryKeyCSDeclaration",
            "primaryKeyCSAssignment",
            "primaryKeySqlDeclaration",
            "primaryKeySqlAssignment",
            "columnSqlDeclarations",
            "columnSqlDeclarationsNoIdentity",
            "columnNamesSqlList",
            "columnValuesSqlList",
            "columnValuesAssignmentSqlList",
            "modelColumnNames",
            "modelKeyName",
            "csKeyName",
            "csKeyType",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(json["Type"], "table");
    }
}
