//! SQL Server metadata source.

use crate::config::Config;
use crate::error::Result;
use crate::schema::{Column, TableDescriptor, TableKind, TableRef};
use crate::typemap;
use async_trait::async_trait;
use tiberius::{Client, Config as TdsConfig, Query, Row};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};
use tracing::debug;

/// Tables and views, skipping names reserved for tooling (`__` prefix).
const TABLES_QUERY: &str = r#"
    SELECT
        TABLE_SCHEMA,
        TABLE_NAME,
        TABLE_TYPE
    FROM INFORMATION_SCHEMA.TABLES
    WHERE SUBSTRING(TABLE_NAME, 1, 2) <> '__'
    ORDER BY TABLE_SCHEMA, TABLE_NAME
"#;

/// Columns of one object with the DDL type rendered server side.
///
/// `max_length` is in bytes, so unicode types report half of it.
const COLUMNS_QUERY: &str = r#"
    SELECT
        c.name,
        t.name,
        t.name +
            CASE
                WHEN t.name IN ('char', 'varchar', 'nchar', 'nvarchar', 'binary', 'varbinary') THEN '(' +
                    CASE
                        WHEN c.max_length = -1 THEN 'MAX'
                        ELSE CONVERT(VARCHAR(4),
                            CASE WHEN t.name IN ('nchar', 'nvarchar')
                                THEN c.max_length / 2 ELSE c.max_length END)
                    END + ')'
                WHEN t.name IN ('decimal', 'numeric') THEN
                    '(' + CONVERT(VARCHAR(4), c.precision) + ',' + CONVERT(VARCHAR(4), c.scale) + ')'
                ELSE ''
            END,
        CAST(c.max_length AS INT),
        CAST(c.precision AS INT),
        CAST(c.scale AS INT),
        CAST(c.is_nullable AS INT),
        CASE WHEN EXISTS (
            SELECT 1
            FROM sys.index_columns ic
            JOIN sys.indexes i ON i.object_id = ic.object_id AND i.index_id = ic.index_id
            WHERE ic.object_id = c.object_id
              AND ic.column_id = c.column_id
              AND i.is_primary_key = 1
        ) THEN 1 ELSE 0 END,
        CAST(c.is_identity AS INT)
    FROM sys.columns c
    JOIN sys.types t ON c.user_type_id = t.user_type_id
    WHERE c.object_id = OBJECT_ID(QUOTENAME(@P1) + '.' + QUOTENAME(@P2))
    ORDER BY c.column_id
"#;

/// Source of table and column metadata.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// List the tables and views of a database.
    async fn list_tables_and_views(&self, database: &str) -> Result<Vec<TableRef>>;

    /// List the columns of a table in ordinal order, types unresolved.
    async fn list_columns(&self, table: &TableRef) -> Result<Vec<Column>>;

    /// Load a table with every column type resolved.
    ///
    /// Fails with a type mapping error for the first unmappable column.
    async fn load_table(&self, table: &TableRef) -> Result<TableDescriptor> {
        let columns = self.list_columns(table).await?;
        debug!("Loaded {} columns for {}", columns.len(), table.full_name());
        let columns = typemap::resolve_columns(&table.name, columns)?;
        Ok(TableDescriptor::new(table, columns))
    }
}

/// SQL Server metadata source over tiberius.
///
/// Every query opens its own connection and drops it when done.
pub struct MssqlSource {
    config: Config,
}

impl MssqlSource {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Open a connection to `database`.
    async fn connect(&self, database: &str) -> Result<Client<Compat<TcpStream>>> {
        let config = TdsConfig::from_ado_string(&self.config.connection_string(database))?;
        let tcp = TcpStream::connect(config.get_addr())
            .await
            .map_err(|e| tiberius::error::Error::Io {
                kind: e.kind(),
                message: e.to_string(),
            })?;
        tcp.set_nodelay(true).ok();

        let client = Client::connect(config, tcp.compat_write()).await?;
        debug!("Connected to SQL Server database {}", database);
        Ok(client)
    }
}

#[async_trait]
impl MetadataSource for MssqlSource {
    async fn list_tables_and_views(&self, database: &str) -> Result<Vec<TableRef>> {
        let mut client = self.connect(database).await?;

        let stream = client.simple_query(TABLES_QUERY).await?;
        let rows = stream.into_first_result().await?;

        let tables: Vec<TableRef> = rows
            .iter()
            .map(|row| table_from_row(database, row))
            .collect();

        debug!("Found {} tables and views in {}", tables.len(), database);
        Ok(tables)
    }

    async fn list_columns(&self, table: &TableRef) -> Result<Vec<Column>> {
        let mut client = self.connect(&table.database).await?;

        let mut query = Query::new(COLUMNS_QUERY);
        query.bind(table.schema.as_str());
        query.bind(table.name.as_str());

        let stream = query.query(&mut client).await?;
        let rows = stream.into_first_result().await?;

        Ok(rows.iter().map(column_from_row).collect())
    }
}

fn table_from_row(database: &str, row: &Row) -> TableRef {
    TableRef {
        database: database.to_string(),
        schema: row.get::<&str, _>(0).unwrap_or_default().to_string(),
        name: row.get::<&str, _>(1).unwrap_or_default().to_string(),
        kind: TableKind::from_table_type(row.get::<&str, _>(2).unwrap_or_default()),
    }
}

fn column_from_row(row: &Row) -> Column {
    Column {
        name: row.get::<&str, _>(0).unwrap_or_default().to_string(),
        data_type: row.get::<&str, _>(1).unwrap_or_default().to_string(),
        ddl_type: row.get::<&str, _>(2).unwrap_or_default().to_string(),
        generated_type: String::new(),
        logical_type: String::new(),
        max_length: row.get::<i32, _>(3).unwrap_or(0),
        precision: row.get::<i32, _>(4).unwrap_or(0),
        scale: row.get::<i32, _>(5).unwrap_or(0),
        is_nullable: row.get::<i32, _>(6).unwrap_or(0) == 1,
        is_primary_key: row.get::<i32, _>(7).unwrap_or(0) == 1,
        is_identity: row.get::<i32, _>(8).unwrap_or(0) == 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaGenError;

    struct FixedSource {
        columns: Vec<Column>,
    }

    #[async_trait]
    impl MetadataSource for FixedSource {
        async fn list_tables_and_views(&self, database: &str) -> Result<Vec<TableRef>> {
            Ok(vec![TableRef {
                database: database.to_string(),
                schema: "dbo".to_string(),
                name: "Store".to_string(),
                kind: TableKind::Table,
            }])
        }

        async fn list_columns(&self, _table: &TableRef) -> Result<Vec<Column>> {
            Ok(self.columns.clone())
        }
    }

    #[tokio::test]
    async fn test_load_table_resolves_types() {
        let source = FixedSource {
            columns: vec![
                Column::new("Id", "int", "int").primary_key(),
                Column::new("Name", "nvarchar", "nvarchar(100)"),
            ],
        };
        let tables = source.list_tables_and_views("Shop").await.unwrap();
        let table = source.load_table(&tables[0]).await.unwrap();

        assert_eq!(table.database, "Shop");
        assert_eq!(table.name, "Store");
        assert_eq!(table.columns[0].generated_type, "int");
        assert_eq!(table.columns[1].generated_type, "string");
        assert_eq!(table.columns[1].logical_type, "String");
    }

    #[tokio::test]
    async fn test_load_table_fails_on_unmapped_type() {
        let source = FixedSource {
            columns: vec![
                Column::new("Id", "int", "int"),
                Column::new("Location", "geography", "geography"),
            ],
        };
        let tables = source.list_tables_and_views("Shop").await.unwrap();
        let err = source.load_table(&tables[0]).await.unwrap_err();

        assert!(matches!(err, SchemaGenError::TypeMapping { .. }));
        assert!(err.to_string().contains("Store.Location"));
    }

    #[test]
    fn test_columns_query_is_parameterised() {
        assert!(COLUMNS_QUERY.contains("QUOTENAME(@P1)"));
        assert!(COLUMNS_QUERY.contains("QUOTENAME(@P2)"));
        assert!(TABLES_QUERY.contains("<> '__'"));
    }
}
