//! Column list rendering.
//!
//! Every fragment kind shares one skeleton: format each column, join the
//! per-column fragments with `\n`, then drop the separator the last fragment
//! left dangling. Only the per-column format differs between kinds.

use crate::schema::Column;

/// Textual fragment forms rendered from a column list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// `{type} {name}`
    KeyDeclaration,
    /// `{name} = {name}`
    KeyAssignment,
    /// `{type} {name},`
    Declaration,
    /// `{name} = {name}`
    Assignment,
    /// `@{name} {ddl},`
    SqlDeclaration,
    /// `[{name}] = @{name},`
    SqlAssignment,
    /// `[{name}],`
    ColumnNamesSqlList,
    /// `@{name},`
    ColumnValuesSqlList,
    /// `model.{name}, `
    ModelColumnNames,
    /// `{table}.{name}, ` with the table name lowercased
    ModelKeyName,
    /// `{name}`
    KeyName,
    /// `{type}`
    KeyType,
}

impl FragmentKind {
    /// All fragment kinds.
    pub const ALL: [FragmentKind; 12] = [
        FragmentKind::KeyDeclaration,
        FragmentKind::KeyAssignment,
        FragmentKind::Declaration,
        FragmentKind::Assignment,
        FragmentKind::SqlDeclaration,
        FragmentKind::SqlAssignment,
        FragmentKind::ColumnNamesSqlList,
        FragmentKind::ColumnValuesSqlList,
        FragmentKind::ModelColumnNames,
        FragmentKind::ModelKeyName,
        FragmentKind::KeyName,
        FragmentKind::KeyType,
    ];

    /// Render one column.
    pub fn fragment(&self, table_name: &str, column: &Column) -> String {
        let name = &column.name;
        match self {
            FragmentKind::KeyDeclaration => format!("{} {}", column.generated_type, name),
            FragmentKind::KeyAssignment | FragmentKind::Assignment => {
                format!("{} = {}", name, name)
            }
            FragmentKind::Declaration => format!("{} {},", column.generated_type, name),
            FragmentKind::SqlDeclaration => format!("@{} {},", name, column.ddl_type),
            FragmentKind::SqlAssignment => format!("[{}] = @{},", name, name),
            FragmentKind::ColumnNamesSqlList => format!("[{}],", name),
            FragmentKind::ColumnValuesSqlList => format!("@{},", name),
            FragmentKind::ModelColumnNames => format!("model.{}, ", name),
            FragmentKind::ModelKeyName => format!("{}.{}, ", table_name.to_lowercase(), name),
            FragmentKind::KeyName => name.clone(),
            FragmentKind::KeyType => column.generated_type.clone(),
        }
    }
}

/// Render a column list as one fragment string.
///
/// Empty input renders to `""`. The result never ends with a separator comma.
pub fn render<'a, I>(table_name: &str, columns: I, kind: FragmentKind) -> String
where
    I: IntoIterator<Item = &'a Column>,
{
    let joined = columns
        .into_iter()
        .map(|c| kind.fragment(table_name, c))
        .collect::<Vec<_>>()
        .join("\n");

    strip_trailing_separator(joined)
}

/// Drop a final `,` when only spaces or tabs follow it.
///
/// Commas inside a fragment (`decimal(18,2)`) are left alone.
fn strip_trailing_separator(mut s: String) -> String {
    let trimmed_len = s.trim_end_matches([' ', '\t']).len();
    if s[..trimmed_len].ends_with(',') {
        s.truncate(trimmed_len - 1);
    }
    s
}
