//! Rendering of column descriptors into a `CREATE TABLE` statement.

use crate::dialect::SqlDialect;
use crate::flatten::ColumnDescriptor;

/// Renders one column as `<key> <type>[ NOT NULL]`.
#[must_use]
pub fn column_fragment(column: &ColumnDescriptor, dialect: &dyn SqlDialect) -> String {
    format!(
        "{} {}{}",
        column.key,
        column.sql_type,
        dialect.format_nullability(column.nullable, column.optional)
    )
}

/// Builds the `CREATE TABLE` statement for `columns`.
///
/// Table and column names are emitted verbatim.
#[must_use]
pub fn build_create_table(
    table_name: &str,
    columns: &[ColumnDescriptor],
    dialect: &dyn SqlDialect,
) -> String {
    let fragments: Vec<String> = columns
        .iter()
        .map(|c| column_fragment(c, dialect))
        .collect();
    dialect.create_table_statement(table_name, &fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{MySqlDialect, PostgresDialect};

    fn column(key: &str, sql_type: &str, nullable: bool, optional: bool) -> ColumnDescriptor {
        ColumnDescriptor {
            key: key.to_string(),
            sql_type: sql_type.to_string(),
            nullable,
            optional,
        }
    }

    #[test]
    fn test_column_fragment() {
        let dialect = PostgresDialect::new();
        assert_eq!(
            column_fragment(&column("name", "VARCHAR(255)", false, false), &dialect),
            "name VARCHAR(255) NOT NULL"
        );
        assert_eq!(
            column_fragment(&column("age", "INTEGER", true, false), &dialect),
            "age INTEGER"
        );
        assert_eq!(
            column_fragment(&column("age", "INTEGER", false, true), &dialect),
            "age INTEGER"
        );
    }

    #[test]
    fn test_build_create_table() {
        let columns = [
            column("id", "INT", false, false),
            column("active", "TINYINT(1)", false, false),
            column("note", "TEXT", true, true),
        ];
        assert_eq!(
            build_create_table("flags", &columns, &MySqlDialect::new()),
            "CREATE TABLE flags (id INT NOT NULL, active TINYINT(1) NOT NULL, note TEXT);"
        );
    }

    #[test]
    fn test_identifiers_are_verbatim() {
        let columns = [column("user.name", "TEXT", false, false)];
        assert_eq!(
            build_create_table("my schema.users", &columns, &PostgresDialect::new()),
            "CREATE TABLE my schema.users (user.name TEXT NOT NULL);"
        );
    }

    #[test]
    fn test_no_columns() {
        assert_eq!(
            build_create_table("empty", &[], &PostgresDialect::new()),
            "CREATE TABLE empty ();"
        );
    }
}
