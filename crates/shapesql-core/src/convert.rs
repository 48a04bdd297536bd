//! Top-level schema to `CREATE TABLE` conversion.

use tracing::debug;

use crate::dialect::{DialectRegistry, SqlDialect};
use crate::error::Result;
use crate::flatten::flatten;
use crate::node::{NodeKind, SchemaNode};
use crate::statement::build_create_table;

/// Converts an object schema into a `CREATE TABLE` statement.
///
/// Returns an empty string when `schema` is not an object node (a wrapped
/// object counts as not table-shaped here). Callers detect that case by
/// checking for emptiness.
#[must_use]
pub fn convert<N: SchemaNode>(schema: &N, table_name: &str, dialect: &dyn SqlDialect) -> String {
    if schema.kind() != NodeKind::Object {
        debug!(table = table_name, kind = ?schema.kind(), "Schema root is not an object");
        return String::new();
    }

    let columns = flatten(schema, dialect);
    debug!(
        table = table_name,
        dialect = dialect.name(),
        columns = columns.len(),
        "Generated CREATE TABLE"
    );
    build_create_table(table_name, &columns, dialect)
}

/// Converts `schema` using the dialect registered under `dialect_name`, or
/// the registry's default (`postgres`) when `None`.
///
/// # Errors
///
/// Returns [`Error::UnknownDialect`](crate::Error::UnknownDialect) if the
/// dialect is not registered, even when the schema is not table-shaped.
pub fn convert_named<N: SchemaNode>(
    schema: &N,
    table_name: &str,
    dialect_name: Option<&str>,
    registry: &DialectRegistry,
) -> Result<String> {
    let dialect = registry.resolve(dialect_name)?;
    Ok(convert(schema, table_name, dialect))
}
