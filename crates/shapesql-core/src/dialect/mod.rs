//! Dialect-specific SQL generation.
//!
//! Each dialect maps primitive kinds to a native column type and owns the
//! final formatting of the `CREATE TABLE` statement. Identifiers are emitted
//! verbatim; no quoting or escaping is applied.

mod mysql;
mod postgres;
mod registry;
mod sqlite;

use std::fmt;
use std::str::FromStr;

pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;
pub use registry::DialectRegistry;
pub use sqlite::SqliteDialect;

use crate::error::Error;
use crate::node::{NodeKind, Primitive};

/// Trait for dialect-specific type mapping and statement formatting.
///
/// Implementations are stateless and shared read-only across callers.
pub trait SqlDialect: Send + Sync {
    /// Returns the dialect name.
    fn name(&self) -> &'static str;

    /// Maps a primitive kind to the dialect's column type.
    fn map_primitive(&self, primitive: Primitive) -> &'static str;

    /// Column type used for every kind without a primitive mapping.
    fn fallback_type(&self) -> &'static str;

    /// Maps any node kind, routing non-primitives to [`fallback_type`].
    ///
    /// [`fallback_type`]: SqlDialect::fallback_type
    fn map_kind(&self, kind: NodeKind) -> &'static str {
        kind.primitive()
            .map_or_else(|| self.fallback_type(), |p| self.map_primitive(p))
    }

    /// Formats the nullability suffix of a column.
    ///
    /// A column that may be null or absent gets no constraint; everything
    /// else is `NOT NULL`.
    fn format_nullability(&self, nullable: bool, optional: bool) -> &'static str {
        if nullable || optional {
            ""
        } else {
            " NOT NULL"
        }
    }

    /// Generates the full `CREATE TABLE` statement from rendered columns.
    fn create_table_statement(&self, table_name: &str, columns: &[String]) -> String {
        format!("CREATE TABLE {table_name} ({});", columns.join(", "))
    }
}

/// The built-in dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialectName {
    /// PostgreSQL.
    #[default]
    Postgres,
    /// MySQL / MariaDB.
    MySql,
    /// SQLite.
    Sqlite,
}

impl DialectName {
    /// All built-in dialects.
    pub const ALL: [Self; 3] = [Self::Postgres, Self::MySql, Self::Sqlite];

    /// Returns the registry key of this dialect.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
            Self::Sqlite => "sqlite",
        }
    }

    /// Returns the shared instance of this dialect.
    #[must_use]
    pub fn dialect(self) -> &'static dyn SqlDialect {
        match self {
            Self::Postgres => &PostgresDialect,
            Self::MySql => &MySqlDialect,
            Self::Sqlite => &SqliteDialect,
        }
    }
}

impl fmt::Display for DialectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| Error::UnknownDialect {
                name: s.to_string(),
                available: Self::ALL.iter().map(|d| d.as_str().to_string()).collect(),
            })
    }
}
