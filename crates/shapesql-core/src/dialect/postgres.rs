//! PostgreSQL dialect.

use super::SqlDialect;
use crate::node::Primitive;

/// PostgreSQL dialect for `CREATE TABLE` generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlDialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::String => "VARCHAR(255)",
            Primitive::Number => "INTEGER",
            Primitive::Boolean => "BOOLEAN",
            Primitive::Date => "TIMESTAMP",
            Primitive::BigInt => "BIGINT",
        }
    }

    fn fallback_type(&self) -> &'static str {
        "TEXT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_types() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.map_primitive(Primitive::String), "VARCHAR(255)");
        assert_eq!(dialect.map_primitive(Primitive::Number), "INTEGER");
        assert_eq!(dialect.map_primitive(Primitive::Boolean), "BOOLEAN");
        assert_eq!(dialect.map_primitive(Primitive::Date), "TIMESTAMP");
        assert_eq!(dialect.map_primitive(Primitive::BigInt), "BIGINT");
        assert_eq!(dialect.fallback_type(), "TEXT");
    }
}
