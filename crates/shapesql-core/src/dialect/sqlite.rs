//! SQLite dialect.

use super::SqlDialect;
use crate::node::Primitive;

/// SQLite dialect for `CREATE TABLE` generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlDialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        // SQLite has dynamic typing with type affinity
        match primitive {
            Primitive::String | Primitive::Date => "TEXT",
            Primitive::Number | Primitive::Boolean => "INTEGER",
            Primitive::BigInt => self.fallback_type(),
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
    fn test_sqlite_types() {
        let dialect = SqliteDialect::new();
        assert_eq!(dialect.map_primitive(Primitive::String), "TEXT");
        assert_eq!(dialect.map_primitive(Primitive::Number), "INTEGER");
        assert_eq!(dialect.map_primitive(Primitive::Boolean), "INTEGER");
        assert_eq!(dialect.map_primitive(Primitive::Date), "TEXT");
        assert_eq!(dialect.map_primitive(Primitive::BigInt), "TEXT");
        assert_eq!(dialect.fallback_type(), "TEXT");
    }
}
