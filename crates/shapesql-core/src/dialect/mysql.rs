//! MySQL dialect.

use super::SqlDialect;
use crate::node::Primitive;

/// MySQL/MariaDB dialect for `CREATE TABLE` generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlDialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::String => "VARCHAR(255)",
            Primitive::Number => "INT",
            // MySQL has no real boolean; BOOLEAN is an alias for TINYINT(1)
            Primitive::Boolean => "TINYINT(1)",
            Primitive::Date => "DATETIME",
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
    fn test_mysql_types() {
        let dialect = MySqlDialect::new();
        assert_eq!(dialect.map_primitive(Primitive::String), "VARCHAR(255)");
        assert_eq!(dialect.map_primitive(Primitive::Number), "INT");
        assert_eq!(dialect.map_primitive(Primitive::Boolean), "TINYINT(1)");
        assert_eq!(dialect.map_primitive(Primitive::Date), "DATETIME");
        assert_eq!(dialect.map_primitive(Primitive::BigInt), "TEXT");
        assert_eq!(dialect.fallback_type(), "TEXT");
    }
}
