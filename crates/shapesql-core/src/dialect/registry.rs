//! Name-to-dialect lookup.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use super::{DialectName, SqlDialect};
use crate::error::{Error, Result};

/// A set of dialects addressable by name.
///
/// Built once and passed by reference to the conversion entry points, so
/// callers can add or replace dialects without any global state.
pub struct DialectRegistry {
    dialects: BTreeMap<String, Box<dyn SqlDialect>>,
    default: String,
}

impl DialectRegistry {
    /// Creates an empty registry whose default name is `postgres`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dialects: BTreeMap::new(),
            default: DialectName::default().as_str().to_string(),
        }
    }

    /// Creates a registry holding the PostgreSQL, MySQL and SQLite dialects.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register(DialectName::Postgres.as_str(), super::PostgresDialect)
            .register(DialectName::MySql.as_str(), super::MySqlDialect)
            .register(DialectName::Sqlite.as_str(), super::SqliteDialect);
        registry
    }

    /// Registers `dialect` under `name`, replacing any previous entry.
    pub fn register<D>(&mut self, name: impl Into<String>, dialect: D) -> &mut Self
    where
        D: SqlDialect + 'static,
    {
        self.dialects.insert(name.into(), Box::new(dialect));
        self
    }

    /// Sets the name used when no dialect is requested.
    #[must_use]
    pub fn with_default(mut self, name: impl Into<String>) -> Self {
        self.default = name.into();
        self
    }

    /// Returns the name used when no dialect is requested.
    #[must_use]
    pub fn default_name(&self) -> &str {
        &self.default
    }

    /// Returns registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.dialects.keys().map(String::as_str)
    }

    /// Looks up a dialect by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDialect`] if nothing is registered under
    /// `name`.
    pub fn get(&self, name: &str) -> Result<&dyn SqlDialect> {
        match self.dialects.get(name) {
            Some(dialect) => Ok(dialect.as_ref()),
            None => Err(Error::UnknownDialect {
                name: name.to_string(),
                available: self.names().map(str::to_string).collect(),
            }),
        }
    }

    /// Looks up `name`, or the default dialect when `name` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDialect`] if the resolved name is not
    /// registered.
    pub fn resolve(&self, name: Option<&str>) -> Result<&dyn SqlDialect> {
        let name = name.unwrap_or(&self.default);
        debug!(dialect = name, "Resolving SQL dialect");
        self.get(name)
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for DialectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialectRegistry")
            .field("dialects", &self.names().collect::<Vec<_>>())
            .field("default", &self.default)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Primitive;

    struct UpperTextDialect;

    impl SqlDialect for UpperTextDialect {
        fn name(&self) -> &'static str {
            "upper"
        }

        fn map_primitive(&self, _primitive: Primitive) -> &'static str {
            "CLOB"
        }

        fn fallback_type(&self) -> &'static str {
            "CLOB"
        }
    }

    #[test]
    fn test_builtin_registry() {
        let registry = DialectRegistry::builtin();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            ["mysql", "postgres", "sqlite"]
        );
        assert_eq!(registry.get("mysql").unwrap().name(), "mysql");
        assert_eq!(registry.resolve(None).unwrap().name(), "postgres");
        assert_eq!(registry.default_name(), "postgres");
    }

    #[test]
    fn test_unknown_name_fails_fast() {
        let registry = DialectRegistry::builtin();
        let err = registry.get("oracle").err().unwrap();
        assert_eq!(
            err.to_string(),
            "Unknown SQL dialect 'oracle' (available: mysql, postgres, sqlite)"
        );
    }

    #[test]
    fn test_register_substitute_dialect() {
        let mut registry = DialectRegistry::builtin();
        registry.register("postgres", UpperTextDialect);
        let dialect = registry.resolve(None).unwrap();
        assert_eq!(dialect.name(), "upper");
        assert_eq!(dialect.map_primitive(Primitive::Number), "CLOB");
    }

    #[test]
    fn test_custom_default() {
        let registry = DialectRegistry::builtin().with_default("sqlite");
        assert_eq!(registry.resolve(None).unwrap().name(), "sqlite");

        let empty = DialectRegistry::new();
        assert!(empty.resolve(None).is_err());
    }

    #[test]
    fn test_debug_lists_names() {
        let registry = DialectRegistry::builtin();
        let debug = format!("{registry:?}");
        assert!(debug.contains("\"sqlite\""));
        assert!(debug.contains("default: \"postgres\""));
    }
}
