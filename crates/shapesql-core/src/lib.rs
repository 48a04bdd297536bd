//! # shapesql-core
//!
//! Translates a structurally-typed schema tree into a `CREATE TABLE`
//! statement for PostgreSQL, MySQL or SQLite.
//!
//! The pipeline has four steps:
//! - `Nullable`/`Optional` wrappers are stripped into two flags
//!   ([`modifier`]);
//! - nested objects are flattened into `parent_child` columns, and array
//!   fields are dropped ([`flatten`](mod@flatten));
//! - leaf kinds are mapped to column types by a [`SqlDialect`];
//! - columns are assembled into the final statement ([`statement`]).
//!
//! ```rust
//! use shapesql_core::dialect::PostgresDialect;
//! use shapesql_core::node::{number, object, string};
//! use shapesql_core::convert;
//!
//! let schema = object([
//!     ("name", string()),
//!     ("age", number().optional()),
//!     ("address", object([("city", string())])),
//! ]);
//!
//! let sql = convert(&schema, "users", &PostgresDialect);
//! assert_eq!(
//!     sql,
//!     "CREATE TABLE users (name VARCHAR(255) NOT NULL, age INTEGER, address_city VARCHAR(255) NOT NULL);"
//! );
//! ```
//!
//! Dialects can also be picked by name through a [`DialectRegistry`]:
//!
//! ```rust
//! use shapesql_core::node::{boolean, object};
//! use shapesql_core::{DialectRegistry, convert_named};
//!
//! let registry = DialectRegistry::builtin();
//! let schema = object([("active", boolean())]);
//! let sql = convert_named(&schema, "flags", Some("mysql"), &registry).unwrap();
//! assert_eq!(sql, "CREATE TABLE flags (active TINYINT(1) NOT NULL);");
//! ```

pub mod convert;
pub mod dialect;
pub mod error;
pub mod flatten;
pub mod modifier;
pub mod node;
pub mod statement;

pub use convert::{convert, convert_named};
pub use dialect::{DialectName, DialectRegistry, SqlDialect};
pub use error::{Error, Result};
pub use flatten::{ColumnDescriptor, KEY_SEPARATOR, flatten};
pub use modifier::{Modifiers, Unwrapped, unwrap_modifiers};
pub use node::{NodeKind, Primitive, SchemaNode, TypeNode};
pub use statement::build_create_table;
