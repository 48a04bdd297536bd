//! Flattening of nested object schemas into column descriptors.
//!
//! Only object nodes produce columns. Fields are visited depth-first in
//! declaration order:
//!
//! - leaf fields become one column each, typed through the dialect;
//! - nested object fields are expanded in place, their keys prefixed with
//!   the parent field name and [`KEY_SEPARATOR`];
//! - array fields are dropped, whatever their element type.
//!
//! Wrappers on a nested object field do not carry over to its columns:
//! `address: Nullable(Object { street: String })` yields a `NOT NULL`
//! `address_street` column.

use serde::Serialize;
use tracing::{debug, trace};

use crate::dialect::SqlDialect;
use crate::modifier::unwrap_modifiers;
use crate::node::{NodeKind, SchemaNode};

/// Joins a parent field name and a nested key.
pub const KEY_SEPARATOR: &str = "_";

/// One column of the generated table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    /// Fully qualified column name.
    pub key: String,
    /// Dialect column type.
    #[serde(rename = "type")]
    pub sql_type: String,
    /// The field had a `Nullable` wrapper.
    pub nullable: bool,
    /// The field had an `Optional` wrapper.
    pub optional: bool,
}

impl ColumnDescriptor {
    /// Returns `true` if the column must accept NULL.
    #[must_use]
    pub const fn may_be_absent(&self) -> bool {
        self.nullable || self.optional
    }
}

/// Flattens `node` into column descriptors for `dialect`.
///
/// Returns an empty list for anything that is not an object once its
/// wrappers are removed.
#[must_use]
pub fn flatten<N: SchemaNode>(node: &N, dialect: &dyn SqlDialect) -> Vec<ColumnDescriptor> {
    let mut columns = Vec::new();
    collect(node, dialect, None, &mut columns);
    columns
}

/// Like [`flatten`], treating a missing node as producing no columns.
#[must_use]
pub fn flatten_opt<N: SchemaNode>(
    node: Option<&N>,
    dialect: &dyn SqlDialect,
) -> Vec<ColumnDescriptor> {
    node.map_or_else(Vec::new, |node| flatten(node, dialect))
}

fn collect<N: SchemaNode>(
    node: &N,
    dialect: &dyn SqlDialect,
    prefix: Option<&str>,
    out: &mut Vec<ColumnDescriptor>,
) {
    match node.kind() {
        NodeKind::Nullable | NodeKind::Optional => {
            if let Some(inner) = node.child() {
                collect(inner, dialect, prefix, out);
            }
        }
        NodeKind::Object => {
            for (name, child) in node.fields() {
                let key = qualify(prefix, name);
                let unwrapped = unwrap_modifiers(child);

                match unwrapped.node.kind() {
                    NodeKind::Array => {
                        debug!(field = %key, "Dropping array field");
                    }
                    NodeKind::Object => collect(child, dialect, Some(&key), out),
                    kind => {
                        let sql_type = dialect.map_kind(kind);
                        trace!(column = %key, sql_type, "Flattened column");
                        out.push(ColumnDescriptor {
                            key,
                            sql_type: sql_type.to_string(),
                            nullable: unwrapped.modifiers.nullable,
                            optional: unwrapped.modifiers.optional,
                        });
                    }
                }
            }
        }
        NodeKind::Array
        | NodeKind::String
        | NodeKind::Number
        | NodeKind::Boolean
        | NodeKind::Date
        | NodeKind::BigInt
        | NodeKind::Other => {}
    }
}

fn qualify(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}{KEY_SEPARATOR}{name}"),
        None => name.to_string(),
    }
}
