//! Schema tree model.
//!
//! The converter never inspects a concrete schema representation directly.
//! It walks any type implementing [`SchemaNode`], which only has to report
//! its kind, its object fields, and the single child of a wrapper or array.
//! [`TypeNode`] is the crate's own implementation, buildable in code or
//! loaded from a JSON document.
//!
//! ```rust
//! use shapesql_core::node::{number, object, string};
//!
//! let schema = object([
//!     ("name", string()),
//!     ("age", number().optional()),
//! ]);
//! assert_eq!(schema.fields_len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The closed set of node kinds the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Text.
    String,
    /// Any numeric value.
    Number,
    /// True/false.
    Boolean,
    /// Point in time.
    Date,
    /// Arbitrary precision integer.
    BigInt,
    /// Ordered set of named fields.
    Object,
    /// Homogeneous list of one element type.
    Array,
    /// Wrapper: the inner value may be null.
    Nullable,
    /// Wrapper: the inner value may be absent.
    Optional,
    /// Anything the converter has no mapping for (unions, enums, ...).
    Other,
}

impl NodeKind {
    /// Returns `true` for `Nullable` and `Optional`.
    #[must_use]
    pub const fn is_wrapper(self) -> bool {
        matches!(self, Self::Nullable | Self::Optional)
    }

    /// Returns the primitive this kind maps to, if it is a leaf primitive.
    #[must_use]
    pub const fn primitive(self) -> Option<Primitive> {
        match self {
            Self::String => Some(Primitive::String),
            Self::Number => Some(Primitive::Number),
            Self::Boolean => Some(Primitive::Boolean),
            Self::Date => Some(Primitive::Date),
            Self::BigInt => Some(Primitive::BigInt),
            Self::Object | Self::Array | Self::Nullable | Self::Optional | Self::Other => None,
        }
    }
}

/// Leaf kinds that every dialect maps to a native column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Text.
    String,
    /// Any numeric value.
    Number,
    /// True/false.
    Boolean,
    /// Point in time.
    Date,
    /// Arbitrary precision integer.
    BigInt,
}

impl Primitive {
    /// All primitives, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Date,
        Self::BigInt,
    ];
}

/// Adapter over an externally defined schema tree.
///
/// Implement this for a foreign schema representation to convert it without
/// first copying it into a [`TypeNode`].
pub trait SchemaNode {
    /// Returns the kind of this node.
    fn kind(&self) -> NodeKind;

    /// Returns the fields of an `Object` node in declaration order.
    ///
    /// Non-object nodes return an empty list. Names are expected to be
    /// non-empty; an empty name is passed through as an empty column key.
    fn fields(&self) -> Vec<(&str, &Self)>;

    /// Returns the wrapped node of a `Nullable`/`Optional` wrapper, or the
    /// element of an `Array`. Other kinds return `None`.
    fn child(&self) -> Option<&Self>;
}

/// A named field of an object node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, unique within its object.
    pub name: String,
    /// The field's type.
    #[serde(rename = "type", alias = "node")]
    pub node: TypeNode,
}

/// An owned schema tree.
///
/// Serialized as an internally tagged JSON document, for example
/// `{"kind": "nullable", "inner": {"kind": "string"}}`. Unknown kinds load
/// as [`TypeNode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeNode {
    /// Text.
    String,
    /// Any numeric value.
    Number,
    /// True/false.
    Boolean,
    /// Point in time.
    Date,
    /// Arbitrary precision integer.
    #[serde(rename = "bigint", alias = "big_int")]
    BigInt,
    /// Ordered set of named fields.
    Object {
        /// Fields in declaration order.
        fields: Vec<Field>,
    },
    /// Homogeneous list.
    Array {
        /// Element type.
        element: Box<TypeNode>,
    },
    /// May be null.
    Nullable {
        /// Wrapped type.
        inner: Box<TypeNode>,
    },
    /// May be absent.
    Optional {
        /// Wrapped type.
        inner: Box<TypeNode>,
    },
    /// Any kind without a dedicated mapping.
    #[serde(other)]
    Other,
}

impl TypeNode {
    /// Wraps this node in a `Nullable` layer.
    #[must_use]
    pub fn nullable(self) -> Self {
        Self::Nullable {
            inner: Box::new(self),
        }
    }

    /// Wraps this node in an `Optional` layer.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional {
            inner: Box::new(self),
        }
    }

    /// Returns the number of direct fields (zero for non-objects).
    #[must_use]
    pub fn fields_len(&self) -> usize {
        match self {
            Self::Object { fields } => fields.len(),
            _ => 0,
        }
    }

    /// Parses a schema from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the document is not a
    /// valid schema tree.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a schema from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the reader fails or
    /// the document is not a valid schema tree.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl SchemaNode for TypeNode {
    fn kind(&self) -> NodeKind {
        match self {
            Self::String => NodeKind::String,
            Self::Number => NodeKind::Number,
            Self::Boolean => NodeKind::Boolean,
            Self::Date => NodeKind::Date,
            Self::BigInt => NodeKind::BigInt,
            Self::Object { .. } => NodeKind::Object,
            Self::Array { .. } => NodeKind::Array,
            Self::Nullable { .. } => NodeKind::Nullable,
            Self::Optional { .. } => NodeKind::Optional,
            Self::Other => NodeKind::Other,
        }
    }

    fn fields(&self) -> Vec<(&str, &Self)> {
        match self {
            Self::Object { fields } => fields
                .iter()
                .map(|f| (f.name.as_str(), &f.node))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn child(&self) -> Option<&Self> {
        match self {
            Self::Array { element } => Some(element),
            Self::Nullable { inner } | Self::Optional { inner } => Some(inner),
            _ => None,
        }
    }
}

/// Creates a string node.
#[must_use]
pub const fn string() -> TypeNode {
    TypeNode::String
}

/// Creates a number node.
#[must_use]
pub const fn number() -> TypeNode {
    TypeNode::Number
}

/// Creates a boolean node.
#[must_use]
pub const fn boolean() -> TypeNode {
    TypeNode::Boolean
}

/// Creates a date node.
#[must_use]
pub const fn date() -> TypeNode {
    TypeNode::Date
}

/// Creates a big integer node.
#[must_use]
pub const fn bigint() -> TypeNode {
    TypeNode::BigInt
}

/// Creates a node of a kind with no dedicated mapping.
#[must_use]
pub const fn other() -> TypeNode {
    TypeNode::Other
}

/// Creates an array node.
#[must_use]
pub fn array(element: TypeNode) -> TypeNode {
    TypeNode::Array {
        element: Box::new(element),
    }
}

/// Creates an object node from `(name, node)` pairs, keeping their order.
#[must_use]
pub fn object<I, K>(fields: I) -> TypeNode
where
    I: IntoIterator<Item = (K, TypeNode)>,
    K: Into<String>,
{
    TypeNode::Object {
        fields: fields
            .into_iter()
            .map(|(name, node)| Field {
                name: name.into(),
                node,
            })
            .collect(),
    }
}
