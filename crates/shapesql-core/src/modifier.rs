//! Stripping of `Nullable`/`Optional` wrapper layers.

use crate::node::{NodeKind, SchemaNode};

/// Modifier flags collected while unwrapping a node.
///
/// The flags are independent: wrapper order never matters and repeated
/// wrappers of the same kind collapse into a single flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// At least one `Nullable` layer was present.
    pub nullable: bool,
    /// At least one `Optional` layer was present.
    pub optional: bool,
}

impl Modifiers {
    /// Returns `true` if the value may be null or absent.
    #[must_use]
    pub const fn may_be_absent(self) -> bool {
        self.nullable || self.optional
    }
}

/// A node with all of its wrapper layers removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unwrapped<'a, N> {
    /// The first non-wrapper node.
    pub node: &'a N,
    /// Flags accumulated from the removed layers.
    pub modifiers: Modifiers,
}

/// Removes every `Nullable`/`Optional` layer from `node`.
///
/// A node without wrappers is returned unchanged with both flags unset.
/// A wrapper that reports no child stops the descent at the wrapper itself.
#[must_use]
pub fn unwrap_modifiers<N: SchemaNode>(node: &N) -> Unwrapped<'_, N> {
    let mut current = node;
    let mut modifiers = Modifiers::default();

    loop {
        match current.kind() {
            NodeKind::Nullable => modifiers.nullable = true,
            NodeKind::Optional => modifiers.optional = true,
            _ => break,
        }
        match current.child() {
            Some(inner) => current = inner,
            None => break,
        }
    }

    Unwrapped {
        node: current,
        modifiers,
    }
}
