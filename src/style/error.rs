//! Errors raised while loading a stylesheet.

use std::fmt;

/// The kind of resource a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Texture,
    Font,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Texture => f.write_str("texture region"),
            ResourceKind::Font => f.write_str("font"),
        }
    }
}

/// Errors from stylesheet loading and resource lookup.
///
/// Both variants are fatal to the load call that produced them; the caller may
/// retry with a different document or resource set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// The document is structurally invalid at `context` (a dotted key path).
    #[error("malformed stylesheet at '{context}': {reason}")]
    MalformedStylesheet { context: String, reason: String },

    /// A texture or font reference could not be resolved.
    #[error("{kind} '{name}' not found")]
    ResourceNotFound { kind: ResourceKind, name: String },
}

impl StyleError {
    /// Shorthand for a [`StyleError::MalformedStylesheet`].
    pub fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        StyleError::MalformedStylesheet {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`StyleError::ResourceNotFound`].
    pub fn not_found(kind: ResourceKind, name: impl Into<String>) -> Self {
        StyleError::ResourceNotFound {
            kind,
            name: name.into(),
        }
    }
}
