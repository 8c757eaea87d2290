//! Markup loading errors.

/// Errors from parsing widget markup into typed objects.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarkupError {
    /// The text is not well-formed XML.
    #[error("{0}")]
    Xml(String),

    #[error("unknown widget '{0}'")]
    UnknownWidget(String),

    #[error("{widget} has no property '{property}'")]
    UnknownProperty { widget: String, property: String },

    #[error("invalid value '{value}' for {widget}.{property}: {reason}")]
    InvalidValue {
        widget: String,
        property: String,
        value: String,
        reason: String,
    },

    /// `parent` does not accept `child` as content.
    #[error("{parent} cannot contain {child}")]
    InvalidChild { parent: String, child: String },

    #[error("document contains no widget")]
    EmptyDocument,

    #[error("<{0}> must contain exactly one root widget")]
    MultipleRoots(String),

    #[error("expected <{expected}> as the document root, found <{found}>")]
    UnexpectedRoot { expected: &'static str, found: String },
}

impl From<roxmltree::Error> for MarkupError {
    fn from(err: roxmltree::Error) -> Self {
        MarkupError::Xml(err.to_string())
    }
}
