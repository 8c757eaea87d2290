//! Editor error types.

use crate::markup::error::MarkupError;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// A property edit arrived while no object is loaded from the buffer.
    #[error("no object is loaded from the tag under the cursor")]
    NoLiveObject,

    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid editor state: {0}")]
    State(#[from] serde_json::Error),
}
