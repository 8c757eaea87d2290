//! The markup editor engine: a text surface abstraction, editor options and
//! persisted state, and the engine that keeps a live widget object in step
//! with the tag under the cursor.

pub mod buffer;
pub mod error;
pub mod options;
pub mod state;
pub mod sync;

pub use buffer::{TextBuffer, TextSurface};
pub use error::EditorError;
pub use options::EditorOptions;
pub use state::EditorState;
pub use sync::{MarkupSyncEngine, SyncState, RELOADING_STATUS};
