//! Rendering: the graphics backend seam and the batched render context.

pub mod backend;
pub mod context;

pub use backend::{Batch, DrawCommand, GraphicsBackend, RecordingBackend, SurfaceId};
pub use context::{RenderContext, RenderError};
