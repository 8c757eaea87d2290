//! # plinth
//!
//! The core of a retained-mode widget toolkit for real-time rendered
//! applications, plus an editor engine for authoring widget trees as markup.
//!
//! ## Core Systems
//!
//! - **[`style`]**: JSON stylesheet loading, a per-category style store and the resolver that picks a widget's style
//! - **[`render`]**: Batched render context over an abstract graphics backend, flushing on clip and transform changes
//! - **[`markup`]**: Tag scanner, widget catalog, and the roxmltree-based parser and writer
//! - **[`dom`]**: Slotmap-backed widget tree and the project document that owns it
//! - **[`editor`]**: Live markup ↔ object sync engine, text surfaces, options and persisted state
//! - **[`event`]**: Key input decoupled from crossterm
//! - **[`testing`]**: Headless editor pilot
//! - **[`geometry`]**: Point, Rect and Thickness primitives

// Foundation
pub mod geometry;

// Styling and rendering
pub mod render;
pub mod style;

// Documents
pub mod dom;
pub mod markup;

// Editing
pub mod editor;
pub mod event;

// Test support
pub mod testing;

pub use dom::{Dom, NodeId, Project, WidgetNode};
pub use editor::{EditorError, EditorOptions, MarkupSyncEngine, SyncState, TextBuffer, TextSurface};
pub use markup::{MarkupError, WidgetKind, WidgetObject};
pub use render::{GraphicsBackend, RecordingBackend, RenderContext, RenderError};
pub use style::{StyleCategory, StyleDescriptor, StyleError, StyleResolver, StyleStore};
