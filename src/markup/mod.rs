//! Widget markup: a forgiving tokenizer and tag scanner for live editing, a
//! typed widget catalog, and a strict parser and writer for whole documents.

pub mod catalog;
pub mod error;
pub mod format;
pub mod object;
pub mod parser;
pub mod scan;
pub mod tokenizer;
pub mod writer;

pub use catalog::{ChildPolicy, PropertyDef, PropertyType, PropertyValue, WidgetKind};
pub use error::MarkupError;
pub use format::format_markup;
pub use object::{Attribute, WidgetObject};
pub use parser::{parse_object, parse_project};
pub use scan::{positions, resolve_span, CursorPosition, MarkupSpan};
pub use writer::{strip_self_close, write_object, write_project};
