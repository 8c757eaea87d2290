//! Stylesheets: loading theme documents, storing named styles per widget
//! category, and resolving the style a widget instance should use.

pub mod color;
pub mod descriptor;
pub mod error;
pub mod loader;
pub mod resolver;
pub mod resources;
pub mod store;

pub use color::{parse_color, Color};
pub use descriptor::{
    Brush, ButtonStyle, ComboBoxStyle, DesktopStyle, ImageButtonStyle, ImageStyle,
    ImageTextButtonStyle, LabelStyle, ListBoxStyle, MenuStyle, ProgressBarStyle,
    ScrollPaneStyle, SeparatorStyle, SliderStyle, SpinButtonStyle, SplitPaneStyle,
    StyleDescriptor, TabControlStyle, TextBoxStyle, TreeStyle, WidgetStyle, WindowStyle,
};
pub use error::{ResourceKind, StyleError};
pub use loader::{load_stylesheet, load_stylesheet_str};
pub use resolver::{StyleResolver, Styled};
pub use resources::{Font, ResourceSet, TextureAtlas, TextureRegion};
pub use store::{StyleCategory, StyleStore, DEFAULT_STYLE_NAME};
