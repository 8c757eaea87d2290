//! The widget catalog: which tags exist, which properties they take, and how
//! property text is typed.
//!
//! Every widget accepts the common layout properties; each kind adds its own.
//! Property values are parsed against the declared [`PropertyType`], so a
//! misspelled attribute or a non-numeric `Width` is reported at load time.

use std::fmt;

use crate::style::color::{parse_color, Color};
use crate::style::store::StyleCategory;

// ---------------------------------------------------------------------------
// Property types and values
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    String,
    Int,
    Float,
    Bool,
    Color,
    /// One of a fixed set of names.
    Enum(&'static [&'static str]),
}

impl PropertyType {
    /// Parse markup text into a typed value.
    pub fn parse(self, raw: &str) -> Result<PropertyValue, String> {
        match self {
            PropertyType::String => Ok(PropertyValue::String(raw.to_string())),
            PropertyType::Int => raw
                .trim()
                .parse()
                .map(PropertyValue::Int)
                .map_err(|_| "expected an integer".to_string()),
            PropertyType::Float => match raw.trim().parse::<f32>() {
                Ok(v) if v.is_finite() => Ok(PropertyValue::Float(v)),
                _ => Err("expected a number".to_string()),
            },
            PropertyType::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(PropertyValue::Bool(true)),
                "false" => Ok(PropertyValue::Bool(false)),
                _ => Err("expected True or False".to_string()),
            },
            PropertyType::Color => parse_color(raw)
                .map(PropertyValue::Color)
                .ok_or_else(|| "expected a color".to_string()),
            PropertyType::Enum(options) => options
                .iter()
                .copied()
                .find(|o| o.eq_ignore_ascii_case(raw.trim()))
                .map(PropertyValue::Enum)
                .ok_or_else(|| format!("expected one of {}", options.join(", "))),
        }
    }

    /// Whether `value` is a valid value of this type.
    pub fn accepts(self, value: &PropertyValue) -> bool {
        match (self, value) {
            (PropertyType::String, PropertyValue::String(_))
            | (PropertyType::Int, PropertyValue::Int(_))
            | (PropertyType::Bool, PropertyValue::Bool(_))
            | (PropertyType::Color, PropertyValue::Color(_)) => true,
            (PropertyType::Float, PropertyValue::Float(v)) => v.is_finite(),
            (PropertyType::Enum(options), PropertyValue::Enum(v)) => options.contains(v),
            _ => false,
        }
    }
}

/// A typed property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    Int(i32),
    Float(f32),
    Bool(bool),
    Color(Color),
    Enum(&'static str),
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            PropertyValue::Enum(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<Color> for PropertyValue {
    fn from(c: Color) -> Self {
        PropertyValue::Color(c)
    }
}

/// Markup text for a value (unescaped).
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => f.write_str(s),
            PropertyValue::Int(v) => write!(f, "{v}"),
            PropertyValue::Float(v) => write!(f, "{v}"),
            PropertyValue::Bool(true) => f.write_str("True"),
            PropertyValue::Bool(false) => f.write_str("False"),
            PropertyValue::Color(c) => f.write_str(&c.to_hex()),
            PropertyValue::Enum(s) => f.write_str(s),
        }
    }
}

/// A property a widget kind accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDef {
    pub name: &'static str,
    pub ty: PropertyType,
}

const fn prop(name: &'static str, ty: PropertyType) -> PropertyDef {
    PropertyDef { name, ty }
}

// ---------------------------------------------------------------------------
// Schemas
// ---------------------------------------------------------------------------

const HORIZONTAL_ALIGNMENT: &[&str] = &["Left", "Center", "Right", "Stretch"];
const VERTICAL_ALIGNMENT: &[&str] = &["Top", "Center", "Bottom", "Stretch"];

const COMMON: &[PropertyDef] = &[
    prop("Id", PropertyType::String),
    prop("StyleName", PropertyType::String),
    prop("Left", PropertyType::Int),
    prop("Top", PropertyType::Int),
    prop("Width", PropertyType::Int),
    prop("Height", PropertyType::Int),
    prop("MinWidth", PropertyType::Int),
    prop("MinHeight", PropertyType::Int),
    prop("MaxWidth", PropertyType::Int),
    prop("MaxHeight", PropertyType::Int),
    prop("HorizontalAlignment", PropertyType::Enum(HORIZONTAL_ALIGNMENT)),
    prop("VerticalAlignment", PropertyType::Enum(VERTICAL_ALIGNMENT)),
    prop("GridColumn", PropertyType::Int),
    prop("GridRow", PropertyType::Int),
    prop("GridColumnSpan", PropertyType::Int),
    prop("GridRowSpan", PropertyType::Int),
    prop("Visible", PropertyType::Bool),
    prop("Enabled", PropertyType::Bool),
    prop("Opacity", PropertyType::Float),
    prop("Background", PropertyType::Color),
];

const GRID: &[PropertyDef] = &[
    prop("ColumnSpacing", PropertyType::Int),
    prop("RowSpacing", PropertyType::Int),
    prop("ShowGridLines", PropertyType::Bool),
    prop("GridLinesColor", PropertyType::Color),
];

const STACK: &[PropertyDef] = &[prop("Spacing", PropertyType::Int)];

const TEXT: &[PropertyDef] = &[
    prop("Text", PropertyType::String),
    prop("TextColor", PropertyType::Color),
];

const LABEL: &[PropertyDef] = &[
    prop("Text", PropertyType::String),
    prop("TextColor", PropertyType::Color),
    prop("Wrap", PropertyType::Bool),
];

const BUTTON: &[PropertyDef] = &[
    prop("Text", PropertyType::String),
    prop("TextColor", PropertyType::Color),
    prop("Toggleable", PropertyType::Bool),
    prop("IsPressed", PropertyType::Bool),
];

const TEXT_BOX: &[PropertyDef] = &[
    prop("Text", PropertyType::String),
    prop("TextColor", PropertyType::Color),
    prop("HintText", PropertyType::String),
    prop("Readonly", PropertyType::Bool),
    prop("Multiline", PropertyType::Bool),
];

const CHECKABLE: &[PropertyDef] = &[
    prop("Text", PropertyType::String),
    prop("TextColor", PropertyType::Color),
    prop("IsPressed", PropertyType::Bool),
];

const SELECTOR: &[PropertyDef] = &[prop("SelectedIndex", PropertyType::Int)];

const SCROLL_PANE: &[PropertyDef] = &[
    prop("ShowHorizontalScrollBar", PropertyType::Bool),
    prop("ShowVerticalScrollBar", PropertyType::Bool),
];

const RANGE: &[PropertyDef] = &[
    prop("Minimum", PropertyType::Float),
    prop("Maximum", PropertyType::Float),
    prop("Value", PropertyType::Float),
];

const WINDOW: &[PropertyDef] = &[
    prop("Title", PropertyType::String),
    prop("TitleTextColor", PropertyType::Color),
];

const IMAGE: &[PropertyDef] = &[prop("Renderable", PropertyType::String)];

// ---------------------------------------------------------------------------
// WidgetKind
// ---------------------------------------------------------------------------

/// What a widget may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildPolicy {
    None,
    /// At most one child widget.
    Single,
    /// Any number of child widgets.
    Many,
    /// Only `<ListItem>` entries.
    Items,
}

macro_rules! widget_kinds {
    ($($kind:ident => $tag:literal, $props:expr, $children:ident, $category:expr;)*) => {
        /// Every tag the markup understands.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum WidgetKind {
            $($kind,)*
        }

        impl WidgetKind {
            pub const ALL: &'static [WidgetKind] = &[$(WidgetKind::$kind,)*];

            /// The markup tag name.
            pub const fn tag(self) -> &'static str {
                match self {
                    $(WidgetKind::$kind => $tag,)*
                }
            }

            /// Kind-specific properties (in addition to the common ones).
            fn own_properties(self) -> &'static [PropertyDef] {
                match self {
                    $(WidgetKind::$kind => $props,)*
                }
            }

            pub const fn child_policy(self) -> ChildPolicy {
                match self {
                    $(WidgetKind::$kind => ChildPolicy::$children,)*
                }
            }

            /// The stylesheet category this widget resolves its style from.
            pub const fn style_category(self) -> Option<StyleCategory> {
                match self {
                    $(WidgetKind::$kind => $category,)*
                }
            }
        }
    };
}

widget_kinds! {
    Grid => "Grid", GRID, Many, None;
    Panel => "Panel", &[], Many, None;
    VerticalStackPanel => "VerticalStackPanel", STACK, Many, None;
    HorizontalStackPanel => "HorizontalStackPanel", STACK, Many, None;
    ScrollPane => "ScrollPane", SCROLL_PANE, Single, Some(StyleCategory::ScrollPane);
    Window => "Window", WINDOW, Single, Some(StyleCategory::Window);
    Dialog => "Dialog", WINDOW, Single, Some(StyleCategory::Dialog);
    Label => "Label", LABEL, None, Some(StyleCategory::Label);
    Button => "Button", BUTTON, None, Some(StyleCategory::Button);
    TextBox => "TextBox", TEXT_BOX, None, Some(StyleCategory::TextBox);
    CheckBox => "CheckBox", CHECKABLE, None, Some(StyleCategory::CheckBox);
    RadioButton => "RadioButton", CHECKABLE, None, Some(StyleCategory::RadioButton);
    ComboBox => "ComboBox", SELECTOR, Items, Some(StyleCategory::ComboBox);
    ListBox => "ListBox", SELECTOR, Items, Some(StyleCategory::ListBox);
    ListItem => "ListItem", TEXT, None, None;
    HorizontalSlider => "HorizontalSlider", RANGE, None, Some(StyleCategory::HorizontalSlider);
    VerticalSlider => "VerticalSlider", RANGE, None, Some(StyleCategory::VerticalSlider);
    HorizontalProgressBar => "HorizontalProgressBar", RANGE, None, Some(StyleCategory::HorizontalProgressBar);
    VerticalProgressBar => "VerticalProgressBar", RANGE, None, Some(StyleCategory::VerticalProgressBar);
    HorizontalSeparator => "HorizontalSeparator", &[], None, Some(StyleCategory::HorizontalSeparator);
    VerticalSeparator => "VerticalSeparator", &[], None, Some(StyleCategory::VerticalSeparator);
    Image => "Image", IMAGE, None, None;
}

impl WidgetKind {
    /// Look up a kind by tag name (case-sensitive, like XML).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.tag() == tag)
    }

    /// Find a property definition by name.
    pub fn property(self, name: &str) -> Option<PropertyDef> {
        self.own_properties()
            .iter()
            .chain(COMMON)
            .find(|p| p.name == name)
            .copied()
    }

    /// All accepted properties: kind-specific first, then the common ones.
    pub fn properties(self) -> impl Iterator<Item = PropertyDef> {
        self.own_properties().iter().chain(COMMON).copied()
    }

    /// Whether `child` may appear inside this widget.
    pub fn accepts_child(self, child: WidgetKind) -> bool {
        match self.child_policy() {
            ChildPolicy::None => false,
            ChildPolicy::Single | ChildPolicy::Many => child != WidgetKind::ListItem,
            ChildPolicy::Items => child == WidgetKind::ListItem,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Kinds ────────────────────────────────────────────────────────

    #[test]
    fn tags_round_trip() {
        for &kind in WidgetKind::ALL {
            assert_eq!(WidgetKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(WidgetKind::from_tag("button"), None);
        assert_eq!(WidgetKind::from_tag("Spinner"), None);
    }

    #[test]
    fn containers_have_no_category() {
        assert_eq!(WidgetKind::Grid.style_category(), None);
        assert_eq!(WidgetKind::Panel.style_category(), None);
        assert_eq!(WidgetKind::Button.style_category(), Some(StyleCategory::Button));
        assert_eq!(WidgetKind::Dialog.style_category(), Some(StyleCategory::Dialog));
    }

    #[test]
    fn child_rules() {
        assert!(WidgetKind::Grid.accepts_child(WidgetKind::Button));
        assert!(!WidgetKind::Grid.accepts_child(WidgetKind::ListItem));
        assert!(WidgetKind::ListBox.accepts_child(WidgetKind::ListItem));
        assert!(!WidgetKind::ListBox.accepts_child(WidgetKind::Label));
        assert!(!WidgetKind::Button.accepts_child(WidgetKind::Label));
        assert_eq!(WidgetKind::ScrollPane.child_policy(), ChildPolicy::Single);
    }

    #[test]
    fn properties_include_common() {
        let button = WidgetKind::Button;
        assert_eq!(button.property("Text").map(|p| p.ty), Some(PropertyType::String));
        assert_eq!(button.property("Width").map(|p| p.ty), Some(PropertyType::Int));
        assert!(button.property("Title").is_none());
        assert_eq!(button.properties().next().map(|p| p.name), Some("Text"));
    }

    // ── Values ───────────────────────────────────────────────────────

    #[test]
    fn parse_typed_values() {
        assert_eq!(PropertyType::Int.parse(" 42 "), Ok(PropertyValue::Int(42)));
        assert_eq!(PropertyType::Float.parse("0.5"), Ok(PropertyValue::Float(0.5)));
        assert_eq!(PropertyType::Bool.parse("True"), Ok(PropertyValue::Bool(true)));
        assert_eq!(
            PropertyType::Color.parse("#FF0000"),
            Ok(PropertyValue::Color(Color::rgb(255, 0, 0)))
        );
        assert_eq!(
            PropertyType::Enum(HORIZONTAL_ALIGNMENT).parse("center"),
            Ok(PropertyValue::Enum("Center"))
        );
    }

    #[test]
    fn parse_rejects_bad_values() {
        assert!(PropertyType::Int.parse("wide").is_err());
        assert!(PropertyType::Float.parse("NaN").is_err());
        assert!(PropertyType::Bool.parse("yes").is_err());
        assert!(PropertyType::Color.parse("nope").is_err());
        let err = PropertyType::Enum(VERTICAL_ALIGNMENT).parse("Middle").unwrap_err();
        assert_eq!(err, "expected one of Top, Center, Bottom, Stretch");
    }

    #[test]
    fn display_is_markup_text() {
        assert_eq!(PropertyValue::Bool(false).to_string(), "False");
        assert_eq!(PropertyValue::Float(1.5).to_string(), "1.5");
        assert_eq!(PropertyValue::Color(Color::rgb(0, 0, 255)).to_string(), "#0000FF");
    }

    #[test]
    fn accepts_checks_type() {
        assert!(PropertyType::Int.accepts(&PropertyValue::Int(1)));
        assert!(!PropertyType::Int.accepts(&PropertyValue::String("1".into())));
        assert!(!PropertyType::Enum(HORIZONTAL_ALIGNMENT).accepts(&PropertyValue::Enum("Top")));
    }
}
