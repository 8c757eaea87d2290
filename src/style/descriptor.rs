//! Style descriptors: plain owned records of visual attributes.
//!
//! Each widget shape has its own struct. Compound widgets nest the styles of
//! their parts (a button style owns a label style, a combo box owns the style
//! of its list items). Every field is optional in the document; `None` means
//! the widget uses its built-in fallback for that attribute.
//!
//! `Clone` is a full deep copy of the record. Font handles are shared through
//! `Arc`, but the handle is a resource, not style state: mutating a cloned
//! descriptor never affects the one it was cloned from.

use std::sync::Arc;

use crate::geometry::Thickness;
use crate::style::color::Color;
use crate::style::resources::{Font, TextureRegion};

// ---------------------------------------------------------------------------
// Brush
// ---------------------------------------------------------------------------

/// How a background, border, or filler area is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    /// A solid fill.
    Solid(Color),
    /// A texture region stretched over the area, multiplied by `tint`.
    Texture { region: TextureRegion, tint: Color },
}

impl Brush {
    /// An untinted texture brush.
    pub fn texture(region: TextureRegion) -> Self {
        Brush::Texture {
            region,
            tint: Color::WHITE,
        }
    }
}

// ---------------------------------------------------------------------------
// Base records
// ---------------------------------------------------------------------------

/// Attributes shared by every widget style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetStyle {
    pub background: Option<Brush>,
    pub over_background: Option<Brush>,
    pub disabled_background: Option<Brush>,
    pub focused_background: Option<Brush>,
    pub border: Option<Brush>,
    pub border_thickness: Thickness,
    pub padding: Thickness,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// Text appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelStyle {
    pub widget: WidgetStyle,
    pub font: Option<Arc<Font>>,
    pub text_color: Option<Color>,
    pub disabled_text_color: Option<Color>,
    pub over_text_color: Option<Color>,
    pub pressed_text_color: Option<Color>,
}

/// Image appearance per interaction state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageStyle {
    pub widget: WidgetStyle,
    pub image: Option<TextureRegion>,
    pub over_image: Option<TextureRegion>,
    pub pressed_image: Option<TextureRegion>,
    pub disabled_image: Option<TextureRegion>,
}

// ---------------------------------------------------------------------------
// Widget shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonStyle {
    pub widget: WidgetStyle,
    pub pressed_background: Option<Brush>,
    pub label: Option<LabelStyle>,
}

/// A button carrying both text and an image (check boxes, radio buttons,
/// list items).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageTextButtonStyle {
    pub button: ButtonStyle,
    pub image: Option<ImageStyle>,
    pub image_text_spacing: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBoxStyle {
    pub widget: WidgetStyle,
    pub font: Option<Arc<Font>>,
    pub text_color: Option<Color>,
    pub disabled_text_color: Option<Color>,
    pub focused_text_color: Option<Color>,
    pub cursor: Option<Brush>,
    pub selection: Option<Brush>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderStyle {
    pub widget: WidgetStyle,
    pub knob: Option<ImageStyle>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressBarStyle {
    pub widget: WidgetStyle,
    pub filler: Option<Brush>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeparatorStyle {
    pub widget: WidgetStyle,
    pub image: Option<Brush>,
    pub thickness: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollPaneStyle {
    pub widget: WidgetStyle,
    pub horizontal_scroll_background: Option<Brush>,
    pub horizontal_scroll_knob: Option<Brush>,
    pub vertical_scroll_background: Option<Brush>,
    pub vertical_scroll_knob: Option<Brush>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListBoxStyle {
    pub widget: WidgetStyle,
    pub list_item: Option<ImageTextButtonStyle>,
    pub separator: Option<SeparatorStyle>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComboBoxStyle {
    pub button: ImageTextButtonStyle,
    pub items_container: Option<WidgetStyle>,
    pub list_item: Option<ImageTextButtonStyle>,
}

/// A button showing only an image (spin arrows, tree marks, split handles).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageButtonStyle {
    pub button: ButtonStyle,
    pub image: Option<ImageStyle>,
}

/// A numeric text box with up/down buttons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpinButtonStyle {
    pub widget: WidgetStyle,
    pub text_box: Option<TextBoxStyle>,
    pub up_button: Option<ImageButtonStyle>,
    pub down_button: Option<ImageButtonStyle>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabControlStyle {
    pub widget: WidgetStyle,
    pub tab_item: Option<ImageTextButtonStyle>,
    pub content: Option<WidgetStyle>,
    pub header_spacing: i32,
    pub button_spacing: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeStyle {
    pub widget: WidgetStyle,
    pub mark: Option<ImageButtonStyle>,
    pub label: Option<LabelStyle>,
    pub selection_background: Option<Brush>,
    pub selection_hover_background: Option<Brush>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitPaneStyle {
    pub widget: WidgetStyle,
    pub handle: Option<ImageButtonStyle>,
}

/// Menu bars and drop-down menus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuStyle {
    pub widget: WidgetStyle,
    pub label: Option<LabelStyle>,
    pub shortcut: Option<LabelStyle>,
    pub image: Option<ImageStyle>,
    pub separator: Option<SeparatorStyle>,
    pub selection_background: Option<Brush>,
    pub selection_hover_background: Option<Brush>,
}

/// Windows and dialogs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowStyle {
    pub widget: WidgetStyle,
    pub title: Option<LabelStyle>,
    pub close_button: Option<ImageStyle>,
}

/// Background of the document host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesktopStyle {
    pub background: Option<Brush>,
}

// ---------------------------------------------------------------------------
// StyleDescriptor
// ---------------------------------------------------------------------------

/// A style record of one of the known shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleDescriptor {
    Widget(WidgetStyle),
    Label(LabelStyle),
    TextBox(TextBoxStyle),
    Button(ButtonStyle),
    ImageTextButton(ImageTextButtonStyle),
    Slider(SliderStyle),
    ProgressBar(ProgressBarStyle),
    Separator(SeparatorStyle),
    ScrollPane(ScrollPaneStyle),
    ListBox(ListBoxStyle),
    ComboBox(ComboBoxStyle),
    SpinButton(SpinButtonStyle),
    TabControl(TabControlStyle),
    Tree(TreeStyle),
    SplitPane(SplitPaneStyle),
    Menu(MenuStyle),
    Window(WindowStyle),
}

impl StyleDescriptor {
    /// The base attributes every shape carries.
    pub fn widget(&self) -> &WidgetStyle {
        match self {
            StyleDescriptor::Widget(w) => w,
            StyleDescriptor::Label(s) => &s.widget,
            StyleDescriptor::TextBox(s) => &s.widget,
            StyleDescriptor::Button(s) => &s.widget,
            StyleDescriptor::ImageTextButton(s) => &s.button.widget,
            StyleDescriptor::Slider(s) => &s.widget,
            StyleDescriptor::ProgressBar(s) => &s.widget,
            StyleDescriptor::Separator(s) => &s.widget,
            StyleDescriptor::ScrollPane(s) => &s.widget,
            StyleDescriptor::ListBox(s) => &s.widget,
            StyleDescriptor::ComboBox(s) => &s.button.button.widget,
            StyleDescriptor::SpinButton(s) => &s.widget,
            StyleDescriptor::TabControl(s) => &s.widget,
            StyleDescriptor::Tree(s) => &s.widget,
            StyleDescriptor::SplitPane(s) => &s.widget,
            StyleDescriptor::Menu(s) => &s.widget,
            StyleDescriptor::Window(s) => &s.widget,
        }
    }

    /// Mutable access to the base attributes.
    pub fn widget_mut(&mut self) -> &mut WidgetStyle {
        match self {
            StyleDescriptor::Widget(w) => w,
            StyleDescriptor::Label(s) => &mut s.widget,
            StyleDescriptor::TextBox(s) => &mut s.widget,
            StyleDescriptor::Button(s) => &mut s.widget,
            StyleDescriptor::ImageTextButton(s) => &mut s.button.widget,
            StyleDescriptor::Slider(s) => &mut s.widget,
            StyleDescriptor::ProgressBar(s) => &mut s.widget,
            StyleDescriptor::Separator(s) => &mut s.widget,
            StyleDescriptor::ScrollPane(s) => &mut s.widget,
            StyleDescriptor::ListBox(s) => &mut s.widget,
            StyleDescriptor::ComboBox(s) => &mut s.button.button.widget,
            StyleDescriptor::SpinButton(s) => &mut s.widget,
            StyleDescriptor::TabControl(s) => &mut s.widget,
            StyleDescriptor::Tree(s) => &mut s.widget,
            StyleDescriptor::SplitPane(s) => &mut s.widget,
            StyleDescriptor::Menu(s) => &mut s.widget,
            StyleDescriptor::Window(s) => &mut s.widget,
        }
    }

    /// Short name of the shape, for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            StyleDescriptor::Widget(_) => "widget",
            StyleDescriptor::Label(_) => "label",
            StyleDescriptor::TextBox(_) => "textBox",
            StyleDescriptor::Button(_) => "button",
            StyleDescriptor::ImageTextButton(_) => "imageTextButton",
            StyleDescriptor::Slider(_) => "slider",
            StyleDescriptor::ProgressBar(_) => "progressBar",
            StyleDescriptor::Separator(_) => "separator",
            StyleDescriptor::ScrollPane(_) => "scrollPane",
            StyleDescriptor::ListBox(_) => "listBox",
            StyleDescriptor::ComboBox(_) => "comboBox",
            StyleDescriptor::SpinButton(_) => "spinButton",
            StyleDescriptor::TabControl(_) => "tabControl",
            StyleDescriptor::Tree(_) => "tree",
            StyleDescriptor::SplitPane(_) => "splitPane",
            StyleDescriptor::Menu(_) => "menu",
            StyleDescriptor::Window(_) => "window",
        }
    }

    pub fn as_label(&self) -> Option<&LabelStyle> {
        match self {
            StyleDescriptor::Label(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&ButtonStyle> {
        match self {
            StyleDescriptor::Button(s) => Some(s),
            StyleDescriptor::ImageTextButton(s) => Some(&s.button),
            StyleDescriptor::ComboBox(s) => Some(&s.button.button),
            _ => None,
        }
    }

    pub fn as_text_box(&self) -> Option<&TextBoxStyle> {
        match self {
            StyleDescriptor::TextBox(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_window(&self) -> Option<&WindowStyle> {
        match self {
            StyleDescriptor::Window(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&TreeStyle> {
        match self {
            StyleDescriptor::Tree(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_menu(&self) -> Option<&MenuStyle> {
        match self {
            StyleDescriptor::Menu(s) => Some(s),
            _ => None,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
