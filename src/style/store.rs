//! The style store: category → style name → descriptor.
//!
//! A [`StyleStore`] is produced by the loader and read by the resolver. It is
//! plain owned data, `Send + Sync`, and never mutated while widgets resolve
//! against it; hosts that want to swap themes build a new store.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::style::descriptor::{DesktopStyle, StyleDescriptor};

/// Reserved name of a category's default style.
pub const DEFAULT_STYLE_NAME: &str = "";

// ---------------------------------------------------------------------------
// StyleCategory
// ---------------------------------------------------------------------------

/// The widget kinds that take a style from a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleCategory {
    Label,
    TextBox,
    Button,
    CheckBox,
    RadioButton,
    SpinButton,
    HorizontalSlider,
    VerticalSlider,
    HorizontalProgressBar,
    VerticalProgressBar,
    HorizontalSeparator,
    VerticalSeparator,
    ComboBox,
    ListBox,
    TabControl,
    Tree,
    HorizontalSplitPane,
    VerticalSplitPane,
    ScrollPane,
    HorizontalMenu,
    VerticalMenu,
    Window,
    Dialog,
}

impl StyleCategory {
    /// Every category, in document order.
    pub const ALL: [StyleCategory; 23] = [
        StyleCategory::Label,
        StyleCategory::TextBox,
        StyleCategory::Button,
        StyleCategory::CheckBox,
        StyleCategory::RadioButton,
        StyleCategory::SpinButton,
        StyleCategory::HorizontalSlider,
        StyleCategory::VerticalSlider,
        StyleCategory::HorizontalProgressBar,
        StyleCategory::VerticalProgressBar,
        StyleCategory::HorizontalSeparator,
        StyleCategory::VerticalSeparator,
        StyleCategory::ComboBox,
        StyleCategory::ListBox,
        StyleCategory::TabControl,
        StyleCategory::Tree,
        StyleCategory::HorizontalSplitPane,
        StyleCategory::VerticalSplitPane,
        StyleCategory::ScrollPane,
        StyleCategory::HorizontalMenu,
        StyleCategory::VerticalMenu,
        StyleCategory::Window,
        StyleCategory::Dialog,
    ];

    /// The top-level key of this category in a stylesheet document.
    pub const fn key(self) -> &'static str {
        match self {
            StyleCategory::Label => "label",
            StyleCategory::TextBox => "textBox",
            StyleCategory::Button => "button",
            StyleCategory::CheckBox => "checkBox",
            StyleCategory::RadioButton => "radioButton",
            StyleCategory::SpinButton => "spinButton",
            StyleCategory::HorizontalSlider => "horizontalSlider",
            StyleCategory::VerticalSlider => "verticalSlider",
            StyleCategory::HorizontalProgressBar => "horizontalProgressBar",
            StyleCategory::VerticalProgressBar => "verticalProgressBar",
            StyleCategory::HorizontalSeparator => "horizontalSeparator",
            StyleCategory::VerticalSeparator => "verticalSeparator",
            StyleCategory::ComboBox => "comboBox",
            StyleCategory::ListBox => "listBox",
            StyleCategory::TabControl => "tabControl",
            StyleCategory::Tree => "tree",
            StyleCategory::HorizontalSplitPane => "horizontalSplitPane",
            StyleCategory::VerticalSplitPane => "verticalSplitPane",
            StyleCategory::ScrollPane => "scrollPane",
            StyleCategory::HorizontalMenu => "horizontalMenu",
            StyleCategory::VerticalMenu => "verticalMenu",
            StyleCategory::Window => "window",
            StyleCategory::Dialog => "dialog",
        }
    }

    /// Look up a category by its document key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// StyleStore
// ---------------------------------------------------------------------------

/// Named styles per category, plus the resources a document declared.
#[derive(Debug, Clone, Default)]
pub struct StyleStore {
    styles: HashMap<StyleCategory, BTreeMap<String, StyleDescriptor>>,
    desktop: Option<DesktopStyle>,
    atlases: BTreeMap<String, String>,
    fonts: BTreeMap<String, String>,
}

impl StyleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a style, returning any style it replaced.
    ///
    /// Pass [`DEFAULT_STYLE_NAME`] to set the category default.
    pub fn insert(
        &mut self,
        category: StyleCategory,
        name: impl Into<String>,
        style: StyleDescriptor,
    ) -> Option<StyleDescriptor> {
        self.styles.entry(category).or_default().insert(name.into(), style)
    }

    /// Exact lookup by category and name.
    pub fn get(&self, category: StyleCategory, name: &str) -> Option<&StyleDescriptor> {
        self.styles.get(&category)?.get(name)
    }

    /// The default style of a category, if the document defined one.
    pub fn default_style(&self, category: StyleCategory) -> Option<&StyleDescriptor> {
        self.get(category, DEFAULT_STYLE_NAME)
    }

    /// Style names defined for a category, in sorted order.
    pub fn names(&self, category: StyleCategory) -> impl Iterator<Item = &str> {
        self.styles
            .get(&category)
            .into_iter()
            .flat_map(|names| names.keys().map(String::as_str))
    }

    /// Categories with at least one style.
    pub fn categories(&self) -> impl Iterator<Item = StyleCategory> + '_ {
        StyleCategory::ALL
            .into_iter()
            .filter(|c| self.styles.get(c).is_some_and(|m| !m.is_empty()))
    }

    /// Total number of styles across all categories.
    pub fn len(&self) -> usize {
        self.styles.values().map(BTreeMap::len).sum()
    }

    /// Whether the store holds no styles.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn desktop(&self) -> Option<&DesktopStyle> {
        self.desktop.as_ref()
    }

    pub fn set_desktop(&mut self, desktop: DesktopStyle) {
        self.desktop = Some(desktop);
    }

    /// Atlas definition path → image path, as declared by the document.
    pub fn atlases(&self) -> &BTreeMap<String, String> {
        &self.atlases
    }

    /// Font name → definition path, as declared by the document.
    pub fn fonts(&self) -> &BTreeMap<String, String> {
        &self.fonts
    }

    pub(crate) fn declare_atlas(&mut self, definition: String, image: String) {
        self.atlases.insert(definition, image);
    }

    pub(crate) fn declare_font(&mut self, name: String, path: String) {
        self.fonts.insert(name, path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::descriptor::{LabelStyle, WidgetStyle};

    #[test]
    fn category_keys_round_trip() {
        for category in StyleCategory::ALL {
            assert_eq!(StyleCategory::from_key(category.key()), Some(category));
        }
        assert_eq!(StyleCategory::from_key("Button"), None);
        assert_eq!(StyleCategory::HorizontalSlider.to_string(), "horizontalSlider");
    }

    #[test]
    fn insert_and_lookup() {
        let mut store = StyleStore::new();
        assert!(store.is_empty());

        let label = StyleDescriptor::Label(LabelStyle::default());
        assert!(store.insert(StyleCategory::Label, DEFAULT_STYLE_NAME, label.clone()).is_none());
        store.insert(StyleCategory::Label, "title", label.clone());

        assert_eq!(store.len(), 2);
        assert_eq!(store.default_style(StyleCategory::Label), Some(&label));
        assert_eq!(store.get(StyleCategory::Label, "title"), Some(&label));
        assert_eq!(store.get(StyleCategory::Button, "title"), None);
        assert_eq!(store.names(StyleCategory::Label).collect::<Vec<_>>(), vec!["", "title"]);
        assert_eq!(store.categories().collect::<Vec<_>>(), vec![StyleCategory::Label]);
    }

    #[test]
    fn insert_replaces() {
        let mut store = StyleStore::new();
        store.insert(StyleCategory::Window, "x", StyleDescriptor::Widget(WidgetStyle::default()));
        let old = store.insert(StyleCategory::Window, "x", StyleDescriptor::Label(LabelStyle::default()));
        assert!(matches!(old, Some(StyleDescriptor::Widget(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StyleStore>();
    }
}
