//! Stylesheet loader: JSON theme document → [`StyleStore`].
//!
//! The document is a JSON object. Recognised top-level keys:
//!
//! - `textureAtlases`: atlas definition path → image path (recorded for the host)
//! - `fonts`: font name → definition path (recorded for the host)
//! - `colors`: color name → color string, usable wherever a record wants a color
//! - `desktop`: a single `{ "background": ... }` record
//! - one key per [`StyleCategory`] (`label`, `button`, `spinButton`, ...), each an
//!   object of style name → record
//!
//! Anything else is ignored. The record named `default` becomes the category
//! default ([`DEFAULT_STYLE_NAME`]).
//!
//! Textures and fonts are never loaded here: references are handed to the
//! caller's lookup closures, and their errors propagate unchanged.
//!
//! # Example
//!
//! ```json
//! {
//!   "colors": { "accent": "#3080C0" },
//!   "label": { "default": { "font": "default", "textColor": "white" } },
//!   "button": {
//!     "default": { "background": "button", "padding": 4,
//!                  "label": { "textColor": "accent" } }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::geometry::Thickness;
use crate::style::color::{parse_color, Color};
use crate::style::descriptor::*;
use crate::style::error::StyleError;
use crate::style::resources::{Font, ResourceSet, TextureRegion};
use crate::style::store::{StyleCategory, StyleStore, DEFAULT_STYLE_NAME};

/// Record name that maps to [`DEFAULT_STYLE_NAME`].
const DEFAULT_RECORD_NAME: &str = "default";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build a [`StyleStore`] from a parsed stylesheet document.
pub fn load_stylesheet<T, F>(
    root: &Value,
    texture_lookup: T,
    font_lookup: F,
) -> Result<StyleStore, StyleError>
where
    T: FnMut(&str) -> Result<TextureRegion, StyleError>,
    F: FnMut(&str) -> Result<Arc<Font>, StyleError>,
{
    let mut loader = Loader {
        colors: HashMap::new(),
        texture_lookup,
        font_lookup,
    };
    loader.load(root)
}

/// Build a [`StyleStore`] from stylesheet JSON text.
///
/// A JSON syntax error is reported as [`StyleError::MalformedStylesheet`].
pub fn load_stylesheet_str<T, F>(
    source: &str,
    texture_lookup: T,
    font_lookup: F,
) -> Result<StyleStore, StyleError>
where
    T: FnMut(&str) -> Result<TextureRegion, StyleError>,
    F: FnMut(&str) -> Result<Arc<Font>, StyleError>,
{
    let root: Value = serde_json::from_str(source)
        .map_err(|e| StyleError::malformed("<document>", e.to_string()))?;
    load_stylesheet(&root, texture_lookup, font_lookup)
}

impl ResourceSet {
    /// Load stylesheet JSON text, resolving references against this set.
    pub fn load_stylesheet(&self, source: &str) -> Result<StyleStore, StyleError> {
        load_stylesheet_str(source, |name| self.region(name), |name| self.font(name))
    }
}

// ---------------------------------------------------------------------------
// Record: a JSON object plus its path for error context
// ---------------------------------------------------------------------------

struct Record<'a> {
    fields: &'a Map<String, Value>,
    path: String,
}

impl<'a> Record<'a> {
    fn new(value: &'a Value, path: String) -> Result<Self, StyleError> {
        match value.as_object() {
            Some(fields) => Ok(Self { fields, path }),
            None => Err(StyleError::malformed(
                path,
                format!("expected an object, found {}", describe(value)),
            )),
        }
    }

    fn context(&self, key: &str) -> String {
        format!("{}.{}", self.path, key)
    }

    /// A present, non-null field.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    fn string(&self, key: &str) -> Result<Option<&'a str>, StyleError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => {
                Err(StyleError::malformed(self.context(key), "empty value"))
            }
            Some(Value::String(s)) => Ok(Some(s.trim())),
            Some(other) => Err(StyleError::malformed(
                self.context(key),
                format!("expected a string, found {}", describe(other)),
            )),
        }
    }

    fn int(&self, key: &str) -> Result<Option<i32>, StyleError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => as_int(value).map(Some).ok_or_else(|| {
                StyleError::malformed(
                    self.context(key),
                    format!("expected an integer, found {}", describe(value)),
                )
            }),
        }
    }

    /// A thickness given as a number (all sides) or `{left, top, right, bottom}`.
    fn thickness(&self, key: &str) -> Result<Thickness, StyleError> {
        let Some(value) = self.get(key) else {
            return Ok(Thickness::ZERO);
        };
        if let Some(all) = as_int(value) {
            return Ok(Thickness::all(all));
        }
        let sides = Record::new(value, self.context(key))?;
        Ok(Thickness::new(
            sides.int("left")?.unwrap_or(0),
            sides.int("top")?.unwrap_or(0),
            sides.int("right")?.unwrap_or(0),
            sides.int("bottom")?.unwrap_or(0),
        ))
    }

    fn child(&self, key: &str) -> Result<Option<Record<'a>>, StyleError> {
        self.get(key)
            .map(|value| Record::new(value, self.context(key)))
            .transpose()
    }
}

fn as_int(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

struct Loader<T, F> {
    colors: HashMap<String, Color>,
    texture_lookup: T,
    font_lookup: F,
}

impl<T, F> Loader<T, F>
where
    T: FnMut(&str) -> Result<TextureRegion, StyleError>,
    F: FnMut(&str) -> Result<Arc<Font>, StyleError>,
{
    fn load(&mut self, root: &Value) -> Result<StyleStore, StyleError> {
        let root = Record::new(root, "<root>".to_string())?;
        let mut store = StyleStore::new();

        // Colors first: records anywhere in the document may name them.
        if let Some(colors) = root.child("colors")? {
            for name in colors.fields.keys() {
                let text = colors.string(name)?.unwrap_or_default();
                let color = parse_color(text).ok_or_else(|| {
                    StyleError::malformed(colors.context(name), format!("invalid color '{text}'"))
                })?;
                self.colors.insert(name.clone(), color);
            }
        }

        for (key, value) in root.fields {
            match key.as_str() {
                "colors" => {}
                "textureAtlases" => {
                    let atlases = Record::new(value, key.clone())?;
                    for definition in atlases.fields.keys() {
                        if let Some(image) = atlases.string(definition)? {
                            store.declare_atlas(definition.clone(), image.to_string());
                        }
                    }
                }
                "fonts" => {
                    let fonts = Record::new(value, key.clone())?;
                    for name in fonts.fields.keys() {
                        if let Some(path) = fonts.string(name)? {
                            store.declare_font(name.clone(), path.to_string());
                        }
                    }
                }
                "desktop" => {
                    let record = Record::new(value, key.clone())?;
                    store.set_desktop(DesktopStyle {
                        background: self.brush(&record, "background")?,
                    });
                }
                other => match StyleCategory::from_key(other) {
                    Some(category) => self.load_category(&mut store, category, value)?,
                    None => log::debug!("ignoring unknown stylesheet key '{other}'"),
                },
            }
        }

        log::info!(
            "loaded stylesheet: {} styles in {} categories",
            store.len(),
            store.categories().count()
        );
        Ok(store)
    }

    fn load_category(
        &mut self,
        store: &mut StyleStore,
        category: StyleCategory,
        section: &Value,
    ) -> Result<(), StyleError> {
        let section = Record::new(section, category.key().to_string())?;
        for (name, value) in section.fields {
            let record = Record::new(value, section.context(name))?;
            let style = self.descriptor(category, &record)?;
            let name = if name == DEFAULT_RECORD_NAME {
                DEFAULT_STYLE_NAME
            } else {
                name.as_str()
            };
            store.insert(category, name, style);
        }
        Ok(())
    }

    fn descriptor(
        &mut self,
        category: StyleCategory,
        record: &Record<'_>,
    ) -> Result<StyleDescriptor, StyleError> {
        use StyleCategory as C;
        Ok(match category {
            C::Label => StyleDescriptor::Label(self.label(record)?),
            C::TextBox => StyleDescriptor::TextBox(self.text_box(record)?),
            C::Button => StyleDescriptor::Button(self.button(record)?),
            C::CheckBox | C::RadioButton => {
                StyleDescriptor::ImageTextButton(self.image_text_button(record)?)
            }
            C::HorizontalSlider | C::VerticalSlider => StyleDescriptor::Slider(SliderStyle {
                widget: self.widget(record)?,
                knob: self.child_with(record, "knob", Self::image)?,
            }),
            C::HorizontalProgressBar | C::VerticalProgressBar => {
                StyleDescriptor::ProgressBar(ProgressBarStyle {
                    widget: self.widget(record)?,
                    filler: self.brush(record, "filler")?,
                })
            }
            C::HorizontalSeparator | C::VerticalSeparator => {
                StyleDescriptor::Separator(self.separator(record)?)
            }
            C::ComboBox => StyleDescriptor::ComboBox(ComboBoxStyle {
                button: self.image_text_button(record)?,
                items_container: self.child_with(record, "itemsContainer", Self::widget)?,
                list_item: self.child_with(record, "listItem", Self::image_text_button)?,
            }),
            C::ListBox => StyleDescriptor::ListBox(ListBoxStyle {
                widget: self.widget(record)?,
                list_item: self.child_with(record, "listItem", Self::image_text_button)?,
                separator: self.child_with(record, "separator", Self::separator)?,
            }),
            C::ScrollPane => StyleDescriptor::ScrollPane(ScrollPaneStyle {
                widget: self.widget(record)?,
                horizontal_scroll_background: self.brush(record, "horizontalScrollBackground")?,
                horizontal_scroll_knob: self.brush(record, "horizontalScrollKnob")?,
                vertical_scroll_background: self.brush(record, "verticalScrollBackground")?,
                vertical_scroll_knob: self.brush(record, "verticalScrollKnob")?,
            }),
            C::SpinButton => StyleDescriptor::SpinButton(SpinButtonStyle {
                widget: self.widget(record)?,
                text_box: self.child_with(record, "textBox", Self::text_box)?,
                up_button: self.child_with(record, "upButton", Self::image_button)?,
                down_button: self.child_with(record, "downButton", Self::image_button)?,
            }),
            C::TabControl => StyleDescriptor::TabControl(TabControlStyle {
                widget: self.widget(record)?,
                tab_item: self.child_with(record, "tabItem", Self::image_text_button)?,
                content: self.child_with(record, "content", Self::widget)?,
                header_spacing: record.int("headerSpacing")?.unwrap_or(0),
                button_spacing: record.int("buttonSpacing")?.unwrap_or(0),
            }),
            C::Tree => StyleDescriptor::Tree(TreeStyle {
                widget: self.widget(record)?,
                mark: self.child_with(record, "mark", Self::image_button)?,
                label: self.child_with(record, "label", Self::label)?,
                selection_background: self.brush(record, "selectionBackground")?,
                selection_hover_background: self.brush(record, "selectionHoverBackground")?,
            }),
            C::HorizontalSplitPane | C::VerticalSplitPane => {
                StyleDescriptor::SplitPane(SplitPaneStyle {
                    widget: self.widget(record)?,
                    handle: self.child_with(record, "handle", Self::image_button)?,
                })
            }
            C::HorizontalMenu | C::VerticalMenu => StyleDescriptor::Menu(MenuStyle {
                widget: self.widget(record)?,
                label: self.child_with(record, "label", Self::label)?,
                shortcut: self.child_with(record, "shortcut", Self::label)?,
                image: self.child_with(record, "image", Self::image)?,
                separator: self.child_with(record, "separator", Self::separator)?,
                selection_background: self.brush(record, "selectionBackground")?,
                selection_hover_background: self.brush(record, "selectionHoverBackground")?,
            }),
            C::Window | C::Dialog => StyleDescriptor::Window(WindowStyle {
                widget: self.widget(record)?,
                title: self.child_with(record, "title", Self::label)?,
                close_button: self.child_with(record, "closeButton", Self::image)?,
            }),
        })
    }

    // ── Shapes ───────────────────────────────────────────────────────

    fn child_with<S>(
        &mut self,
        record: &Record<'_>,
        key: &str,
        parse: fn(&mut Self, &Record<'_>) -> Result<S, StyleError>,
    ) -> Result<Option<S>, StyleError> {
        match record.child(key)? {
            Some(child) => parse(self, &child).map(Some),
            None => Ok(None),
        }
    }

    fn widget(&mut self, r: &Record<'_>) -> Result<WidgetStyle, StyleError> {
        Ok(WidgetStyle {
            background: self.brush(r, "background")?,
            over_background: self.brush(r, "overBackground")?,
            disabled_background: self.brush(r, "disabledBackground")?,
            focused_background: self.brush(r, "focusedBackground")?,
            border: self.brush(r, "border")?,
            border_thickness: r.thickness("borderThickness")?,
            padding: r.thickness("padding")?,
            width: r.int("width")?,
            height: r.int("height")?,
        })
    }

    fn label(&mut self, r: &Record<'_>) -> Result<LabelStyle, StyleError> {
        Ok(LabelStyle {
            widget: self.widget(r)?,
            font: self.font(r, "font")?,
            text_color: self.color(r, "textColor")?,
            disabled_text_color: self.color(r, "disabledTextColor")?,
            over_text_color: self.color(r, "overTextColor")?,
            pressed_text_color: self.color(r, "pressedTextColor")?,
        })
    }

    fn image(&mut self, r: &Record<'_>) -> Result<ImageStyle, StyleError> {
        Ok(ImageStyle {
            widget: self.widget(r)?,
            image: self.region(r, "image")?,
            over_image: self.region(r, "overImage")?,
            pressed_image: self.region(r, "pressedImage")?,
            disabled_image: self.region(r, "disabledImage")?,
        })
    }

    fn button(&mut self, r: &Record<'_>) -> Result<ButtonStyle, StyleError> {
        Ok(ButtonStyle {
            widget: self.widget(r)?,
            pressed_background: self.brush(r, "pressedBackground")?,
            label: self.child_with(r, "label", Self::label)?,
        })
    }

    fn image_text_button(&mut self, r: &Record<'_>) -> Result<ImageTextButtonStyle, StyleError> {
        Ok(ImageTextButtonStyle {
            button: self.button(r)?,
            image: self.child_with(r, "image", Self::image)?,
            image_text_spacing: r.int("imageTextSpacing")?.unwrap_or(0),
        })
    }

    fn image_button(&mut self, r: &Record<'_>) -> Result<ImageButtonStyle, StyleError> {
        Ok(ImageButtonStyle {
            button: self.button(r)?,
            image: self.child_with(r, "image", Self::image)?,
        })
    }

    fn text_box(&mut self, r: &Record<'_>) -> Result<TextBoxStyle, StyleError> {
        Ok(TextBoxStyle {
            widget: self.widget(r)?,
            font: self.font(r, "font")?,
            text_color: self.color(r, "textColor")?,
            disabled_text_color: self.color(r, "disabledTextColor")?,
            focused_text_color: self.color(r, "focusedTextColor")?,
            cursor: self.brush(r, "cursor")?,
            selection: self.brush(r, "selection")?,
        })
    }

    fn separator(&mut self, r: &Record<'_>) -> Result<SeparatorStyle, StyleError> {
        Ok(SeparatorStyle {
            widget: self.widget(r)?,
            image: self.brush(r, "image")?,
            thickness: r.int("thickness")?.unwrap_or(1),
        })
    }

    // ── Leaves ───────────────────────────────────────────────────────

    fn named_color(&self, text: &str) -> Option<Color> {
        self.colors.get(text).copied().or_else(|| parse_color(text))
    }

    fn color(&self, r: &Record<'_>, key: &str) -> Result<Option<Color>, StyleError> {
        let Some(text) = r.string(key)? else {
            return Ok(None);
        };
        self.named_color(text)
            .map(Some)
            .ok_or_else(|| StyleError::malformed(r.context(key), format!("invalid color '{text}'")))
    }

    fn region(&mut self, r: &Record<'_>, key: &str) -> Result<Option<TextureRegion>, StyleError> {
        match r.string(key)? {
            Some(name) => (self.texture_lookup)(name).map(Some),
            None => Ok(None),
        }
    }

    fn font(&mut self, r: &Record<'_>, key: &str) -> Result<Option<Arc<Font>>, StyleError> {
        match r.string(key)? {
            Some(name) => (self.font_lookup)(name).map(Some),
            None => Ok(None),
        }
    }

    /// A brush is a color string, a texture reference, or
    /// `{ "image": ..., "color": ... }` for a tinted texture.
    fn brush(&mut self, r: &Record<'_>, key: &str) -> Result<Option<Brush>, StyleError> {
        let Some(value) = r.get(key) else {
            return Ok(None);
        };

        if value.is_object() {
            let fields = Record::new(value, r.context(key))?;
            let tint = self.color(&fields, "color")?;
            return match (self.region(&fields, "image")?, tint) {
                (Some(region), tint) => Ok(Some(Brush::Texture {
                    region,
                    tint: tint.unwrap_or(Color::WHITE),
                })),
                (None, Some(color)) => Ok(Some(Brush::Solid(color))),
                (None, None) => Err(StyleError::malformed(
                    r.context(key),
                    "brush needs an image or a color",
                )),
            };
        }

        let Some(text) = r.string(key)? else {
            return Ok(None);
        };
        if text.starts_with('#') {
            return Ok(self.color(r, key)?.map(Brush::Solid));
        }
        match self.named_color(text) {
            Some(color) => Ok(Some(Brush::Solid(color))),
            None => (self.texture_lookup)(text).map(|region| Some(Brush::texture(region))),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::render::backend::SurfaceId;
    use crate::style::error::ResourceKind;
    use crate::style::resources::TextureAtlas;

    fn resources() -> ResourceSet {
        ResourceSet::new()
            .with_atlas(
                "ui",
                TextureAtlas::new(SurfaceId(7))
                    .with_region("button", Rect::new(0, 0, 32, 16))
                    .with_region("knob", Rect::new(32, 0, 8, 8))
                    .with_region("check", Rect::new(40, 0, 8, 8)),
            )
            .with_font("default", Font::new("default", 16))
    }

    fn load(source: &str) -> Result<StyleStore, StyleError> {
        resources().load_stylesheet(source)
    }

    fn malformed_context(result: Result<StyleStore, StyleError>) -> String {
        match result {
            Err(StyleError::MalformedStylesheet { context, .. }) => context,
            other => panic!("expected MalformedStylesheet, got {other:?}"),
        }
    }

    // ── Documents ────────────────────────────────────────────────────

    #[test]
    fn loads_full_document() {
        let store = load(
            r##"{
                "textureAtlases": { "ui.atlas": "ui.png" },
                "fonts": { "default": "default.fnt" },
                "colors": { "accent": "#3080C0" },
                "desktop": { "background": "black" },
                "label": {
                    "default": { "font": "default", "textColor": "white" },
                    "title": { "font": "default", "textColor": "accent" }
                },
                "button": {
                    "default": {
                        "background": "button",
                        "pressedBackground": { "image": "button", "color": "#808080" },
                        "padding": { "left": 4, "right": 4 },
                        "label": { "textColor": "accent" }
                    }
                },
                "horizontalSlider": { "default": { "knob": { "image": "knob" } } },
                "checkBox": { "default": { "image": { "image": "check" }, "imageTextSpacing": 2 } }
            }"##,
        )
        .unwrap();

        assert_eq!(store.len(), 5);
        assert_eq!(store.atlases().get("ui.atlas").map(String::as_str), Some("ui.png"));
        assert_eq!(store.fonts().get("default").map(String::as_str), Some("default.fnt"));
        assert_eq!(
            store.desktop().unwrap().background,
            Some(Brush::Solid(Color::BLACK))
        );

        let title = store.get(StyleCategory::Label, "title").unwrap().as_label().unwrap();
        assert_eq!(title.text_color, Some(Color::rgb(0x30, 0x80, 0xC0)));
        assert_eq!(title.font.as_ref().unwrap().line_height, 16);

        let button = store.default_style(StyleCategory::Button).unwrap().as_button().unwrap();
        assert_eq!(
            button.widget.background,
            Some(Brush::texture(TextureRegion::new(SurfaceId(7), Rect::new(0, 0, 32, 16))))
        );
        assert!(matches!(
            button.pressed_background,
            Some(Brush::Texture { tint, .. }) if tint == Color::rgb(128, 128, 128)
        ));
        assert_eq!(button.widget.padding, Thickness::new(4, 0, 4, 0));

        match store.default_style(StyleCategory::CheckBox) {
            Some(StyleDescriptor::ImageTextButton(check)) => {
                assert_eq!(check.image_text_spacing, 2);
                assert!(check.image.as_ref().unwrap().image.is_some());
            }
            other => panic!("unexpected checkBox style: {other:?}"),
        }
    }

    #[test]
    fn default_record_name_maps_to_sentinel() {
        let store = load(r#"{ "label": { "default": {}, "": {}, "small": {} } }"#).unwrap();
        assert_eq!(store.names(StyleCategory::Label).collect::<Vec<_>>(), vec!["", "small"]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let store = load(r#"{ "spinner": { "default": {} }, "label": {} }"#).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn loads_composite_categories() {
        let store = load(
            r##"{
                "spinButton": { "default": {
                    "textBox": { "textColor": "white" },
                    "upButton": { "image": { "image": "knob" } }
                } },
                "tabControl": { "default": { "tabItem": { "imageTextSpacing": 3 }, "headerSpacing": 4 } },
                "tree": { "default": { "mark": { "image": { "image": "check" } }, "selectionBackground": "#404040" } },
                "horizontalSplitPane": { "default": { "handle": { "background": "button" } } },
                "verticalSplitPane": { "default": {} },
                "horizontalMenu": { "default": { "label": { "textColor": "red" }, "separator": { "thickness": 2 } } },
                "verticalMenu": { "default": { "shortcut": { "textColor": "gray" } } }
            }"##,
        )
        .unwrap();
        assert_eq!(store.len(), 7);

        match store.default_style(StyleCategory::SpinButton) {
            Some(StyleDescriptor::SpinButton(spin)) => {
                assert_eq!(spin.text_box.as_ref().unwrap().text_color, Some(Color::WHITE));
                let up = spin.up_button.as_ref().unwrap();
                assert!(up.image.as_ref().unwrap().image.is_some());
                assert_eq!(spin.down_button, None);
            }
            other => panic!("unexpected spinButton style: {other:?}"),
        }
        match store.default_style(StyleCategory::TabControl) {
            Some(StyleDescriptor::TabControl(tabs)) => {
                assert_eq!(tabs.header_spacing, 4);
                assert_eq!(tabs.tab_item.as_ref().unwrap().image_text_spacing, 3);
            }
            other => panic!("unexpected tabControl style: {other:?}"),
        }

        let tree = store.default_style(StyleCategory::Tree).unwrap().as_tree().unwrap();
        assert_eq!(
            tree.selection_background,
            Some(Brush::Solid(Color::rgb(0x40, 0x40, 0x40)))
        );
        assert!(tree.mark.is_some());

        for category in [StyleCategory::HorizontalSplitPane, StyleCategory::VerticalSplitPane] {
            assert_eq!(store.default_style(category).unwrap().shape_name(), "splitPane");
        }

        let menu = store.default_style(StyleCategory::HorizontalMenu).unwrap().as_menu().unwrap();
        assert_eq!(menu.label.as_ref().unwrap().text_color, Some(Color::rgb(255, 0, 0)));
        assert_eq!(menu.separator.as_ref().unwrap().thickness, 2);
        let menu = store.default_style(StyleCategory::VerticalMenu).unwrap().as_menu().unwrap();
        assert!(menu.shortcut.is_some());
    }

    #[test]
    fn composite_errors_report_nested_path() {
        let result = load(r#"{ "tree": { "default": { "mark": { "padding": "x" } } } }"#);
        assert_eq!(malformed_context(result), "tree.default.mark.padding");
    }

    #[test]
    fn window_and_dialog_share_shape() {
        let store = load(
            r#"{ "window": { "default": { "title": { "textColor": "red" } } },
                 "dialog": { "default": { "padding": 8 } } }"#,
        )
        .unwrap();
        let window = store.default_style(StyleCategory::Window).unwrap().as_window().unwrap();
        assert_eq!(window.title.as_ref().unwrap().text_color, Some(Color::rgb(255, 0, 0)));
        let dialog = store.default_style(StyleCategory::Dialog).unwrap();
        assert_eq!(dialog.widget().padding, Thickness::all(8));
    }

    // ── Errors ───────────────────────────────────────────────────────

    #[test]
    fn root_must_be_object() {
        assert_eq!(malformed_context(load("[1, 2]")), "<root>");
    }

    #[test]
    fn json_syntax_error_is_malformed() {
        assert_eq!(malformed_context(load("{ \"label\": ")), "<document>");
    }

    #[test]
    fn wrong_field_type_reports_path() {
        let result = load(r#"{ "button": { "default": { "padding": "wide" } } }"#);
        assert_eq!(malformed_context(result), "button.default.padding");
    }

    #[test]
    fn section_must_be_object() {
        assert_eq!(malformed_context(load(r#"{ "label": 3 }"#)), "label");
        assert_eq!(malformed_context(load(r#"{ "label": { "x": true } }"#)), "label.x");
    }

    #[test]
    fn invalid_color_is_malformed() {
        let result = load(r##"{ "label": { "default": { "textColor": "#12" } } }"##);
        assert_eq!(malformed_context(result), "label.default.textColor");

        let result = load(r#"{ "label": { "default": { "textColor": "chartreuse" } } }"#);
        assert_eq!(malformed_context(result), "label.default.textColor");
    }

    #[test]
    fn empty_reference_is_malformed() {
        let result = load(r#"{ "label": { "default": { "font": "" } } }"#);
        assert_eq!(malformed_context(result), "label.default.font");
    }

    #[test]
    fn lookup_failures_propagate() {
        let err = load(r#"{ "label": { "default": { "font": "bold" } } }"#).unwrap_err();
        assert_eq!(err, StyleError::not_found(ResourceKind::Font, "bold"));

        let err = load(r#"{ "button": { "default": { "background": "missing" } } }"#).unwrap_err();
        assert_eq!(err, StyleError::not_found(ResourceKind::Texture, "missing"));
    }

    #[test]
    fn custom_lookup_errors_are_unchanged() {
        let root: Value =
            serde_json::from_str(r#"{ "button": { "default": { "background": "x" } } }"#).unwrap();
        let err = load_stylesheet(
            &root,
            |_| Err(StyleError::malformed("host", "atlas not loaded")),
            |name| Ok(Arc::new(Font::new(name, 10))),
        )
        .unwrap_err();
        assert_eq!(err, StyleError::malformed("host", "atlas not loaded"));
    }
}
