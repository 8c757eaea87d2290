//! A project document: one widget tree plus the stylesheet it is meant to be
//! shown with.

use crate::markup::error::MarkupError;
use crate::markup::object::WidgetObject;
use crate::markup::{parser, writer};
use crate::style::store::StyleStore;

use super::node::{NodeId, WidgetNode};
use super::tree::Dom;

/// A parsed `<Project>` document.
#[derive(Debug, Clone, Default)]
pub struct Project {
    stylesheet_path: Option<String>,
    dom: Dom,
}

impl Project {
    /// A project with a single root widget and no stylesheet.
    pub fn new(root: WidgetObject) -> Self {
        let (dom, _) = Dom::with_root(root);
        Self::from_dom(dom)
    }

    pub fn from_dom(dom: Dom) -> Self {
        Self {
            stylesheet_path: None,
            dom,
        }
    }

    /// Parse a project document.
    pub fn from_markup(xml: &str) -> Result<Self, MarkupError> {
        parser::parse_project(xml)
    }

    /// Serialize with `indent` spaces per nesting level.
    pub fn to_markup(&self, indent: usize) -> String {
        writer::write_project(self, indent)
    }

    pub fn stylesheet_path(&self) -> Option<&str> {
        self.stylesheet_path.as_deref()
    }

    pub fn set_stylesheet_path(&mut self, path: Option<String>) {
        self.stylesheet_path = path.filter(|p| !p.is_empty());
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    pub fn root(&self) -> Option<&WidgetNode> {
        self.dom.root().and_then(|id| self.dom.get(id))
    }

    /// Look a widget up by its `Id` property.
    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.dom.find_by_id(id)
    }

    /// Resolve and attach a style to every styled widget in the tree.
    ///
    /// Widgets whose category has no matching style get `None`, which means
    /// built-in visuals. Returns how many widgets received a style.
    pub fn apply_stylesheet(&mut self, store: &StyleStore) -> usize {
        let Some(root) = self.dom.root() else {
            return 0;
        };
        let resolver = store.resolver();
        let mut styled = 0;
        for (id, _) in self.dom.walk(root) {
            if let Some(node) = self.dom.get_mut(id) {
                resolver.apply(node);
                if node.style.is_some() {
                    styled += 1;
                }
            }
        }
        log::debug!("applied stylesheet to {styled} of {} widgets", self.dom.len());
        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Thickness;
    use crate::markup::catalog::WidgetKind;
    use crate::style::descriptor::{ButtonStyle, LabelStyle, StyleDescriptor, WidgetStyle};
    use crate::style::store::{StyleCategory, DEFAULT_STYLE_NAME};

    fn store() -> StyleStore {
        let mut store = StyleStore::new();
        store.insert(
            StyleCategory::Button,
            DEFAULT_STYLE_NAME,
            StyleDescriptor::Button(ButtonStyle::default()),
        );
        store.insert(
            StyleCategory::Button,
            "wide",
            StyleDescriptor::Button(ButtonStyle {
                widget: WidgetStyle {
                    padding: Thickness::new(8, 2, 8, 2),
                    ..Default::default()
                },
                ..Default::default()
            }),
        );
        store.insert(
            StyleCategory::Label,
            "title",
            StyleDescriptor::Label(LabelStyle::default()),
        );
        store
    }

    #[test]
    fn new_project_has_root() {
        let project = Project::new(WidgetObject::new(WidgetKind::Panel));
        assert_eq!(project.root().unwrap().kind(), WidgetKind::Panel);
        assert_eq!(project.stylesheet_path(), None);
    }

    #[test]
    fn empty_stylesheet_path_is_none() {
        let mut project = Project::default();
        project.set_stylesheet_path(Some(String::new()));
        assert_eq!(project.stylesheet_path(), None);
        project.set_stylesheet_path(Some("theme.json".into()));
        assert_eq!(project.stylesheet_path(), Some("theme.json"));
    }

    #[test]
    fn apply_stylesheet_resolves_each_widget() {
        let mut project = Project::from_markup(
            r#"<Project>
                 <Grid>
                   <Button Id="plain" />
                   <Button Id="wide" StyleName="wide" />
                   <Button Id="fallback" StyleName="missing" />
                   <Label Id="caption" />
                 </Grid>
               </Project>"#,
        )
        .unwrap();

        assert_eq!(project.apply_stylesheet(&store()), 3);

        let style_of = |id: &str| {
            let node = project.find(id).unwrap();
            project.dom().get(node).unwrap().style.clone()
        };
        assert_eq!(style_of("plain"), Some(StyleDescriptor::Button(ButtonStyle::default())));
        assert_eq!(
            style_of("wide").unwrap().widget().padding,
            Thickness::new(8, 2, 8, 2)
        );
        assert_eq!(style_of("fallback"), style_of("plain"));
        // The label only asked for the default, and Label has no default.
        assert_eq!(style_of("caption"), None);
    }

    #[test]
    fn apply_stylesheet_on_empty_project() {
        assert_eq!(Project::default().apply_stylesheet(&store()), 0);
    }

    #[test]
    fn markup_round_trip() {
        let text = "<Project StylesheetPath=\"a.json\">\n  <Panel>\n    <Button Text=\"OK\" />\n  </Panel>\n</Project>";
        let project = Project::from_markup(text).unwrap();
        assert_eq!(project.to_markup(2), text);
    }
}
