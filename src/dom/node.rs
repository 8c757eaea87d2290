//! Node types: NodeId, WidgetNode.

use slotmap::new_key_type;

use crate::markup::catalog::WidgetKind;
use crate::markup::object::WidgetObject;
use crate::style::descriptor::StyleDescriptor;
use crate::style::resolver::Styled;
use crate::style::store::StyleCategory;

new_key_type! {
    /// Identifier of a widget in a [`Dom`](super::Dom). Copy, lightweight (u64).
    pub struct NodeId;
}

/// A widget in the tree: its markup properties plus the style resolved for it.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetNode {
    pub object: WidgetObject,
    /// Set by [`Project::apply_stylesheet`](super::Project::apply_stylesheet);
    /// `None` until then, and for widgets with no matching style.
    pub style: Option<StyleDescriptor>,
}

impl WidgetNode {
    pub fn new(object: WidgetObject) -> Self {
        Self { object, style: None }
    }

    pub fn kind(&self) -> WidgetKind {
        self.object.kind()
    }

    /// The `Id` property, if set.
    pub fn id(&self) -> Option<&str> {
        self.object.get("Id").and_then(|v| v.as_str())
    }
}

impl From<WidgetObject> for WidgetNode {
    fn from(object: WidgetObject) -> Self {
        Self::new(object)
    }
}

impl Styled for WidgetNode {
    fn style_category(&self) -> Option<StyleCategory> {
        self.kind().style_category()
    }

    fn style_name(&self) -> Option<&str> {
        self.object.style_name()
    }

    fn apply_style(&mut self, style: Option<StyleDescriptor>) {
        self.style = style;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_style() {
        let node = WidgetNode::new(WidgetObject::new(WidgetKind::Button));
        assert_eq!(node.kind(), WidgetKind::Button);
        assert!(node.style.is_none());
        assert!(node.id().is_none());
    }

    #[test]
    fn styled_reads_markup_properties() {
        let mut object = WidgetObject::new(WidgetKind::Label);
        object.set("StyleName", "title").unwrap();
        object.set("Id", "caption").unwrap();
        let node = WidgetNode::from(object);

        assert_eq!(node.style_category(), Some(StyleCategory::Label));
        assert_eq!(node.style_name(), Some("title"));
        assert_eq!(node.id(), Some("caption"));
    }

    #[test]
    fn containers_are_unstyled() {
        let node = WidgetNode::new(WidgetObject::new(WidgetKind::Grid));
        assert_eq!(node.style_category(), None);
    }

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }
}
