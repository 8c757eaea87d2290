//! Markup → typed objects, using roxmltree.
//!
//! Two entry points: [`parse_object`] for the single tag the editor has under
//! its cursor, and [`parse_project`] for a whole `<Project>` document.

use roxmltree::{Document, Node};

use crate::dom::{Dom, NodeId, Project, WidgetNode};
use crate::markup::catalog::{ChildPolicy, WidgetKind};
use crate::markup::error::MarkupError;
use crate::markup::object::WidgetObject;

/// Root tag of a project document.
pub const PROJECT_TAG: &str = "Project";

/// Project attribute naming the stylesheet to load.
pub const STYLESHEET_PATH_ATTR: &str = "StylesheetPath";

/// Parse one widget element. Child elements, if any, are ignored.
pub fn parse_object(xml: &str) -> Result<WidgetObject, MarkupError> {
    let doc = Document::parse(xml)?;
    object_from_element(doc.root_element())
}

/// Parse a `<Project>` document containing exactly one root widget.
pub fn parse_project(xml: &str) -> Result<Project, MarkupError> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();
    let tag = root.tag_name().name();
    if tag != PROJECT_TAG {
        return Err(MarkupError::UnexpectedRoot {
            expected: PROJECT_TAG,
            found: tag.to_string(),
        });
    }

    let mut stylesheet_path = None;
    for attr in root.attributes() {
        if attr.name() == STYLESHEET_PATH_ATTR {
            stylesheet_path = Some(attr.value().to_string());
        } else {
            return Err(MarkupError::UnknownProperty {
                widget: PROJECT_TAG.to_string(),
                property: attr.name().to_string(),
            });
        }
    }

    let mut widgets = root.children().filter(Node::is_element);
    let first = widgets.next().ok_or(MarkupError::EmptyDocument)?;
    if widgets.next().is_some() {
        return Err(MarkupError::MultipleRoots(PROJECT_TAG.to_string()));
    }

    let mut dom = Dom::new();
    let root_id = dom.insert_root(object_from_element(first)?);
    build_children(&mut dom, root_id, first)?;

    let mut project = Project::from_dom(dom);
    project.set_stylesheet_path(stylesheet_path);
    Ok(project)
}

fn object_from_element(node: Node<'_, '_>) -> Result<WidgetObject, MarkupError> {
    let tag = node.tag_name().name();
    let kind = WidgetKind::from_tag(tag).ok_or_else(|| MarkupError::UnknownWidget(tag.to_string()))?;
    let mut object = WidgetObject::new(kind);
    for attr in node.attributes() {
        object.set_from_markup(attr.name(), attr.value())?;
    }
    Ok(object)
}

fn build_children(dom: &mut Dom, parent: NodeId, element: Node<'_, '_>) -> Result<(), MarkupError> {
    let parent_kind = match dom.get(parent) {
        Some(node) => node.kind(),
        None => return Ok(()),
    };

    let mut count = 0;
    for child in element.children().filter(Node::is_element) {
        let object = object_from_element(child)?;
        count += 1;
        let single_taken = parent_kind.child_policy() == ChildPolicy::Single && count > 1;
        if single_taken || !parent_kind.accepts_child(object.kind()) {
            return Err(MarkupError::InvalidChild {
                parent: parent_kind.tag().to_string(),
                child: object.kind().tag().to_string(),
            });
        }
        if let Some(id) = dom.append_child(parent, WidgetNode::new(object)) {
            build_children(dom, id, child)?;
        }
    }
    Ok(())
}
