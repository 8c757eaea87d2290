//! Typed objects → markup text.

use crate::dom::{Dom, NodeId, Project};
use crate::markup::object::WidgetObject;
use crate::markup::parser::{PROJECT_TAG, STYLESHEET_PATH_ATTR};

/// Serialize a single widget as a self-closing tag: `<Button Text="OK" />`.
pub fn write_object(object: &WidgetObject) -> String {
    let mut out = String::new();
    write_start(&mut out, object);
    out.push_str(" />");
    out
}

/// Turn a self-closing tag into an opening tag: `<A x="1" />` → `<A x="1">`.
///
/// Used when the tag being replaced in the buffer is closed elsewhere. Text
/// without a trailing `/>` is returned unchanged.
pub fn strip_self_close(xml: &str) -> String {
    match xml.strip_suffix("/>") {
        Some(head) => format!("{}>", head.trim_end()),
        None => xml.to_string(),
    }
}

/// Serialize a whole project, nesting children by `indent` spaces per level.
pub fn write_project(project: &Project, indent: usize) -> String {
    let mut out = String::from("<");
    out.push_str(PROJECT_TAG);
    if let Some(path) = project.stylesheet_path() {
        push_attribute(&mut out, STYLESHEET_PATH_ATTR, path);
    }
    out.push('>');

    if let Some(root) = project.dom().root() {
        write_node(&mut out, project.dom(), root, 1, indent);
    }

    out.push('\n');
    out.push_str("</");
    out.push_str(PROJECT_TAG);
    out.push('>');
    out
}

fn write_node(out: &mut String, dom: &Dom, id: NodeId, depth: usize, indent: usize) {
    let Some(node) = dom.get(id) else {
        return;
    };
    let pad = " ".repeat(depth * indent);

    out.push('\n');
    out.push_str(&pad);
    write_start(out, &node.object);

    let children = dom.children(id);
    if children.is_empty() {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for &child in children {
        write_node(out, dom, child, depth + 1, indent);
    }
    out.push('\n');
    out.push_str(&pad);
    out.push_str("</");
    out.push_str(node.kind().tag());
    out.push('>');
}

fn write_start(out: &mut String, object: &WidgetObject) {
    out.push('<');
    out.push_str(object.kind().tag());
    for attribute in object.attributes() {
        push_attribute(out, attribute.name(), &attribute.markup_value());
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out.push('"');
}
