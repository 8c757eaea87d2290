//! Tree operations: insert, remove, walk.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeId, WidgetNode};

/// A widget tree backed by a slotmap arena.
///
/// Nodes live in one `SlotMap`; parent and child links are kept in secondary
/// maps, so lookups are O(1) and removing a subtree is O(subtree size).
/// Child order is document order.
#[derive(Debug, Clone, Default)]
pub struct Dom {
    nodes: SlotMap<NodeId, WidgetNode>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Dom {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree holding a single root widget.
    pub fn with_root(node: impl Into<WidgetNode>) -> (Self, NodeId) {
        let mut dom = Self::new();
        let root = dom.insert_root(node);
        (dom, root)
    }

    /// Insert a parentless node. The first one inserted becomes the root.
    pub fn insert_root(&mut self, node: impl Into<WidgetNode>) -> NodeId {
        let id = self.nodes.insert(node.into());
        self.children.insert(id, Vec::new());
        self.root.get_or_insert(id);
        id
    }

    /// Append a node as the last child of `parent`.
    ///
    /// Returns `None` (and inserts nothing) if `parent` is not in the tree.
    pub fn append_child(&mut self, parent: NodeId, node: impl Into<WidgetNode>) -> Option<NodeId> {
        if !self.nodes.contains_key(parent) {
            return None;
        }
        let id = self.nodes.insert(node.into());
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        self.children.get_mut(parent)?.push(id);
        Some(id)
    }

    /// Remove a node and its whole subtree, returning the node's data.
    pub fn remove(&mut self, id: NodeId) -> Option<WidgetNode> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        if let Some(parent) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent) {
                siblings.retain(|&child| child != id);
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }

        let mut pending = vec![id];
        let mut removed = None;
        while let Some(current) = pending.pop() {
            pending.extend(self.children.remove(current).unwrap_or_default());
            self.parent.remove(current);
            let node = self.nodes.remove(current);
            if current == id {
                removed = node;
            }
        }
        removed
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Children of `id` in document order; empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ancestors of `id`, nearest first, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    pub fn get(&self, id: NodeId) -> Option<&WidgetNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut WidgetNode> {
        self.nodes.get_mut(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first walk of the subtree at `start`, paired with each
    /// node's depth below `start`.
    pub fn walk(&self, start: NodeId) -> Vec<(NodeId, usize)> {
        let mut result = Vec::new();
        let mut stack = vec![(start, 0)];
        while let Some((current, depth)) = stack.pop() {
            if !self.contains(current) {
                continue;
            }
            result.push((current, depth));
            stack.extend(self.children(current).iter().rev().map(|&c| (c, depth + 1)));
        }
        result
    }

    /// First node (in document order) whose `Id` property equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        let root = self.root?;
        self.walk(root)
            .into_iter()
            .map(|(node, _)| node)
            .find(|&node| self.nodes[node].id() == Some(id))
    }
}
