//! Minimal retained node tree implementing [`PresentationTree`].
//!
//! Hosts that render immediate-mode widgets keep this tree as the model the
//! carousel writes into and read classes, texts and sources back when drawing.
//! Selectors support `#id`, `.class` and bare tag names.

use crate::presentation::{NodeId, PresentationTree};

#[derive(Debug, Clone, Default)]
pub struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: Option<String>,
    image_source: Option<String>,
}

impl Node {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn own_image_source(&self) -> Option<&str> {
        self.image_source.as_deref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone, Default)]
pub struct RetainedTree {
    nodes: Vec<Node>,
}

impl RetainedTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_root(&mut self, tag: &str) -> NodeId {
        self.push(None, tag)
    }

    pub fn append(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let node = self.push(Some(parent), tag);
        if let Some(parent) = self.nodes.get_mut(parent.0 as usize) {
            parent.children.push(node);
        }
        node
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        if let Some(entry) = self.get_mut(node) {
            entry.id = Some(id.to_string());
        }
    }

    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.0 as usize)
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.node(node).and_then(Node::text)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `node` matches a single `#id`, `.class` or tag selector.
    pub fn matches(&self, node: NodeId, selector: &str) -> bool {
        let Some(entry) = self.node(node) else {
            return false;
        };
        let selector = selector.trim();
        if let Some(id) = selector.strip_prefix('#') {
            entry.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            entry.classes.iter().any(|existing| existing == class)
        } else {
            !selector.is_empty() && entry.tag == selector
        }
    }

    fn push(&mut self, parent: Option<NodeId>, tag: &str) -> NodeId {
        let node = NodeId(self.nodes.len() as u64);
        self.nodes.push(Node {
            parent,
            tag: tag.to_string(),
            ..Node::default()
        });
        node
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node.0 as usize)
    }

    /// Descendants of `scope` in document (pre-)order, excluding `scope`.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self
            .node(scope)
            .map(|entry| entry.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(node) = stack.pop() {
            out.push(node);
            if let Some(entry) = self.node(node) {
                stack.extend(entry.children.iter().rev().copied());
            }
        }
        out
    }
}

impl PresentationTree for RetainedTree {
    fn closest(&self, node: NodeId, selector: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if self.matches(candidate, selector) {
                return Some(candidate);
            }
            current = self.node(candidate).and_then(|entry| entry.parent);
        }
        None
    }

    fn find(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&node| self.matches(node, selector))
    }

    fn find_all(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&node| self.matches(node, selector))
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|entry| entry.id.as_deref() == Some(id))
            .map(|index| NodeId(index as u64))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(entry) = self.get_mut(node) {
            if !entry.classes.iter().any(|existing| existing == class) {
                entry.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(entry) = self.get_mut(node) {
            entry.classes.retain(|existing| existing != class);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node)
            .is_some_and(|entry| entry.classes.iter().any(|existing| existing == class))
    }

    fn image_source(&self, node: NodeId) -> Option<String> {
        if let Some(source) = self.node(node).and_then(Node::own_image_source) {
            return Some(source.to_string());
        }
        self.descendants(node)
            .into_iter()
            .find_map(|child| self.node(child).and_then(Node::own_image_source))
            .map(str::to_string)
    }

    fn set_image_source(&mut self, node: NodeId, source: &str) {
        if let Some(entry) = self.get_mut(node) {
            entry.image_source = Some(source.to_string());
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(entry) = self.get_mut(node) {
            entry.text = Some(text.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (RetainedTree, NodeId, NodeId, NodeId) {
        let mut tree = RetainedTree::new();
        let root = tree.create_root("div");
        tree.set_id(root, "gallery");
        let list = tree.append(root, "ul");
        tree.add_class(list, "strip");
        let first = tree.append(list, "li");
        let image = tree.append(first, "img");
        tree.set_image_source(image, "a.jpg");
        let second = tree.append(list, "li");
        (tree, root, first, second)
    }

    #[test]
    fn selectors_match_id_class_and_tag() {
        let (tree, root, first, _) = sample();
        assert!(tree.matches(root, "#gallery"));
        assert!(tree.matches(first, "li"));
        assert!(!tree.matches(first, ".strip"));
        assert!(!tree.matches(first, ""));
        assert_eq!(tree.by_id("gallery"), Some(root));
    }

    #[test]
    fn find_all_is_document_ordered() {
        let (tree, root, first, second) = sample();
        assert_eq!(tree.find_all(root, "li"), vec![first, second]);
        assert_eq!(tree.find(root, "li"), Some(first));
        assert_eq!(tree.find(first, "li"), None);
    }

    #[test]
    fn closest_walks_ancestors_including_self() {
        let (tree, root, first, _) = sample();
        let image = tree.find(first, "img").expect("image");
        assert_eq!(tree.closest(image, "li"), Some(first));
        assert_eq!(tree.closest(image, "img"), Some(image));
        assert_eq!(tree.closest(image, ".strip"), tree.find(root, "ul"));
        assert_eq!(tree.closest(root, "li"), None);
    }

    #[test]
    fn classes_do_not_duplicate() {
        let (mut tree, _, first, _) = sample();
        tree.add_class(first, "active");
        tree.add_class(first, "active");
        assert_eq!(tree.node(first).map(|n| n.classes().len()), Some(1));
        tree.remove_class(first, "active");
        assert!(!tree.has_class(first, "active"));
    }

    #[test]
    fn image_source_falls_back_to_descendants() {
        let (tree, _, first, second) = sample();
        assert_eq!(tree.image_source(first).as_deref(), Some("a.jpg"));
        assert_eq!(tree.image_source(second), None);
    }
}
