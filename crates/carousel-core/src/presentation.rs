//! Presentation-tree capability.
//!
//! The core never owns widgets. It addresses nodes through opaque [`NodeId`]s
//! handed out by the host and asks the host to match selectors, toggle classes
//! and swap image sources. A fake implementation lives in the crate's test
//! helpers so every component can run headless.

/// Opaque handle to a node in the host's presentation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Operations the core needs from the presentation layer.
///
/// Selectors are plain strings; the host decides which selector grammar it
/// understands. The core only ever passes selectors taken from
/// [`CarouselConfig`](crate::CarouselConfig).
pub trait PresentationTree {
    /// Nearest ancestor-or-self of `node` matching `selector`.
    fn closest(&self, node: NodeId, selector: &str) -> Option<NodeId>;

    /// First descendant of `scope` (excluding `scope`) matching `selector`,
    /// in document order.
    fn find(&self, scope: NodeId, selector: &str) -> Option<NodeId>;

    /// All descendants of `scope` matching `selector`, in document order.
    fn find_all(&self, scope: NodeId, selector: &str) -> Vec<NodeId>;

    /// Node carrying the given element id anywhere in the tree.
    fn by_id(&self, id: &str) -> Option<NodeId>;

    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Image source of `node` itself or of its first image descendant.
    fn image_source(&self, node: NodeId) -> Option<String>;
    fn set_image_source(&mut self, node: NodeId, source: &str);

    fn set_text(&mut self, node: NodeId, text: &str);
}

/// Adds or removes `class` depending on `on`, without duplicating it.
pub(crate) fn toggle_class<T: PresentationTree + ?Sized>(
    tree: &mut T,
    node: NodeId,
    class: &str,
    on: bool,
) {
    let present = tree.has_class(node, class);
    if on && !present {
        tree.add_class(node, class);
    } else if !on && present {
        tree.remove_class(node, class);
    }
}
