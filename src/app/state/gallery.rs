//! Gallery markup and strip geometry handed to the carousel.
//!
//! The viewer renders iced widgets, but the carousel drives a presentation
//! tree. The markup built here mirrors what the widgets show, one node per
//! widget the carousel cares about, so classes the carousel toggles map back
//! onto thumbnails, controls and the loading veil.

use super::constants::STRIP_PADDING_PX;
use crate::config::AppConfig;
use carousel_core::{
    CarouselConfig, NodeId, PresentationTree, RetainedTree, SourceResolver, StripMetrics,
};

/// Handles of the nodes the view reads back.
#[derive(Debug, Clone)]
pub(crate) struct GalleryNodes {
    pub counter: NodeId,
    pub image: NodeId,
    pub veil: NodeId,
    pub items: Vec<NodeId>,
    pub thumbs: Vec<NodeId>,
    pub next: NodeId,
    pub prev: NodeId,
}

/// Builds the markup matching `config`'s selectors; the primary image starts
/// on the full-size source of the first thumbnail.
pub(crate) fn build_gallery(sources: &[String], config: &CarouselConfig) -> (RetainedTree, GalleryNodes) {
    let mut tree = RetainedTree::new();
    let root = tree.create_root("div");
    tree.set_id(root, &config.id);

    let counter = append_matching(&mut tree, root, &config.counter_selector);

    let block = append_matching(&mut tree, root, &config.image_selector());
    let image = tree.append(block, "img");
    if let Some(first) = sources.first() {
        // Broken rules are reported by the carousel itself.
        let primary = SourceResolver::new(&config.rewrites)
            .map(|resolver| resolver.resolve(first))
            .unwrap_or_else(|_| first.clone());
        tree.set_image_source(image, &primary);
    }
    let veil = append_matching(&mut tree, block, &config.veil_selector());
    tree.add_class(veil, &config.image.loading_class);

    let container = append_matching(&mut tree, root, &config.strip.container_selector);
    let strip = append_matching(&mut tree, container, &config.strip.selector);
    let list = tree.append(strip, "ul");

    let mut items = Vec::with_capacity(sources.len());
    let mut thumbs = Vec::with_capacity(sources.len());
    for source in sources {
        let item = append_matching(&mut tree, list, &config.strip.item_selector);
        let thumb = tree.append(item, "img");
        tree.set_image_source(thumb, source);
        items.push(item);
        thumbs.push(thumb);
    }

    let next = append_matching(&mut tree, strip, &config.next_selector());
    tree.add_class(next, &config.strip.next_class);
    let prev = append_matching(&mut tree, strip, &config.prev_selector());
    tree.add_class(prev, &config.strip.prev_class);

    let nodes = GalleryNodes {
        counter,
        image,
        veil,
        items,
        thumbs,
        next,
        prev,
    };
    (tree, nodes)
}

/// Appends a node that `selector` matches.
fn append_matching(tree: &mut RetainedTree, parent: NodeId, selector: &str) -> NodeId {
    let selector = selector.trim();
    if let Some(id) = selector.strip_prefix('#') {
        let node = tree.append(parent, "div");
        tree.set_id(node, id);
        node
    } else if let Some(class) = selector.strip_prefix('.') {
        let node = tree.append(parent, "div");
        tree.add_class(node, class);
        node
    } else {
        tree.append(parent, selector)
    }
}

/// Strip measurements derived from the window and thumbnail sizes.
///
/// Every thumbnail occupies `thumb_width + spacing`; the visible window is
/// what remains of the window after both scroll controls and padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct StripGeometry {
    pub window_width: f32,
    pub thumb_width: f32,
    pub spacing: f32,
    pub control_width: f32,
    pub count: usize,
}

impl StripGeometry {
    pub fn new(config: &AppConfig, window_width: f32, count: usize) -> Self {
        Self {
            window_width,
            thumb_width: config.thumb_width,
            spacing: config.thumb_spacing,
            control_width: config.control_width,
            count,
        }
    }

    fn outer_width(&self) -> f32 {
        self.thumb_width + self.spacing
    }
}

impl StripMetrics for StripGeometry {
    fn viewport_width(&self) -> f32 {
        (self.window_width - 2.0 * self.control_width - 2.0 * STRIP_PADDING_PX).max(0.0)
    }

    fn content_width(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.count as f32 * self.outer_width() - self.spacing
    }

    fn item_width(&self) -> f32 {
        self.outer_width()
    }

    fn item_left(&self, position: usize) -> f32 {
        position as f32 * self.outer_width()
    }
}
