//! Headless fixtures: the stock gallery markup and synthetic strip geometry.

use crate::config::CarouselConfig;
use crate::metrics::StripMetrics;
use crate::presentation::{NodeId, PresentationTree};
use crate::retained::RetainedTree;

pub(crate) struct FakeTree {
    pub tree: RetainedTree,
    pub counter: NodeId,
    pub image: NodeId,
    pub veil: NodeId,
    pub strip: NodeId,
    pub items: Vec<NodeId>,
    pub item_images: Vec<NodeId>,
    pub next: NodeId,
    pub prev: NodeId,
}

impl FakeTree {
    /// Stock markup for the default configuration. The primary image starts
    /// on the first thumbnail's source.
    pub fn gallery(thumbnails: &[&str]) -> Self {
        let config = CarouselConfig::default();
        let mut tree = RetainedTree::new();

        let root = tree.create_root("div");
        tree.set_id(root, &config.id);

        let counter = tree.append(root, "span");
        tree.add_class(counter, "js-gallery-current-index");

        let block = tree.append(root, "div");
        tree.add_class(block, &config.image.class_name);
        let image = tree.append(block, "img");
        if let Some(first) = thumbnails.first() {
            tree.set_image_source(image, first);
        }
        let veil = tree.append(block, "div");
        tree.add_class(veil, &config.image.loading_class);
        tree.add_class(veil, &format!("js-{}", config.image.loading_class));

        let container = tree.append(root, "div");
        tree.add_class(container, "js-gallery-preview-list-container");
        let strip = tree.append(container, "div");
        tree.add_class(strip, "js-gallery-preview-list");
        let list = tree.append(strip, "ul");

        let mut items = Vec::new();
        let mut item_images = Vec::new();
        for source in thumbnails {
            let item = tree.append(list, "li");
            let thumb = tree.append(item, "img");
            tree.set_image_source(thumb, source);
            items.push(item);
            item_images.push(thumb);
        }

        let next = tree.append(strip, "span");
        tree.add_class(next, &config.strip.next_class);
        tree.add_class(next, &format!("js-{}", config.strip.next_class));
        let prev = tree.append(strip, "span");
        tree.add_class(prev, &config.strip.prev_class);
        tree.add_class(prev, &format!("js-{}", config.strip.prev_class));

        Self {
            tree,
            counter,
            image,
            veil,
            strip,
            items,
            item_images,
            next,
            prev,
        }
    }
}

/// Uniform thumbnails laid out edge to edge.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedMetrics {
    pub count: usize,
    pub item_width: f32,
    pub viewport: f32,
}

impl FixedMetrics {
    pub fn new(count: usize, item_width: f32, viewport: f32) -> Self {
        Self {
            count,
            item_width,
            viewport,
        }
    }
}

impl StripMetrics for FixedMetrics {
    fn viewport_width(&self) -> f32 {
        self.viewport
    }

    fn content_width(&self) -> f32 {
        self.count as f32 * self.item_width
    }

    fn item_width(&self) -> f32 {
        self.item_width
    }

    fn item_left(&self, position: usize) -> f32 {
        position as f32 * self.item_width
    }
}
