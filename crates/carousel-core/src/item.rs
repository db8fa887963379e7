//! Thumbnail descriptors and their fixed-size collection.

use crate::error::CarouselError;
use crate::presentation::{NodeId, PresentationTree};
use crate::source::SourceResolver;
use tracing::debug;

/// One selectable thumbnail and the full-size source it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    position: usize,
    node: NodeId,
    source: String,
    has_error: bool,
}

impl Item {
    pub fn new(position: usize, node: NodeId, source: impl Into<String>) -> Self {
        Self {
            position,
            node,
            source: source.into(),
            has_error: false,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Full-size image source shown in the primary viewer.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }
}

/// Ordered thumbnails; positions are exactly `0..len`.
///
/// The structure is frozen after construction. Only the error flag of single
/// items changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct ItemCollection {
    items: Vec<Item>,
}

impl ItemCollection {
    /// Builds items from thumbnail nodes in document order.
    ///
    /// Nodes without any image source get an empty source; loading it fails
    /// through the regular error path.
    pub fn from_nodes<T: PresentationTree + ?Sized>(
        tree: &T,
        nodes: &[NodeId],
        resolver: &SourceResolver,
    ) -> Self {
        let items = nodes
            .iter()
            .enumerate()
            .map(|(position, &node)| {
                let thumbnail = tree.image_source(node).unwrap_or_default();
                Item::new(position, node, resolver.resolve(&thumbnail))
            })
            .collect::<Vec<_>>();
        debug!(count = items.len(), "Collected carousel items");
        Self { items }
    }

    pub fn get(&self, position: usize) -> Result<&Item, CarouselError> {
        self.items.get(position).ok_or(CarouselError::OutOfRange {
            position,
            len: self.items.len(),
        })
    }

    /// Item whose thumbnail node is exactly `node`.
    pub fn find(&self, node: NodeId) -> Option<&Item> {
        self.items.iter().find(|item| item.node == node)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub(crate) fn set_error(&mut self, position: usize, has_error: bool) -> Result<(), CarouselError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(position)
            .ok_or(CarouselError::OutOfRange { position, len })?;
        item.has_error = has_error;
        Ok(())
    }
}

impl From<Vec<Item>> for ItemCollection {
    /// Renumbers positions so they stay contiguous.
    fn from(items: Vec<Item>) -> Self {
        let items = items
            .into_iter()
            .enumerate()
            .map(|(position, item)| Item { position, ..item })
            .collect();
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTree;

    fn collection(count: usize) -> ItemCollection {
        (0..count)
            .map(|i| Item::new(i, NodeId(100 + i as u64), format!("img/{i}.jpg")))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn get_out_of_range_fails() {
        let items = collection(3);
        assert_eq!(items.get(2).expect("last item").source(), "img/2.jpg");
        assert!(matches!(
            items.get(3),
            Err(CarouselError::OutOfRange { position: 3, len: 3 })
        ));
    }

    #[test]
    fn find_matches_node_identity() {
        let items = collection(4);
        assert_eq!(items.find(NodeId(102)).map(Item::position), Some(2));
        assert!(items.find(NodeId(7)).is_none());
    }

    #[test]
    fn positions_are_renumbered_contiguously() {
        let items: ItemCollection = vec![
            Item::new(9, NodeId(1), "a"),
            Item::new(4, NodeId(2), "b"),
        ]
        .into();
        let positions: Vec<_> = items.iter().map(Item::position).collect();
        assert_eq!(positions, vec![0, 1]);
    }

    #[test]
    fn error_flag_is_the_only_mutation() {
        let mut items = collection(2);
        items.set_error(1, true).expect("in range");
        assert!(items.get(1).expect("item").has_error());
        assert!(!items.get(0).expect("item").has_error());
        assert!(items.set_error(5, true).is_err());
    }

    #[test]
    fn builds_from_tree_with_resolved_sources() {
        let fake = FakeTree::gallery(&["t/120/a.jpg", "t/120/b.jpg"]);
        let resolver = SourceResolver::new(&[crate::SourceRewrite {
            pattern: "120".to_string(),
            replacement: "1024".to_string(),
        }])
        .expect("rules");
        let items = ItemCollection::from_nodes(&fake.tree, &fake.items, &resolver);
        assert_eq!(items.len(), 2);
        assert_eq!(items.get(1).expect("item").source(), "t/1024/b.jpg");
        assert_eq!(items.get(1).expect("item").node(), fake.items[1]);
    }
}
