//! Keyboard and pointer contracts.

use crate::config::CarouselConfig;
use crate::presentation::{NodeId, PresentationTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// A key press as reported by the host: a symbolic key name or a legacy
/// numeric key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput<'a> {
    Named(&'a str),
    Code(u32),
}

const KEY_CODE_LEFT: u32 = 37;
const KEY_CODE_RIGHT: u32 = 39;

impl KeyInput<'_> {
    /// Left arrow navigates back, right arrow forward; anything else is
    /// ignored.
    pub fn direction(&self) -> Option<Direction> {
        match *self {
            KeyInput::Named("ArrowLeft") | KeyInput::Code(KEY_CODE_LEFT) => Some(Direction::Prev),
            KeyInput::Named("ArrowRight") | KeyInput::Code(KEY_CODE_RIGHT) => {
                Some(Direction::Next)
            }
            _ => None,
        }
    }
}

/// What a click landed on, resolved through ancestor matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A thumbnail; carries the thumbnail's own node, not the clicked child.
    Item(NodeId),
    NextControl,
    PrevControl,
    Outside,
}

impl PointerTarget {
    pub fn resolve<T: PresentationTree + ?Sized>(
        tree: &T,
        node: NodeId,
        config: &CarouselConfig,
    ) -> Self {
        if tree.closest(node, &config.strip.selector).is_none() {
            return PointerTarget::Outside;
        }
        if let Some(item) = tree.closest(node, &config.strip.item_selector) {
            return PointerTarget::Item(item);
        }
        if tree.closest(node, &config.next_selector()).is_some() {
            return PointerTarget::NextControl;
        }
        if tree.closest(node, &config.prev_selector()).is_some() {
            return PointerTarget::PrevControl;
        }
        PointerTarget::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTree;

    #[test]
    fn arrows_map_by_name_and_legacy_code() {
        assert_eq!(KeyInput::Named("ArrowLeft").direction(), Some(Direction::Prev));
        assert_eq!(KeyInput::Named("ArrowRight").direction(), Some(Direction::Next));
        assert_eq!(KeyInput::Code(37).direction(), Some(Direction::Prev));
        assert_eq!(KeyInput::Code(39).direction(), Some(Direction::Next));
        assert_eq!(KeyInput::Named("ArrowUp").direction(), None);
        assert_eq!(KeyInput::Code(13).direction(), None);
    }

    #[test]
    fn clicks_resolve_through_ancestors() {
        let fake = FakeTree::gallery(&["a", "b", "c"]);
        let config = CarouselConfig::default();

        assert_eq!(
            PointerTarget::resolve(&fake.tree, fake.item_images[1], &config),
            PointerTarget::Item(fake.items[1])
        );
        assert_eq!(
            PointerTarget::resolve(&fake.tree, fake.next, &config),
            PointerTarget::NextControl
        );
        assert_eq!(
            PointerTarget::resolve(&fake.tree, fake.prev, &config),
            PointerTarget::PrevControl
        );
        assert_eq!(
            PointerTarget::resolve(&fake.tree, fake.image, &config),
            PointerTarget::Outside
        );
        assert_eq!(
            PointerTarget::resolve(&fake.tree, fake.strip, &config),
            PointerTarget::Outside
        );
    }
}
