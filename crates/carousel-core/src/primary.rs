//! The single large image driven by the active thumbnail.
//!
//! A switch either completes on the spot (the source is already known-good)
//! or hands out a [`LoadRequest`] that the host fulfils asynchronously. Every
//! request carries a fresh [`LoadTicket`]; a completion whose ticket is no
//! longer the pending one is stale and is dropped without an event.

use crate::error::LoadError;
use crate::item::Item;
use crate::load_cache::ImageLoadCache;
use crate::presentation::{NodeId, PresentationTree, toggle_class};
use tracing::{debug, info, trace, warn};

/// Identity of one switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

/// Fetch the host must perform before reporting back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub position: usize,
    pub source: String,
}

/// Result of the host's fetch.
pub type LoadOutcome = Result<(), LoadError>;

/// `Loaded` and `Failed` report the outcome of the last switch and hold
/// until the next one, which passes back through `Idle` before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// What a finished switch means for the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEvent {
    Loaded(usize),
    Failed { position: usize, error: LoadError },
}

/// Immediate answer to a switch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Switch {
    /// Source already cached; the viewer shows it now.
    Immediate(LoadEvent),
    Fetch(LoadRequest),
}

#[derive(Debug, Clone)]
struct Pending {
    ticket: LoadTicket,
    position: usize,
    source: String,
}

#[derive(Debug)]
pub struct PrimaryImageController {
    image: NodeId,
    veil: Option<NodeId>,
    veil_active_class: String,
    cache: ImageLoadCache,
    status: LoadStatus,
    pending: Option<Pending>,
    committed: Option<String>,
    next_ticket: u64,
}

impl PrimaryImageController {
    /// `committed` is the source the viewer shows before any switch.
    pub fn new(
        image: NodeId,
        veil: Option<NodeId>,
        veil_active_class: impl Into<String>,
        committed: Option<String>,
    ) -> Self {
        Self {
            image,
            veil,
            veil_active_class: veil_active_class.into(),
            cache: ImageLoadCache::new(),
            status: LoadStatus::Idle,
            pending: None,
            committed,
            next_ticket: 0,
        }
    }

    pub fn switch_to<T: PresentationTree + ?Sized>(&mut self, item: &Item, tree: &mut T) -> Switch {
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = LoadTicket(self.next_ticket);
        let source = item.source().to_string();

        if matches!(self.status, LoadStatus::Loaded | LoadStatus::Failed) {
            trace!(from = ?self.status, "Primary image back to idle");
            self.status = LoadStatus::Idle;
        }
        if let Some(previous) = self.pending.take() {
            debug!(
                superseded = previous.position,
                position = item.position(),
                "Superseding in-flight primary load"
            );
        }

        if self.cache.has(&source) {
            self.set_loading(tree, false);
            tree.set_image_source(self.image, &source);
            self.committed = Some(source);
            self.status = LoadStatus::Loaded;
            debug!(position = item.position(), "Primary image served from load cache");
            return Switch::Immediate(LoadEvent::Loaded(item.position()));
        }

        self.set_loading(tree, true);
        tree.set_image_source(self.image, &source);
        self.status = LoadStatus::Loading;
        self.pending = Some(Pending {
            ticket,
            position: item.position(),
            source: source.clone(),
        });
        debug!(position = item.position(), source = %source, "Primary image load started");
        Switch::Fetch(LoadRequest {
            ticket,
            position: item.position(),
            source,
        })
    }

    /// Applies the host's fetch result. Returns `None` for stale completions.
    pub fn complete<T: PresentationTree + ?Sized>(
        &mut self,
        request: &LoadRequest,
        outcome: LoadOutcome,
        tree: &mut T,
    ) -> Option<LoadEvent> {
        let is_current = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.ticket == request.ticket);

        if !is_current {
            match outcome {
                Ok(()) => {
                    // The source is known-good even though nobody waits for it.
                    self.cache.record(&request.source);
                    debug!(position = request.position, "Discarded stale primary load");
                }
                Err(err) => {
                    debug!(position = request.position, "Discarded stale primary failure: {err}");
                }
            }
            return None;
        }

        let Some(pending) = self.pending.take() else {
            return None;
        };
        self.set_loading(tree, false);

        match outcome {
            Ok(()) => {
                self.cache.record(&pending.source);
                tree.set_image_source(self.image, &pending.source);
                self.committed = Some(pending.source);
                self.status = LoadStatus::Loaded;
                info!(position = pending.position, "Primary image loaded");
                Some(LoadEvent::Loaded(pending.position))
            }
            Err(error) => {
                if let Some(previous) = &self.committed {
                    tree.set_image_source(self.image, previous);
                }
                self.status = LoadStatus::Failed;
                warn!(position = pending.position, "Primary image failed: {error}");
                Some(LoadEvent::Failed {
                    position: pending.position,
                    error,
                })
            }
        }
    }

    /// Marks a source fetched ahead of time as known-good.
    pub fn record_preloaded(&mut self, source: &str) {
        self.cache.record(source);
    }

    pub fn is_cached(&self, source: &str) -> bool {
        self.cache.has(source)
    }

    pub fn cache(&self) -> &ImageLoadCache {
        &self.cache
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_position(&self) -> Option<usize> {
        self.pending.as_ref().map(|pending| pending.position)
    }

    /// Source the viewer settled on after the last completed switch.
    pub fn displayed_source(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    fn set_loading<T: PresentationTree + ?Sized>(&self, tree: &mut T, on: bool) {
        if let Some(veil) = self.veil {
            toggle_class(tree, veil, &self.veil_active_class, on);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTree;

    const VEIL_ACTIVE: &str = "gallery__loading_active";

    fn setup() -> (FakeTree, PrimaryImageController, Vec<Item>) {
        let fake = FakeTree::gallery(&["a.jpg", "b.jpg", "c.jpg"]);
        let items = fake
            .items
            .iter()
            .enumerate()
            .map(|(i, &node)| Item::new(i, node, format!("{}.jpg", ["a", "b", "c"][i])))
            .collect();
        let controller = PrimaryImageController::new(
            fake.image,
            Some(fake.veil),
            VEIL_ACTIVE,
            Some("a.jpg".to_string()),
        );
        (fake, controller, items)
    }

    fn fetch(switch: Switch) -> LoadRequest {
        match switch {
            Switch::Fetch(request) => request,
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn uncached_switch_shows_veil_until_loaded() {
        let (mut fake, mut primary, items) = setup();
        let request = fetch(primary.switch_to(&items[1], &mut fake.tree));
        assert_eq!(primary.status(), LoadStatus::Loading);
        assert!(fake.tree.has_class(fake.veil, VEIL_ACTIVE));

        let event = primary.complete(&request, Ok(()), &mut fake.tree);
        assert_eq!(event, Some(LoadEvent::Loaded(1)));
        assert!(!fake.tree.has_class(fake.veil, VEIL_ACTIVE));
        assert!(primary.is_cached("b.jpg"));
        assert_eq!(primary.displayed_source(), Some("b.jpg"));
        assert_eq!(primary.status(), LoadStatus::Loaded);
        assert!(!primary.is_loading());
    }

    #[test]
    fn cached_switch_completes_synchronously_without_veil() {
        let (mut fake, mut primary, items) = setup();
        primary.record_preloaded("c.jpg");
        let switch = primary.switch_to(&items[2], &mut fake.tree);
        assert_eq!(switch, Switch::Immediate(LoadEvent::Loaded(2)));
        assert!(!fake.tree.has_class(fake.veil, VEIL_ACTIVE));
        assert_eq!(fake.tree.image_source(fake.image).as_deref(), Some("c.jpg"));
    }

    #[test]
    fn failure_reverts_to_previous_source() {
        let (mut fake, mut primary, items) = setup();
        let request = fetch(primary.switch_to(&items[2], &mut fake.tree));
        let event = primary.complete(&request, Err(LoadError::new("c.jpg", "404")), &mut fake.tree);

        assert!(matches!(event, Some(LoadEvent::Failed { position: 2, .. })));
        assert_eq!(fake.tree.image_source(fake.image).as_deref(), Some("a.jpg"));
        assert_eq!(primary.status(), LoadStatus::Failed);
        assert!(!primary.is_cached("c.jpg"));
        assert!(!fake.tree.has_class(fake.veil, VEIL_ACTIVE));
    }

    #[test]
    fn superseded_success_fires_no_event() {
        let (mut fake, mut primary, items) = setup();
        let stale = fetch(primary.switch_to(&items[1], &mut fake.tree));
        let current = fetch(primary.switch_to(&items[2], &mut fake.tree));

        assert_eq!(primary.complete(&stale, Ok(()), &mut fake.tree), None);
        assert_eq!(primary.pending_position(), Some(2));
        assert!(fake.tree.has_class(fake.veil, VEIL_ACTIVE));
        assert_eq!(fake.tree.image_source(fake.image).as_deref(), Some("c.jpg"));

        let event = primary.complete(&current, Ok(()), &mut fake.tree);
        assert_eq!(event, Some(LoadEvent::Loaded(2)));
    }

    #[test]
    fn superseded_failure_does_not_revert() {
        let (mut fake, mut primary, items) = setup();
        let stale = fetch(primary.switch_to(&items[1], &mut fake.tree));
        let _current = fetch(primary.switch_to(&items[2], &mut fake.tree));

        let event = primary.complete(&stale, Err(LoadError::new("b.jpg", "boom")), &mut fake.tree);
        assert_eq!(event, None);
        assert_eq!(fake.tree.image_source(fake.image).as_deref(), Some("c.jpg"));
        assert_eq!(primary.status(), LoadStatus::Loading);
    }

    #[test]
    fn finished_states_hold_until_the_next_switch() {
        let (mut fake, mut primary, items) = setup();
        assert_eq!(primary.status(), LoadStatus::Idle);
        let request = fetch(primary.switch_to(&items[1], &mut fake.tree));
        primary.complete(&request, Err(LoadError::new("b.jpg", "404")), &mut fake.tree);
        assert_eq!(primary.status(), LoadStatus::Failed);

        let retry = fetch(primary.switch_to(&items[1], &mut fake.tree));
        assert_eq!(primary.status(), LoadStatus::Loading);
        primary.complete(&retry, Ok(()), &mut fake.tree);
        assert_eq!(primary.status(), LoadStatus::Loaded);

        primary.switch_to(&items[1], &mut fake.tree);
        assert_eq!(primary.status(), LoadStatus::Loaded);
    }

    #[test]
    fn cached_switch_makes_in_flight_load_stale() {
        let (mut fake, mut primary, items) = setup();
        primary.record_preloaded("a.jpg");
        let stale = fetch(primary.switch_to(&items[1], &mut fake.tree));
        let switch = primary.switch_to(&items[0], &mut fake.tree);
        assert_eq!(switch, Switch::Immediate(LoadEvent::Loaded(0)));
        assert!(!fake.tree.has_class(fake.veil, VEIL_ACTIVE));

        assert_eq!(primary.complete(&stale, Ok(()), &mut fake.tree), None);
        assert_eq!(fake.tree.image_source(fake.image).as_deref(), Some("a.jpg"));
        assert!(primary.is_cached("b.jpg"));
    }
}
