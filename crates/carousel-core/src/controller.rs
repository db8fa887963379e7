//! Orchestrator tying thumbnails, the primary image and the strip together.
//!
//! Navigation intents (clicks, keys, programmatic next/prev) resolve to an
//! item and ask the primary image to switch. Only a completed switch moves
//! the current index; a failed one flags the thumbnail and leaves navigation
//! untouched.

use crate::config::CarouselConfig;
use crate::error::{CarouselError, LoadError};
use crate::input::{Direction, KeyInput, PointerTarget};
use crate::item::{Item, ItemCollection};
use crate::metrics::StripMetrics;
use crate::presentation::{NodeId, PresentationTree, toggle_class};
use crate::primary::{LoadEvent, LoadOutcome, LoadRequest, LoadStatus, PrimaryImageController, Switch};
use crate::scroll::{ScrollCoordinator, ScrollState};
use crate::source::SourceResolver;
use std::time::Duration;
use tracing::{debug, error, info};

/// Observer for finished switches, installed with
/// [`CarouselController::with_hooks`].
pub trait CarouselHooks {
    fn on_loaded(&mut self, _item: &Item) {}
    fn on_failed(&mut self, _item: &Item, _error: &LoadError) {}
}

/// Hooks that ignore every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl CarouselHooks for NoHooks {}

/// Immediate result of a navigation intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Nothing happened: boundary without wrap, empty strip, a strip
    /// animation still running, disabled control or a click outside the
    /// strip.
    None,
    /// The target was already loaded and is now current.
    Completed(usize),
    /// The host must fetch the source and call
    /// [`CarouselController::complete_load`].
    Fetch(LoadRequest),
    /// A strip control started a scroll.
    Scrolled,
}

pub struct CarouselController<T, M> {
    config: CarouselConfig,
    tree: T,
    metrics: M,
    items: ItemCollection,
    primary: PrimaryImageController,
    scroll: ScrollCoordinator,
    counter: NodeId,
    next_control: NodeId,
    prev_control: NodeId,
    current: Option<usize>,
    /// Set when the current item changed while the strip was animating; the
    /// item is revealed once that animation lands.
    reveal_pending: bool,
    hooks: Box<dyn CarouselHooks>,
}

impl<T: PresentationTree, M: StripMetrics> CarouselController<T, M> {
    /// Validates `config`, resolves every node it names and activates the
    /// first thumbnail.
    ///
    /// Any error leaves the widget inert; it is logged here and returned so
    /// the host can report it.
    pub fn new(config: CarouselConfig, tree: T, metrics: M) -> Result<Self, CarouselError> {
        Self::build(config, tree, metrics).inspect_err(|err| {
            error!("Carousel initialization failed: {err}");
        })
    }

    fn build(config: CarouselConfig, tree: T, metrics: M) -> Result<Self, CarouselError> {
        config.validate()?;
        let resolver = SourceResolver::new(&config.rewrites)?;

        let root = tree.by_id(&config.id).ok_or_else(|| missing(format!("#{}", config.id)))?;
        let counter = require(&tree, root, &config.counter_selector)?;
        let image_block = require(&tree, root, &config.image_selector())?;
        let image = tree.find(image_block, "img").unwrap_or(image_block);
        let veil = tree.find(image_block, &config.veil_selector());
        require(&tree, root, &config.strip.container_selector)?;
        let strip = require(&tree, root, &config.strip.selector)?;
        let next_control = require(&tree, strip, &config.next_selector())?;
        let prev_control = require(&tree, strip, &config.prev_selector())?;

        let item_nodes = tree.find_all(strip, &config.strip.item_selector);
        let items = ItemCollection::from_nodes(&tree, &item_nodes, &resolver);
        let primary = PrimaryImageController::new(
            image,
            veil,
            config.image.loading_active_class.clone(),
            tree.image_source(image),
        );
        let scroll = ScrollCoordinator::new(config.animation_duration(), &metrics).with_controls(
            prev_control,
            next_control,
            config.strip.disabled_class.clone(),
        );

        let mut controller = Self {
            config,
            tree,
            metrics,
            items,
            primary,
            scroll,
            counter,
            next_control,
            prev_control,
            current: None,
            reveal_pending: false,
            hooks: Box::new(NoHooks),
        };
        controller.scroll.refresh_controls(&mut controller.tree);
        if !controller.items.is_empty() {
            controller.activate(0);
        }
        info!(
            items = controller.items.len(),
            looped = controller.config.loop_navigation,
            "Carousel ready"
        );
        Ok(controller)
    }

    pub fn with_hooks(mut self, hooks: impl CarouselHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    pub fn next(&mut self) -> Navigation {
        self.navigate(Direction::Next)
    }

    pub fn prev(&mut self) -> Navigation {
        self.navigate(Direction::Prev)
    }

    pub fn navigate(&mut self, direction: Direction) -> Navigation {
        match self.neighbor(direction) {
            Some(position) => self.show(position).unwrap_or(Navigation::None),
            None => {
                debug!(?direction, current = ?self.current, "No neighbour to navigate to");
                Navigation::None
            }
        }
    }

    /// Requests the primary image switch to the item at `position`.
    ///
    /// Dropped with [`Navigation::None`] while the strip is animating.
    pub fn show(&mut self, position: usize) -> Result<Navigation, CarouselError> {
        self.items.get(position)?;
        if self.strip_busy(position) {
            return Ok(Navigation::None);
        }
        let switch = {
            let item = self.items.get(position)?;
            self.primary.switch_to(item, &mut self.tree)
        };
        Ok(match switch {
            Switch::Immediate(event) => {
                self.apply(event);
                Navigation::Completed(position)
            }
            Switch::Fetch(request) => Navigation::Fetch(request),
        })
    }

    pub fn handle_key(&mut self, key: KeyInput<'_>) -> Navigation {
        match key.direction() {
            Some(direction) => self.navigate(direction),
            None => Navigation::None,
        }
    }

    /// Single delegated click handler for everything inside the widget.
    pub fn handle_click(&mut self, node: NodeId) -> Navigation {
        match PointerTarget::resolve(&self.tree, node, &self.config) {
            PointerTarget::Item(item_node) => {
                let Some(position) = self.items.find(item_node).map(Item::position) else {
                    return Navigation::None;
                };
                if self.strip_busy(position) {
                    return Navigation::None;
                }
                // A retry should not stay flagged while the new attempt runs.
                self.set_error(position, false);
                self.show(position).unwrap_or(Navigation::None)
            }
            PointerTarget::NextControl => self.scroll_control(self.next_control, Direction::Next),
            PointerTarget::PrevControl => self.scroll_control(self.prev_control, Direction::Prev),
            PointerTarget::Outside => Navigation::None,
        }
    }

    /// Applies the host's fetch result for a request handed out earlier.
    ///
    /// Returns `None` when the request was superseded in the meantime.
    pub fn complete_load(&mut self, request: &LoadRequest, outcome: LoadOutcome) -> Option<LoadEvent> {
        let event = self.primary.complete(request, outcome, &mut self.tree)?;
        self.apply(event.clone());
        Some(event)
    }

    /// Advances the strip animation; see [`ScrollCoordinator::tick`].
    ///
    /// When the animation lands and the current item changed meanwhile, a
    /// follow-up scroll brings that item into view.
    pub fn tick(&mut self, delta: Duration) -> f32 {
        let offset = self.scroll.tick(delta, &mut self.tree);
        if self.reveal_pending && !self.scroll.is_animating() {
            self.reveal_pending = false;
            if let Some(position) = self.current {
                self.bring_into_view(position);
            }
        }
        offset
    }

    /// Re-measures after a viewport change and keeps the current item in view.
    pub fn handle_resize(&mut self) {
        self.scroll.recompute_bounds(&self.metrics);
        self.scroll.refresh_controls(&mut self.tree);
        let Some(position) = self.current else {
            return;
        };
        if self.scroll.is_animating() {
            self.reveal_pending = true;
        } else {
            self.scroll
                .scroll_item_into_view(position, self.items.len(), &self.metrics);
        }
    }

    /// Neighbour sources worth fetching ahead of time.
    pub fn preload_candidates(&self) -> Vec<String> {
        if !self.config.preload_neighbors {
            return Vec::new();
        }
        let pending = self.primary.pending_position();
        let mut sources: Vec<String> = Vec::new();
        for direction in [Direction::Next, Direction::Prev] {
            let Some(position) = self.neighbor(direction) else {
                continue;
            };
            if Some(position) == self.current || Some(position) == pending {
                continue;
            }
            let Ok(item) = self.items.get(position) else {
                continue;
            };
            if item.has_error() || self.primary.is_cached(item.source()) {
                continue;
            }
            if !sources.iter().any(|source| source == item.source()) {
                sources.push(item.source().to_string());
            }
        }
        sources
    }

    pub fn record_preloaded(&mut self, source: &str) {
        self.primary.record_preloaded(source);
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.current.and_then(|position| self.items.get(position).ok())
    }

    pub fn items(&self) -> &ItemCollection {
        &self.items
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Mutable access for hosts updating measurements; follow up with
    /// [`handle_resize`](Self::handle_resize).
    pub fn metrics_mut(&mut self) -> &mut M {
        &mut self.metrics
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating()
    }

    pub fn load_status(&self) -> LoadStatus {
        self.primary.status()
    }

    pub fn is_loading(&self) -> bool {
        self.primary.is_loading()
    }

    pub fn is_cached(&self, source: &str) -> bool {
        self.primary.is_cached(source)
    }

    pub fn displayed_source(&self) -> Option<&str> {
        self.primary.displayed_source()
    }

    fn neighbor(&self, direction: Direction) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let Some(current) = self.current else {
            return Some(0);
        };
        let looped = self.config.loop_navigation;
        match direction {
            Direction::Next if current + 1 < len => Some(current + 1),
            Direction::Next if looped => Some((current + 1) % len),
            Direction::Prev if current > 0 => Some(current - 1),
            Direction::Prev if looped => Some((current + len - 1) % len),
            _ => None,
        }
    }

    fn apply(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Loaded(position) => {
                self.set_error(position, false);
                if let Ok(item) = self.items.get(position) {
                    self.hooks.on_loaded(item);
                }
                self.activate(position);
            }
            LoadEvent::Failed { position, error } => {
                self.set_error(position, true);
                if let Ok(item) = self.items.get(position) {
                    self.hooks.on_failed(item, &error);
                }
            }
        }
    }

    fn activate(&mut self, position: usize) {
        if self.current == Some(position) {
            return;
        }
        let Ok(node) = self.items.get(position).map(Item::node) else {
            return;
        };
        let previous = self.current;
        let active_class = &self.config.strip.active_class;
        if let Some(old) = previous.and_then(|old| self.items.get(old).ok()) {
            self.tree.remove_class(old.node(), active_class);
        }
        self.tree.add_class(node, active_class);
        self.current = Some(position);
        self.tree.set_text(self.counter, &(position + 1).to_string());
        self.scroll.refresh_controls(&mut self.tree);
        debug!(position, ?previous, "Activated item");
        if self.scroll.is_animating() {
            self.reveal_pending = true;
        } else {
            self.reveal(position, previous);
        }
    }

    fn reveal(&mut self, position: usize, previous: Option<usize>) {
        let len = self.items.len();
        let last = len.saturating_sub(1);
        let visible = self.scroll.item_visible(position, &self.metrics);
        if len > 1 && !visible && previous == Some(last) && position == 0 {
            self.scroll.scroll_to_start();
        } else if len > 1 && !visible && previous == Some(0) && position == last {
            self.scroll.scroll_to_end();
        } else {
            self.scroll.scroll_item_into_view(position, len, &self.metrics);
        }
    }

    /// Scrolls just enough to show `position`, boundary items included.
    fn bring_into_view(&mut self, position: usize) {
        if self.scroll.item_visible(position, &self.metrics) {
            return;
        }
        let len = self.items.len();
        if position == 0 {
            self.scroll.scroll_to_start();
        } else if position + 1 == len {
            self.scroll.scroll_to_end();
        } else {
            self.scroll.scroll_item_into_view(position, len, &self.metrics);
        }
    }

    /// Navigation waits for the strip: requests made mid-animation are
    /// dropped, not queued.
    fn strip_busy(&self, position: usize) -> bool {
        let busy = self.scroll.is_animating();
        if busy {
            debug!(position, current = ?self.current, "Dropped navigation during strip animation");
        }
        busy
    }

    fn set_error(&mut self, position: usize, has_error: bool) {
        let Ok(node) = self.items.get(position).map(Item::node) else {
            return;
        };
        if self.items.set_error(position, has_error).is_ok() {
            toggle_class(&mut self.tree, node, &self.config.strip.error_class, has_error);
        }
    }

    fn scroll_control(&mut self, control: NodeId, direction: Direction) -> Navigation {
        if self.tree.has_class(control, &self.config.strip.disabled_class) {
            return Navigation::None;
        }
        if self.scroll.scroll_by_step(direction) {
            Navigation::Scrolled
        } else {
            Navigation::None
        }
    }
}

fn missing(selector: impl Into<String>) -> CarouselError {
    CarouselError::MissingNode {
        selector: selector.into(),
    }
}

fn require<T: PresentationTree>(tree: &T, scope: NodeId, selector: &str) -> Result<NodeId, CarouselError> {
    tree.find(scope, selector).ok_or_else(|| missing(selector))
}
