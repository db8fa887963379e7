//! Horizontal offset of the thumbnail strip.
//!
//! Offsets are `<= 0`: the strip slides left as it scrolls forward, and
//! `min_offset` is the furthest it can go. Animation is split in two:
//! [`ease_in_out_cubic`] and [`ScrollCoordinator::tick`] are pure arithmetic
//! over elapsed time, while pacing comes from the host (a frame subscription,
//! a timer, or [`SteppedDriver`] in tests).

use crate::input::Direction;
use crate::metrics::StripMetrics;
use crate::presentation::{NodeId, PresentationTree, toggle_class};
use std::time::Duration;
use tracing::{debug, trace};

/// Easing factor for normalized time `t` in `[0, 1]`.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

/// Snapshot of the strip position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub offset: f32,
    pub min_offset: f32,
    pub step_width: f32,
    pub animating: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f32,
    to: f32,
    elapsed: Duration,
}

impl Animation {
    fn offset_at(&self, duration: Duration) -> f32 {
        if duration.is_zero() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_in_out_cubic(t)
    }

    fn finished(&self, duration: Duration) -> bool {
        self.elapsed >= duration
    }
}

#[derive(Debug, Clone)]
struct Controls {
    prev: NodeId,
    next: NodeId,
    disabled_class: String,
}

#[derive(Debug)]
pub struct ScrollCoordinator {
    offset: f32,
    min_offset: f32,
    step_width: f32,
    content_fits: bool,
    duration: Duration,
    animation: Option<Animation>,
    controls: Option<Controls>,
}

impl ScrollCoordinator {
    pub fn new<M: StripMetrics + ?Sized>(duration: Duration, metrics: &M) -> Self {
        let mut coordinator = Self {
            offset: 0.0,
            min_offset: 0.0,
            step_width: 0.0,
            content_fits: true,
            duration,
            animation: None,
            controls: None,
        };
        coordinator.recompute_bounds(metrics);
        coordinator
    }

    /// Attaches the prev/next control nodes whose disabled class this
    /// coordinator maintains.
    pub fn with_controls(mut self, prev: NodeId, next: NodeId, disabled_class: impl Into<String>) -> Self {
        self.controls = Some(Controls {
            prev,
            next,
            disabled_class: disabled_class.into(),
        });
        self
    }

    /// Re-measures the strip. Needed after every viewport resize since early
    /// measurements can include a transient scrollbar.
    pub fn recompute_bounds<M: StripMetrics + ?Sized>(&mut self, metrics: &M) {
        let viewport = metrics.viewport_width().max(0.0);
        let content = metrics.content_width().max(0.0);
        let item_width = metrics.item_width();

        self.min_offset = (viewport - content).min(0.0);
        self.step_width = if item_width > 0.0 {
            (viewport / item_width).floor() * item_width
        } else {
            0.0
        };
        self.content_fits = content <= viewport;
        if self.animation.is_none() {
            self.offset = self.clamp(self.offset);
        }
        debug!(
            min_offset = self.min_offset,
            step_width = self.step_width,
            viewport,
            content,
            "Recomputed strip bounds"
        );
    }

    /// Starts an animated scroll towards `target`, clamped into bounds.
    ///
    /// Returns `false` when the request is dropped because another animation
    /// is still running.
    pub fn scroll_to_offset(&mut self, target: f32) -> bool {
        if self.animation.is_some() {
            trace!(target, "Dropped scroll request during animation");
            return false;
        }
        let to = self.clamp(target);
        self.animation = Some(Animation {
            from: self.offset,
            to,
            elapsed: Duration::ZERO,
        });
        debug!(from = self.offset, to, "Strip animation started");
        true
    }

    pub fn scroll_by_step(&mut self, direction: Direction) -> bool {
        let target = match direction {
            Direction::Next => self.offset - self.step_width,
            Direction::Prev => self.offset + self.step_width,
        };
        self.scroll_to_offset(target)
    }

    pub fn scroll_to_start(&mut self) -> bool {
        self.scroll_to_offset(0.0)
    }

    pub fn scroll_to_end(&mut self) -> bool {
        self.scroll_to_offset(self.min_offset)
    }

    /// Brings the item at `position` into the viewport.
    ///
    /// Left overflow aligns the item's right edge with the viewport's right
    /// edge; right overflow aligns its left edge with the viewport's left
    /// edge. Boundary items without a neighbour in the overflowing direction
    /// are left alone.
    pub fn scroll_item_into_view<M: StripMetrics + ?Sized>(
        &mut self,
        position: usize,
        len: usize,
        metrics: &M,
    ) -> bool {
        let item_left = metrics.item_left(position);
        let item_width = metrics.item_width();
        let viewport = metrics.viewport_width();

        let overflow_left = self.offset + item_left;
        if overflow_left < 0.0 {
            if position == 0 {
                return false;
            }
            return self.scroll_to_offset(-(item_left - viewport + item_width));
        }

        let overflow_right = self.offset + item_left + item_width - viewport;
        if overflow_right > 0.0 {
            if position + 1 >= len {
                return false;
            }
            return self.scroll_to_offset(-item_left);
        }
        false
    }

    /// Whether the item at `position` lies fully inside the viewport at the
    /// current offset.
    pub fn item_visible<M: StripMetrics + ?Sized>(&self, position: usize, metrics: &M) -> bool {
        let left = self.offset + metrics.item_left(position);
        left >= 0.0 && left + metrics.item_width() <= metrics.viewport_width()
    }

    /// Advances the running animation by `delta` and returns the new offset.
    ///
    /// On the final frame the offset snaps to the exact clamped target and the
    /// controls are refreshed.
    pub fn tick<T: PresentationTree + ?Sized>(&mut self, delta: Duration, tree: &mut T) -> f32 {
        let Some(mut animation) = self.animation else {
            return self.offset;
        };
        animation.elapsed += delta;

        if animation.finished(self.duration) {
            self.offset = self.clamp(animation.to);
            self.animation = None;
            self.refresh_controls(tree);
            debug!(offset = self.offset, "Strip animation finished");
        } else {
            self.offset = animation.offset_at(self.duration);
            self.animation = Some(animation);
        }
        self.offset
    }

    pub fn control_state(&self) -> ControlState {
        if self.content_fits {
            return ControlState {
                prev_enabled: false,
                next_enabled: false,
            };
        }
        ControlState {
            prev_enabled: self.offset != 0.0,
            next_enabled: self.offset != self.min_offset,
        }
    }

    pub fn refresh_controls<T: PresentationTree + ?Sized>(&self, tree: &mut T) {
        let Some(controls) = &self.controls else {
            return;
        };
        let state = self.control_state();
        toggle_class(tree, controls.prev, &controls.disabled_class, !state.prev_enabled);
        toggle_class(tree, controls.next, &controls.disabled_class, !state.next_enabled);
    }

    pub fn state(&self) -> ScrollState {
        ScrollState {
            offset: self.offset,
            min_offset: self.min_offset,
            step_width: self.step_width,
            animating: self.animation.is_some(),
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Target of the running animation, if any.
    pub fn animation_target(&self) -> Option<f32> {
        self.animation.map(|animation| animation.to)
    }

    fn clamp(&self, offset: f32) -> f32 {
        if offset.is_finite() {
            offset.clamp(self.min_offset, 0.0)
        } else if offset == f32::NEG_INFINITY {
            self.min_offset
        } else {
            0.0
        }
    }
}

/// Fixed-cadence animation driver, the timer fallback for hosts without
/// frame callbacks.
#[derive(Debug, Clone, Copy)]
pub struct SteppedDriver {
    pub step: Duration,
}

impl Default for SteppedDriver {
    fn default() -> Self {
        Self {
            step: Duration::from_millis(16),
        }
    }
}

impl SteppedDriver {
    /// Ticks until the animation settles; returns the number of frames.
    pub fn run<T: PresentationTree + ?Sized>(
        &self,
        coordinator: &mut ScrollCoordinator,
        tree: &mut T,
    ) -> usize {
        let step = if self.step.is_zero() {
            Duration::from_millis(1)
        } else {
            self.step
        };
        let mut frames = 0;
        while coordinator.is_animating() {
            coordinator.tick(step, tree);
            frames += 1;
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeTree, FixedMetrics};

    fn coordinator(metrics: &FixedMetrics) -> ScrollCoordinator {
        ScrollCoordinator::new(Duration::from_millis(300), metrics)
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!(ease_in_out_cubic(0.25) < 0.25);
        assert!(ease_in_out_cubic(0.75) > 0.75);
        assert_eq!(ease_in_out_cubic(4.0), 1.0);
    }

    #[test]
    fn bounds_follow_viewport_and_item_width() {
        // 10 items of 100px behind a 350px window.
        let metrics = FixedMetrics::new(10, 100.0, 350.0);
        let scroll = coordinator(&metrics);
        let state = scroll.state();
        assert_eq!(state.min_offset, -650.0);
        assert_eq!(state.step_width, 300.0);
        assert_eq!(state.offset, 0.0);
        assert!(!state.animating);
    }

    #[test]
    fn short_content_never_scrolls_and_disables_controls() {
        let metrics = FixedMetrics::new(2, 100.0, 350.0);
        let mut fake = FakeTree::gallery(&["a", "b"]);
        let mut scroll = coordinator(&metrics).with_controls(fake.prev, fake.next, "disabled");
        assert_eq!(scroll.state().min_offset, 0.0);
        assert!(scroll.scroll_by_step(Direction::Next));
        SteppedDriver::default().run(&mut scroll, &mut fake.tree);
        assert_eq!(scroll.offset(), 0.0);
        assert!(fake.tree.has_class(fake.prev, "disabled"));
        assert!(fake.tree.has_class(fake.next, "disabled"));
    }

    #[test]
    fn final_offset_is_clamped_for_any_target() {
        let metrics = FixedMetrics::new(10, 100.0, 350.0);
        let mut fake = FakeTree::gallery(&["a"]);
        for target in [-1.0e9, -651.0, -200.0, 0.5, 1.0e9, f32::NEG_INFINITY, f32::NAN] {
            let mut scroll = coordinator(&metrics);
            scroll.scroll_to_offset(target);
            SteppedDriver::default().run(&mut scroll, &mut fake.tree);
            let offset = scroll.offset();
            assert!(
                (-650.0..=0.0).contains(&offset),
                "offset {offset} escaped bounds for target {target}"
            );
        }
    }

    #[test]
    fn requests_during_animation_are_dropped() {
        let metrics = FixedMetrics::new(10, 100.0, 350.0);
        let mut fake = FakeTree::gallery(&["a"]);
        let mut scroll = coordinator(&metrics);
        assert!(scroll.scroll_to_offset(-300.0));
        scroll.tick(Duration::from_millis(100), &mut fake.tree);
        assert!(!scroll.scroll_to_offset(-600.0));
        assert_eq!(scroll.animation_target(), Some(-300.0));

        SteppedDriver::default().run(&mut scroll, &mut fake.tree);
        assert_eq!(scroll.offset(), -300.0);
        assert!(scroll.scroll_to_offset(-600.0));
    }

    #[test]
    fn animation_moves_monotonically_and_snaps() {
        let metrics = FixedMetrics::new(10, 100.0, 350.0);
        let mut fake = FakeTree::gallery(&["a"]);
        let mut scroll = coordinator(&metrics);
        scroll.scroll_to_offset(-300.0);

        let mut previous = 0.0;
        while scroll.is_animating() {
            let offset = scroll.tick(Duration::from_millis(16), &mut fake.tree);
            assert!(offset <= previous);
            previous = offset;
        }
        assert_eq!(scroll.offset(), -300.0);
    }

    #[test]
    fn step_scrolling_updates_controls_at_edges() {
        let metrics = FixedMetrics::new(10, 100.0, 350.0);
        let mut fake = FakeTree::gallery(&["a"]);
        let mut scroll = coordinator(&metrics).with_controls(fake.prev, fake.next, "disabled");
        let driver = SteppedDriver::default();

        scroll.refresh_controls(&mut fake.tree);
        assert!(fake.tree.has_class(fake.prev, "disabled"));
        assert!(!fake.tree.has_class(fake.next, "disabled"));

        scroll.scroll_by_step(Direction::Next);
        driver.run(&mut scroll, &mut fake.tree);
        assert_eq!(scroll.offset(), -300.0);
        assert!(!fake.tree.has_class(fake.prev, "disabled"));
        assert!(!fake.tree.has_class(fake.next, "disabled"));

        scroll.scroll_by_step(Direction::Next);
        driver.run(&mut scroll, &mut fake.tree);
        scroll.scroll_by_step(Direction::Next);
        driver.run(&mut scroll, &mut fake.tree);
        assert_eq!(scroll.offset(), -650.0);
        assert!(fake.tree.has_class(fake.next, "disabled"));

        scroll.scroll_by_step(Direction::Prev);
        driver.run(&mut scroll, &mut fake.tree);
        assert_eq!(scroll.offset(), -350.0);
    }

    #[test]
    fn right_overflow_aligns_item_left_edge() {
        let metrics = FixedMetrics::new(10, 100.0, 350.0);
        let mut fake = FakeTree::gallery(&["a"]);
        let mut scroll = coordinator(&metrics);
        assert!(scroll.scroll_item_into_view(3, 10, &metrics));
        SteppedDriver::default().run(&mut scroll, &mut fake.tree);
        assert_eq!(scroll.offset(), -300.0);
    }

    #[test]
    fn left_overflow_aligns_item_right_edge() {
        let metrics = FixedMetrics::new(10, 100.0, 350.0);
        let mut fake = FakeTree::gallery(&["a"]);
        let mut scroll = coordinator(&metrics);
        scroll.scroll_to_offset(-600.0);
        SteppedDriver::default().run(&mut scroll, &mut fake.tree);

        assert!(scroll.scroll_item_into_view(4, 10, &metrics));
        SteppedDriver::default().run(&mut scroll, &mut fake.tree);
        // Item 4 spans 400..500; its right edge now sits at the 350px mark.
        assert_eq!(scroll.offset(), -150.0);
    }

    #[test]
    fn visible_item_is_a_no_op() {
        let metrics = FixedMetrics::new(10, 100.0, 350.0);
        let mut scroll = coordinator(&metrics);
        assert!(!scroll.scroll_item_into_view(1, 10, &metrics));
        assert!(!scroll.is_animating());
    }

    #[test]
    fn boundary_items_are_left_alone() {
        let metrics = FixedMetrics::new(10, 100.0, 350.0);
        let mut fake = FakeTree::gallery(&["a"]);
        let mut scroll = coordinator(&metrics);
        assert!(!scroll.scroll_item_into_view(9, 10, &metrics));

        scroll.scroll_to_end();
        SteppedDriver::default().run(&mut scroll, &mut fake.tree);
        assert!(!scroll.scroll_item_into_view(0, 10, &metrics));
    }

    #[test]
    fn resize_clamps_offset_into_new_bounds() {
        let mut metrics = FixedMetrics::new(10, 100.0, 350.0);
        let mut fake = FakeTree::gallery(&["a"]);
        let mut scroll = coordinator(&metrics);
        scroll.scroll_to_end();
        SteppedDriver::default().run(&mut scroll, &mut fake.tree);

        metrics.viewport = 800.0;
        scroll.recompute_bounds(&metrics);
        assert_eq!(scroll.state().min_offset, -200.0);
        assert_eq!(scroll.state().step_width, 800.0);
        assert_eq!(scroll.offset(), -200.0);
    }
}
