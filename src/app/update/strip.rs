use super::super::state::App;
use super::Effect;
use std::time::Instant;
use tracing::debug;

impl App {
    pub(in crate::app) fn is_animating(&self) -> bool {
        self.carousel
            .as_ref()
            .is_some_and(|carousel| carousel.is_animating())
    }

    pub(super) fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let Some(carousel) = self.carousel.as_mut() else {
            self.last_tick = None;
            return;
        };
        let Some(last) = self.last_tick else {
            return;
        };
        let delta = now.saturating_duration_since(last);
        self.last_tick = Some(now);
        carousel.tick(delta);
        effects.push(Effect::SyncStrip);
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32, effects: &mut Vec<Effect>) {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return;
        }
        self.config.window_width = width;
        self.config.window_height = height;

        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        carousel.metrics_mut().window_width = width;
        carousel.handle_resize();
        debug!(width, height, state = ?carousel.scroll_state(), "Strip re-measured");
        effects.push(Effect::SyncStrip);
    }

    pub(super) fn handle_window_moved(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.config.window_pos_x = Some(x);
            self.config.window_pos_y = Some(y);
        }
    }

    /// Starts the frame clock when an animation begins and drops it once the
    /// strip settles, so the tick subscription only runs while needed.
    pub(super) fn sync_animation_clock(&mut self) {
        match (self.is_animating(), self.last_tick) {
            (true, None) => self.last_tick = Some(Instant::now()),
            (false, Some(_)) => self.last_tick = None,
            _ => {}
        }
    }
}
