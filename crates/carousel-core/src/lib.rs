//! Headless core of the thumbnail carousel.
//!
//! The crate keeps four pieces of state in lockstep: which thumbnail is
//! current, where the strip is scrolled to, whether a primary-image load is in
//! flight, and which thumbnails are flagged as errored. Everything that touches
//! a real UI is reached through two capabilities supplied by the host:
//! - [`PresentationTree`] for node lookup, class toggling and image sources.
//! - [`StripMetrics`] for widths and offsets of the strip.
//!
//! Asynchronous work never happens inside the crate. A switch that needs a
//! fetch returns a [`LoadRequest`]; the host performs it and reports back with
//! [`CarouselController::complete_load`].

pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod item;
pub mod load_cache;
pub mod metrics;
pub mod presentation;
pub mod primary;
pub mod retained;
pub mod scroll;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{CarouselConfig, ImageConfig, SourceRewrite, StripConfig};
pub use controller::{CarouselController, CarouselHooks, Navigation, NoHooks};
pub use error::{CarouselError, LoadError};
pub use input::{Direction, KeyInput, PointerTarget};
pub use item::{Item, ItemCollection};
pub use load_cache::ImageLoadCache;
pub use metrics::StripMetrics;
pub use presentation::{NodeId, PresentationTree};
pub use primary::{LoadEvent, LoadOutcome, LoadRequest, LoadStatus, LoadTicket, PrimaryImageController, Switch};
pub use retained::{Node, RetainedTree};
pub use scroll::{ControlState, ScrollCoordinator, ScrollState, SteppedDriver, ease_in_out_cubic};
pub use source::SourceResolver;
