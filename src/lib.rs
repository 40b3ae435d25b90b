//! Fade and thinning animation controllers for overlay scrollbars.
//!
//! Overlay scrollbars float on top of their content, so they have to get out
//! of the way on their own: they fade out after a while of inactivity, come
//! back instantly on the next scroll, and their thumb thickens when the
//! mouse comes near and thins again when it moves away. This crate contains
//! the compositor-side state machines that drive those animations, and
//! nothing else: no drawing, no layout, no event plumbing.
//!
//! A [`FadeController`] animates the visibility of all scrollbars of one
//! scroll area and owns a [`ThinningController`] per orientation when thumb
//! feedback is wanted. The embedder implements [`AnimationClient`], reports
//! scroll and mouse activity as it happens, and calls
//! [`FadeController::animate`] once per frame while the controller reports
//! that more ticks are needed.
//!
//! ```
//! use icy_scrollbars::time::{Duration, Instant};
//! use icy_scrollbars::{
//!     AnimationClient, AnimationConfig, FadeController, Orientation, ScrollAreaId,
//!     SolidScrollbar,
//! };
//!
//! struct Compositor {
//!     scrollbars: Vec<SolidScrollbar>,
//!     needs_redraw: bool,
//! }
//!
//! impl AnimationClient for Compositor {
//!     type Scrollbar = SolidScrollbar;
//!
//!     fn post_delayed_animation_task(&mut self, _delay: Duration) {}
//!     fn request_redraw(&mut self) {
//!         self.needs_redraw = true;
//!     }
//!     fn request_animation_frame(&mut self) {}
//!     fn did_change_scrollbar_visibility(&mut self, _hidden: bool) {}
//!     fn scrollbars_for(&mut self, _area: ScrollAreaId) -> &mut [SolidScrollbar] {
//!         &mut self.scrollbars
//!     }
//! }
//!
//! let area = ScrollAreaId(1);
//! let compositor = Compositor {
//!     scrollbars: vec![SolidScrollbar::new(Orientation::Vertical, 10.0, 0.0, false)],
//!     needs_redraw: false,
//! };
//!
//! let mut controller =
//!     FadeController::with_thinning(area, compositor, AnimationConfig::default())?;
//!
//! let now = Instant::now();
//! controller.did_scroll_update(now, false);
//! assert!(!controller.scrollbars_hidden());
//! # Ok::<_, icy_scrollbars::ConfigError>(())
//! ```
pub mod client;
pub mod config;
pub mod fade;
pub mod scrollbar;
pub mod thinning;
pub mod time;
pub mod transition;

#[cfg(test)]
mod testing;

pub use client::AnimationClient;
pub use config::{AnimationConfig, ConfigError};
pub use fade::FadeController;
pub use scrollbar::{Orientation, ScrollAreaId, Scrollbar, SolidScrollbar};
pub use thinning::ThinningController;
pub use transition::Transition;
