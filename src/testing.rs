//! Fixtures shared by the controller tests.
use crate::client::AnimationClient;
use crate::config::AnimationConfig;
use crate::scrollbar::{Orientation, ScrollAreaId, Scrollbar, SolidScrollbar};
use crate::time::Duration;

/// The scroll area every test animates.
pub const AREA: ScrollAreaId = ScrollAreaId(7);

/// The configuration used by the tests: the 300ms fade cadence the concrete
/// scenarios are written against.
pub fn test_config() -> AnimationConfig {
    AnimationConfig {
        fade_delay: Duration::from_millis(300),
        resize_fade_delay: Duration::from_millis(2000),
        fade_duration: Duration::from_millis(300),
        thinning_duration: Duration::from_millis(250),
        idle_thickness_scale: 0.4,
        mouse_move_distance: 25.0,
    }
}

/// Asserts two scales or opacities are equal up to float noise.
pub fn assert_near(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}

/// A client that records every request a controller makes of it.
#[derive(Debug, Default)]
pub struct FakeClient {
    /// The drawable scrollbars of the area.
    pub scrollbars: Vec<SolidScrollbar>,
    /// Every delay passed to `post_delayed_animation_task`, in order.
    pub delayed_tasks: Vec<Duration>,
    /// Number of redraw requests.
    pub redraw_requests: usize,
    /// Number of animation frame requests.
    pub animation_frame_requests: usize,
    /// Every visibility flip, as the reported `hidden` flag.
    pub visibility_changes: Vec<bool>,
}

impl FakeClient {
    /// A client with one horizontal and one vertical scrollbar.
    pub fn with_both_scrollbars() -> Self {
        Self {
            scrollbars: vec![
                SolidScrollbar::new(Orientation::Horizontal, 10.0, 0.0, false),
                SolidScrollbar::new(Orientation::Vertical, 10.0, 0.0, false),
            ],
            ..Self::default()
        }
    }

    /// Returns the scrollbar with the given [`Orientation`].
    pub fn scrollbar(&self, orientation: Orientation) -> &SolidScrollbar {
        self.scrollbars
            .iter()
            .find(|scrollbar| scrollbar.orientation() == orientation)
            .expect("missing scrollbar")
    }
}

impl AnimationClient for FakeClient {
    type Scrollbar = SolidScrollbar;

    fn post_delayed_animation_task(&mut self, delay: Duration) {
        self.delayed_tasks.push(delay);
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }

    fn request_animation_frame(&mut self) {
        self.animation_frame_requests += 1;
    }

    fn did_change_scrollbar_visibility(&mut self, hidden: bool) {
        self.visibility_changes.push(hidden);
    }

    fn scrollbars_for(&mut self, _area: ScrollAreaId) -> &mut [SolidScrollbar] {
        &mut self.scrollbars
    }
}
