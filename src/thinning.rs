//! Animate the thumb thickness of a single scrollbar.
use crate::client::AnimationClient;
use crate::config::AnimationConfig;
use crate::scrollbar::{Orientation, ScrollAreaId, Scrollbar};
use crate::time::Instant;
use crate::transition::Transition;

/// Whether the current animation thickens or thins the thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThicknessChange {
    None,
    Increase,
    Decrease,
}

/// Animates the thumb thickness of one scrollbar in response to mouse
/// proximity.
///
/// A thumb is fully thick while the mouse is near its scrollbar or dragging
/// it, and thins down to the configured idle scale otherwise. One controller
/// exists per orientation present on a scroll area, owned by the
/// [`FadeController`](crate::FadeController); the animations of the two
/// orientations are independent of each other.
#[derive(Debug)]
pub struct ThinningController {
    scroll_area: ScrollAreaId,
    orientation: Orientation,
    captured: bool,
    mouse_is_over: bool,
    mouse_is_near: bool,
    thickness_change: ThicknessChange,
    idle_thickness_scale: f32,
    mouse_move_distance: f32,
    transition: Transition,
}

impl ThinningController {
    /// Creates a new [`ThinningController`] for the scrollbar with the given
    /// [`Orientation`] on the given scroll area.
    pub fn new(
        scroll_area: ScrollAreaId,
        orientation: Orientation,
        config: &AnimationConfig,
    ) -> Self {
        Self {
            scroll_area,
            orientation,
            captured: false,
            mouse_is_over: false,
            mouse_is_near: false,
            thickness_change: ThicknessChange::None,
            idle_thickness_scale: config.idle_thickness_scale,
            mouse_move_distance: config.mouse_move_distance,
            transition: Transition::new(config.thinning_duration),
        }
    }

    /// Returns the [`Orientation`] of the animated scrollbar.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns whether the thumb is currently being dragged.
    pub fn captured(&self) -> bool {
        self.captured
    }

    /// Returns whether the mouse is currently over the scrollbar.
    pub fn mouse_is_over_scrollbar(&self) -> bool {
        self.mouse_is_over
    }

    /// Returns whether the mouse is currently near the scrollbar.
    pub fn mouse_is_near_scrollbar(&self) -> bool {
        self.mouse_is_near
    }

    /// Returns whether a thickness animation is in progress.
    pub fn is_animating(&self) -> bool {
        self.transition.is_running()
    }

    /// Processes a change in the distance between the mouse and the
    /// scrollbar.
    ///
    /// A distance of zero (or less) counts as over the scrollbar; a distance
    /// within the configured threshold counts as near it. A change of either
    /// state starts a thickness animation, unless the thumb is captured: a
    /// dragged thumb stays fully thick regardless of proximity, though the
    /// state keeps tracking so the release can settle correctly.
    pub fn did_mouse_move_near<C: AnimationClient>(&mut self, distance: f32, client: &mut C) {
        let mouse_is_over = distance <= 0.0;
        let mouse_is_near = distance <= self.mouse_move_distance;

        if mouse_is_over == self.mouse_is_over && mouse_is_near == self.mouse_is_near {
            return;
        }

        self.mouse_is_over = mouse_is_over;
        self.mouse_is_near = mouse_is_near;

        if self.captured {
            return;
        }

        self.thickness_change = if mouse_is_near {
            ThicknessChange::Increase
        } else {
            ThicknessChange::Decrease
        };

        self.start_animation(client);
    }

    /// Captures the thumb if the mouse is over the scrollbar.
    ///
    /// A captured thumb snaps fully thick immediately.
    pub fn did_mouse_down<C: AnimationClient>(&mut self, client: &mut C) {
        if !self.mouse_is_over {
            return;
        }

        self.captured = true;
        self.update_thumb_thickness_scale(client);
    }

    /// Releases a captured thumb.
    ///
    /// A thumb released while the mouse is still near stays thick; otherwise
    /// it thins back down.
    pub fn did_mouse_up<C: AnimationClient>(&mut self, client: &mut C) {
        if !self.captured {
            return;
        }

        self.captured = false;
        self.stop_animation();

        if self.mouse_is_near {
            self.thickness_change = ThicknessChange::None;
            self.update_thumb_thickness_scale(client);
        } else {
            self.thickness_change = ThicknessChange::Decrease;
            self.start_animation(client);
        }
    }

    /// Processes the mouse leaving the area entirely.
    pub fn did_mouse_leave<C: AnimationClient>(&mut self, client: &mut C) {
        if !self.mouse_is_over && !self.mouse_is_near {
            return;
        }

        self.mouse_is_over = false;
        self.mouse_is_near = false;

        if self.captured {
            return;
        }

        self.thickness_change = ThicknessChange::Decrease;
        self.start_animation(client);
    }

    /// Advances the thickness animation to `now`.
    ///
    /// Returns whether the animation needs more ticks.
    pub fn animate<C: AnimationClient>(&mut self, now: Instant, client: &mut C) -> bool {
        if !self.transition.is_running() {
            return false;
        }

        let progress = self.transition.tick(now);
        self.run_animation_frame(progress, client);

        self.transition.is_running()
    }

    /// Starts the thickness animation.
    pub fn start_animation<C: AnimationClient>(&mut self, client: &mut C) {
        self.transition.start();
        client.request_animation_frame();
    }

    /// Stops the thickness animation without applying a final value.
    pub fn stop_animation(&mut self) {
        self.transition.stop();
    }

    /// Reapplies the instantaneous thumb thickness without advancing time.
    ///
    /// Used when geometry changes independently of an animation, e.g. on a
    /// forced relayout. Any in-flight animation is dropped.
    pub fn update_thumb_thickness_scale<C: AnimationClient>(&mut self, client: &mut C) {
        self.stop_animation();
        self.thickness_change = ThicknessChange::None;

        let scale = if self.mouse_is_near {
            1.0
        } else {
            self.idle_thickness_scale
        };

        self.apply_thumb_thickness_scale(scale, client);
    }

    fn run_animation_frame<C: AnimationClient>(&mut self, progress: f32, client: &mut C) {
        self.apply_thumb_thickness_scale(self.thumb_thickness_scale_at(progress), client);
        client.request_redraw();

        if progress >= 1.0 {
            self.thickness_change = ThicknessChange::None;
            self.transition.stop();
        }
    }

    fn thumb_thickness_scale_at(&self, progress: f32) -> f32 {
        let factor = match self.thickness_change {
            ThicknessChange::None => {
                return if self.mouse_is_near {
                    1.0
                } else {
                    self.idle_thickness_scale
                };
            }
            ThicknessChange::Increase => progress,
            ThicknessChange::Decrease => 1.0 - progress,
        };

        self.idle_thickness_scale + (1.0 - self.idle_thickness_scale) * factor
    }

    fn apply_thumb_thickness_scale<C: AnimationClient>(&self, scale: f32, client: &mut C) {
        for scrollbar in client.scrollbars_for(self.scroll_area) {
            if scrollbar.orientation() != self.orientation {
                continue;
            }

            let adjusted = adjust_scale(
                scale,
                scrollbar.thumb_thickness_scale(),
                self.thickness_change,
                self.idle_thickness_scale,
                1.0,
            );

            scrollbar.set_thumb_thickness_scale(adjusted);
        }
    }
}

/// Clamps a computed scale so it only moves in the commanded direction from
/// wherever the thumb currently is.
///
/// This is what keeps a reversed animation from snapping: a thumb halfway
/// through thickening that is asked to thin again holds its current scale
/// until the thinning ramp passes below it.
fn adjust_scale(
    new_value: f32,
    current_value: f32,
    change: ThicknessChange,
    min_value: f32,
    max_value: f32,
) -> f32 {
    let value = match change {
        ThicknessChange::Increase => new_value.max(current_value),
        ThicknessChange::Decrease => new_value.min(current_value),
        ThicknessChange::None => new_value,
    };

    value.clamp(min_value, max_value)
}
