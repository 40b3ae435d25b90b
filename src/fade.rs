//! Animate the visibility of the scrollbars of a scroll area.
use crate::client::AnimationClient;
use crate::config::{AnimationConfig, ConfigError};
use crate::scrollbar::{Orientation, ScrollAreaId, Scrollbar};
use crate::thinning::ThinningController;
use crate::time::Instant;
use crate::transition::Transition;

/// Animates the visibility of the scrollbars of a single scroll area.
///
/// The controller tracks scroll and mouse activity, keeps the scrollbars
/// visible while they are interacted with, schedules a delayed fade-out once
/// they go idle, and drives the fade (opacity) animation itself. Built
/// [`with_thinning`](Self::with_thinning), it additionally owns one
/// [`ThinningController`] per orientation and routes mouse proximity to them.
///
/// All methods run on one logical thread. The embedder reports scroll and
/// mouse events as they happen and calls [`animate`](Self::animate) once per
/// frame while any animation reports that it needs more ticks. Showing is
/// always instantaneous; only the fade-out animates.
///
/// Dropping the controller implicitly cancels its pending fade: the deadline
/// is plain state in here, and the wake-ups requested through
/// [`AnimationClient::post_delayed_animation_task`] carry no callback.
#[derive(Debug)]
pub struct FadeController<C: AnimationClient> {
    client: C,
    scroll_area: ScrollAreaId,
    config: AnimationConfig,
    fade: Transition,
    /// The opacity last applied to the scrollbars of the area.
    opacity: f32,
    currently_scrolling: bool,
    scroll_gesture_has_scrolled: bool,
    /// Deadline of the scheduled fade-out, if any. `None` means canceled.
    pending_fade: Option<Instant>,
    horizontal: Option<ThinningController>,
    vertical: Option<ThinningController>,
}

impl<C: AnimationClient> FadeController<C> {
    /// Creates a controller that only fades the scrollbars in and out.
    ///
    /// This is the flavor for platforms without hover feedback: no thinning
    /// sub-controllers exist and mouse events are ignored.
    pub fn fade_only(
        scroll_area: ScrollAreaId,
        client: C,
        config: AnimationConfig,
    ) -> Result<Self, ConfigError> {
        Self::new(scroll_area, client, config, false)
    }

    /// Creates a controller that fades the scrollbars and thins their
    /// thumbs, with one [`ThinningController`] per orientation.
    pub fn with_thinning(
        scroll_area: ScrollAreaId,
        client: C,
        config: AnimationConfig,
    ) -> Result<Self, ConfigError> {
        Self::new(scroll_area, client, config, true)
    }

    fn new(
        scroll_area: ScrollAreaId,
        client: C,
        config: AnimationConfig,
        needs_thinning: bool,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let (horizontal, vertical) = if needs_thinning {
            (
                Some(ThinningController::new(
                    scroll_area,
                    Orientation::Horizontal,
                    &config,
                )),
                Some(ThinningController::new(
                    scroll_area,
                    Orientation::Vertical,
                    &config,
                )),
            )
        } else {
            (None, None)
        };

        Ok(Self {
            client,
            scroll_area,
            config,
            fade: Transition::new(config.fade_duration),
            opacity: 1.0,
            currently_scrolling: false,
            scroll_gesture_has_scrolled: false,
            pending_fade: None,
            horizontal,
            vertical,
        })
    }

    /// Returns the identifier of the animated scroll area.
    pub fn scroll_area(&self) -> ScrollAreaId {
        self.scroll_area
    }

    /// Returns a reference to the injected client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns a mutable reference to the injected client.
    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    /// Returns whether the scrollbars are currently fully transparent.
    pub fn scrollbars_hidden(&self) -> bool {
        self.opacity == 0.0
    }

    /// Returns whether the fade-out animation is in progress.
    pub fn is_fading(&self) -> bool {
        self.fade.is_running()
    }

    /// Returns whether this controller animates thumb thickness.
    pub fn needs_thinning_animation(&self) -> bool {
        self.horizontal.is_some() || self.vertical.is_some()
    }

    /// Returns the [`ThinningController`] for the given [`Orientation`], if
    /// one exists.
    pub fn thinning(&self, orientation: Orientation) -> Option<&ThinningController> {
        match orientation {
            Orientation::Horizontal => self.horizontal.as_ref(),
            Orientation::Vertical => self.vertical.as_ref(),
        }
    }

    /// Returns whether the mouse is over the scrollbar with the given
    /// [`Orientation`].
    pub fn mouse_is_over_scrollbar(&self, orientation: Orientation) -> bool {
        self.thinning(orientation)
            .is_some_and(ThinningController::mouse_is_over_scrollbar)
    }

    /// Returns whether the mouse is near the scrollbar with the given
    /// [`Orientation`].
    pub fn mouse_is_near_scrollbar(&self, orientation: Orientation) -> bool {
        self.thinning(orientation)
            .is_some_and(ThinningController::mouse_is_near_scrollbar)
    }

    /// Returns whether the mouse is near any scrollbar of the area.
    pub fn mouse_is_near_any_scrollbar(&self) -> bool {
        self.mouse_is_near_scrollbar(Orientation::Horizontal)
            || self.mouse_is_near_scrollbar(Orientation::Vertical)
    }

    /// Drops the thinning sub-controller of the given [`Orientation`], e.g.
    /// when the scrollbar for that orientation is removed from the area.
    pub fn remove_scrollbar(&mut self, orientation: Orientation) {
        match orientation {
            Orientation::Horizontal => self.horizontal = None,
            Orientation::Vertical => self.vertical = None,
        }
    }

    /// Processes the start of a scroll gesture.
    ///
    /// Hidden or fading scrollbars become fully visible instantly; no fade-in
    /// is animated. Any scheduled fade-out is canceled.
    pub fn did_scroll_begin(&mut self) {
        self.currently_scrolling = true;
        self.scroll_gesture_has_scrolled = false;
        self.cancel_pending_fade();

        if self.fade.is_running() || self.scrollbars_hidden() {
            self.show_scrollbars();
            self.client.request_redraw();
        }
    }

    /// Processes a scroll position change at `now`.
    ///
    /// The scrollbars become fully visible instantly, and a fade-out is
    /// scheduled unless a scroll gesture is still in progress; a gesture
    /// schedules its fade-out when it ends instead. `on_resize` selects the
    /// longer resize delay for scrolls caused by layout changes.
    pub fn did_scroll_update(&mut self, now: Instant, on_resize: bool) {
        if self.currently_scrolling {
            self.scroll_gesture_has_scrolled = true;
        }

        self.cancel_pending_fade();

        if self.fade.is_running() || self.scrollbars_hidden() {
            self.show_scrollbars();
        }

        if !self.currently_scrolling {
            self.post_delayed_fade(now, on_resize);
        }

        // Redraw right away so the thumb reflects the new scroll position
        // before the next animation tick.
        self.client.request_redraw();
    }

    /// Processes the end of a scroll gesture at `now`.
    ///
    /// A gesture that never produced a scroll delta (a tap) leaves the
    /// current visibility untouched; otherwise the fade-out countdown starts.
    pub fn did_scroll_end(&mut self, now: Instant) {
        self.currently_scrolling = false;

        if self.scroll_gesture_has_scrolled {
            self.scroll_gesture_has_scrolled = false;
            self.post_delayed_fade(now, false);
        }
    }

    /// Processes a mouse button press, capturing any hovered thumb.
    pub fn did_mouse_down(&mut self) {
        if !self.needs_thinning_animation() || self.scrollbars_hidden() {
            return;
        }

        if let Some(horizontal) = self.horizontal.as_mut() {
            horizontal.did_mouse_down(&mut self.client);
        }

        if let Some(vertical) = self.vertical.as_mut() {
            vertical.did_mouse_down(&mut self.client);
        }
    }

    /// Processes a mouse button release at `now`.
    ///
    /// If the release leaves no active interaction, the fade-out countdown
    /// starts again.
    pub fn did_mouse_up(&mut self, now: Instant) {
        if !self.captured() {
            return;
        }

        if let Some(horizontal) = self.horizontal.as_mut() {
            horizontal.did_mouse_up(&mut self.client);
        }

        if let Some(vertical) = self.vertical.as_mut() {
            vertical.did_mouse_up(&mut self.client);
        }

        if !self.mouse_is_near_any_scrollbar()
            && !self.currently_scrolling
            && !self.scrollbars_hidden()
        {
            self.post_delayed_fade(now, false);
        }
    }

    /// Processes the mouse leaving the scroll area at `now`.
    pub fn did_mouse_leave(&mut self, now: Instant) {
        if !self.needs_thinning_animation() {
            return;
        }

        if let Some(horizontal) = self.horizontal.as_mut() {
            horizontal.did_mouse_leave(&mut self.client);
        }

        if let Some(vertical) = self.vertical.as_mut() {
            vertical.did_mouse_leave(&mut self.client);
        }

        if self.captured()
            || self.currently_scrolling
            || self.fade.is_running()
            || self.scrollbars_hidden()
        {
            return;
        }

        self.cancel_pending_fade();
        self.post_delayed_fade(now, false);
    }

    /// Processes a change in the distance between the mouse and the
    /// scrollbar with the given [`Orientation`] at `now`.
    ///
    /// The matching thinning sub-controller animates its thumb thickness.
    /// On top of that, the mouse coming near any scrollbar cancels a pending
    /// or in-flight fade and shows the scrollbars, while the mouse moving
    /// away from all of them starts the fade-out countdown. While a thumb is
    /// captured, neither happens. Fade-only controllers ignore the event.
    pub fn did_mouse_move_near(&mut self, now: Instant, orientation: Orientation, distance: f32) {
        if !self.needs_thinning_animation() {
            return;
        }

        let was_near_any = self.mouse_is_near_any_scrollbar();

        let single = match orientation {
            Orientation::Horizontal => self.horizontal.as_mut(),
            Orientation::Vertical => self.vertical.as_mut(),
        };

        let Some(single) = single else {
            debug_assert!(false, "no thinning controller for {orientation:?}");
            log::warn!("ignoring mouse proximity for missing {orientation:?} scrollbar");
            return;
        };

        single.did_mouse_move_near(distance, &mut self.client);

        if self.captured() {
            return;
        }

        let is_near_any = self.mouse_is_near_any_scrollbar();

        if is_near_any && !was_near_any {
            self.cancel_pending_fade();

            if self.fade.is_running() || self.scrollbars_hidden() {
                self.show_scrollbars();
                self.client.request_redraw();
            }
        } else if was_near_any
            && !is_near_any
            && !self.scrollbars_hidden()
            && !self.currently_scrolling
        {
            self.post_delayed_fade(now, false);
        }
    }

    /// Advances every animation of the controller to `now`.
    ///
    /// A due fade-out deadline starts the opacity animation first; since the
    /// wake-up requested from the client may be stale, the preconditions for
    /// fading are re-checked here rather than trusting the wake-up. Returns
    /// whether any animation needs more ticks.
    pub fn animate(&mut self, now: Instant) -> bool {
        self.start_fade_if_due(now);

        let mut needs_more = false;

        if self.fade.is_running() {
            let progress = self.fade.tick(now);
            self.run_fade_frame(progress);
            needs_more |= self.fade.is_running();
        }

        if let Some(horizontal) = self.horizontal.as_mut() {
            needs_more |= horizontal.animate(now, &mut self.client);
        }

        if let Some(vertical) = self.vertical.as_mut() {
            needs_more |= vertical.animate(now, &mut self.client);
        }

        needs_more
    }

    /// Reapplies the instantaneous thumb thickness of every scrollbar after
    /// a geometry change, without advancing any animation.
    pub fn update_thumb_thickness_scales(&mut self) {
        if let Some(horizontal) = self.horizontal.as_mut() {
            horizontal.update_thumb_thickness_scale(&mut self.client);
        }

        if let Some(vertical) = self.vertical.as_mut() {
            vertical.update_thumb_thickness_scale(&mut self.client);
        }
    }

    fn captured(&self) -> bool {
        self.horizontal
            .as_ref()
            .is_some_and(ThinningController::captured)
            || self
                .vertical
                .as_ref()
                .is_some_and(ThinningController::captured)
    }

    fn start_fade_if_due(&mut self, now: Instant) {
        let Some(deadline) = self.pending_fade else {
            return;
        };

        if now < deadline {
            return;
        }

        self.pending_fade = None;

        // The wake-up may be stale; re-check that fading is still wanted.
        if self.currently_scrolling
            || self.captured()
            || self.mouse_is_near_any_scrollbar()
            || self.fade.is_running()
            || self.scrollbars_hidden()
        {
            return;
        }

        self.fade.start();
        self.client.request_animation_frame();
    }

    fn run_fade_frame(&mut self, progress: f32) {
        self.apply_opacity(1.0 - progress);
        self.client.request_redraw();

        if progress >= 1.0 {
            self.fade.stop();
        }
    }

    fn show_scrollbars(&mut self) {
        self.fade.stop();
        self.apply_opacity(1.0);
    }

    fn apply_opacity(&mut self, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);

        for scrollbar in self.client.scrollbars_for(self.scroll_area) {
            scrollbar.set_opacity(opacity);
        }

        let was_hidden = self.opacity == 0.0;
        self.opacity = opacity;
        let hidden = opacity == 0.0;

        if was_hidden != hidden {
            log::trace!(
                "scrollbars of {:?} are now {}",
                self.scroll_area,
                if hidden { "hidden" } else { "visible" }
            );
            self.client.did_change_scrollbar_visibility(hidden);
        }
    }

    fn post_delayed_fade(&mut self, now: Instant, on_resize: bool) {
        let delay = if on_resize {
            self.config.resize_fade_delay
        } else {
            self.config.fade_delay
        };

        log::trace!("scheduling scrollbar fade for {:?} in {delay:?}", self.scroll_area);

        self.pending_fade = Some(now + delay);
        self.client.post_delayed_animation_task(delay);
    }

    fn cancel_pending_fade(&mut self) {
        if self.pending_fade.is_some() {
            log::trace!("canceling pending scrollbar fade for {:?}", self.scroll_area);
            self.pending_fade = None;
        }
    }
}
