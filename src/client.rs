//! The capabilities the controllers consume from their embedder.
use crate::scrollbar::{ScrollAreaId, Scrollbar};
use crate::time::Duration;

/// The compositor-side host driving the scrollbar animations.
///
/// Implemented by the embedder and handed to a
/// [`FadeController`](crate::FadeController) at construction. All methods
/// are fire-and-forget requests that the host satisfies from its frame loop;
/// none of them may call back into the controller.
pub trait AnimationClient {
    /// The drawable scrollbar type of the host.
    type Scrollbar: Scrollbar;

    /// Asks the host to wake the controller up after `delay`.
    ///
    /// The controller keeps the authoritative deadline itself and re-checks
    /// it inside [`FadeController::animate`](crate::FadeController::animate),
    /// so a late, duplicate, or stale wake-up is harmless. A new request
    /// supersedes any previous one.
    fn post_delayed_animation_task(&mut self, delay: Duration);

    /// Marks the frame dirty so the next composite reflects the current
    /// opacity and thumb thickness.
    fn request_redraw(&mut self);

    /// Ensures [`FadeController::animate`](crate::FadeController::animate)
    /// is called on the next frame.
    fn request_animation_frame(&mut self);

    /// Notifies the host that the scrollbars flipped between hidden and
    /// shown, for hit-testing and accessibility updates.
    fn did_change_scrollbar_visibility(&mut self, hidden: bool);

    /// Returns the drawable scrollbars of the given scroll area.
    fn scrollbars_for(&mut self, area: ScrollAreaId) -> &mut [Self::Scrollbar];
}
