//! Track the progress of timed animations.
use crate::time::{Duration, Instant};

/// The progress of a linearly advancing animation of a fixed duration.
///
/// A [`Transition`] never reads a clock: callers feed it the current time on
/// every tick. The start time anchors lazily on the first tick after
/// [`start`](Self::start), so event handlers can arm an animation without
/// knowing what time it is.
#[derive(Debug, Clone)]
pub struct Transition {
    duration: Duration,
    anchor: Option<Instant>,
    running: bool,
}

impl Transition {
    /// Creates a stopped [`Transition`] with the given duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            anchor: None,
            running: false,
        }
    }

    /// Arms the transition; the next [`tick`](Self::tick) restarts progress
    /// at zero.
    pub fn start(&mut self) {
        self.running = true;
        self.anchor = None;
    }

    /// Stops the transition.
    pub fn stop(&mut self) {
        self.running = false;
        self.anchor = None;
    }

    /// Returns whether the transition is currently running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the duration of the transition.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Computes the progress at `now`, as a value in `[0, 1]`.
    ///
    /// The first tick after [`start`](Self::start) anchors the start time
    /// and therefore always reports zero progress.
    pub fn tick(&mut self, now: Instant) -> f32 {
        debug_assert!(self.running, "tick on a stopped transition");

        let anchor = *self.anchor.get_or_insert(now);

        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(anchor);

        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Transition;
    use crate::time::{Duration, Instant};

    #[test]
    fn test_first_tick_anchors_at_zero() {
        let mut transition = Transition::new(Duration::from_millis(300));
        transition.start();

        let now = Instant::now();

        assert_eq!(transition.tick(now), 0.0);
    }

    #[test]
    fn test_midpoint_progress() {
        let mut transition = Transition::new(Duration::from_millis(300));
        transition.start();

        let start = Instant::now();
        let _ = transition.tick(start);

        assert_eq!(transition.tick(start + Duration::from_millis(150)), 0.5);
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut transition = Transition::new(Duration::from_millis(300));
        transition.start();

        let start = Instant::now();
        let _ = transition.tick(start);

        assert_eq!(transition.tick(start + Duration::from_secs(10)), 1.0);
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut transition = Transition::new(Duration::from_millis(300));
        transition.start();

        let start = Instant::now();
        let _ = transition.tick(start);
        let _ = transition.tick(start + Duration::from_millis(150));

        transition.start();

        assert_eq!(transition.tick(start + Duration::from_millis(200)), 0.0);
    }

    #[test]
    fn test_stop_clears_running() {
        let mut transition = Transition::new(Duration::from_millis(300));

        assert!(!transition.is_running());

        transition.start();
        assert!(transition.is_running());

        transition.stop();
        assert!(!transition.is_running());
    }
}
