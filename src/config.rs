//! Configure the timing and geometry of the scrollbar animations.
use crate::time::Duration;

/// The timing and geometry parameters of the scrollbar animations.
///
/// The values are platform and theme specific, so embedders inject them at
/// construction instead of relying on built-in constants. The defaults match
/// a desktop overlay scrollbar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationConfig {
    /// Idle time before a visible scrollbar starts fading out.
    pub fade_delay: Duration,
    /// Idle time before fading out when the last scroll came from a resize.
    pub resize_fade_delay: Duration,
    /// Length of the fade-out (opacity) animation.
    pub fade_duration: Duration,
    /// Length of a thumb thinning or thickening animation.
    pub thinning_duration: Duration,
    /// Thumb thickness scale of an idle scrollbar; hovered thumbs grow to `1.0`.
    pub idle_thickness_scale: f32,
    /// Distance in logical pixels within which the mouse counts as near a
    /// scrollbar.
    pub mouse_move_distance: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fade_delay: Duration::from_millis(500),
            resize_fade_delay: Duration::from_millis(2000),
            fade_duration: Duration::from_millis(300),
            thinning_duration: Duration::from_millis(250),
            idle_thickness_scale: 0.4,
            mouse_move_distance: 25.0,
        }
    }
}

impl AnimationConfig {
    /// Checks that the configuration can drive the animations.
    ///
    /// Animation durations must be positive; the fade delays may be zero to
    /// fade out immediately once idle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fade_duration.is_zero() {
            return Err(ConfigError::ZeroDuration {
                name: "fade duration",
            });
        }

        if self.thinning_duration.is_zero() {
            return Err(ConfigError::ZeroDuration {
                name: "thinning duration",
            });
        }

        if self.idle_thickness_scale.is_nan()
            || self.idle_thickness_scale <= 0.0
            || self.idle_thickness_scale > 1.0
        {
            return Err(ConfigError::InvalidIdleThicknessScale(
                self.idle_thickness_scale,
            ));
        }

        if self.mouse_move_distance.is_nan() || self.mouse_move_distance < 0.0 {
            return Err(ConfigError::InvalidMouseMoveDistance(
                self.mouse_move_distance,
            ));
        }

        Ok(())
    }
}

/// An error produced when validating an [`AnimationConfig`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// An animation duration was zero.
    #[error("{name} must be greater than zero")]
    ZeroDuration {
        /// The name of the offending duration.
        name: &'static str,
    },
    /// The idle thickness scale was outside `(0, 1]`.
    #[error("idle thickness scale must be within (0, 1], got {0}")]
    InvalidIdleThicknessScale(f32),
    /// The near-distance threshold was negative or not a number.
    #[error("mouse move distance must be a non-negative number, got {0}")]
    InvalidMouseMoveDistance(f32),
}
