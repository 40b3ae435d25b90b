//! The drawable scrollbars the animation controllers mutate.

/// The axis a scrollbar scrolls along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// A scrollbar along the horizontal axis.
    Horizontal,
    /// A scrollbar along the vertical axis.
    Vertical,
}

/// The identifier of a scrollable area.
///
/// Opaque to the controllers; it is only handed back to
/// [`AnimationClient::scrollbars_for`](crate::AnimationClient::scrollbars_for)
/// to look up the drawable scrollbars of the area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAreaId(pub u64);

/// A drawable overlay scrollbar.
///
/// The animation controllers only ever mutate two properties: the opacity of
/// the whole scrollbar and the thickness scale of its thumb. Everything else
/// about the scrollbar belongs to the embedder.
pub trait Scrollbar {
    /// Returns the [`Orientation`] of the scrollbar.
    fn orientation(&self) -> Orientation;

    /// Returns the current opacity of the scrollbar.
    fn opacity(&self) -> f32;

    /// Sets the opacity of the whole scrollbar.
    fn set_opacity(&mut self, opacity: f32);

    /// Returns the current thumb thickness scale.
    fn thumb_thickness_scale(&self) -> f32;

    /// Sets the thumb thickness scale.
    fn set_thumb_thickness_scale(&mut self, scale: f32);
}

/// A solid-color overlay scrollbar.
///
/// The simplest drawable scrollbar: a single-color thumb of a fixed
/// thickness on an invisible track. Embedders with richer scrollbar objects
/// implement [`Scrollbar`] on their own types instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidScrollbar {
    orientation: Orientation,
    thumb_thickness: f32,
    track_start: f32,
    is_left_side_vertical: bool,
    opacity: f32,
    thumb_thickness_scale: f32,
}

impl SolidScrollbar {
    /// Creates a new [`SolidScrollbar`].
    ///
    /// `track_start` is the offset of the track from the edge of the area,
    /// and `is_left_side_vertical` places a vertical scrollbar on the left
    /// edge (e.g. for right-to-left layouts).
    pub fn new(
        orientation: Orientation,
        thumb_thickness: f32,
        track_start: f32,
        is_left_side_vertical: bool,
    ) -> Self {
        Self {
            orientation,
            thumb_thickness,
            track_start,
            is_left_side_vertical,
            opacity: 1.0,
            thumb_thickness_scale: 1.0,
        }
    }

    /// Returns the thumb thickness in logical pixels.
    pub fn thumb_thickness(&self) -> f32 {
        self.thumb_thickness
    }

    /// Returns the offset of the track from the edge of the area.
    pub fn track_start(&self) -> f32 {
        self.track_start
    }

    /// Returns whether a vertical scrollbar sits on the left edge.
    pub fn is_left_side_vertical(&self) -> bool {
        self.is_left_side_vertical
    }
}

impl Scrollbar for SolidScrollbar {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn opacity(&self) -> f32 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    fn thumb_thickness_scale(&self) -> f32 {
        self.thumb_thickness_scale
    }

    fn set_thumb_thickness_scale(&mut self, scale: f32) {
        self.thumb_thickness_scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::{Orientation, Scrollbar, SolidScrollbar};

    #[test]
    fn test_solid_scrollbar_geometry() {
        let scrollbar = SolidScrollbar::new(Orientation::Vertical, 8.0, 2.0, true);

        assert_eq!(scrollbar.orientation(), Orientation::Vertical);
        assert_eq!(scrollbar.thumb_thickness(), 8.0);
        assert_eq!(scrollbar.track_start(), 2.0);
        assert!(scrollbar.is_left_side_vertical());
    }

    #[test]
    fn test_solid_scrollbar_starts_fully_visible() {
        let scrollbar = SolidScrollbar::new(Orientation::Horizontal, 10.0, 0.0, false);

        assert_eq!(scrollbar.opacity(), 1.0);
        assert_eq!(scrollbar.thumb_thickness_scale(), 1.0);
    }

    #[test]
    fn test_solid_scrollbar_mutation() {
        let mut scrollbar = SolidScrollbar::new(Orientation::Horizontal, 10.0, 0.0, false);

        scrollbar.set_opacity(0.5);
        scrollbar.set_thumb_thickness_scale(0.4);

        assert_eq!(scrollbar.opacity(), 0.5);
        assert_eq!(scrollbar.thumb_thickness_scale(), 0.4);
    }
}
