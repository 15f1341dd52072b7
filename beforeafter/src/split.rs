//! Pure split-position math for the comparison slider.
//!
//! Kept free of UI types so clamping and axis projection can be tested
//! without a running renderer.

/// Split position used when no offset binding is supplied.
pub const DEFAULT_OFFSET: f64 = 0.5;

/// Diameter of the drag handle in pixels, when not overridden.
pub const DEFAULT_HANDLE_SIZE: f64 = 40.0;

/// Axis the split line moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// Vertical split line, moving left to right.
    Horizontal,
    /// Horizontal split line, moving top to bottom.
    Vertical,
}

impl SplitAxis {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            SplitAxis::Vertical
        } else {
            SplitAxis::Horizontal
        }
    }
}

/// Clamp a split offset to `[0, 1]`.
///
/// Non-finite input falls back to [`DEFAULT_OFFSET`] instead of poisoning
/// layout math downstream.
pub fn clamp_offset(offset: f64) -> f64 {
    if !offset.is_finite() {
        return DEFAULT_OFFSET;
    }
    offset.clamp(0.0, 1.0)
}

/// Normalized split position for a pointer at `point` over a track of `size`.
///
/// Projects the pointer onto the drag axis and divides by the track extent
/// along that axis. The result is clamped to `[0, 1]`, so positions outside
/// the track saturate at the edges. Returns `None` when the extent is not
/// positive, which happens before the track has been measured.
pub fn offset_from_pointer(point: (f64, f64), size: (f64, f64), axis: SplitAxis) -> Option<f64> {
    let (position, extent) = match axis {
        SplitAxis::Horizontal => (point.0, size.0),
        SplitAxis::Vertical => (point.1, size.1),
    };
    if !extent.is_finite() || extent <= 0.0 || !position.is_finite() {
        return None;
    }
    Some(clamp_offset(position / extent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_unit_range() {
        assert_eq!(clamp_offset(-0.25), 0.0);
        assert_eq!(clamp_offset(1.75), 1.0);
        assert_eq!(clamp_offset(0.0), 0.0);
        assert_eq!(clamp_offset(1.0), 1.0);
        assert_eq!(clamp_offset(0.3), 0.3);
    }

    #[test]
    fn non_finite_offset_falls_back_to_default() {
        assert_eq!(clamp_offset(f64::NAN), DEFAULT_OFFSET);
        assert_eq!(clamp_offset(f64::INFINITY), DEFAULT_OFFSET);
        assert_eq!(clamp_offset(f64::NEG_INFINITY), DEFAULT_OFFSET);
    }

    #[test]
    fn horizontal_axis_uses_x() {
        let offset = offset_from_pointer((200.0, 10.0), (800.0, 400.0), SplitAxis::Horizontal);
        assert_eq!(offset, Some(0.25));
    }

    #[test]
    fn vertical_axis_uses_y() {
        let offset = offset_from_pointer((10.0, 300.0), (800.0, 400.0), SplitAxis::Vertical);
        assert_eq!(offset, Some(0.75));
    }

    #[test]
    fn pointer_outside_track_saturates() {
        let axis = SplitAxis::Horizontal;
        assert_eq!(offset_from_pointer((-50.0, 0.0), (800.0, 400.0), axis), Some(0.0));
        assert_eq!(offset_from_pointer((900.0, 0.0), (800.0, 400.0), axis), Some(1.0));
    }

    #[test]
    fn unmeasured_track_is_rejected() {
        let axis = SplitAxis::Horizontal;
        assert_eq!(offset_from_pointer((10.0, 10.0), (0.0, 400.0), axis), None);
        assert_eq!(offset_from_pointer((10.0, 10.0), (-1.0, 400.0), axis), None);
        // Extent on the other axis does not matter.
        assert_eq!(
            offset_from_pointer((10.0, 10.0), (100.0, 0.0), axis),
            Some(0.1)
        );
    }

    #[test]
    fn axis_follows_vertical_flag() {
        assert_eq!(SplitAxis::from_vertical(false), SplitAxis::Horizontal);
        assert_eq!(SplitAxis::from_vertical(true), SplitAxis::Vertical);
    }
}
