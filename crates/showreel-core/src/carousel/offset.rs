use serde::Serialize;

use super::geometry::SlideGeometry;
use super::mode::Mode;

/// Target geometry of the sliding track, as percentages of the viewport width
///
/// The offset is what the track should be translated by once any transition
/// settles; interpolating towards it is the renderer's business.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackOffset {
    /// Horizontal translation (zero or negative)
    pub offset_percent: f64,
    /// Width of a single slide
    pub item_width_percent: f64,
    /// Width of the whole track holding every slide
    pub track_width_percent: f64,
}

impl TrackOffset {
    pub const EMPTY: TrackOffset = TrackOffset {
        offset_percent: 0.0,
        item_width_percent: 0.0,
        track_width_percent: 0.0,
    };

    /// Derive the track geometry for `index` on the `mode` track
    pub fn derive(mode: Mode, geometry: &SlideGeometry, index: usize) -> Self {
        if geometry.is_empty() {
            return Self::EMPTY;
        }

        let item_width_percent = match mode {
            Mode::Mobile => 100.0,
            Mode::Desktop => 100.0 / geometry.visible_count() as f64,
        };

        Self {
            offset_percent: -(item_width_percent * index as f64),
            item_width_percent,
            track_width_percent: item_width_percent * geometry.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mobile_offset() {
        let geometry = SlideGeometry::new(7, 3, 3);
        let offset = TrackOffset::derive(Mode::Mobile, &geometry, 3);
        assert!(approx(offset.offset_percent, -300.0));
        assert!(approx(offset.item_width_percent, 100.0));
        assert!(approx(offset.track_width_percent, 700.0));
    }

    #[test]
    fn test_desktop_offset() {
        let geometry = SlideGeometry::new(7, 3, 3);
        let offset = TrackOffset::derive(Mode::Desktop, &geometry, 4);
        assert!(approx(offset.offset_percent, -(100.0 / 3.0) * 4.0));
        assert!(approx(offset.track_width_percent, (100.0 / 3.0) * 7.0));
    }

    #[test]
    fn test_first_slide_has_no_shift() {
        let geometry = SlideGeometry::new(7, 3, 3);
        assert!(approx(TrackOffset::derive(Mode::Desktop, &geometry, 0).offset_percent, 0.0));
        assert!(approx(TrackOffset::derive(Mode::Mobile, &geometry, 0).offset_percent, 0.0));
    }

    #[test]
    fn test_empty_is_zero() {
        let geometry = SlideGeometry::new(0, 3, 3);
        assert_eq!(TrackOffset::derive(Mode::Desktop, &geometry, 0), TrackOffset::EMPTY);
    }
}
