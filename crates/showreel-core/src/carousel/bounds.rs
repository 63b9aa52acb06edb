use serde::Serialize;

use super::geometry::SlideGeometry;
use super::mode::Mode;

/// Whether the desktop prev/next controls should be drawn
///
/// Desktop stepping wraps, but the controls only appear inside the
/// unwrapped range: "prev" disappears on the first window and "next" on the
/// last. Mobile mode has no such controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ControlAdvice {
    pub show_prev: bool,
    pub show_next: bool,
}

impl ControlAdvice {
    pub fn derive(mode: Mode, geometry: &SlideGeometry, desktop_index: usize) -> Self {
        match mode {
            Mode::Mobile => Self::default(),
            Mode::Desktop => Self {
                show_prev: desktop_index > 0,
                show_next: desktop_index < geometry.max_desktop_index(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_edges() {
        let geometry = SlideGeometry::new(7, 3, 3);
        let first = ControlAdvice::derive(Mode::Desktop, &geometry, 0);
        assert!(!first.show_prev);
        assert!(first.show_next);

        let middle = ControlAdvice::derive(Mode::Desktop, &geometry, 2);
        assert!(middle.show_prev && middle.show_next);

        let last = ControlAdvice::derive(Mode::Desktop, &geometry, 4);
        assert!(last.show_prev);
        assert!(!last.show_next);
    }

    #[test]
    fn test_mobile_has_no_controls() {
        let geometry = SlideGeometry::new(7, 3, 3);
        assert_eq!(ControlAdvice::derive(Mode::Mobile, &geometry, 2), ControlAdvice::default());
    }

    #[test]
    fn test_single_window_shows_nothing() {
        let geometry = SlideGeometry::new(3, 3, 3);
        assert_eq!(ControlAdvice::derive(Mode::Desktop, &geometry, 0), ControlAdvice::default());
        let empty = SlideGeometry::new(0, 3, 3);
        assert_eq!(ControlAdvice::derive(Mode::Desktop, &empty, 0), ControlAdvice::default());
    }
}
