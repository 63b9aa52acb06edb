use super::geometry::SlideGeometry;

/// Inclusive index range a track may occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackBounds {
    pub min: usize,
    pub max: usize,
}

impl TrackBounds {
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        (self.min..=self.max).contains(&index)
    }
}

/// One navigation scheme's position and movement rules
pub trait Track {
    /// Current index
    fn index(&self) -> usize;

    /// Valid range for `geometry`
    fn bounds(&self, geometry: &SlideGeometry) -> TrackBounds;

    /// Move by `delta` under this track's boundary policy
    fn step(&mut self, delta: isize, geometry: &SlideGeometry);

    /// Jump to a group (mobile) or window (desktop), clamped into bounds
    fn goto(&mut self, target: usize, geometry: &SlideGeometry);

    /// Pull the index back inside bounds. Returns true if it moved.
    fn clamp(&mut self, geometry: &SlideGeometry) -> bool;
}

/// Single-slide index for narrow viewports. Saturates at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileTrack {
    index: usize,
}

impl MobileTrack {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Track for MobileTrack {
    #[inline]
    fn index(&self) -> usize {
        self.index
    }

    fn bounds(&self, geometry: &SlideGeometry) -> TrackBounds {
        TrackBounds {
            min: 0,
            max: geometry.max_mobile_index(),
        }
    }

    fn step(&mut self, delta: isize, geometry: &SlideGeometry) {
        let max = geometry.max_mobile_index();
        self.index = self.index.saturating_add_signed(delta).min(max);
    }

    fn goto(&mut self, group: usize, geometry: &SlideGeometry) {
        self.index = group
            .saturating_mul(geometry.slides_per_group())
            .min(geometry.max_mobile_index());
    }

    fn clamp(&mut self, geometry: &SlideGeometry) -> bool {
        let clamped = self.index.min(geometry.max_mobile_index());
        let moved = clamped != self.index;
        self.index = clamped;
        moved
    }
}

/// Left edge of the visible window on wide viewports. Wraps at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DesktopTrack {
    index: usize,
}

impl DesktopTrack {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Track for DesktopTrack {
    #[inline]
    fn index(&self) -> usize {
        self.index
    }

    fn bounds(&self, geometry: &SlideGeometry) -> TrackBounds {
        TrackBounds {
            min: 0,
            max: geometry.max_desktop_index(),
        }
    }

    fn step(&mut self, delta: isize, geometry: &SlideGeometry) {
        let max = geometry.max_desktop_index();
        let period = (max + 1) as isize;
        let from = self.index.min(max) as isize;
        // rem_euclid keeps the result non-negative, so -1 from 0 lands on max
        self.index = (from + delta % period).rem_euclid(period) as usize;
    }

    fn goto(&mut self, window: usize, geometry: &SlideGeometry) {
        self.index = window.min(geometry.max_desktop_index());
    }

    fn clamp(&mut self, geometry: &SlideGeometry) -> bool {
        let clamped = self.index.min(geometry.max_desktop_index());
        let moved = clamped != self.index;
        self.index = clamped;
        moved
    }
}
