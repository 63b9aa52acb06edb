use serde::Serialize;

use super::geometry::SlideGeometry;

/// Indicator dots for mobile mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndicatorGroups {
    /// Dots to render (0 for an empty carousel)
    pub count: usize,
    /// Slides each dot stands for
    pub slides_per_group: usize,
    /// Dot covering the current mobile index
    pub active: usize,
}

impl IndicatorGroups {
    /// Derive the dot row from the mobile index
    pub fn derive(geometry: &SlideGeometry, mobile_index: usize) -> Self {
        if geometry.is_empty() {
            return Self {
                count: 0,
                slides_per_group: 0,
                active: 0,
            };
        }

        let slides_per_group = geometry.slides_per_group();
        Self {
            count: geometry.group_count(),
            slides_per_group,
            active: mobile_index / slides_per_group,
        }
    }

    /// `(group, is_active)` for every dot, left to right
    pub fn dots(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.count).map(move |group| (group, group == self.active))
    }
}
