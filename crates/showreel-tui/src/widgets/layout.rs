use ratatui::layout::{Constraint, Layout, Position, Rect};
use showreel_core::Mode as NavMode;

/// Width of the prev/next control buttons
pub const CONTROL_WIDTH: u16 = 3;
/// Width of one indicator dot
pub const DOT_WIDTH: u16 = 2;
/// Distance between the left edges of neighbouring dots
pub const DOT_STRIDE: u16 = 3;

/// Screen regions shared by rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub track: Rect,
    /// Indicator row (zero height outside mobile mode)
    pub dots: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, mode: NavMode) -> Self {
        let dots_height = match mode {
            NavMode::Mobile => 1,
            NavMode::Desktop => 0,
        };
        let [header, track, dots, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(dots_height),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            header,
            track,
            dots,
            status,
        }
    }

    /// "Previous" button, vertically centred on the track's left edge
    pub fn prev_control(&self) -> Rect {
        Rect::new(
            self.track.x,
            self.track.y + self.track.height / 2,
            CONTROL_WIDTH.min(self.track.width),
            self.track.height.min(1),
        )
    }

    /// "Next" button, vertically centred on the track's right edge
    pub fn next_control(&self) -> Rect {
        let width = CONTROL_WIDTH.min(self.track.width);
        Rect::new(
            self.track.right().saturating_sub(width),
            self.track.y + self.track.height / 2,
            width,
            self.track.height.min(1),
        )
    }

    /// Cell range of dot `group` in a centred row of `count` dots
    pub fn dot_rect(&self, group: usize, count: usize) -> Rect {
        let count = u16::try_from(count).unwrap_or(u16::MAX);
        let group = u16::try_from(group).unwrap_or(u16::MAX);
        let row_width = count.saturating_mul(DOT_STRIDE).saturating_sub(DOT_STRIDE - DOT_WIDTH);
        let start = self.dots.x + self.dots.width.saturating_sub(row_width) / 2;
        let rect = Rect::new(
            start.saturating_add(group.saturating_mul(DOT_STRIDE)),
            self.dots.y,
            DOT_WIDTH,
            self.dots.height,
        );
        rect.intersection(self.dots)
    }

    /// Dot under `at`, if any
    pub fn dot_at(&self, at: Position, count: usize) -> Option<usize> {
        (0..count).find(|&group| self.dot_rect(group, count).contains(at))
    }
}
