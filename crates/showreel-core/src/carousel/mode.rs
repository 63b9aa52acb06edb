use serde::Serialize;

/// Viewport width (px) at which the carousel switches to desktop mode
pub const DESKTOP_BREAKPOINT_PX: u32 = 768;

/// Navigation scheme in effect for the current viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One slide at a time, swipe to move, indicator dots
    Mobile,
    /// A window of several slides, arrow keys and prev/next controls
    Desktop,
}

impl Mode {
    /// Classify a viewport width against a breakpoint.
    ///
    /// The breakpoint itself belongs to desktop.
    #[inline]
    pub fn classify(width_px: u32, breakpoint_px: u32) -> Self {
        if width_px < breakpoint_px {
            Mode::Mobile
        } else {
            Mode::Desktop
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Mobile => "mobile",
            Mode::Desktop => "desktop",
        }
    }
}
