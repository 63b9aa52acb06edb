//! Carousel engine: navigation state wired to its inputs and derivations

use std::ops::Range;

use serde::Serialize;
use tracing::debug;

use super::bounds::ControlAdvice;
use super::geometry::SlideGeometry;
use super::gesture::{SwipeDirection, SwipeTracker};
use super::indicator::IndicatorGroups;
use super::intent::{NavCommand, NavInput};
use super::mode::Mode;
use super::offset::TrackOffset;
use super::state::NavigationState;
use crate::config::CarouselConfig;

/// Supplies the current viewport width in pixels
///
/// The carousel owns its source and samples it whenever it is told the
/// viewport changed, so dropping the carousel drops the subscription too.
pub trait ViewportSource {
    fn viewport_width(&self) -> u32;
}

/// Viewport with a width set by hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub u32);

impl FixedViewport {
    pub fn set(&mut self, width_px: u32) {
        self.0 = width_px;
    }
}

impl ViewportSource for FixedViewport {
    fn viewport_width(&self) -> u32 {
        self.0
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarouselView {
    pub mode: Mode,
    /// Number of slides
    pub len: usize,
    /// Index of the authoritative track
    pub index: usize,
    pub offset: TrackOffset,
    /// Present in mobile mode with at least one slide
    pub indicator: Option<IndicatorGroups>,
    /// All false outside desktop mode
    pub controls: ControlAdvice,
}

impl CarouselView {
    /// Slides on screen once the track settles
    pub fn visible_range(&self, visible_count: usize) -> Range<usize> {
        let span = match self.mode {
            Mode::Mobile => 1,
            Mode::Desktop => visible_count.max(1),
        };
        let start = self.index.min(self.len);
        start..(start + span).min(self.len)
    }
}

/// Responsive carousel bound to a viewport source
pub struct Carousel<S: ViewportSource> {
    state: NavigationState,
    source: S,
    breakpoint_px: u32,
    gesture: SwipeTracker,
}

impl<S: ViewportSource> Carousel<S> {
    /// Create a carousel, classifying the viewport once up front
    pub fn new(geometry: SlideGeometry, source: S, breakpoint_px: u32, swipe_threshold_px: u32) -> Self {
        let mode = Mode::classify(source.viewport_width(), breakpoint_px);
        Self {
            state: NavigationState::new(geometry, mode),
            source,
            breakpoint_px,
            gesture: SwipeTracker::new(swipe_threshold_px),
        }
    }

    /// Create from configuration for a list of `len` slides
    pub fn from_config(config: &CarouselConfig, len: usize, source: S) -> Self {
        Self::new(
            config.geometry(len),
            source,
            config.breakpoint_px,
            config.swipe_threshold_px,
        )
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the source. Call [`refresh_viewport`](Self::refresh_viewport)
    /// after changing it.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn geometry(&self) -> &SlideGeometry {
        self.state.geometry()
    }

    /// Re-sample the viewport, reclassify and reclamp.
    ///
    /// Runs in full on every call; reclamping an already valid state is a no-op.
    pub fn refresh_viewport(&mut self) -> Mode {
        let width = self.source.viewport_width();
        let mode = Mode::classify(width, self.breakpoint_px);
        if self.state.set_mode(mode) {
            // A drag that started under the other layout must not commit here
            self.gesture.cancel();
        }
        self.state.reclamp();
        mode
    }

    /// Change the number of slides, keeping both positions valid
    pub fn set_slide_count(&mut self, len: usize) {
        let geometry = self.state.geometry().with_len(len);
        self.state.set_geometry(geometry);
    }

    /// Apply one navigation input. Returns true if it mapped to a command
    /// in the current mode.
    pub fn handle(&mut self, input: NavInput) -> bool {
        let Some(command) = input.route(self.state.mode()) else {
            return false;
        };
        match command {
            NavCommand::StepMobile(delta) => self.state.step_mobile(delta),
            NavCommand::StepDesktop(delta) => self.state.step_desktop(delta),
            NavCommand::GotoMobileGroup(group) => self.state.goto_mobile_group(group),
            NavCommand::GotoDesktopWindow(window) => self.state.goto_desktop_window(window),
        }
        true
    }

    /// Desktop "previous" control
    pub fn prev_slide(&mut self) -> bool {
        self.handle(NavInput::PrevControl)
    }

    /// Desktop "next" control
    pub fn next_slide(&mut self) -> bool {
        self.handle(NavInput::NextControl)
    }

    /// Mobile indicator dot
    pub fn goto_group(&mut self, group: usize) -> bool {
        self.handle(NavInput::Dot(group))
    }

    /// Desktop jump to a window, clamped to the last one
    pub fn goto_window(&mut self, window: usize) -> bool {
        self.handle(NavInput::Window(window))
    }

    /// Pointer down on the track. Only tracked in mobile mode.
    pub fn pointer_pressed(&mut self, x: i32, y: i32) {
        if self.state.mode() == Mode::Mobile {
            self.gesture.press(x, y);
        }
    }

    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        self.gesture.move_to(x, y);
    }

    /// Pointer up. Applies and returns the swipe if one was committed.
    pub fn pointer_released(&mut self, x: i32, y: i32) -> Option<SwipeDirection> {
        let direction = self.gesture.release(x, y)?;
        debug!(?direction, "swipe committed");
        self.handle(NavInput::Swipe(direction));
        Some(direction)
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_tracking()
    }

    /// Derive the current presentation values
    pub fn view(&self) -> CarouselView {
        let state = &self.state;
        let geometry = state.geometry();
        let mode = state.mode();
        let index = state.active_index();

        let indicator = match mode {
            Mode::Mobile if !geometry.is_empty() => {
                Some(IndicatorGroups::derive(geometry, state.mobile_index()))
            }
            _ => None,
        };

        CarouselView {
            mode,
            len: geometry.len(),
            index,
            offset: TrackOffset::derive(mode, geometry, index),
            indicator,
            controls: ControlAdvice::derive(mode, geometry, state.desktop_index()),
        }
    }
}
