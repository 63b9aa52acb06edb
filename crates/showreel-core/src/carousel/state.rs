use tracing::debug;

use super::geometry::SlideGeometry;
use super::mode::Mode;
use super::track::{DesktopTrack, MobileTrack, Track, TrackBounds};

/// The track selected by the current mode
#[derive(Debug, Clone, Copy)]
pub enum ActiveTrack<'a> {
    Mobile(&'a MobileTrack),
    Desktop(&'a DesktopTrack),
}

impl<'a> ActiveTrack<'a> {
    pub fn as_track(&self) -> &'a dyn Track {
        match *self {
            ActiveTrack::Mobile(track) => track,
            ActiveTrack::Desktop(track) => track,
        }
    }

    pub fn index(&self) -> usize {
        self.as_track().index()
    }

    pub fn bounds(&self, geometry: &SlideGeometry) -> TrackBounds {
        self.as_track().bounds(geometry)
    }
}

/// Both navigation tracks plus the mode that decides which one renders
///
/// The tracks never feed into each other: leaving desktop mode keeps the
/// window where it was, and coming back finds it unchanged unless a bound
/// moved underneath it.
#[derive(Debug, Clone)]
pub struct NavigationState {
    geometry: SlideGeometry,
    mode: Mode,
    mobile: MobileTrack,
    desktop: DesktopTrack,
}

impl NavigationState {
    pub fn new(geometry: SlideGeometry, mode: Mode) -> Self {
        Self {
            geometry,
            mode,
            mobile: MobileTrack::default(),
            desktop: DesktopTrack::default(),
        }
    }

    #[inline]
    pub fn geometry(&self) -> &SlideGeometry {
        &self.geometry
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn mobile_index(&self) -> usize {
        self.mobile.index()
    }

    #[inline]
    pub fn desktop_index(&self) -> usize {
        self.desktop.index()
    }

    pub fn active(&self) -> ActiveTrack<'_> {
        match self.mode {
            Mode::Mobile => ActiveTrack::Mobile(&self.mobile),
            Mode::Desktop => ActiveTrack::Desktop(&self.desktop),
        }
    }

    /// Index of the authoritative track
    pub fn active_index(&self) -> usize {
        self.active().index()
    }

    /// Store a new mode. Indices are left alone; callers follow up with
    /// [`reclamp`](Self::reclamp). Returns true if the mode changed.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if self.mode == mode {
            return false;
        }
        debug!(from = self.mode.label(), to = mode.label(), "carousel mode switch");
        self.mode = mode;
        true
    }

    /// Replace the slide geometry (item count or window size) and reclamp
    pub fn set_geometry(&mut self, geometry: SlideGeometry) {
        self.geometry = geometry;
        self.reclamp();
    }

    /// Pull both indices back inside the current bounds.
    /// Returns true if either index moved.
    pub fn reclamp(&mut self) -> bool {
        let before = (self.mobile.index(), self.desktop.index());
        let mobile_moved = self.mobile.clamp(&self.geometry);
        let desktop_moved = self.desktop.clamp(&self.geometry);
        if mobile_moved || desktop_moved {
            debug!(
                mobile_from = before.0,
                mobile_to = self.mobile.index(),
                desktop_from = before.1,
                desktop_to = self.desktop.index(),
                "carousel indices reclamped"
            );
        }
        mobile_moved || desktop_moved
    }

    pub fn step_mobile(&mut self, delta: isize) {
        self.mobile.step(delta, &self.geometry);
    }

    pub fn step_desktop(&mut self, delta: isize) {
        self.desktop.step(delta, &self.geometry);
    }

    pub fn goto_mobile_group(&mut self, group: usize) {
        self.mobile.goto(group, &self.geometry);
    }

    pub fn goto_desktop_window(&mut self, window: usize) {
        self.desktop.goto(window, &self.geometry);
    }
}
