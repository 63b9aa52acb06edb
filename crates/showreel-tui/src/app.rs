use std::sync::Arc;

use ratatui::layout::Rect;
use showreel_core::carousel::CarouselView;
use showreel_core::{AppConfig, Carousel, CaseStudy, Catalog, Mode as NavMode, ThemeMode};
use tracing::{debug, warn};

use crate::input::Action;
use crate::keymap::Keymap;
use crate::theme::Theme;
use crate::transition::OffsetAnimator;
use crate::viewport::TerminalViewport;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the carousel
    Normal,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Case studies on the slides
    pub catalog: Catalog,
    /// Navigation engine, fed by the terminal size
    pub carousel: Carousel<TerminalViewport>,
    pub keymap: Keymap,
    pub theme_mode: ThemeMode,
    pub theme: Theme,
    /// Rendered track offset, trailing the carousel's target
    pub animator: OffsetAnimator,
    pub mode: Mode,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Last known terminal area
    pub area: Rect,
}

impl App {
    pub fn new(config: Arc<AppConfig>, catalog: Catalog, area: Rect) -> Self {
        let viewport = TerminalViewport::new(area.width, config.carousel.cell_width_px);
        let carousel = Carousel::from_config(&config.carousel, catalog.len(), viewport);
        let keymap = Keymap::from_config(&config.keymap);
        let theme_mode = config.ui.theme;
        let mut animator = OffsetAnimator::new(config.ui.transition.clone());
        animator.snap_to(carousel.view().offset.offset_percent);

        Self {
            config,
            catalog,
            carousel,
            keymap,
            theme_mode,
            theme: Theme::for_mode(theme_mode),
            animator,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            area,
        }
    }

    /// Navigation mode currently in effect
    #[inline]
    pub fn nav_mode(&self) -> NavMode {
        self.carousel.mode()
    }

    pub fn view(&self) -> CarouselView {
        self.carousel.view()
    }

    /// Case study under the authoritative index
    pub fn focused_study(&self) -> Option<&CaseStudy> {
        self.catalog.get(self.carousel.view().index)
    }

    /// Terminal resized: resample the viewport on every event
    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
        let before = self.carousel.mode();
        self.carousel.source_mut().resize(width);
        let after = self.carousel.refresh_viewport();
        // Layout changed under the track, no point animating across it
        self.sync_track(before != after);
    }

    /// Apply an action to the app state
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::PrevSlide => {
                self.carousel.prev_slide();
            }
            Action::NextSlide => {
                self.carousel.next_slide();
            }
            Action::GotoGroup(group) => {
                let dots = self.view().indicator.map(|i| i.count).unwrap_or(0);
                if group < dots {
                    self.carousel.goto_group(group);
                }
            }
            Action::GotoWindow(window) => {
                self.carousel.goto_window(window);
            }
            Action::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggle();
                self.theme = Theme::for_mode(self.theme_mode);
                debug!(theme = self.theme_mode.label(), "theme toggled");
            }
            Action::OpenLink => self.open_focused_link(),
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    Mode::Help => Mode::Normal,
                    Mode::Normal => Mode::Help,
                };
            }
            Action::ExitMode => {
                self.mode = Mode::Normal;
                self.status_message = None;
            }
            Action::PointerDown { column, row } => {
                let (x, y) = self.carousel.source().to_px(column, row);
                self.carousel.pointer_pressed(x, y);
            }
            Action::PointerDrag { column, row } => {
                let (x, y) = self.carousel.source().to_px(column, row);
                self.carousel.pointer_moved(x, y);
            }
            Action::PointerUp { column, row } => {
                let (x, y) = self.carousel.source().to_px(column, row);
                self.carousel.pointer_released(x, y);
            }
            Action::None => return,
        }
        self.sync_track(false);
    }

    /// Advance the track transition, returning the offset to draw
    pub fn tick(&mut self) -> f64 {
        self.animator.update()
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.animator.is_animating()
    }

    fn sync_track(&mut self, snap: bool) {
        let target = self.carousel.view().offset.offset_percent;
        if snap {
            self.animator.snap_to(target);
        } else {
            self.animator.set_target(target);
        }
    }

    fn open_focused_link(&mut self) {
        let Some(study) = self.focused_study() else {
            return;
        };
        let link = study.download_link.trim().to_string();
        let title = study.title.clone();

        if link.is_empty() || link == "#" {
            self.status_message = Some(format!("No download available for \"{}\"", title));
            return;
        }

        match open::that(&link) {
            Ok(()) => self.status_message = Some(format!("Opened {}", link)),
            Err(e) => {
                warn!("Failed to open {}: {}", link, e);
                self.status_message = Some(format!("Failed to open link: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(width: u16) -> App {
        let config = AppConfig {
            ui: showreel_core::config::UiConfig {
                transition: showreel_core::TransitionConfig {
                    enabled: false,
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        };
        App::new(Arc::new(config), Catalog::builtin(), Rect::new(0, 0, width, 40))
    }

    #[test]
    fn test_mode_from_terminal_width() {
        assert_eq!(app(80).nav_mode(), NavMode::Mobile);
        assert_eq!(app(96).nav_mode(), NavMode::Desktop);
    }

    #[test]
    fn test_next_moves_track() {
        let mut app = app(120);
        app.dispatch(Action::NextSlide);
        assert_eq!(app.view().index, 1);
        assert!((app.tick() + 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_to_mobile_snaps_track() {
        let mut app = app(120);
        app.dispatch(Action::PrevSlide);
        assert_eq!(app.view().index, 4);

        app.resize(60, 40);
        assert_eq!(app.nav_mode(), NavMode::Mobile);
        assert_eq!(app.view().index, 0);
        assert_eq!(app.animator.current(), 0.0);
        assert_eq!(app.carousel.state().desktop_index(), 4);
    }

    #[test]
    fn test_goto_group_ignores_missing_dots() {
        let mut app = app(60);
        app.dispatch(Action::GotoGroup(5));
        assert_eq!(app.view().index, 0);
        app.dispatch(Action::GotoGroup(2));
        assert_eq!(app.view().index, 6);
    }

    #[test]
    fn test_end_jumps_to_last_window() {
        let mut app = app(120);
        app.dispatch(Action::GotoWindow(usize::MAX));
        assert_eq!(app.view().index, 4);
        app.dispatch(Action::GotoWindow(0));
        assert_eq!(app.view().index, 0);
    }

    #[test]
    fn test_pointer_swipe() {
        let mut app = app(60);
        app.dispatch(Action::PointerDown { column: 40, row: 10 });
        app.dispatch(Action::PointerDrag { column: 30, row: 10 });
        app.dispatch(Action::PointerUp { column: 30, row: 10 });
        assert_eq!(app.view().index, 1);
    }

    #[test]
    fn test_toggle_theme_keeps_position() {
        let mut app = app(120);
        app.dispatch(Action::NextSlide);
        app.dispatch(Action::ToggleTheme);
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.view().index, 1);
    }

    #[test]
    fn test_placeholder_link_sets_status() {
        let mut app = app(120);
        app.dispatch(Action::OpenLink);
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("No download available")));
    }

    #[test]
    fn test_help_toggles() {
        let mut app = app(120);
        app.dispatch(Action::ToggleHelp);
        assert_eq!(app.mode, Mode::Help);
        app.dispatch(Action::ExitMode);
        assert_eq!(app.mode, Mode::Normal);
    }
}
