use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use showreel_core::Mode as NavMode;

use crate::app::{App, Mode};
use crate::keymap::KeyBinding;
use crate::widgets::ScreenLayout;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    PrevSlide,            // Desktop window back (wraps)
    NextSlide,            // Desktop window forward (wraps)
    GotoGroup(usize),     // Mobile indicator dot
    GotoWindow(usize),    // Desktop window jump (clamped)
    ToggleTheme,
    OpenLink,             // Open the focused case study's download link
    ToggleHelp,
    ExitMode,
    // Pointer drag on the track (mobile swipe source), in terminal cells
    PointerDown { column: u16, row: u16 },
    PointerDrag { column: u16, row: u16 },
    PointerUp { column: u16, row: u16 },
    None,
}

/// Handle a key event and return the corresponding action
///
/// Arrow/prev/next and Home/End keys only act in desktop mode and digit keys
/// only in mobile mode; outside their mode they resolve to `Action::None`.
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.mode == Mode::Help {
        // Any key closes help
        return Action::ExitMode;
    }

    let Some(action) = lookup(key, app) else {
        return Action::None;
    };

    match (action, app.nav_mode()) {
        (Action::PrevSlide | Action::NextSlide | Action::GotoWindow(_), NavMode::Mobile) => {
            Action::None
        }
        (Action::GotoGroup(_), NavMode::Desktop) => Action::None,
        (action, _) => action,
    }
}

fn lookup(key: KeyEvent, app: &App) -> Option<Action> {
    let binding = KeyBinding::new(key.code, key.modifiers);
    if let Some(action) = app.keymap.get(&binding) {
        return Some(action.clone());
    }

    // Terminals report shifted punctuation ('?', '!') with SHIFT set
    match key.code {
        KeyCode::Char(c) if key.modifiers == KeyModifiers::SHIFT && !c.is_ascii_alphabetic() => {
            app.keymap.get(&KeyBinding::simple(key.code)).cloned()
        }
        _ => None,
    }
}

/// Handle a mouse event and return the corresponding action
///
/// Desktop: clicks on a visible prev/next control. Mobile: clicks on an
/// indicator dot, or press/drag/release on the track for swipes.
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    if app.mode == Mode::Help {
        return Action::None;
    }

    let view = app.carousel.view();
    let layout = ScreenLayout::new(app.area, view.mode);
    let at = Position::new(mouse.column, mouse.row);
    let (column, row) = (mouse.column, mouse.row);

    match (mouse.kind, view.mode) {
        (MouseEventKind::Down(MouseButton::Left), NavMode::Desktop) => {
            if view.controls.show_prev && layout.prev_control().contains(at) {
                Action::PrevSlide
            } else if view.controls.show_next && layout.next_control().contains(at) {
                Action::NextSlide
            } else {
                Action::None
            }
        }
        (MouseEventKind::Down(MouseButton::Left), NavMode::Mobile) => {
            let dot_count = view.indicator.map(|i| i.count).unwrap_or(0);
            if let Some(group) = layout.dot_at(at, dot_count) {
                Action::GotoGroup(group)
            } else if layout.track.contains(at) {
                Action::PointerDown { column, row }
            } else {
                Action::None
            }
        }
        (MouseEventKind::Drag(MouseButton::Left), NavMode::Mobile) if app.carousel.is_dragging() => {
            Action::PointerDrag { column, row }
        }
        (MouseEventKind::Up(MouseButton::Left), NavMode::Mobile) if app.carousel.is_dragging() => {
            Action::PointerUp { column, row }
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyEventKind;
    use ratatui::layout::Rect;
    use showreel_core::{AppConfig, Catalog};

    use super::*;

    fn app(width: u16) -> App {
        App::new(
            Arc::new(AppConfig::default()),
            Catalog::builtin(),
            Rect::new(0, 0, width, 30),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_arrows_only_in_desktop() {
        assert_eq!(handle_key_event(key(KeyCode::Right), &app(120)), Action::NextSlide);
        assert_eq!(handle_key_event(key(KeyCode::Right), &app(60)), Action::None);
    }

    #[test]
    fn test_end_only_in_desktop() {
        assert_eq!(
            handle_key_event(key(KeyCode::End), &app(120)),
            Action::GotoWindow(usize::MAX)
        );
        assert_eq!(handle_key_event(key(KeyCode::End), &app(60)), Action::None);
    }

    #[test]
    fn test_digits_only_in_mobile() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('2')), &app(60)),
            Action::GotoGroup(1)
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('2')), &app(120)), Action::None);
    }

    #[test]
    fn test_shifted_question_mark_opens_help() {
        let event = KeyEvent::new_with_kind(
            KeyCode::Char('?'),
            KeyModifiers::SHIFT,
            KeyEventKind::Press,
        );
        assert_eq!(handle_key_event(event, &app(120)), Action::ToggleHelp);
    }

    #[test]
    fn test_any_key_closes_help() {
        let mut app = app(120);
        app.dispatch(Action::ToggleHelp);
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &app), Action::ExitMode);
    }

    #[test]
    fn test_desktop_control_clicks() {
        let app = app(120);
        let layout = ScreenLayout::new(app.area, NavMode::Desktop);
        let next = layout.next_control();
        let prev = layout.prev_control();
        let down = MouseEventKind::Down(MouseButton::Left);

        assert_eq!(
            handle_mouse_event(mouse(down, next.x + 1, next.y), &app),
            Action::NextSlide
        );
        // index 0: the prev control is hidden
        assert_eq!(handle_mouse_event(mouse(down, prev.x, prev.y), &app), Action::None);
    }

    #[test]
    fn test_mobile_dot_and_track_clicks() {
        let app = app(60);
        let layout = ScreenLayout::new(app.area, NavMode::Mobile);
        let dot = layout.dot_rect(2, 3);
        let down = MouseEventKind::Down(MouseButton::Left);

        assert_eq!(
            handle_mouse_event(mouse(down, dot.x, dot.y), &app),
            Action::GotoGroup(2)
        );
        assert_eq!(
            handle_mouse_event(mouse(down, 30, layout.track.y + 2), &app),
            Action::PointerDown {
                column: 30,
                row: layout.track.y + 2
            }
        );
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let app = app(60);
        let drag = MouseEventKind::Drag(MouseButton::Left);
        assert_eq!(handle_mouse_event(mouse(drag, 20, 10), &app), Action::None);
    }
}
