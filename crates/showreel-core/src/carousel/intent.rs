use super::gesture::SwipeDirection;
use super::mode::Mode;

/// Arrow keys the desktop keyboard adapter listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

/// Raw navigation input, before mode rules are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavInput {
    /// A committed swipe gesture
    Swipe(SwipeDirection),
    /// Arrow key press
    Arrow(ArrowKey),
    /// The "previous" control was activated
    PrevControl,
    /// The "next" control was activated
    NextControl,
    /// An indicator dot was activated
    Dot(usize),
    /// Jump straight to a desktop window (Home/End), clamped to the last one
    Window(usize),
}

/// Track operation an input resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    StepMobile(isize),
    StepDesktop(isize),
    GotoMobileGroup(usize),
    GotoDesktopWindow(usize),
}

impl NavInput {
    /// Resolve against the active mode.
    ///
    /// Swipes and dots only exist in mobile mode. Arrow keys, prev/next
    /// controls and window jumps only exist in desktop mode. Anything else
    /// resolves to `None`.
    pub fn route(self, mode: Mode) -> Option<NavCommand> {
        match (mode, self) {
            (Mode::Mobile, NavInput::Swipe(direction)) => {
                Some(NavCommand::StepMobile(direction.step()))
            }
            (Mode::Mobile, NavInput::Dot(group)) => Some(NavCommand::GotoMobileGroup(group)),
            (Mode::Desktop, NavInput::Arrow(ArrowKey::Left) | NavInput::PrevControl) => {
                Some(NavCommand::StepDesktop(-1))
            }
            (Mode::Desktop, NavInput::Arrow(ArrowKey::Right) | NavInput::NextControl) => {
                Some(NavCommand::StepDesktop(1))
            }
            (Mode::Desktop, NavInput::Window(window)) => {
                Some(NavCommand::GotoDesktopWindow(window))
            }
            (
                Mode::Mobile,
                NavInput::Arrow(_)
                | NavInput::PrevControl
                | NavInput::NextControl
                | NavInput::Window(_),
            )
            | (Mode::Desktop, NavInput::Swipe(_) | NavInput::Dot(_)) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_routes() {
        assert_eq!(
            NavInput::Swipe(SwipeDirection::Left).route(Mode::Mobile),
            Some(NavCommand::StepMobile(1))
        );
        assert_eq!(
            NavInput::Swipe(SwipeDirection::Right).route(Mode::Mobile),
            Some(NavCommand::StepMobile(-1))
        );
        assert_eq!(
            NavInput::Dot(2).route(Mode::Mobile),
            Some(NavCommand::GotoMobileGroup(2))
        );
        assert_eq!(NavInput::Arrow(ArrowKey::Right).route(Mode::Mobile), None);
        assert_eq!(NavInput::NextControl.route(Mode::Mobile), None);
        assert_eq!(NavInput::Window(0).route(Mode::Mobile), None);
    }

    #[test]
    fn test_desktop_routes() {
        assert_eq!(
            NavInput::Arrow(ArrowKey::Left).route(Mode::Desktop),
            Some(NavCommand::StepDesktop(-1))
        );
        assert_eq!(
            NavInput::NextControl.route(Mode::Desktop),
            Some(NavCommand::StepDesktop(1))
        );
        assert_eq!(NavInput::Swipe(SwipeDirection::Left).route(Mode::Desktop), None);
        assert_eq!(NavInput::Dot(0).route(Mode::Desktop), None);
        assert_eq!(
            NavInput::Window(3).route(Mode::Desktop),
            Some(NavCommand::GotoDesktopWindow(3))
        );
    }
}
