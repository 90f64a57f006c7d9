//! Keyboard input: raw tokens to baseline adjustments or a quit signal.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::thermometer::{BaselineController, Direction};

/// Raw terminal tokens the simulator understands.
pub const ARROW_UP: &str = "\x1b[A";
pub const ARROW_DOWN: &str = "\x1b[B";
pub const CTRL_C: &str = "\x03";
pub const ESCAPE: &str = "\x1b";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputToken {
    ArrowUp,
    ArrowDown,
    CtrlC,
    Escape,
    Other,
}

impl InputToken {
    /// Classify one chunk of raw stdin text.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            ARROW_UP => InputToken::ArrowUp,
            ARROW_DOWN => InputToken::ArrowDown,
            CTRL_C => InputToken::CtrlC,
            ESCAPE => InputToken::Escape,
            _ => InputToken::Other,
        }
    }
}

impl From<KeyEvent> for InputToken {
    fn from(event: KeyEvent) -> Self {
        if event.kind == KeyEventKind::Release {
            return InputToken::Other;
        }
        match event.code {
            KeyCode::Up => InputToken::ArrowUp,
            KeyCode::Down => InputToken::ArrowDown,
            KeyCode::Esc => InputToken::Escape,
            KeyCode::Char('c') | KeyCode::Char('C') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputToken::CtrlC
            }
            _ => InputToken::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Terminate,
}

/// Apply one input token. Arrows move the baseline; Ctrl-C and Escape ask the
/// driver to stop; everything else is ignored.
pub fn handle_input(controller: &mut BaselineController, token: InputToken) -> InputOutcome {
    match token {
        InputToken::ArrowUp => {
            controller.adjust(Direction::Up);
            InputOutcome::Continue
        }
        InputToken::ArrowDown => {
            controller.adjust(Direction::Down);
            InputOutcome::Continue
        }
        InputToken::CtrlC | InputToken::Escape => InputOutcome::Terminate,
        InputToken::Other => InputOutcome::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thermometer::RangeConfig;

    fn controller() -> BaselineController {
        BaselineController::new(RangeConfig::default(), 25.0)
    }

    #[test]
    fn test_raw_tokens() {
        assert_eq!(InputToken::from_raw("\u{1b}[A"), InputToken::ArrowUp);
        assert_eq!(InputToken::from_raw("\u{1b}[B"), InputToken::ArrowDown);
        assert_eq!(InputToken::from_raw("\u{3}"), InputToken::CtrlC);
        assert_eq!(InputToken::from_raw("\u{1b}"), InputToken::Escape);
        assert_eq!(InputToken::from_raw("\u{1b}[C"), InputToken::Other);
        assert_eq!(InputToken::from_raw("q"), InputToken::Other);
    }

    #[test]
    fn test_key_events() {
        assert_eq!(InputToken::from(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)), InputToken::ArrowUp);
        assert_eq!(InputToken::from(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)), InputToken::ArrowDown);
        assert_eq!(InputToken::from(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)), InputToken::Escape);
        assert_eq!(
            InputToken::from(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputToken::CtrlC
        );
        assert_eq!(InputToken::from(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)), InputToken::Other);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(InputToken::from(event), InputToken::Other);
    }

    #[test]
    fn test_arrows_adjust_baseline() {
        let mut c = controller();
        assert_eq!(handle_input(&mut c, InputToken::ArrowUp), InputOutcome::Continue);
        assert_eq!(c.baseline(), 26.0);
        assert_eq!(handle_input(&mut c, InputToken::ArrowDown), InputOutcome::Continue);
        assert_eq!(handle_input(&mut c, InputToken::ArrowDown), InputOutcome::Continue);
        assert_eq!(c.baseline(), 24.0);
    }

    #[test]
    fn test_quit_tokens_terminate() {
        let mut c = controller();
        assert_eq!(handle_input(&mut c, InputToken::CtrlC), InputOutcome::Terminate);
        assert_eq!(handle_input(&mut c, InputToken::Escape), InputOutcome::Terminate);
        assert_eq!(c.baseline(), 25.0);
    }

    #[test]
    fn test_other_input_ignored() {
        let mut c = controller();
        assert_eq!(handle_input(&mut c, InputToken::from_raw("x")), InputOutcome::Continue);
        assert_eq!(c.baseline(), 25.0);
    }
}
