use std::time::Duration;

use macroquad::prelude::*;

use crate::application::Command;

/// Raw key event, independent of the windowing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPress {
    /// Printable character (case-sensitive)
    Char(char),
    /// Character typed with Ctrl held
    Ctrl(char),
    Left,
    Down,
    Up,
    Right,
    Enter,
    /// Any key without a binding
    Other,
}

/// Map a key to its command. Unbound keys become an idle tick.
pub fn decode(key: KeyPress) -> Command {
    match key {
        KeyPress::Char('R') => Command::Init,
        KeyPress::Char('p') => Command::Play,
        KeyPress::Char('P') => Command::Pause,
        KeyPress::Char('q') | KeyPress::Ctrl('d') => Command::Quit,

        KeyPress::Char('h') | KeyPress::Left => Command::MoveLeft,
        KeyPress::Char('j') | KeyPress::Down => Command::MoveDown,
        KeyPress::Char('k') | KeyPress::Up => Command::MoveUp,
        KeyPress::Char('l') | KeyPress::Right => Command::MoveRight,

        KeyPress::Char('t') | KeyPress::Char(' ') | KeyPress::Enter => Command::ToggleCell,

        KeyPress::Char('n') => Command::Step,
        _ => Command::Advance,
    }
}

/// Turns per-frame key state into commands on a fixed polling interval.
///
/// A key yields its command immediately. With no key for a whole interval
/// the poller yields [`Command::Advance`].
#[derive(Clone, Debug)]
pub struct InputPoller {
    interval: Duration,
    waited: Duration,
}

impl InputPoller {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            waited: Duration::ZERO,
        }
    }

    pub fn poll(&mut self, key: Option<KeyPress>, elapsed: Duration) -> Option<Command> {
        if let Some(key) = key {
            self.waited = Duration::ZERO;
            return Some(decode(key));
        }

        self.waited += elapsed;
        if self.waited >= self.interval {
            self.waited = Duration::ZERO;
            return Some(Command::Advance);
        }
        None
    }
}

const MODIFIERS: [KeyCode; 8] = [
    KeyCode::LeftShift,
    KeyCode::RightShift,
    KeyCode::LeftControl,
    KeyCode::RightControl,
    KeyCode::LeftAlt,
    KeyCode::RightAlt,
    KeyCode::LeftSuper,
    KeyCode::RightSuper,
];

fn drain_chars() {
    while get_char_pressed().is_some() {}
}

/// Read at most one key press from macroquad for this frame
pub fn read_key_press() -> Option<KeyPress> {
    let arrows = [
        (KeyCode::Left, KeyPress::Left),
        (KeyCode::Down, KeyPress::Down),
        (KeyCode::Up, KeyPress::Up),
        (KeyCode::Right, KeyPress::Right),
        (KeyCode::Enter, KeyPress::Enter),
        (KeyCode::KpEnter, KeyPress::Enter),
    ];
    if let Some(&(_, key)) = arrows.iter().find(|(code, _)| is_key_pressed(*code)) {
        drain_chars();
        return Some(key);
    }

    let ctrl = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
    if ctrl && is_key_pressed(KeyCode::D) {
        drain_chars();
        return Some(KeyPress::Ctrl('d'));
    }

    while let Some(c) = get_char_pressed() {
        if !c.is_control() {
            return Some(KeyPress::Char(c));
        }
    }

    get_last_key_pressed()
        .filter(|code| !MODIFIERS.contains(code))
        .map(|_| KeyPress::Other)
}
