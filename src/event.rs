use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::permissions::{Access, Subject};

/// Keys the application reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Tab,
    BackTab,
    Space,
    Help,
    Copy,
    Quit,
}

impl Key {
    /// Maps a terminal key press, ignoring releases and unbound keys
    pub fn from_event(event: KeyEvent) -> Option<Key> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        let key = match event.code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Quit,
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Copy,
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char('?') => Key::Help,
            KeyCode::Char('q') => Key::Quit,
            _ => return None,
        };
        Some(key)
    }
}

/// A permission bit flipped from the permissions grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub subject: Subject,
    pub access: Access,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Key(Key),
    /// Mode of the working directory, read at startup
    DirectoryMode(String),
    /// Rebuild the command, applying a toggle first if present
    UpdateCommand(Option<Toggle>),
    CopyCommand,
    /// Clears the status with this token, if it is still shown
    ResetStatus(u64),
}

/// Work handed back to the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    Send(Msg),
    After(Duration, Msg),
    Quit,
}

/// Deferred messages, delivered once their deadline passes
#[derive(Debug, Default)]
pub struct Timers {
    pending: Vec<(Instant, Msg)>,
}

impl Timers {
    pub fn schedule(&mut self, deadline: Instant, msg: Msg) {
        self.pending.push((deadline, msg));
    }

    /// Removes and returns every due message, earliest deadline first
    pub fn due(&mut self, now: Instant) -> Vec<Msg> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(deadline, _)| *deadline <= now);
        self.pending = pending;
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, msg)| msg).collect()
    }
}
