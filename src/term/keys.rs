//! Key tracking for terminals
//!
//! Most terminals only report presses and auto-repeats. A key therefore counts
//! as held for a short window after its last press or repeat, or until a
//! release event arrives on terminals that send them.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::input::{Key, KeyState};

/// Map a terminal key event to a game key. `None` means interrupt (Ctrl-C).
pub fn translate(event: &KeyEvent) -> Option<Key> {
    if event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return None;
    }
    let key = match event.code {
        KeyCode::Char('w') | KeyCode::Char('W') => Key::W,
        KeyCode::Char('s') | KeyCode::Char('S') => Key::S,
        KeyCode::Char('p') | KeyCode::Char('P') => Key::P,
        KeyCode::Char('l') | KeyCode::Char('L') => Key::L,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    };
    Some(key)
}

/// Accumulates key events between ticks
#[derive(Debug, Clone)]
pub struct KeyTracker {
    hold: Duration,
    last_seen: HashMap<Key, Instant>,
    pressed: Vec<Key>,
    quit: bool,
}

impl KeyTracker {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            last_seen: HashMap::new(),
            pressed: Vec::new(),
            quit: false,
        }
    }

    /// Fresh press: counts as a press for this tick and starts holding
    pub fn on_press(&mut self, key: Key, now: Instant) {
        self.pressed.push(key);
        self.last_seen.insert(key, now);
    }

    /// Auto-repeat: extends the hold without a new press
    pub fn on_repeat(&mut self, key: Key, now: Instant) {
        self.last_seen.insert(key, now);
    }

    pub fn on_release(&mut self, key: Key) {
        self.last_seen.remove(&key);
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Key state for the tick starting at `now`; clears pending presses
    pub fn take(&mut self, now: Instant) -> KeyState {
        let hold = self.hold;
        self.last_seen
            .retain(|_, seen| now.saturating_duration_since(*seen) < hold);
        KeyState {
            held: self.last_seen.keys().copied().collect(),
            pressed: std::mem::take(&mut self.pressed),
            quit: self.quit,
        }
    }
}
