//! Terminal frontend
//!
//! A renderer and key source built on crossterm. It only ever sees
//! [`SceneSnapshot`]s and produces [`KeyState`]s; the game core never touches
//! the terminal.

pub mod draw;
pub mod keys;

pub use keys::{KeyTracker, translate};

use std::io::{self, Stdout, Write};
use std::time::Instant;

use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use crossterm::{cursor, execute};

use crate::snapshot::SceneSnapshot;

/// Raw-mode alternate-screen session, restored on drop
pub struct TerminalSession {
    out: Stdout,
    size: (u16, u16),
    enhanced_keys: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide)?;

        // Key release events let held keys stop immediately
        let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
        if enhanced_keys {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        log::info!("Terminal session started (key release events: {enhanced_keys})");

        let size = crossterm::terminal::size()?;
        Ok(Self {
            out,
            size,
            enhanced_keys,
        })
    }

    /// Feed terminal events into `keys` until `deadline`.
    ///
    /// This is the loop's only wait.
    pub fn pump_until(&mut self, deadline: Instant, keys: &mut KeyTracker) -> io::Result<()> {
        loop {
            let now = Instant::now();
            let Some(remaining) = deadline.checked_duration_since(now) else {
                return Ok(());
            };
            if !event::poll(remaining)? {
                return Ok(());
            }
            match event::read()? {
                Event::Key(key_event) => {
                    let now = Instant::now();
                    match translate(&key_event) {
                        None => keys.request_quit(),
                        Some(key) => match key_event.kind {
                            KeyEventKind::Press => keys.on_press(key, now),
                            KeyEventKind::Repeat => keys.on_repeat(key, now),
                            KeyEventKind::Release => keys.on_release(key),
                        },
                    }
                }
                Event::Resize(cols, rows) => {
                    self.size = (cols, rows);
                }
                _ => {}
            }
        }
    }

    pub fn draw(&mut self, snapshot: &SceneSnapshot) -> io::Result<()> {
        draw::frame(&mut self.out, snapshot, self.size)?;
        self.out.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.enhanced_keys {
            let _ = execute!(self.out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        if let Err(e) = disable_raw_mode() {
            log::warn!("Failed to leave raw mode: {e}");
        }
    }
}
