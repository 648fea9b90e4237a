//! Snapshot drawing
//!
//! Field coordinates are scaled onto whatever terminal size is available.
//! Row 0 holds the score line and the last row holds the hint line.

use std::io::{self, Write};

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor::MoveTo, queue};

use crate::consts::*;
use crate::locale::{TextKey, text_in};
use crate::machine::GameMode;
use crate::snapshot::SceneSnapshot;

const ORANGE: Color = Color::Rgb {
    r: 245,
    g: 125,
    b: 25,
};
const CREAM: Color = Color::Rgb {
    r: 250,
    g: 240,
    b: 230,
};

/// Draw one full frame
pub fn frame<W: Write>(out: &mut W, snap: &SceneSnapshot, size: (u16, u16)) -> io::Result<()> {
    queue!(out, ResetColor, Clear(ClearType::All))?;
    match snap.mode {
        GameMode::Playing => field(out, snap, size)?,
        GameMode::StartMenu | GameMode::PausedMenu => menu(out, snap, size)?,
        GameMode::ControlsHelp => controls(out, snap, size)?,
        GameMode::Exiting => {}
    }
    queue!(out, ResetColor)
}

/// Map a field position to a terminal cell inside the play area
pub fn to_cell(x: f32, y: f32, size: (u16, u16)) -> (u16, u16) {
    let (cols, rows) = play_area(size);
    let col = (x / FIELD_WIDTH * cols as f32).floor();
    let row = (y / FIELD_HEIGHT * rows as f32).floor();
    let col = col.clamp(0.0, (cols - 1) as f32) as u16;
    let row = row.clamp(0.0, (rows - 1) as f32) as u16;
    (col, row + 1)
}

/// Columns and rows available for the field, excluding the score and hint rows
fn play_area((cols, rows): (u16, u16)) -> (u16, u16) {
    (cols.max(1), rows.saturating_sub(2).max(1))
}

/// Terminal columns taken by `s`; CJK and fullwidth characters take two
pub fn display_width(s: &str) -> u16 {
    s.chars()
        .map(|c| match c as u32 {
            0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6 => 2,
            _ => 1,
        })
        .sum()
}

fn centered<W: Write>(out: &mut W, text: &str, row: u16, cols: u16, color: Color) -> io::Result<()> {
    let col = cols.saturating_sub(display_width(text)) / 2;
    queue!(out, MoveTo(col, row), SetForegroundColor(color), Print(text))
}

fn field<W: Write>(out: &mut W, snap: &SceneSnapshot, size: (u16, u16)) -> io::Result<()> {
    let (cols, rows) = size;
    let (_, area_rows) = play_area(size);

    // Center line
    let mid = cols / 2;
    queue!(out, SetForegroundColor(Color::Grey))?;
    for row in (1..=area_rows).step_by(2) {
        queue!(out, MoveTo(mid, row), Print('┆'))?;
    }

    // Paddles
    queue!(out, SetForegroundColor(CREAM))?;
    for (x, offset) in [
        (LEFT_PADDLE_X, snap.left_paddle_offset),
        (RIGHT_PADDLE_X, snap.right_paddle_offset),
    ] {
        let (col, top) = to_cell(x + PADDLE_WIDTH / 2.0, offset, size);
        let (_, bottom) = to_cell(x, offset + PADDLE_HEIGHT - 1.0, size);
        for row in top..=bottom {
            queue!(out, MoveTo(col, row), Print('█'))?;
        }
    }

    // Ball
    let (col, row) = to_cell(snap.ball_position.x, snap.ball_position.y, size);
    queue!(out, MoveTo(col, row), SetForegroundColor(ORANGE), Print('●'))?;

    // Scores at the quarter marks
    queue!(out, SetForegroundColor(CREAM))?;
    let left = snap.score.left.to_string();
    let right = snap.score.right.to_string();
    queue!(out, MoveTo((cols / 4).saturating_sub(display_width(&left) / 2), 0), Print(&left))?;
    queue!(out, MoveTo((3 * cols / 4).saturating_sub(display_width(&right) / 2), 0), Print(&right))?;

    let hint = text_in(snap.language, TextKey::PlayHint);
    centered(out, &hint, rows.saturating_sub(1), cols, CREAM)
}

fn menu<W: Write>(out: &mut W, snap: &SceneSnapshot, (cols, rows): (u16, u16)) -> io::Result<()> {
    let (heading, hint) = match snap.mode {
        GameMode::PausedMenu => (TextKey::Paused, TextKey::PauseHint),
        _ => (TextKey::Title, TextKey::StartHint),
    };
    let top = rows / 4;
    centered(out, &text_in(snap.language, heading), top, cols, ORANGE)?;

    for (i, (label, selected)) in snap.menu_lines().iter().enumerate() {
        let row = top + 3 + 2 * i as u16;
        let (text, color) = if *selected {
            (format!("> {label} <"), ORANGE)
        } else {
            (label.clone(), CREAM)
        };
        centered(out, &text, row, cols, color)?;
    }

    centered(out, &text_in(snap.language, hint), rows.saturating_sub(2), cols, CREAM)
}

fn controls<W: Write>(out: &mut W, snap: &SceneSnapshot, (cols, rows): (u16, u16)) -> io::Result<()> {
    let top = rows / 5;
    centered(out, &text_in(snap.language, TextKey::ControlsTitle), top, cols, ORANGE)?;
    let lines = [
        TextKey::ControlsLeftPaddle,
        TextKey::ControlsRightPaddle,
        TextKey::ControlsPause,
        TextKey::ControlsLanguage,
    ];
    for (i, key) in lines.into_iter().enumerate() {
        centered(out, &text_in(snap.language, key), top + 3 + 2 * i as u16, cols, CREAM)?;
    }
    centered(
        out,
        &text_in(snap.language, TextKey::ControlsReturn),
        rows.saturating_sub(2),
        cols,
        CREAM,
    )
}
