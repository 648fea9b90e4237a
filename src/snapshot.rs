//! Per-tick scene snapshot
//!
//! Everything a renderer needs to draw one frame. It is a plain copy, so
//! rendering cannot reach back into game state.

use glam::Vec2;
use serde::Serialize;

use crate::locale::{LanguageMode, text_in};
use crate::machine::{GameMode, MenuKind, MenuSelection};
use crate::sim::Score;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub mode: GameMode,
    pub left_paddle_offset: f32,
    pub right_paddle_offset: f32,
    pub ball_position: Vec2,
    pub score: Score,
    pub language: LanguageMode,
    /// Menu on screen, if any
    pub menu: Option<MenuKind>,
    pub menu_selection: Option<MenuSelection>,
    /// Play is frozen after a goal
    pub goal_paused: bool,
}

impl SceneSnapshot {
    /// Menu entries with their display text and whether each is selected
    pub fn menu_lines(&self) -> Vec<(String, bool)> {
        let (Some(menu), Some(selection)) = (self.menu, self.menu_selection) else {
            return Vec::new();
        };
        menu.items()
            .iter()
            .enumerate()
            .map(|(i, item)| (text_in(self.language, item.text_key()), i == selection.index))
            .collect()
    }
}
