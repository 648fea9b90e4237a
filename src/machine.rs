//! Game state machine
//!
//! Menus, help screen, play and pause all run inside the same loop. The help
//! screen is pushed on top of the menu that opened it and popped back off,
//! restoring that menu and its selection.

use serde::{Deserialize, Serialize};

use crate::input::{Command, TickInput};
use crate::locale::{LanguageMode, Localizer, TextKey};
use crate::sim::{GameEvent, GameState, tick};
use crate::snapshot::SceneSnapshot;

/// Top-level mode. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    StartMenu,
    ControlsHelp,
    Playing,
    PausedMenu,
    /// Terminal
    Exiting,
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::StartMenu,
        GameMode::ControlsHelp,
        GameMode::Playing,
        GameMode::PausedMenu,
        GameMode::Exiting,
    ];

    /// Menu shown in this mode, if any
    pub fn menu(self) -> Option<MenuKind> {
        match self {
            GameMode::StartMenu => Some(MenuKind::Start),
            GameMode::PausedMenu => Some(MenuKind::Pause),
            _ => None,
        }
    }

    /// Whether this mode ticks at the play rate rather than the menu rate
    pub fn runs_at_play_rate(self) -> bool {
        self == GameMode::Playing
    }
}

/// Which menu is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuKind {
    Start,
    Pause,
}

impl MenuKind {
    pub fn items(self) -> &'static [MenuItem] {
        match self {
            MenuKind::Start => &[MenuItem::StartGame, MenuItem::Controls, MenuItem::Quit],
            MenuKind::Pause => &[MenuItem::Resume, MenuItem::Controls, MenuItem::Quit],
        }
    }
}

/// A selectable menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuItem {
    StartGame,
    Resume,
    Controls,
    Quit,
}

impl MenuItem {
    pub fn text_key(self) -> TextKey {
        match self {
            MenuItem::StartGame => TextKey::StartGame,
            MenuItem::Resume => TextKey::Resume,
            MenuItem::Controls => TextKey::Controls,
            MenuItem::Quit => TextKey::Quit,
        }
    }
}

/// Cursor within the active menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSelection {
    pub index: usize,
    pub item_count: usize,
}

impl MenuSelection {
    pub fn new(item_count: usize) -> Self {
        Self {
            index: 0,
            item_count,
        }
    }

    pub fn for_menu(menu: MenuKind) -> Self {
        Self::new(menu.items().len())
    }

    pub fn move_up(&mut self) {
        if self.item_count > 0 {
            self.index = (self.index + self.item_count - 1) % self.item_count;
        }
    }

    pub fn move_down(&mut self) {
        if self.item_count > 0 {
            self.index = (self.index + 1) % self.item_count;
        }
    }
}

/// Where to return when the help screen closes
#[derive(Debug, Clone, Copy)]
struct MenuFrame {
    mode: GameMode,
    selection: MenuSelection,
}

/// Owns the active mode, the game context and the language mode, and routes
/// each tick's input to whichever mode is active.
#[derive(Debug, Clone)]
pub struct StateMachine {
    mode: GameMode,
    selection: Option<MenuSelection>,
    stack: Vec<MenuFrame>,
    game: GameState,
    localizer: Localizer,
}

impl StateMachine {
    /// Start at the start menu
    pub fn new(game: GameState, language: LanguageMode) -> Self {
        Self {
            mode: GameMode::StartMenu,
            selection: Some(MenuSelection::for_menu(MenuKind::Start)),
            stack: Vec::new(),
            game,
            localizer: Localizer::new(language),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn selection(&self) -> Option<MenuSelection> {
        self.selection
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Direct access for setting up scenarios
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn is_exiting(&self) -> bool {
        self.mode == GameMode::Exiting
    }

    /// Item under the cursor in the active menu
    pub fn selected_item(&self) -> Option<MenuItem> {
        let menu = self.mode.menu()?;
        let selection = self.selection?;
        menu.items().get(selection.index).copied()
    }

    /// Process one tick of input. Physics only advances while playing.
    pub fn update(&mut self, input: &TickInput) -> Vec<GameEvent> {
        if self.mode == GameMode::Exiting {
            return Vec::new();
        }
        if input.has(Command::Quit) {
            self.enter(GameMode::Exiting);
            return Vec::new();
        }

        match self.mode {
            GameMode::StartMenu | GameMode::PausedMenu => {
                let mut events = Vec::new();
                for command in &input.commands {
                    let before = self.mode;
                    events.extend(self.menu_command(*command));
                    if self.mode != before {
                        break;
                    }
                }
                events
            }
            GameMode::ControlsHelp => {
                if input.any_key {
                    self.pop();
                }
                Vec::new()
            }
            GameMode::Playing => {
                for command in &input.commands {
                    match command {
                        Command::Pause => self.open_menu(GameMode::PausedMenu),
                        Command::Back => self.enter(GameMode::Exiting),
                        Command::ToggleLanguage => {
                            self.localizer.toggle();
                        }
                        _ => {}
                    }
                    if self.mode != GameMode::Playing {
                        return Vec::new();
                    }
                }
                tick(&mut self.game, input)
            }
            GameMode::Exiting => Vec::new(),
        }
    }

    fn menu_command(&mut self, command: Command) -> Option<GameEvent> {
        match command {
            Command::MenuUp => {
                if let Some(selection) = self.selection.as_mut() {
                    selection.move_up();
                }
            }
            Command::MenuDown => {
                if let Some(selection) = self.selection.as_mut() {
                    selection.move_down();
                }
            }
            Command::ToggleLanguage => {
                self.localizer.toggle();
            }
            Command::Confirm => {
                return self.selected_item().and_then(|item| self.activate(item));
            }
            Command::Pause | Command::Back => {
                if self.mode == GameMode::PausedMenu {
                    self.resume();
                }
            }
            Command::Quit => self.enter(GameMode::Exiting),
        }
        None
    }

    /// Run a menu entry. Starting a game serves the ball.
    fn activate(&mut self, item: MenuItem) -> Option<GameEvent> {
        match item {
            MenuItem::StartGame => {
                self.game.serve();
                self.resume();
                return Some(GameEvent::Served);
            }
            MenuItem::Resume => self.resume(),
            MenuItem::Controls => self.push_help(),
            MenuItem::Quit => self.enter(GameMode::Exiting),
        }
        None
    }

    fn resume(&mut self) {
        self.selection = None;
        self.enter(GameMode::Playing);
    }

    fn open_menu(&mut self, mode: GameMode) {
        self.selection = mode.menu().map(MenuSelection::for_menu);
        self.enter(mode);
    }

    fn push_help(&mut self) {
        if let Some(selection) = self.selection.take() {
            self.stack.push(MenuFrame {
                mode: self.mode,
                selection,
            });
        }
        self.enter(GameMode::ControlsHelp);
    }

    fn pop(&mut self) {
        match self.stack.pop() {
            Some(frame) => {
                self.selection = Some(frame.selection);
                self.enter(frame.mode);
            }
            None => self.open_menu(GameMode::StartMenu),
        }
    }

    fn enter(&mut self, mode: GameMode) {
        if mode != self.mode {
            log::info!("Mode: {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        if mode.menu().is_none() {
            self.selection = None;
        }
    }

    /// Read-only view of the current tick for the renderer
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            mode: self.mode,
            left_paddle_offset: self.game.left.offset,
            right_paddle_offset: self.game.right.offset,
            ball_position: self.game.ball.pos,
            score: self.game.score,
            language: self.localizer.mode(),
            menu: self.mode.menu(),
            menu_selection: self.selection,
            goal_paused: self.game.is_goal_paused(),
        }
    }
}
