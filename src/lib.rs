//! Marty Pong - a two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball physics, scoring)
//! - `input`: Raw key state to per-tick intents
//! - `machine`: Menu/pause state machine layered over the simulation
//! - `locale`: Bilingual text and the language display mode
//! - `snapshot`: Read-only scene handed to the renderer each tick
//! - `settings`: Runtime configuration
//! - `term`: Terminal renderer and key source

pub mod input;
pub mod locale;
pub mod machine;
pub mod settings;
pub mod sim;
pub mod snapshot;
pub mod term;

pub use input::{Command, Key, KeyState, TickInput};
pub use locale::{LanguageMode, Localizer};
pub use machine::{GameMode, MenuKind, MenuSelection, StateMachine};
pub use settings::{Settings, SettingsError};
pub use snapshot::SceneSnapshot;

/// Game configuration constants
pub mod consts {
    /// Play ticks per second
    pub const PLAY_TICK_HZ: u32 = 60;
    /// Menu ticks per second
    pub const MENU_TICK_HZ: u32 = 30;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 900.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const LEFT_PADDLE_X: f32 = 30.0;
    pub const RIGHT_PADDLE_X: f32 = FIELD_WIDTH - 30.0 - PADDLE_WIDTH;

    /// Paddle response (units per tick)
    pub const PADDLE_ACCEL: f32 = 0.4;
    pub const PADDLE_DECEL: f32 = 0.6;
    pub const PADDLE_MAX_SPEED: f32 = 14.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_SPEED: f32 = 5.0;
    /// Horizontal speed scale applied on every paddle hit
    pub const BALL_SPEED_MULTIPLIER: f32 = 1.12;
    /// Cap on horizontal speed after a paddle hit
    pub const BALL_MAX_SPEED: f32 = 25.0;
    /// Vertical speed added per unit of off-center contact
    pub const DEFLECTION_GAIN: f32 = 2.0;

    /// Terminal key hold window in milliseconds
    pub const KEY_HOLD_MS: u64 = 500;

    /// Freeze after a goal (0.5 s at 60 Hz)
    pub const GOAL_PAUSE_TICKS: u32 = 30;
}

/// One side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}
