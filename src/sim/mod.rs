//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod paddle;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{apply_paddle_hit, bounce_walls, deflection, paddle_overlap, resolve_paddle};
pub use paddle::{Paddle, next_velocity};
pub use score::Score;
pub use state::{Ball, GameEvent, GameState, field_center, random_sign};
pub use tick::{goal_scorer, score_goal, tick};
