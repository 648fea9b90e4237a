//! Paddle motion
//!
//! Directional intent accelerates the paddle up to a speed cap; releasing it
//! bleeds speed off toward rest. Velocity survives wall clamping, so a paddle
//! pinned against a wall moves away at full speed as soon as intent reverses.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A paddle, measured as a vertical offset from the top of the field
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Paddle {
    /// Top edge (0 = touching the top wall)
    pub offset: f32,
    /// Signed speed in units per tick (positive = down)
    pub velocity: f32,
}

impl Paddle {
    pub fn new(offset: f32) -> Self {
        Self {
            offset,
            velocity: 0.0,
        }
    }

    /// Paddle at rest in the middle of the field
    pub fn centered() -> Self {
        Self::new((FIELD_HEIGHT - PADDLE_HEIGHT) / 2.0)
    }

    /// Largest legal offset
    #[inline]
    pub fn max_offset() -> f32 {
        FIELD_HEIGHT - PADDLE_HEIGHT
    }

    /// Vertical center of the paddle
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.offset + PADDLE_HEIGHT / 2.0
    }

    /// Advance one tick with intent `dir` in {-1, 0, 1}
    pub fn step(&mut self, dir: i8) {
        self.velocity = next_velocity(self.velocity, dir);
        self.offset = (self.offset + self.velocity).clamp(0.0, Self::max_offset());
    }
}

/// Velocity after one tick of intent `dir`
pub fn next_velocity(velocity: f32, dir: i8) -> f32 {
    match dir.signum() {
        0 => {
            if velocity > 0.0 {
                (velocity - PADDLE_DECEL).max(0.0)
            } else if velocity < 0.0 {
                (velocity + PADDLE_DECEL).min(0.0)
            } else {
                0.0
            }
        }
        d => (velocity + PADDLE_ACCEL * d as f32).clamp(-PADDLE_MAX_SPEED, PADDLE_MAX_SPEED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_accelerates_linearly() {
        let mut paddle = Paddle::centered();
        for _ in 0..10 {
            paddle.step(1);
        }
        assert!((paddle.velocity - 4.0).abs() < EPS, "got {}", paddle.velocity);
    }

    #[test]
    fn test_speed_caps_at_max() {
        let mut paddle = Paddle::new(0.0);
        for _ in 0..35 {
            paddle.step(1);
        }
        assert!((paddle.velocity - PADDLE_MAX_SPEED).abs() < EPS);

        for _ in 0..20 {
            paddle.step(1);
        }
        assert_eq!(paddle.velocity, PADDLE_MAX_SPEED);
    }

    #[test]
    fn test_upward_intent_is_negative() {
        let mut paddle = Paddle::centered();
        paddle.step(-1);
        assert!((paddle.velocity + PADDLE_ACCEL).abs() < EPS);
        assert!(paddle.offset < Paddle::centered().offset);
    }

    #[test]
    fn test_decelerates_to_exact_rest() {
        let mut paddle = Paddle::centered();
        paddle.velocity = 2.0;
        // ceil(2.0 / 0.6) = 4
        for tick in 1..=4 {
            paddle.step(0);
            assert!(paddle.velocity >= 0.0, "went negative at tick {tick}");
        }
        assert_eq!(paddle.velocity, 0.0);
    }

    #[test]
    fn test_decelerates_upward_motion() {
        assert_eq!(next_velocity(-0.5, 0), 0.0);
        assert!((next_velocity(-3.0, 0) + 2.4).abs() < EPS);
    }

    #[test]
    fn test_offset_clamped_to_field() {
        let mut paddle = Paddle::new(5.0);
        for _ in 0..30 {
            paddle.step(-1);
        }
        assert_eq!(paddle.offset, 0.0);

        let mut paddle = Paddle::new(Paddle::max_offset() - 5.0);
        for _ in 0..30 {
            paddle.step(1);
        }
        assert_eq!(paddle.offset, Paddle::max_offset());
    }

    #[test]
    fn test_velocity_survives_wall_clamp() {
        let mut paddle = Paddle::new(0.0);
        for _ in 0..20 {
            paddle.step(-1);
        }
        assert_eq!(paddle.offset, 0.0);
        let pinned = paddle.velocity;
        assert!(pinned < -7.0);

        // Reversing intent starts from the kept velocity, not from rest
        paddle.step(1);
        assert!((paddle.velocity - (pinned + PADDLE_ACCEL)).abs() < EPS);
        assert_eq!(paddle.offset, 0.0);
    }
}
