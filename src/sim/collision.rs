//! Collision detection and response
//!
//! Everything is evaluated once per tick at the post-move position. There is
//! no sweep, so a fast enough ball can pass straight through a paddle.

use super::paddle::Paddle;
use super::state::Ball;
use crate::Side;
use crate::consts::*;

/// Reflect the ball off the top and bottom walls. Returns true on a bounce.
pub fn bounce_walls(ball: &mut Ball) -> bool {
    let mut bounced = false;
    if ball.pos.y - ball.radius <= 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        bounced = true;
    }
    if ball.pos.y + ball.radius >= FIELD_HEIGHT {
        ball.pos.y = FIELD_HEIGHT - ball.radius;
        ball.vel.y = -ball.vel.y;
        bounced = true;
    }
    bounced
}

/// Left edge of the paddle on `side`
#[inline]
pub fn paddle_x(side: Side) -> f32 {
    match side {
        Side::Left => LEFT_PADDLE_X,
        Side::Right => RIGHT_PADDLE_X,
    }
}

/// Whether the ball's leading edge sits inside the paddle's box.
///
/// Only the edge facing the paddle is tested against the paddle's x extent, and
/// only the ball center against its vertical band.
pub fn paddle_overlap(ball: &Ball, side: Side, paddle: &Paddle) -> bool {
    let x = paddle_x(side);
    let edge = match side {
        Side::Left => ball.pos.x - ball.radius,
        Side::Right => ball.pos.x + ball.radius,
    };
    let in_x = x <= edge && edge <= x + PADDLE_WIDTH;
    let in_y = paddle.offset <= ball.pos.y && ball.pos.y <= paddle.offset + PADDLE_HEIGHT;
    in_x && in_y
}

/// Send the ball back off the paddle on `side`.
///
/// Horizontal speed grows by [`BALL_SPEED_MULTIPLIER`] and is capped at
/// [`BALL_MAX_SPEED`]. Off-center contact adds vertical speed proportional to
/// the distance from the paddle center; it accumulates across hits and is only
/// bounded when `vertical_cap` is set.
pub fn apply_paddle_hit(ball: &mut Ball, side: Side, paddle: &Paddle, vertical_cap: Option<f32>) {
    let speed = ball.vel.x.abs() * BALL_SPEED_MULTIPLIER;
    match side {
        Side::Left => {
            ball.pos.x = LEFT_PADDLE_X + PADDLE_WIDTH + ball.radius;
            ball.vel.x = speed;
        }
        Side::Right => {
            ball.pos.x = RIGHT_PADDLE_X - ball.radius;
            ball.vel.x = -speed;
        }
    }

    ball.vel.y += deflection(ball.pos.y, paddle) * DEFLECTION_GAIN;
    if let Some(cap) = vertical_cap {
        ball.vel.y = ball.vel.y.clamp(-cap, cap);
    }

    if ball.vel.x.abs() > BALL_MAX_SPEED {
        ball.vel.x = BALL_MAX_SPEED.copysign(ball.vel.x);
    }
}

/// Contact point relative to paddle center: -1 at the top edge, +1 at the bottom
#[inline]
pub fn deflection(ball_y: f32, paddle: &Paddle) -> f32 {
    (ball_y - paddle.center_y()) / (PADDLE_HEIGHT / 2.0)
}

/// Test and resolve one paddle. Returns true on a hit.
pub fn resolve_paddle(ball: &mut Ball, side: Side, paddle: &Paddle, vertical_cap: Option<f32>) -> bool {
    if paddle_overlap(ball, side, paddle) {
        apply_paddle_hit(ball, side, paddle, vertical_cap);
        true
    } else {
        false
    }
}
