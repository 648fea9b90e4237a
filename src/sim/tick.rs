//! Fixed timestep simulation tick
//!
//! One call advances paddles, ball, collisions and scoring by exactly one tick.
//! Speeds are in units per tick, so there is no `dt`.

use super::collision::{bounce_walls, resolve_paddle};
use super::state::{GameEvent, GameState};
use crate::Side;
use crate::consts::*;
use crate::input::TickInput;

/// Advance the game state by one tick of play
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Frozen after a goal
    if state.pause_ticks > 0 {
        state.pause_ticks -= 1;
        return events;
    }

    state.time_ticks += 1;

    state.left.step(input.left_dir);
    state.right.step(input.right_dir);

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    if bounce_walls(ball) {
        events.push(GameEvent::WallBounce);
    }

    let cap = state.max_vertical_speed;
    if resolve_paddle(ball, Side::Left, &state.left, cap) {
        log::debug!("Left paddle hit, vx={:.2}", ball.vel.x);
        events.push(GameEvent::PaddleHit(Side::Left));
    }
    if resolve_paddle(ball, Side::Right, &state.right, cap) {
        log::debug!("Right paddle hit, vx={:.2}", ball.vel.x);
        events.push(GameEvent::PaddleHit(Side::Right));
    }

    if let Some(scorer) = goal_scorer(state.ball.pos.x) {
        score_goal(state, scorer);
        events.push(GameEvent::Goal { scorer });
        events.push(GameEvent::Served);
    }

    events
}

/// Which side scores when the ball center is at `x`, if any
pub fn goal_scorer(x: f32) -> Option<Side> {
    if x < 0.0 {
        Some(Side::Right)
    } else if x > FIELD_WIDTH {
        Some(Side::Left)
    } else {
        None
    }
}

/// Credit a goal, re-serve from the center and start the goal freeze
pub fn score_goal(state: &mut GameState, scorer: Side) {
    state.score.record_goal(scorer);
    log::info!(
        "Goal for {:?}: {} - {}",
        scorer,
        state.score.left,
        state.score.right
    );
    state.serve();
    state.pause_ticks = state.goal_pause_ticks;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::field_center;
    use glam::Vec2;

    fn idle() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut state = GameState::new(1);
        state.ball.vel = Vec2::new(5.0, 2.5);
        let start = state.ball.pos;
        tick(&mut state, &idle());
        assert_eq!(state.ball.pos, start + Vec2::new(5.0, 2.5));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_paddles_follow_intent() {
        let mut state = GameState::new(1);
        let input = TickInput {
            left_dir: -1,
            right_dir: 1,
            ..Default::default()
        };
        for _ in 0..5 {
            tick(&mut state, &input);
        }
        assert!(state.left.velocity < 0.0);
        assert!(state.right.velocity > 0.0);
        assert!(state.left.offset < state.right.offset);
    }

    #[test]
    fn test_goal_on_right_edge_scores_left() {
        let mut state = GameState::new(3);
        state.ball.pos = Vec2::new(FIELD_WIDTH - 1.0, 300.0);
        state.ball.vel = Vec2::new(5.0, 0.0);
        let events = tick(&mut state, &idle());
        assert!(events.contains(&GameEvent::Goal { scorer: Side::Left }));
        assert_eq!(state.score.left, 1);
        assert_eq!(state.score.right, 0);
        assert_eq!(state.ball.pos, field_center());
        assert_eq!(state.pause_ticks, GOAL_PAUSE_TICKS);
    }

    #[test]
    fn test_goal_on_left_edge_scores_right() {
        let mut state = GameState::new(3);
        state.ball.pos = Vec2::new(2.0, 20.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);
        let events = tick(&mut state, &idle());
        assert!(events.contains(&GameEvent::Goal { scorer: Side::Right }));
        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
    }

    #[test]
    fn test_goal_pause_freezes_play() {
        let mut state = GameState::new(3).with_goal_pause(3);
        state.ball.pos = Vec2::new(2.0, 20.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);
        tick(&mut state, &idle());
        let frozen = state.ball;
        let input = TickInput {
            left_dir: 1,
            ..Default::default()
        };
        for _ in 0..3 {
            assert!(tick(&mut state, &input).is_empty());
            assert_eq!(state.ball, frozen);
            assert_eq!(state.left.velocity, 0.0);
        }
        tick(&mut state, &input);
        assert_ne!(state.ball.pos, frozen.pos);
    }

    #[test]
    fn test_wall_bounce_event() {
        let mut state = GameState::new(3);
        state.ball.pos = Vec2::new(450.0, 12.0);
        state.ball.vel = Vec2::new(5.0, -4.0);
        let events = tick(&mut state, &idle());
        assert_eq!(events, vec![GameEvent::WallBounce]);
        assert_eq!(state.ball.vel.y, 4.0);
        assert_eq!(state.ball.pos.y, BALL_RADIUS);
    }

    #[test]
    fn test_paddle_hit_event() {
        let mut state = GameState::new(3);
        // Left paddle rests with its center at 300
        state.ball.pos = Vec2::new(LEFT_PADDLE_X + PADDLE_WIDTH + BALL_RADIUS + 2.0, 300.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);
        let events = tick(&mut state, &idle());
        assert_eq!(events, vec![GameEvent::PaddleHit(Side::Left)]);
        assert!(state.ball.vel.x > 0.0);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        let inputs = [
            TickInput {
                left_dir: 1,
                ..Default::default()
            },
            TickInput {
                right_dir: -1,
                ..Default::default()
            },
            TickInput::default(),
        ];
        for i in 0..2000 {
            let input = &inputs[i % inputs.len()];
            assert_eq!(tick(&mut a, input), tick(&mut b, input));
        }
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.score, b.score);
        assert_eq!(a.left, b.left);
    }
}
