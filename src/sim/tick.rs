//! Per-frame simulation step
//!
//! One call to `step` is one rendered frame. The order of the phases matters:
//! movement is applied before the collision check, and the speed ratchet sees
//! the score awarded in the same step.

use super::collision::intersects;
use super::spawn::{maybe_spawn, spawn_interval};
use super::state::{GameOverSummary, GamePhase, Session};
use crate::consts::*;

/// What the caller should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still running, schedule the next frame
    Continue,
    /// The player crashed during this step
    GameOver(GameOverSummary),
    /// The session had already ended; nothing was simulated
    Halted,
}

/// Speed level for a score: one level per 50 points, capped
pub fn speed_for_score(score: u64) -> f32 {
    (BASE_SPEED + (score / SPEED_SCORE_STEP) as f32).min(MAX_SPEED)
}

/// Speed level in HUD units (60 at base speed, +20 per level)
pub fn speed_display(speed: f32) -> u32 {
    (60.0 + (speed - BASE_SPEED) * 20.0).round() as u32
}

/// Advance the session by one frame at timestamp `now_ms`
pub fn step(session: &mut Session, now_ms: f64) -> StepOutcome {
    if session.phase == GamePhase::GameOver {
        return StepOutcome::Halted;
    }

    let speed = session.speed;
    let height = session.config.height;

    // Road markers
    for marker in &mut session.markers {
        marker.y += speed;
        if marker.y > height {
            marker.y = MARKER_WRAP_Y;
        }
    }

    // Player
    let dx = session.input.direction() * PLAYER_STEP;
    if dx != 0.0 {
        let (min_x, max_x) = (session.config.player_min_x(), session.config.player_max_x());
        session.player.pos.x = (session.player.pos.x + dx).clamp(min_x, max_x);
    }

    // Obstacles; each one leaving the bottom is a dodge
    let exited = session.obstacles.advance(speed, height);
    if exited > 0 {
        session.score += DODGE_SCORE * exited as u64;
        session.dodged += exited;
    }

    let player_box = session.player.aabb();
    let crashed = session
        .obstacles
        .iter()
        .any(|obstacle| intersects(&player_box, &obstacle.aabb()));

    session.frame_count += 1;
    if session.frame_count % spawn_interval(session.score) == 0 {
        maybe_spawn(session);
    }

    if session.score > 0 && session.score % SPEED_SCORE_STEP == 0 {
        session.speed = speed_for_score(session.score);
    }

    session.elapsed += ((now_ms - session.last_time_ms) / 1000.0).max(0.0);
    session.last_time_ms = now_ms;

    if crashed {
        StepOutcome::GameOver(finish(session))
    } else {
        StepOutcome::Continue
    }
}

/// Enter `GameOver` and ratchet the session's high score
fn finish(session: &mut Session) -> GameOverSummary {
    session.phase = GamePhase::GameOver;
    let new_record = session.score > session.high_score;
    if new_record {
        session.high_score = session.score;
    }
    GameOverSummary {
        final_score: session.score,
        high_score: session.high_score,
        dodged: session.dodged,
        new_record,
    }
}
