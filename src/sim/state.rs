//! Session state for the car game
//!
//! A `Session` is owned by exactly one controller and advanced one step per
//! rendered frame. Nothing here is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::obstacles::ObstacleField;
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Cars are moving
    Running,
    /// Player crashed; terminal until restart
    GameOver,
}

/// Held direction keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Net horizontal direction: -1, 0 or 1
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// The player's car. Only `pos.x` changes during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Player {
    pub fn aabb(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Cosmetic dashed road line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadMarker {
    pub y: f32,
}

/// Final numbers shown when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverSummary {
    pub final_score: u64,
    pub high_score: u64,
    pub dodged: u32,
    /// Whether this run beat the previous high score
    pub new_record: bool,
}

/// Read-only values the page renders into the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u64,
    pub dodged: u32,
    /// Whole seconds survived
    pub elapsed_secs: u64,
    /// Speed in display units (km/h)
    pub speed: u32,
    pub high_score: u64,
}

/// Complete mutable state of one game
#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub input: InputState,
    pub score: u64,
    /// Best score across sessions, ratcheted at game over
    pub high_score: u64,
    pub dodged: u32,
    /// Obstacle and marker scroll distance per step
    pub speed: f32,
    pub obstacles: ObstacleField,
    pub markers: Vec<RoadMarker>,
    /// Seconds of wall-clock time spent running
    pub elapsed: f64,
    /// Steps since (re)start; drives spawn cadence
    pub frame_count: u64,
    /// Timestamp (ms) of the previous step
    pub last_time_ms: f64,
}

impl Session {
    /// Create a running session at time `now_ms`
    pub fn new(config: GameConfig, seed: u64, high_score: u64, now_ms: f64) -> Self {
        let player = Player {
            pos: Vec2::new(config.player_start_x(), config.player_y()),
            size: Vec2::new(config.player_width, config.player_height),
        };
        let markers = (0..config.marker_count)
            .map(|i| RoadMarker {
                y: i as f32 * config.marker_spacing,
            })
            .collect();

        Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            player,
            input: InputState::default(),
            score: 0,
            high_score,
            dodged: 0,
            speed: BASE_SPEED,
            obstacles: ObstacleField::new(),
            markers,
            elapsed: 0.0,
            frame_count: 0,
            last_time_ms: now_ms,
        }
    }

    /// Back to a fresh running state. High score, config and RNG carry over.
    pub fn reset(&mut self, now_ms: f64) {
        self.phase = GamePhase::Running;
        self.player.pos.x = self.config.player_start_x();
        self.input = InputState::default();
        self.score = 0;
        self.dodged = 0;
        self.speed = BASE_SPEED;
        self.obstacles.clear();
        self.elapsed = 0.0;
        self.frame_count = 0;
        self.last_time_ms = now_ms;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.score,
            dodged: self.dodged,
            elapsed_secs: self.elapsed.floor() as u64,
            speed: super::tick::speed_display(self.speed),
            high_score: self.high_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::new(GameConfig::default(), 1, 120, 0.0);
        assert_eq!(session.phase, GamePhase::Running);
        assert_eq!(session.player.pos, Vec2::new(178.0, 490.0));
        assert_eq!(session.markers.len(), 8);
        assert_eq!(session.markers[7].y, 560.0);
        assert_eq!(session.speed, BASE_SPEED);
        assert_eq!(session.high_score, 120);
        assert!(session.obstacles.is_empty());
    }

    #[test]
    fn test_input_direction() {
        let mut input = InputState::default();
        assert_eq!(input.direction(), 0.0);
        input.left = true;
        assert_eq!(input.direction(), -1.0);
        input.right = true;
        assert_eq!(input.direction(), 0.0);
        input.left = false;
        assert_eq!(input.direction(), 1.0);
    }

    #[test]
    fn test_hud_floors_elapsed() {
        let mut session = Session::new(GameConfig::default(), 1, 0, 0.0);
        session.elapsed = 12.97;
        session.speed = 7.0;
        let hud = session.hud();
        assert_eq!(hud.elapsed_secs, 12);
        assert_eq!(hud.speed, 100);
    }
}
