//! Wave PvP site - landing page logic and the sidebar car game
//!
//! Core modules:
//! - `sim`: Deterministic lane-dodging simulation (movement, spawning, collisions)
//! - `controller`: Session lifecycle driven by a frame-scheduling host
//! - `platform`: Host abstraction (frame scheduling, input, presentation)
//! - `persistence`: High score storage (LocalStorage on web)
//! - `renderer`: Canvas 2D drawing and car palette
//! - `site`: Countdown and server/community feed interpretation

pub mod config;
pub mod controller;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod site;

pub use config::{ConfigError, GameConfig, SiteConfig};
pub use controller::SessionController;
pub use highscores::HighScore;

/// Game configuration constants
pub mod consts {
    /// Collision boxes shrink by this much on every side
    pub const COLLISION_INSET: f32 = 8.0;

    /// Player horizontal displacement per step while a direction is held
    pub const PLAYER_STEP: f32 = 7.0;
    /// Player must stay this far from either playfield edge
    pub const PLAYER_EDGE_MARGIN: f32 = 15.0;

    /// Obstacle dimensions (same footprint as the player car)
    pub const OBSTACLE_WIDTH: f32 = 44.0;
    pub const OBSTACLE_HEIGHT: f32 = 80.0;

    /// Two x positions closer than this count as the same lane
    pub const LANE_TOLERANCE: f32 = 30.0;
    /// A lane is blocked while one of its obstacles is above this y
    pub const SPAWN_GUARD_Y: f32 = 150.0;

    /// Frames between spawn attempts at score 0
    pub const SPAWN_INTERVAL_START: u64 = 55;
    /// Fastest spawn cadence
    pub const SPAWN_INTERVAL_MIN: u64 = 25;
    /// Score needed to shave one frame off the cadence
    pub const SPAWN_SCORE_STEP: u64 = 100;

    /// Speed level at the start of a session
    pub const BASE_SPEED: f32 = 5.0;
    /// Speed level ceiling
    pub const MAX_SPEED: f32 = 14.0;
    /// Score per speed level
    pub const SPEED_SCORE_STEP: u64 = 50;

    /// Score awarded for each obstacle that leaves the bottom edge
    pub const DODGE_SCORE: u64 = 10;

    /// Road markers that scrolled off the bottom re-enter here
    pub const MARKER_WRAP_Y: f32 = -40.0;
}
