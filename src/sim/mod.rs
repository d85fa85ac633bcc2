//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, elapsed time taken from the caller's timestamps
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, intersects};
pub use obstacles::{Obstacle, ObstacleField};
pub use spawn::{lane_is_clear, maybe_spawn, spawn_in_lane, spawn_interval};
pub use state::{GameOverSummary, GamePhase, Hud, InputState, Player, RoadMarker, Session};
pub use tick::{StepOutcome, speed_display, speed_for_score, step};
