//! Obstacle spawning
//!
//! Spawning is a rejection sampler: pick a random lane, give up if that lane
//! still has a car near the top. A failed attempt is simply retried on the
//! next cadence tick.

use glam::Vec2;
use rand::Rng;

use super::obstacles::ObstacleField;
use super::state::Session;
use crate::consts::*;

/// Frames between spawn attempts at the given score
pub fn spawn_interval(score: u64) -> u64 {
    SPAWN_INTERVAL_START
        .saturating_sub(score / SPAWN_SCORE_STEP)
        .max(SPAWN_INTERVAL_MIN)
}

/// True when no obstacle in lane `x` is still within `SPAWN_GUARD_Y` of the top
pub fn lane_is_clear(obstacles: &ObstacleField, x: f32) -> bool {
    !obstacles
        .iter()
        .any(|o| (o.pos.x - x).abs() < LANE_TOLERANCE && o.pos.y < SPAWN_GUARD_Y)
}

/// Spawn a car just above the top edge in a random lane.
///
/// Returns the new obstacle's id, or `None` when the chosen lane is blocked.
pub fn maybe_spawn(session: &mut Session) -> Option<u32> {
    let lane_index = session.rng.random_range(0..session.config.lanes.len());
    let x = session.config.lanes[lane_index];
    spawn_in_lane(session, x)
}

/// Spawn in a specific lane, subject to the same rejection rule
pub fn spawn_in_lane(session: &mut Session, x: f32) -> Option<u32> {
    if !lane_is_clear(&session.obstacles, x) {
        log::debug!("spawn rejected, lane x={} occupied", x);
        return None;
    }

    let color = session.rng.random_range(0..session.config.palette.len());
    let id = session.obstacles.push(
        Vec2::new(x, -OBSTACLE_HEIGHT),
        Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        color,
    );
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn session() -> Session {
        Session::new(GameConfig::default(), 7, 0, 0.0)
    }

    #[test]
    fn test_spawn_interval_ramp() {
        assert_eq!(spawn_interval(0), 55);
        assert_eq!(spawn_interval(99), 55);
        assert_eq!(spawn_interval(100), 54);
        assert_eq!(spawn_interval(2990), 26);
        assert_eq!(spawn_interval(3000), 25);
        assert_eq!(spawn_interval(10_000), 25);
    }

    #[test]
    fn test_spawn_lands_above_top_edge_in_a_lane() {
        let mut session = session();
        let id = maybe_spawn(&mut session).expect("empty road accepts a spawn");
        let obstacle = &session.obstacles.as_slice()[0];
        assert_eq!(obstacle.id, id);
        assert_eq!(obstacle.pos.y, -OBSTACLE_HEIGHT);
        assert!(session.config.lanes.contains(&obstacle.pos.x));
        assert!(obstacle.color < session.config.palette.len());
    }

    #[test]
    fn test_same_lane_near_top_is_rejected() {
        let mut session = session();
        assert!(spawn_in_lane(&mut session, 120.0).is_some());
        assert!(spawn_in_lane(&mut session, 120.0).is_none());
        assert_eq!(session.obstacles.len(), 1);

        // Neighbouring lanes are 75 apart and unaffected
        assert!(spawn_in_lane(&mut session, 195.0).is_some());
        assert_eq!(session.obstacles.len(), 2);
    }

    #[test]
    fn test_lane_frees_up_after_guard_band() {
        let mut session = session();
        spawn_in_lane(&mut session, 45.0);
        session.obstacles.advance(229.0, 600.0); // y = 149
        assert!(!lane_is_clear(&session.obstacles, 45.0));
        session.obstacles.advance(1.0, 600.0); // y = 150
        assert!(lane_is_clear(&session.obstacles, 45.0));
    }

    #[test]
    fn test_rejected_attempts_leave_count_unchanged() {
        let mut session = session();
        for &lane in &session.config.lanes.clone() {
            spawn_in_lane(&mut session, lane);
        }
        assert_eq!(session.obstacles.len(), 5);
        for _ in 0..50 {
            assert!(maybe_spawn(&mut session).is_none());
        }
        assert_eq!(session.obstacles.len(), 5);
    }

    #[test]
    fn test_spawns_are_reproducible_from_seed() {
        let mut a = session();
        let mut b = session();
        for _ in 0..20 {
            maybe_spawn(&mut a);
            maybe_spawn(&mut b);
            a.obstacles.advance(40.0, 600.0);
            b.obstacles.advance(40.0, 600.0);
        }
        assert_eq!(a.obstacles.as_slice(), b.obstacles.as_slice());
    }
}
