//! Oncoming cars and the ordered store that owns them

use glam::Vec2;

use super::collision::Aabb;

/// One oncoming car
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Index into the configured palette
    pub color: usize,
}

impl Obstacle {
    pub fn aabb(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Active obstacles in spawn order
#[derive(Debug, Clone)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new obstacle, returning its id
    pub fn push(&mut self, pos: Vec2, size: Vec2, color: usize) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            pos,
            size,
            color,
        });
        id
    }

    /// Move every obstacle down by `distance` and drop the ones whose top edge
    /// passed `floor_y`. Returns how many were dropped.
    pub fn advance(&mut self, distance: f32, floor_y: f32) -> u32 {
        let before = self.obstacles.len();
        self.obstacles.retain_mut(|obstacle| {
            obstacle.pos.y += distance;
            obstacle.pos.y <= floor_y
        });
        (before - self.obstacles.len()) as u32
    }

    /// Drop every obstacle. Ids keep counting up.
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car() -> Vec2 {
        Vec2::new(44.0, 80.0)
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut field = ObstacleField::new();
        let a = field.push(Vec2::new(45.0, -80.0), car(), 0);
        let b = field.push(Vec2::new(120.0, -80.0), car(), 1);
        assert!(b > a);
        assert_eq!(field.len(), 2);
        assert_eq!(field.as_slice()[0].id, a);
    }

    #[test]
    fn test_advance_moves_everything() {
        let mut field = ObstacleField::new();
        field.push(Vec2::new(45.0, 0.0), car(), 0);
        field.push(Vec2::new(120.0, 100.0), car(), 0);
        assert_eq!(field.advance(5.0, 600.0), 0);
        let ys: Vec<f32> = field.iter().map(|o| o.pos.y).collect();
        assert_eq!(ys, vec![5.0, 105.0]);
    }

    #[test]
    fn test_adjacent_exits_are_all_removed() {
        // Removing while scanning must not skip the second of two neighbours
        let mut field = ObstacleField::new();
        field.push(Vec2::new(45.0, 598.0), car(), 0);
        field.push(Vec2::new(120.0, 599.0), car(), 0);
        let keep = field.push(Vec2::new(195.0, 300.0), car(), 0);
        field.push(Vec2::new(270.0, 597.0), car(), 0);

        assert_eq!(field.advance(5.0, 600.0), 3);
        assert_eq!(field.len(), 1);
        assert_eq!(field.as_slice()[0].id, keep);
        assert_eq!(field.as_slice()[0].pos.y, 305.0);
    }

    #[test]
    fn test_exit_requires_passing_floor() {
        let mut field = ObstacleField::new();
        field.push(Vec2::new(45.0, 595.0), car(), 0);
        assert_eq!(field.advance(5.0, 600.0), 0);
        assert_eq!(field.advance(5.0, 600.0), 1);
        assert!(field.is_empty());
    }
}
