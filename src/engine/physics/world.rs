// Static collision world

use super::Rect;

/// Anything that exposes an axis-aligned collision box
pub trait Obstacle {
    fn hitbox(&self) -> Rect;
}

impl Obstacle for Rect {
    fn hitbox(&self) -> Rect {
        *self
    }
}

/// The set of static obstacle hitboxes entities collide against
///
/// Entities query this every tick but never mutate it; one set is shared
/// read-only across all entities of a level. Iteration order is insertion
/// order, which also fixes the order collision corrections apply in.
#[derive(Debug, Clone, Default)]
pub struct StaticColliders {
    boxes: Vec<Rect>,
}

impl StaticColliders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an obstacle's hitbox
    pub fn insert<O: Obstacle>(&mut self, obstacle: &O) {
        self.boxes.push(obstacle.hitbox());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.boxes.iter()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Crate {
        bounds: Rect,
    }

    impl Obstacle for Crate {
        fn hitbox(&self) -> Rect {
            self.bounds
        }
    }

    #[test]
    fn test_insert_any_obstacle() {
        let mut colliders = StaticColliders::new();
        assert!(colliders.is_empty());

        colliders.insert(&Rect::new(0, 0, 16, 16));
        colliders.insert(&Crate {
            bounds: Rect::new(32, 0, 16, 16),
        });

        assert_eq!(colliders.len(), 2);
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let mut colliders = StaticColliders::new();
        colliders.insert(&Rect::new(0, 0, 1, 1));
        colliders.insert(&Rect::new(1, 0, 1, 1));
        colliders.insert(&Rect::new(2, 0, 1, 1));

        let xs: Vec<i32> = colliders.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![0, 1, 2]);
    }
}
