// Float-accumulated kinematic movement with discrete collision correction

use super::{Rect, StaticColliders};
use glam::{IVec2, Vec2};

/// Fraction of the render bounds' width the hitbox gives up
const HITBOX_WIDTH_SHRINK: f32 = 0.3;

/// Axis resolved by one collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Movement state for one entity
///
/// `pos` is the authoritative sub-pixel center. The integer boxes are
/// derived from it: `rect` is the render bounds, `hitbox` the smaller box
/// every collision test uses (70% of the width, 50% of the height). Both
/// are re-centered on the rounded position after each integration step,
/// and the float position snaps back onto the hitbox whenever a collision
/// correction moves it.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    /// Sub-pixel center position
    pub pos: Vec2,
    /// Movement intent; zero or unit length after a movement step
    pub direction: Vec2,
    /// Speed in pixels per second
    pub speed: f32,
    rect: Rect,
    hitbox: Rect,
}

impl KinematicBody {
    /// Create a body centered on `spawn` with render bounds `w` x `h`
    pub fn new(spawn: Vec2, w: i32, h: i32, speed: f32) -> Self {
        let rect = Rect::from_center(round_to_ivec(spawn), w, h);
        let shrink_w = (rect.w as f32 * HITBOX_WIDTH_SHRINK).round() as i32;
        let hitbox = rect.inflate(-shrink_w, -(rect.h / 2));

        Self {
            pos: spawn,
            direction: Vec2::ZERO,
            speed,
            rect,
            hitbox,
        }
    }

    /// Render bounds, centered on the hitbox
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Collision box
    pub fn hitbox(&self) -> Rect {
        self.hitbox
    }

    /// Integrate one tick of movement and resolve collisions
    ///
    /// Axes are resolved sequentially, horizontal first: the vertical step
    /// starts from the already horizontally-corrected position. Resolving
    /// both axes at once would let diagonal movement clip through corners.
    pub fn apply_movement(&mut self, dt: f32, colliders: &StaticColliders) {
        // Normalize so diagonal input is not faster than cardinal input.
        if self.direction != Vec2::ZERO {
            self.direction = self.direction.normalize();
        }

        self.pos.x += self.direction.x * self.speed * dt;
        self.hitbox.set_center_x(self.pos.x.round() as i32);
        self.rect.set_center_x(self.hitbox.center_x());
        self.collide(Axis::Horizontal, colliders);

        self.pos.y += self.direction.y * self.speed * dt;
        self.hitbox.set_center_y(self.pos.y.round() as i32);
        self.rect.set_center_y(self.hitbox.center_y());
        self.collide(Axis::Vertical, colliders);
    }

    /// One discrete collision pass along `axis`
    ///
    /// Every overlapping obstacle clamps the hitbox edge facing the
    /// movement; corrections apply in iteration order, so with several
    /// simultaneous overlaps the last one wins. After each correction the
    /// float position snaps onto the corrected integer center so the next
    /// tick cannot re-penetrate from leftover fractional drift.
    fn collide(&mut self, axis: Axis, colliders: &StaticColliders) {
        for obstacle in colliders.iter() {
            if !obstacle.overlaps(&self.hitbox) {
                continue;
            }

            match axis {
                Axis::Horizontal => {
                    if self.direction.x > 0.0 {
                        // Moving right
                        self.hitbox.set_right(obstacle.left());
                    }
                    if self.direction.x < 0.0 {
                        // Moving left
                        self.hitbox.set_left(obstacle.right());
                    }
                    self.rect.set_center_x(self.hitbox.center_x());
                    self.pos.x = self.hitbox.center_x() as f32;
                }
                Axis::Vertical => {
                    if self.direction.y > 0.0 {
                        // Moving down
                        self.hitbox.set_bottom(obstacle.top());
                    }
                    if self.direction.y < 0.0 {
                        // Moving up
                        self.hitbox.set_top(obstacle.bottom());
                    }
                    self.rect.set_center_y(self.hitbox.center_y());
                    self.pos.y = self.hitbox.center_y() as f32;
                }
            }
        }
    }
}

fn round_to_ivec(v: Vec2) -> IVec2 {
    IVec2::new(v.x.round() as i32, v.y.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn body_at(x: f32, y: f32) -> KinematicBody {
        // 100x100 bounds -> 70x50 hitbox
        KinematicBody::new(Vec2::new(x, y), 100, 100, 200.0)
    }

    #[test]
    fn test_hitbox_proportions() {
        let body = body_at(100.0, 100.0);
        assert_eq!((body.rect().w, body.rect().h), (100, 100));
        assert_eq!((body.hitbox().w, body.hitbox().h), (70, 50));
        assert_eq!(body.hitbox().center(), body.rect().center());
    }

    #[test]
    fn test_direction_normalized() {
        let mut body = body_at(0.0, 0.0);
        body.direction = Vec2::new(3.0, 4.0);
        body.apply_movement(0.0, &StaticColliders::new());
        assert_relative_eq!(body.direction.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_direction_stays_zero() {
        let mut body = body_at(50.0, 50.0);
        body.apply_movement(0.1, &StaticColliders::new());
        assert_eq!(body.direction, Vec2::ZERO);
        assert_eq!(body.pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_open_field_movement() {
        let mut body = body_at(100.0, 100.0);
        body.direction = Vec2::new(1.0, 0.0);
        body.apply_movement(0.1, &StaticColliders::new());

        assert_relative_eq!(body.pos.x, 120.0, epsilon = 1e-4);
        assert_relative_eq!(body.pos.y, 100.0, epsilon = 1e-4);
        assert_eq!(body.hitbox().center(), IVec2::new(120, 100));
        assert_eq!(body.rect().center(), IVec2::new(120, 100));
    }

    #[test]
    fn test_boxes_track_rounded_position() {
        let mut body = body_at(0.0, 0.0);
        body.direction = Vec2::new(1.0, 1.0);
        for _ in 0..7 {
            body.apply_movement(0.016, &StaticColliders::new());
        }
        assert_eq!(body.hitbox().center_x(), body.pos.x.round() as i32);
        assert_eq!(body.hitbox().center_y(), body.pos.y.round() as i32);
        assert_eq!(body.rect().center(), body.hitbox().center());
    }

    #[test]
    fn test_clamp_moving_right() {
        let mut body = body_at(100.0, 100.0);
        let mut colliders = StaticColliders::new();
        // Wall just ahead of the hitbox's right edge (at x=135).
        let wall = Rect::new(150, 50, 20, 100);
        colliders.insert(&wall);

        body.direction = Vec2::new(1.0, 0.0);
        body.apply_movement(0.2, &colliders); // would reach x=140 unobstructed

        assert_eq!(body.hitbox().right(), wall.left());
        assert_relative_eq!(body.pos.x, body.hitbox().center_x() as f32);
        assert_eq!(body.rect().center_x(), body.hitbox().center_x());
        assert!(!wall.overlaps(&body.hitbox()));
    }

    #[test]
    fn test_clamp_moving_left() {
        let mut body = body_at(100.0, 100.0);
        let mut colliders = StaticColliders::new();
        let wall = Rect::new(40, 50, 20, 100);
        colliders.insert(&wall);

        body.direction = Vec2::new(-1.0, 0.0);
        body.apply_movement(0.2, &colliders);

        assert_eq!(body.hitbox().left(), wall.right());
        assert_relative_eq!(body.pos.x, body.hitbox().center_x() as f32);
    }

    #[test]
    fn test_clamp_moving_down() {
        let mut body = body_at(100.0, 100.0);
        let mut colliders = StaticColliders::new();
        let floor = Rect::new(0, 140, 200, 20);
        colliders.insert(&floor);

        body.direction = Vec2::new(0.0, 1.0);
        body.apply_movement(0.2, &colliders);

        assert_eq!(body.hitbox().bottom(), floor.top());
        assert_relative_eq!(body.pos.y, body.hitbox().center_y() as f32);
    }

    #[test]
    fn test_clamp_moving_up() {
        let mut body = body_at(100.0, 100.0);
        let mut colliders = StaticColliders::new();
        let ceiling = Rect::new(0, 40, 200, 20);
        colliders.insert(&ceiling);

        body.direction = Vec2::new(0.0, -1.0);
        body.apply_movement(0.2, &colliders);

        assert_eq!(body.hitbox().top(), ceiling.bottom());
        assert_relative_eq!(body.pos.y, body.hitbox().center_y() as f32);
    }

    #[test]
    fn test_diagonal_into_corner_does_not_tunnel() {
        // Wall to the right, floor below; moving down-right must stop at
        // both faces instead of slipping through the corner seam.
        let mut body = body_at(100.0, 100.0);
        let mut colliders = StaticColliders::new();
        let wall = Rect::new(150, 0, 20, 300);
        let floor = Rect::new(0, 140, 300, 20);
        colliders.insert(&wall);
        colliders.insert(&floor);

        body.direction = Vec2::new(1.0, 1.0);
        for _ in 0..30 {
            body.apply_movement(0.05, &colliders);
        }

        assert_eq!(body.hitbox().right(), wall.left());
        assert_eq!(body.hitbox().bottom(), floor.top());
    }

    #[test]
    fn test_resting_against_wall_stays_put() {
        // Once clamped flush, further ticks toward the wall must not jitter
        // or re-penetrate.
        let mut body = body_at(100.0, 100.0);
        let mut colliders = StaticColliders::new();
        let wall = Rect::new(150, 50, 20, 100);
        colliders.insert(&wall);

        body.direction = Vec2::new(1.0, 0.0);
        for _ in 0..10 {
            body.apply_movement(0.1, &colliders);
        }

        assert_eq!(body.hitbox().right(), wall.left());
        assert_relative_eq!(body.pos.x, body.hitbox().center_x() as f32);
    }
}
