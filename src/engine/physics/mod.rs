// Hand-rolled 2D collision: integer AABBs resolved one axis at a time

mod body;
mod rect;
mod world;

pub use body::KinematicBody;
pub use rect::Rect;
pub use world::{Obstacle, StaticColliders};
