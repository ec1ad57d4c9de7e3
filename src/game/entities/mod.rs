// Entity system
//
// Everything a playable character or creature is made of:
// - The entity aggregate and the `Actor` surface hosts consume
// - Status labels selecting the active animation
// - Animation playback state
// - Health, damage, and the invulnerability blink
// - Host group membership

pub mod animation;
pub mod entity;
pub mod group;
pub mod health;
pub mod status;

// Re-export commonly used types
pub use animation::AnimationState;
pub use entity::{Actor, Entity, EntityAssets, TickContext, BASE_SPEED, HIT_SOUND_VOLUME};
pub use group::{EntityId, Group};
pub use health::{Health, BLINK_HZ, INVULNERABILITY_WINDOW, STARTING_HEALTH};
pub use status::{Action, Facing, Status};
