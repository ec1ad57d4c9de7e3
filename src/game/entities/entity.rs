// The playable entity aggregate
//
// Composition, not inheritance: an entity owns its movement body,
// animation state, and health, and exposes the small `Actor` surface a
// host render/update system consumes. Assets load up front and
// construction aborts on any failure, so a half-initialized entity never
// enters the simulation.

use super::animation::AnimationState;
use super::group::{EntityId, Group};
use super::health::{self, Health};
use super::status::Status;
use crate::engine::assets::{AnimationSet, AssetError, AssetLoader, Frame};
use crate::engine::audio::{AudioOutput, Sound};
use crate::engine::physics::{KinematicBody, Rect, StaticColliders};
use glam::Vec2;
use log::{debug, info};
use std::time::Duration;

/// Default movement speed, pixels per second
pub const BASE_SPEED: f32 = 200.0;

/// Hit sound volume, as a fraction of the audio collaborator's maximum
pub const HIT_SOUND_VOLUME: f32 = 0.5;

/// Everything loaded from disk before an entity can exist
#[derive(Debug, Clone)]
pub struct EntityAssets {
    pub animations: AnimationSet,
    pub hit_sound: Sound,
}

impl EntityAssets {
    /// Load an entity's animation folders and its hit sound
    ///
    /// All-or-nothing: any missing or corrupt asset fails here and no
    /// entity gets constructed.
    pub fn load(
        assets: &AssetLoader,
        animation_name: &str,
        hit_sound_name: &str,
    ) -> Result<Self, AssetError> {
        Ok(Self {
            animations: assets.load_animations(animation_name)?,
            hit_sound: assets.load_sound(hit_sound_name, HIT_SOUND_VOLUME)?,
        })
    }
}

/// Per-tick inputs handed down from the host loop
pub struct TickContext<'a> {
    /// Simulation timestep in seconds
    pub dt: f32,
    /// Elapsed time from the host clock
    pub now: Duration,
    /// Static obstacles to collide against (host-owned, read-only)
    pub colliders: &'a StaticColliders,
}

/// Capability surface a host render/update system consumes
pub trait Actor {
    /// Render bounds
    fn bounds(&self) -> Rect;
    /// Image to draw this tick
    fn image(&self) -> &Frame;
    /// Advance one simulation tick
    fn on_tick(&mut self, ctx: &TickContext<'_>);
}

/// A playable character or creature
pub struct Entity {
    id: EntityId,
    body: KinematicBody,
    animation: AnimationState,
    animations: AnimationSet,
    health: Health,
    hit_sound: Sound,
    /// Attack flag; attack behavior itself belongs to the combat system
    pub attacking: bool,
    groups: Vec<Group>,
    /// Shown when a caller switches to a status with no frames
    fallback_frame: Frame,
    /// Blink silhouette for this tick, if the flash is on
    flash_frame: Option<Frame>,
    alive: bool,
}

impl Entity {
    /// Spawn an entity centered on `spawn` and register it in `groups`
    ///
    /// Render bounds take the size of the initial `down_idle` frame; the
    /// collision hitbox is derived from them.
    pub fn new(
        id: EntityId,
        spawn: Vec2,
        assets: EntityAssets,
        groups: Vec<Group>,
    ) -> Result<Self, AssetError> {
        let animation = AnimationState::new();
        let first = assets.animations.frame(animation.status().name(), 0)?;
        let (w, h) = (first.width() as i32, first.height() as i32);
        let fallback_frame = first.clone();

        let entity = Self {
            id,
            body: KinematicBody::new(spawn, w, h, BASE_SPEED),
            animation,
            animations: assets.animations,
            health: Health::new(),
            hit_sound: assets.hit_sound,
            attacking: false,
            groups,
            fallback_frame,
            flash_frame: None,
            alive: true,
        };

        for group in &entity.groups {
            group.insert(entity.id);
        }
        debug!("Spawned entity {} at {}", entity.id, spawn);

        Ok(entity)
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Sub-pixel center position
    pub fn position(&self) -> Vec2 {
        self.body.pos
    }

    pub fn direction(&self) -> Vec2 {
        self.body.direction
    }

    /// Set the movement intent; normalized on the next tick
    pub fn set_direction(&mut self, direction: Vec2) {
        self.body.direction = direction;
    }

    pub fn speed(&self) -> f32 {
        self.body.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.body.speed = speed;
    }

    /// Collision box (smaller than the render bounds)
    pub fn hitbox(&self) -> Rect {
        self.body.hitbox()
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn is_vulnerable(&self) -> bool {
        self.health.is_vulnerable()
    }

    /// Still part of the simulation?
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn status(&self) -> Status {
        self.animation.status()
    }

    /// Switch the active animation; the frame index carries over
    /// (see [`AnimationState::set_status`])
    pub fn set_status(&mut self, status: Status) {
        self.animation.set_status(status);
    }

    /// Restart the current animation from frame zero
    pub fn restart_animation(&mut self) {
        self.animation.restart();
    }

    /// Take one hit at time `now`
    ///
    /// Ignored while invulnerable. A landed hit plays the hit sound
    /// through the audio collaborator.
    pub fn damage(&mut self, now: Duration, audio: &mut dyn AudioOutput) {
        if self.health.apply_hit(now) {
            audio.play(&self.hit_sound);
            debug!(
                "Entity {} took damage, {} hp left",
                self.id,
                self.health.points()
            );
        }
    }

    /// Remove the entity from the simulation once its health is gone
    ///
    /// Idempotent: the group-removal side effect fires exactly once, and
    /// calling this after death does nothing further.
    pub fn check_death(&mut self) {
        if self.alive && self.health.is_dead() {
            for group in &self.groups {
                group.remove(self.id);
            }
            self.alive = false;
            info!("Entity {} died", self.id);
        }
    }

    fn current_frame(&self) -> &Frame {
        self.animation
            .current_frame(&self.animations)
            .unwrap_or(&self.fallback_frame)
    }

    /// Recompute the cached blink flash for this tick
    fn refresh_display(&mut self, now: Duration) {
        self.flash_frame = if self.health.blink_active(now) {
            Some(health::silhouette(self.current_frame()))
        } else {
            None
        };
    }
}

impl Actor for Entity {
    fn bounds(&self) -> Rect {
        self.body.rect()
    }

    fn image(&self) -> &Frame {
        self.flash_frame.as_ref().unwrap_or_else(|| self.current_frame())
    }

    fn on_tick(&mut self, ctx: &TickContext<'_>) {
        if !self.alive {
            return;
        }
        self.body.apply_movement(ctx.dt, ctx.colliders);
        self.health.update_vulnerability(ctx.now);
        self.animation.advance(ctx.dt);
        self.refresh_display(ctx.now);
        self.check_death();
    }
}
