use anyhow::Result;
use glam::Vec2;
use log::info;
use std::time::Duration;

use thornvale::engine::assets::AssetLoader;
use thornvale::engine::audio::NullAudio;
use thornvale::engine::physics::{Rect, StaticColliders};
use thornvale::engine::time::GameClock;
use thornvale::game::entities::{Actor, Entity, EntityAssets, Group, TickContext};

/// How long the headless demo simulates before exiting
const DEMO_DURATION: Duration = Duration::from_secs(5);

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Thornvale...");

    let asset_root = std::env::args().nth(1).unwrap_or_else(|| "assets".to_string());
    let loader = AssetLoader::new(&asset_root);
    let assets = EntityAssets::load(&loader, "player", "hit.mp3")?;

    info!("Assets loaded from {}", asset_root);

    // A short wall two tiles high, right of the spawn point.
    let mut colliders = StaticColliders::new();
    colliders.insert(&Rect::new(300, 60, 64, 64));
    colliders.insert(&Rect::new(300, 124, 64, 64));

    let visible = Group::new();
    let mut player = Entity::new(0, Vec2::new(100.0, 100.0), assets, vec![visible.clone()])?;
    player.set_direction(Vec2::new(1.0, 0.0));

    let mut audio = NullAudio;
    let mut clock = GameClock::new();
    let mut hit_landed = false;

    // Headless fixed-timestep loop: walk the player into the wall, land
    // one hit along the way, report where things settled.
    while clock.now() < DEMO_DURATION {
        let steps = clock.begin_frame();
        for _ in 0..steps {
            let ctx = TickContext {
                dt: clock.fixed_timestep(),
                now: clock.now(),
                colliders: &colliders,
            };
            player.on_tick(&ctx);
        }

        if !hit_landed && clock.now() >= Duration::from_secs(1) {
            player.damage(clock.now(), &mut audio);
            hit_landed = true;
        }

        std::thread::sleep(Duration::from_millis(1));
    }

    info!(
        "Player settled at {} with {} hp, bounds {:?}",
        player.position(),
        player.health().points(),
        player.bounds()
    );

    Ok(())
}
