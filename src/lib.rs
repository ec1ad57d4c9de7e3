//! Thornvale, a top-down 2D action adventure built from scratch in Rust.
//!
//! This crate holds the entity simulation: sprite animation playback,
//! float-based movement with axis-separated collision resolution, and
//! health with a timed invulnerability window and blink feedback. The
//! rendering pipeline, input handling, and AI live in the host engine,
//! which drives entities through the [`game::entities::Actor`] surface
//! once per simulation tick.

pub mod core;
pub mod engine;
pub mod game;
