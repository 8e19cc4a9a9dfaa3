//! Animation state machine and obstacle collision model for a downhill
//! skiing game.
//!
//! Animated entities step through named image sequences on a fixed time
//! budget; obstacles are drawn at random from a fixed table and classify
//! what a collision with them should do.

pub mod config;
pub mod engine;
pub mod game;
pub mod logging;
