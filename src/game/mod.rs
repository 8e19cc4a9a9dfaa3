// Game rules: entities and how they react to each other

pub mod collision;
pub mod entities;

pub use collision::{find_collision, resolve_skier_collisions, Collision};
