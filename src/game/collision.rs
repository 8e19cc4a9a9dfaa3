// Skier vs. obstacle hit test
//
// Finds which obstacle the skier ran into this frame and what that obstacle
// says should happen. Acting on the outcome is up to the skier.

use glam::Vec2;

use crate::engine::physics::Hitbox;

use super::entities::{CollisionOutcome, Entity, Obstacle, Skier};

/// A detected hit against one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    /// Index of the obstacle that was hit
    pub obstacle: usize,
    /// What the obstacle says should happen
    pub outcome: CollisionOutcome,
}

/// First obstacle overlapping `actor`, with its outcome for the given airborne state
pub fn find_collision(
    actor: &Hitbox,
    airborne: bool,
    obstacles: &[Obstacle],
    obstacle_size: Vec2,
) -> Option<Collision> {
    obstacles
        .iter()
        .position(|obstacle| actor.overlaps(&Hitbox::new(obstacle.position(), obstacle_size)))
        .map(|index| Collision {
            obstacle: index,
            outcome: obstacles[index].collision_outcome(airborne),
        })
}

/// Check the skier against every obstacle and apply the outcome of the first hit
pub fn resolve_skier_collisions(
    skier: &mut Skier,
    skier_size: Vec2,
    obstacles: &[Obstacle],
    obstacle_size: Vec2,
) -> Option<Collision> {
    let hitbox = Hitbox::new(skier.position(), skier_size);
    let collision = find_collision(&hitbox, skier.is_airborne(), obstacles, obstacle_size)?;

    log::debug!(
        "Skier hit {:?} -> {:?}",
        obstacles[collision.obstacle].image_name(),
        collision.outcome
    );
    skier.handle_collision(collision.outcome);
    Some(collision)
}
