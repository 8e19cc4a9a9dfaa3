// Obstacles placed on the slope and what happens when something hits them

use fastrand::Rng;
use glam::Vec2;

use crate::engine::assets::ImageName;

use super::entity::{Entity, EntityBase};

/// What a collision with an obstacle should do to the skier
///
/// The obstacle only classifies the hit; the collider decides what each
/// outcome means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CollisionOutcome {
    /// Knock the skier down
    #[default]
    Crash,
    /// Pass through without effect
    Ignore,
    /// Launch the skier into a jump
    Jump,
}

/// One kind of obstacle: its image and optional outcome overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleArchetype {
    pub image: ImageName,
    /// Outcome when the skier is in the air; `None` means crash
    pub airborne: Option<CollisionOutcome>,
    /// Outcome when the skier is on the ground; `None` means crash
    pub grounded: Option<CollisionOutcome>,
}

impl ObstacleArchetype {
    /// An obstacle that crashes the skier no matter what
    pub const fn solid(image: ImageName) -> Self {
        Self {
            image,
            airborne: None,
            grounded: None,
        }
    }

    pub const fn with_airborne(self, outcome: CollisionOutcome) -> Self {
        Self {
            airborne: Some(outcome),
            ..self
        }
    }

    pub const fn with_grounded(self, outcome: CollisionOutcome) -> Self {
        Self {
            grounded: Some(outcome),
            ..self
        }
    }
}

/// Every obstacle kind the slope can spawn
pub const OBSTACLE_ARCHETYPES: [ObstacleArchetype; 5] = [
    ObstacleArchetype::solid(ImageName::Tree),
    ObstacleArchetype::solid(ImageName::TreeCluster),
    // Rocks are low enough to jump over
    ObstacleArchetype::solid(ImageName::Rock1).with_airborne(CollisionOutcome::Ignore),
    ObstacleArchetype::solid(ImageName::Rock2).with_airborne(CollisionOutcome::Ignore),
    ObstacleArchetype::solid(ImageName::JumpRamp)
        .with_airborne(CollisionOutcome::Ignore)
        .with_grounded(CollisionOutcome::Jump),
];

/// Uniform random integer between `min` and `max`, both inclusive
///
/// Bounds given in the wrong order are swapped rather than rejected.
pub fn random_int(rng: &mut Rng, min: usize, max: usize) -> usize {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.usize(low..=high)
}

/// A permanent obstacle of a randomly chosen kind
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    base: EntityBase,
    on_airborne_collision: CollisionOutcome,
    on_collision: CollisionOutcome,
}

impl Obstacle {
    /// Place an obstacle of a random kind at `position`
    pub fn new(position: Vec2) -> Self {
        Self::with_rng(position, &mut Rng::new())
    }

    /// Place an obstacle, drawing its kind from `rng`
    pub fn with_rng(position: Vec2, rng: &mut Rng) -> Self {
        let index = random_int(rng, 0, OBSTACLE_ARCHETYPES.len() - 1);
        Self::from_archetype(position, &OBSTACLE_ARCHETYPES[index])
    }

    /// Place an obstacle of a specific kind
    pub fn from_archetype(position: Vec2, archetype: &ObstacleArchetype) -> Self {
        Self {
            base: EntityBase::at(position, archetype.image),
            on_airborne_collision: archetype.airborne.unwrap_or_default(),
            on_collision: archetype.grounded.unwrap_or_default(),
        }
    }

    pub fn on_airborne_collision(&self) -> CollisionOutcome {
        self.on_airborne_collision
    }

    pub fn on_collision(&self) -> CollisionOutcome {
        self.on_collision
    }

    /// Outcome for a collider that is or isn't in the air
    pub fn collision_outcome(&self, airborne: bool) -> CollisionOutcome {
        if airborne {
            self.on_airborne_collision
        } else {
            self.on_collision
        }
    }
}

impl Entity for Obstacle {
    fn base(&self) -> &EntityBase {
        &self.base
    }

    /// Obstacles stay put once placed
    fn die(&mut self) {}
}
