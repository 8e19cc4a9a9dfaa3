// Entities that live on the slope
//
// - `entity`: shared position/image base and the `die` contract
// - `animation`: animation registry and the frame-stepping `Animator`
// - `animated`: trait tying an `Animator` to an entity's displayed image
// - `obstacle`: randomly chosen obstacles and their collision outcomes
// - `skier`: the player's skier

pub mod animated;
pub mod animation;
pub mod entity;
pub mod obstacle;
pub mod skier;

// Re-export commonly used types
pub use animated::AnimatedEntity;
pub use animation::{
    Animation, AnimationCallback, AnimationError, AnimationSet, Animator, FrameStep,
};
pub use entity::{Entity, EntityBase};
pub use obstacle::{
    random_int, CollisionOutcome, Obstacle, ObstacleArchetype, OBSTACLE_ARCHETYPES,
};
pub use skier::{Skier, SkierState, JUMP_ANIMATION};
