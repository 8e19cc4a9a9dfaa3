// Collision bounds using parry2d

mod hitbox;

pub use hitbox::Hitbox;
