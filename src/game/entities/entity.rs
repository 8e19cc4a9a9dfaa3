// Base entity data shared by everything placed on the slope

use glam::Vec2;

use crate::engine::assets::ImageName;

/// Position and displayed image of an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityBase {
    /// World position of the entity's centre
    pub position: Vec2,
    /// Image currently displayed for the entity
    pub image_name: ImageName,
}

impl EntityBase {
    pub fn new(x: f32, y: f32, image_name: ImageName) -> Self {
        Self::at(Vec2::new(x, y), image_name)
    }

    pub fn at(position: Vec2, image_name: ImageName) -> Self {
        Self {
            position,
            image_name,
        }
    }
}

/// Anything with a position and an image that the game can remove
///
/// Read-only: only entities that change their own image or position (see
/// `AnimatedEntity`) hand out mutable access to their base.
pub trait Entity {
    fn base(&self) -> &EntityBase;

    /// Called when the game wants this entity gone
    fn die(&mut self);

    fn position(&self) -> Vec2 {
        self.base().position
    }

    fn image_name(&self) -> ImageName {
        self.base().image_name
    }
}
