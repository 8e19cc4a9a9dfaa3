use glam::Vec2;
use parry2d::bounding_volume::{Aabb, BoundingVolume};
use parry2d::math::{Point, Vector};

/// Axis-aligned collision box centred on an entity
///
/// Discrete overlap only; nothing here sweeps a box through time.
#[derive(Debug, Clone, Copy)]
pub struct Hitbox {
    aabb: Aabb,
}

impl Hitbox {
    /// Create a box of `size` centred on `center`
    pub fn new(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            aabb: Aabb::from_half_extents(
                Point::new(center.x, center.y),
                Vector::new(half.x, half.y),
            ),
        }
    }

    /// Check if two boxes overlap (shared edges count)
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.aabb.intersects(&other.aabb)
    }

    pub fn center(&self) -> Vec2 {
        let c = self.aabb.center();
        Vec2::new(c.x, c.y)
    }

    pub fn size(&self) -> Vec2 {
        let extents = self.aabb.extents();
        Vec2::new(extents.x, extents.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hitbox_geometry() {
        let hitbox = Hitbox::new(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_relative_eq!(hitbox.center().x, 10.0);
        assert_relative_eq!(hitbox.center().y, 20.0);
        assert_relative_eq!(hitbox.size().x, 4.0);
        assert_relative_eq!(hitbox.size().y, 6.0);
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = Hitbox::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Hitbox::new(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_separate_boxes() {
        let a = Hitbox::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Hitbox::new(Vec2::new(0.0, 30.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Hitbox::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Hitbox::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_negative_size_is_normalised() {
        let hitbox = Hitbox::new(Vec2::ZERO, Vec2::new(-4.0, 2.0));
        assert_relative_eq!(hitbox.size().x, 4.0);
    }
}
