// Typed image identifiers
//
// Every sprite the game can display has a name here. Loading the pixels is
// left to whatever renderer sits on top; entities only ever carry the name.

use std::fmt;

/// Identifier of a single sprite image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageName {
    SkierCrash,
    SkierLeft,
    SkierLeftDown,
    SkierDown,
    SkierRightDown,
    SkierRight,
    SkierJump1,
    SkierJump2,
    SkierJump3,
    SkierJump4,
    SkierJump5,
    Tree,
    TreeCluster,
    Rock1,
    Rock2,
    JumpRamp,
    RhinoDefault,
    RhinoRunLeft,
    RhinoRunLeft2,
    RhinoLift,
    RhinoLiftMouthOpen,
    RhinoLiftEat1,
    RhinoLiftEat2,
    RhinoLiftEat3,
    RhinoLiftEat4,
}

impl ImageName {
    /// Every image, in a stable order (used for preloading)
    pub const ALL: [ImageName; 25] = [
        Self::SkierCrash,
        Self::SkierLeft,
        Self::SkierLeftDown,
        Self::SkierDown,
        Self::SkierRightDown,
        Self::SkierRight,
        Self::SkierJump1,
        Self::SkierJump2,
        Self::SkierJump3,
        Self::SkierJump4,
        Self::SkierJump5,
        Self::Tree,
        Self::TreeCluster,
        Self::Rock1,
        Self::Rock2,
        Self::JumpRamp,
        Self::RhinoDefault,
        Self::RhinoRunLeft,
        Self::RhinoRunLeft2,
        Self::RhinoLift,
        Self::RhinoLiftMouthOpen,
        Self::RhinoLiftEat1,
        Self::RhinoLiftEat2,
        Self::RhinoLiftEat3,
        Self::RhinoLiftEat4,
    ];

    /// Path of the image file relative to the asset root
    pub fn path(self) -> &'static str {
        match self {
            Self::SkierCrash => "img/skier_crash.png",
            Self::SkierLeft => "img/skier_left.png",
            Self::SkierLeftDown => "img/skier_left_down.png",
            Self::SkierDown => "img/skier_down.png",
            Self::SkierRightDown => "img/skier_right_down.png",
            Self::SkierRight => "img/skier_right.png",
            Self::SkierJump1 => "img/skier_jump_1.png",
            Self::SkierJump2 => "img/skier_jump_2.png",
            Self::SkierJump3 => "img/skier_jump_3.png",
            Self::SkierJump4 => "img/skier_jump_4.png",
            Self::SkierJump5 => "img/skier_jump_5.png",
            Self::Tree => "img/tree_1.png",
            Self::TreeCluster => "img/tree_cluster.png",
            Self::Rock1 => "img/rock_1.png",
            Self::Rock2 => "img/rock_2.png",
            Self::JumpRamp => "img/jump_ramp.png",
            Self::RhinoDefault => "img/rhino_default.png",
            Self::RhinoRunLeft => "img/rhino_run_left.png",
            Self::RhinoRunLeft2 => "img/rhino_run_left_2.png",
            Self::RhinoLift => "img/rhino_lift.png",
            Self::RhinoLiftMouthOpen => "img/rhino_lift_mouth_open.png",
            Self::RhinoLiftEat1 => "img/rhino_lift_eat_1.png",
            Self::RhinoLiftEat2 => "img/rhino_lift_eat_2.png",
            Self::RhinoLiftEat3 => "img/rhino_lift_eat_3.png",
            Self::RhinoLiftEat4 => "img/rhino_lift_eat_4.png",
        }
    }

    /// Whether this image is one of the placeable obstacles
    pub fn is_obstacle(self) -> bool {
        matches!(
            self,
            Self::Tree | Self::TreeCluster | Self::Rock1 | Self::Rock2 | Self::JumpRamp
        )
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<&str> = ImageName::ALL.iter().map(|i| i.path()).collect();
        assert_eq!(paths.len(), ImageName::ALL.len(), "Each image needs its own file");
    }

    #[test]
    fn test_obstacle_images() {
        assert!(ImageName::Tree.is_obstacle());
        assert!(ImageName::JumpRamp.is_obstacle());
        assert!(!ImageName::SkierDown.is_obstacle());
        assert!(!ImageName::RhinoDefault.is_obstacle());
    }

    #[test]
    fn test_display_is_path() {
        assert_eq!(ImageName::Rock1.to_string(), "img/rock_1.png");
    }
}
