// The player's skier

use glam::Vec2;

use crate::config::AnimationConfig;
use crate::engine::assets::ImageName;

use super::animated::AnimatedEntity;
use super::animation::{Animation, AnimationError, AnimationSet, Animator, FrameStep};
use super::entity::{Entity, EntityBase};
use super::obstacle::CollisionOutcome;

/// Name of the skier's jump animation
pub const JUMP_ANIMATION: &str = "jump";

/// What the skier is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkierState {
    /// Heading down the slope
    #[default]
    Skiing,
    /// In the air after hitting a ramp
    Jumping,
    /// Knocked down by an obstacle
    Crashed,
}

impl SkierState {
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Jumping)
    }

    /// Check if the skier is moving down the slope
    pub fn can_move(&self) -> bool {
        !matches!(self, Self::Crashed)
    }

    /// Image shown when no animation is driving the skier
    pub fn resting_image(&self) -> ImageName {
        match self {
            Self::Skiing | Self::Jumping => ImageName::SkierDown,
            Self::Crashed => ImageName::SkierCrash,
        }
    }
}

/// The skier entity
#[derive(Debug)]
pub struct Skier {
    base: EntityBase,
    animator: Animator,
    state: SkierState,
}

impl Skier {
    /// Create a skier at `position`, facing down the slope
    ///
    /// `game_time` is the current game time in milliseconds.
    pub fn new(
        position: Vec2,
        config: AnimationConfig,
        game_time: u64,
    ) -> Result<Self, AnimationError> {
        let animations = Self::build_animations()?;
        Ok(Self {
            base: EntityBase::at(position, ImageName::SkierDown),
            animator: Animator::new(animations, config, game_time),
            state: SkierState::Skiing,
        })
    }

    pub fn state(&self) -> SkierState {
        self.state
    }

    pub fn is_airborne(&self) -> bool {
        self.state.is_airborne()
    }

    /// React to hitting an obstacle
    pub fn handle_collision(&mut self, outcome: CollisionOutcome) {
        match outcome {
            CollisionOutcome::Crash => self.crash(),
            CollisionOutcome::Ignore => {}
            CollisionOutcome::Jump => self.jump(),
        }
    }

    /// Launch into a jump, restarting it if already in the air
    pub fn jump(&mut self) {
        if !self.state.can_move() {
            return;
        }
        if self.set_animation(JUMP_ANIMATION) {
            self.state = SkierState::Jumping;
            log::debug!("Skier jumped at {:?}", self.base.position);
        }
    }

    /// Knock the skier down
    pub fn crash(&mut self) {
        if self.state == SkierState::Crashed {
            return;
        }
        // Cut any jump short without landing
        self.animator.stop();
        self.state = SkierState::Crashed;
        self.base.image_name = SkierState::Crashed.resting_image();
        log::info!("Skier crashed at {:?}", self.base.position);
    }

    /// Get back up after a crash
    pub fn recover(&mut self) {
        if self.state == SkierState::Crashed {
            self.state = SkierState::Skiing;
            self.base.image_name = SkierState::Skiing.resting_image();
        }
    }

    /// Move down the slope unless crashed
    pub fn move_down(&mut self, distance: f32) {
        if self.state.can_move() {
            self.base.position.y += distance;
        }
    }

    /// Per-frame update: advances the animation and lands finished jumps
    pub fn update(&mut self, game_time: u64) -> FrameStep {
        let step = self.animate(game_time);
        if step == FrameStep::Finished && self.state == SkierState::Jumping {
            self.land();
        }
        step
    }

    fn land(&mut self) {
        self.state = SkierState::Skiing;
        self.base.image_name = SkierState::Skiing.resting_image();
        log::debug!("Skier landed at {:?}", self.base.position);
    }
}

impl Entity for Skier {
    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn die(&mut self) {
        self.crash();
    }
}

impl AnimatedEntity for Skier {
    fn build_animations() -> Result<AnimationSet, AnimationError> {
        AnimationSet::new().with(
            JUMP_ANIMATION,
            Animation::one_shot(vec![
                ImageName::SkierJump1,
                ImageName::SkierJump2,
                ImageName::SkierJump3,
                ImageName::SkierJump4,
                ImageName::SkierJump5,
            ]),
        )
    }

    fn base_mut(&mut self) -> &mut EntityBase {
        &mut self.base
    }

    fn animator(&self) -> &Animator {
        &self.animator
    }

    fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }
}
