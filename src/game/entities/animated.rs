// Entities that display an animation

use super::animation::{AnimationError, AnimationSet, Animator, FrameStep};
use super::entity::{Entity, EntityBase};

/// An entity whose image is driven by an [`Animator`]
///
/// Implementors build their animations once with
/// [`AnimatedEntity::build_animations`] and hand them to the animator in their
/// constructor, before the first call to [`AnimatedEntity::animate`]. The
/// provided methods keep the entity's displayed image in sync with the
/// current frame.
pub trait AnimatedEntity: Entity {
    /// Every animation this kind of entity can play
    fn build_animations() -> Result<AnimationSet, AnimationError>
    where
        Self: Sized;

    fn base_mut(&mut self) -> &mut EntityBase;

    fn animator(&self) -> &Animator;

    fn animator_mut(&mut self) -> &mut Animator;

    /// Start the named animation from its first frame
    ///
    /// Unknown names leave everything unchanged and return `false`.
    fn set_animation(&mut self, name: &str) -> bool {
        match self.animator_mut().set_animation(name) {
            Some(image) => {
                self.base_mut().image_name = image;
                true
            }
            None => false,
        }
    }

    /// Called once per frame with the current game time in milliseconds
    fn animate(&mut self, game_time: u64) -> FrameStep {
        let step = self.animator_mut().animate(game_time);
        self.show_frame(step)
    }

    fn next_animation_frame(&mut self, game_time: u64) -> FrameStep {
        let step = self.animator_mut().next_animation_frame(game_time);
        self.show_frame(step)
    }

    fn finish_animation(&mut self) -> FrameStep {
        self.animator_mut().finish_animation()
    }

    fn show_frame(&mut self, step: FrameStep) -> FrameStep {
        if let FrameStep::Advanced { image, .. } = step {
            self.base_mut().image_name = image;
        }
        step
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::config::AnimationConfig;
    use crate::engine::assets::ImageName;
    use crate::game::entities::animation::Animation;

    /// Small animated entity used to exercise the provided methods
    struct Critter {
        base: EntityBase,
        animator: Animator,
        removed: bool,
    }

    impl Critter {
        fn new(on_finish: Option<Rc<Cell<u32>>>) -> Self {
            let mut animations = Self::build_animations().unwrap();
            if let Some(counter) = on_finish {
                let once = Animation::one_shot(vec![
                    ImageName::RhinoLiftEat1,
                    ImageName::RhinoLiftEat2,
                    ImageName::RhinoLiftEat3,
                ])
                .with_callback(move || counter.set(counter.get() + 1));
                animations.insert("eat", once).unwrap();
            }
            Self {
                base: EntityBase::new(0.0, 0.0, ImageName::RhinoDefault),
                animator: Animator::new(animations, AnimationConfig::new(100), 0),
                removed: false,
            }
        }
    }

    impl Entity for Critter {
        fn base(&self) -> &EntityBase {
            &self.base
        }

        fn die(&mut self) {
            self.removed = true;
        }
    }

    impl AnimatedEntity for Critter {
        fn build_animations() -> Result<AnimationSet, AnimationError> {
            AnimationSet::new().with(
                "run",
                Animation::looping(vec![ImageName::RhinoRunLeft, ImageName::RhinoRunLeft2]),
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

    #[test]
    fn test_set_animation_updates_image() {
        let mut critter = Critter::new(None);
        assert!(critter.set_animation("run"));
        assert_eq!(critter.image_name(), ImageName::RhinoRunLeft);
    }

    #[test]
    fn test_unknown_animation_keeps_image() {
        let mut critter = Critter::new(None);
        assert!(!critter.set_animation("walk"));
        assert_eq!(critter.image_name(), ImageName::RhinoDefault);
        assert!(!critter.animator().is_playing());
    }

    #[test]
    fn test_animate_follows_frames() {
        let mut critter = Critter::new(None);
        critter.set_animation("run");

        critter.animate(50);
        assert_eq!(critter.image_name(), ImageName::RhinoRunLeft);

        critter.animate(101);
        assert_eq!(critter.image_name(), ImageName::RhinoRunLeft2);

        critter.animate(202);
        assert_eq!(critter.image_name(), ImageName::RhinoRunLeft);
        assert_eq!(critter.image_name(), critter.animator().current_image().unwrap());
    }

    #[test]
    fn test_finish_keeps_last_image() {
        let calls = Rc::new(Cell::new(0));
        let mut critter = Critter::new(Some(Rc::clone(&calls)));
        critter.set_animation("eat");

        critter.next_animation_frame(1);
        critter.next_animation_frame(2);
        assert_eq!(critter.image_name(), ImageName::RhinoLiftEat3);

        assert_eq!(critter.next_animation_frame(3), FrameStep::Finished);
        assert_eq!(calls.get(), 1);
        assert_eq!(critter.image_name(), ImageName::RhinoLiftEat3);
        assert_eq!(critter.animate(10_000), FrameStep::Idle);
    }

    #[test]
    fn test_finish_animation_directly() {
        let calls = Rc::new(Cell::new(0));
        let mut critter = Critter::new(Some(Rc::clone(&calls)));
        critter.set_animation("eat");

        assert_eq!(critter.finish_animation(), FrameStep::Finished);
        assert_eq!(calls.get(), 1);
        assert_eq!(critter.finish_animation(), FrameStep::Idle);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_die() {
        let mut critter = Critter::new(None);
        critter.die();
        assert!(critter.removed);
    }
}
