// Sprite animation registry and frame-stepping player

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::config::AnimationConfig;
use crate::engine::assets::ImageName;

/// Zero-argument hook fired when a non-looping animation finishes
pub type AnimationCallback = Rc<dyn Fn()>;

/// Errors raised while registering animations
///
/// Only construction can fail. Playback never errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnimationError {
    #[error("Animation already registered: {0}")]
    Duplicate(String),

    #[error("Animation has no frames: {0}")]
    Empty(String),
}

/// An ordered sequence of images
#[derive(Clone)]
pub struct Animation {
    images: Vec<ImageName>,
    looping: bool,
    callback: Option<AnimationCallback>,
}

impl Animation {
    pub fn new(images: Vec<ImageName>, looping: bool) -> Self {
        Self {
            images,
            looping,
            callback: None,
        }
    }

    /// Create an animation that wraps back to its first frame
    pub fn looping(images: Vec<ImageName>) -> Self {
        Self::new(images, true)
    }

    /// Create an animation that plays once and then stops
    pub fn one_shot(images: Vec<ImageName>) -> Self {
        Self::new(images, false)
    }

    /// Attach a hook that runs when a one-shot animation finishes
    pub fn with_callback(mut self, callback: impl Fn() + 'static) -> Self {
        self.callback = Some(Rc::new(callback));
        self
    }

    pub fn images(&self) -> &[ImageName] {
        &self.images
    }

    pub fn looping_enabled(&self) -> bool {
        self.looping
    }

    pub fn callback(&self) -> Option<&AnimationCallback> {
        self.callback.as_ref()
    }

    pub fn frame_count(&self) -> usize {
        self.images.len()
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("images", &self.images)
            .field("looping", &self.looping)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// Named animations available to one entity
#[derive(Debug, Clone, Default)]
pub struct AnimationSet {
    animations: HashMap<String, Animation>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an animation under a unique name
    pub fn insert(&mut self, name: &str, animation: Animation) -> Result<(), AnimationError> {
        if animation.frame_count() == 0 {
            return Err(AnimationError::Empty(name.to_string()));
        }
        if self.animations.contains_key(name) {
            return Err(AnimationError::Duplicate(name.to_string()));
        }
        self.animations.insert(name.to_string(), animation);
        Ok(())
    }

    /// Builder form of [`AnimationSet::insert`]
    pub fn with(mut self, name: &str, animation: Animation) -> Result<Self, AnimationError> {
        self.insert(name, animation)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Names of every registered animation, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }
}

/// What a call into the [`Animator`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// No animation is playing
    Idle,
    /// Not enough time has passed to advance
    Held,
    /// Moved to a new frame that should now be displayed
    Advanced { frame: usize, image: ImageName },
    /// A one-shot animation ran out of frames and was cleared
    Finished,
}

/// Drives frame advancement for one entity
///
/// Tracks which animation is current (by name), the frame index and the game
/// time of the last advance.
#[derive(Debug)]
pub struct Animator {
    /// All animations this entity can play
    animations: AnimationSet,
    /// Name of the animation currently playing
    current: Option<String>,
    /// Index into the current animation's images
    frame: usize,
    /// Game time (ms) of the last frame change
    frame_time: u64,
    /// Pacing between frames
    config: AnimationConfig,
}

impl Animator {
    /// Create an idle animator; `start_time` seeds the last-advance timestamp
    pub fn new(animations: AnimationSet, config: AnimationConfig, start_time: u64) -> Self {
        if animations.is_empty() {
            log::warn!("Animator created without any animations");
        } else {
            log::debug!("Animator ready with {} animations", animations.len());
        }
        Self {
            animations,
            current: None,
            frame: 0,
            frame_time: start_time,
            config,
        }
    }

    /// Switch to the named animation and rewind it to the first frame
    ///
    /// Returns the image to display, or `None` when the name is unknown, in
    /// which case nothing changes. Switching to the animation that is already
    /// playing restarts it. The last-advance time is kept.
    pub fn set_animation(&mut self, name: &str) -> Option<ImageName> {
        let Some(animation) = self.animations.get(name) else {
            log::debug!("Unknown animation '{}', keeping current state", name);
            return None;
        };
        let first = animation.images().first().copied();

        self.current = Some(name.to_string());
        self.frame = 0;

        match first {
            Some(image) => {
                log::debug!("Playing animation '{}'", name);
                Some(image)
            }
            None => {
                log::warn!("Animation '{}' has no frames, finishing immediately", name);
                self.finish_animation();
                None
            }
        }
    }

    /// Advance one frame if more than the frame duration has passed
    pub fn animate(&mut self, game_time: u64) -> FrameStep {
        if self.current.is_none() {
            return FrameStep::Idle;
        }

        if game_time.saturating_sub(self.frame_time) > self.config.frame_duration_ms {
            self.next_animation_frame(game_time)
        } else {
            FrameStep::Held
        }
    }

    /// Unconditionally step to the next frame
    ///
    /// Wraps looping animations and finishes one-shot animations once they
    /// run past their last frame.
    pub fn next_animation_frame(&mut self, game_time: u64) -> FrameStep {
        let Some(animation) = self.current_animation() else {
            return FrameStep::Idle;
        };
        let frame_count = animation.frame_count();
        let looping = animation.looping_enabled();

        self.frame_time = game_time;
        self.frame += 1;
        if self.frame >= frame_count {
            if !looping || frame_count == 0 {
                return self.finish_animation();
            }
            self.frame = 0;
        }

        match self
            .current_animation()
            .and_then(|a| a.images().get(self.frame).copied())
        {
            Some(image) => {
                log::trace!("Animation frame {} -> {:?}", self.frame, image);
                FrameStep::Advanced {
                    frame: self.frame,
                    image,
                }
            }
            None => FrameStep::Idle,
        }
    }

    /// Stop the current animation and fire its completion hook
    ///
    /// The current animation is cleared before the hook runs, so the hook
    /// observes an idle animator.
    pub fn finish_animation(&mut self) -> FrameStep {
        let Some(name) = self.current.take() else {
            return FrameStep::Idle;
        };
        let callback = self
            .animations
            .get(&name)
            .and_then(|a| a.callback().cloned());

        log::debug!("Animation '{}' finished", name);
        if let Some(callback) = callback {
            callback();
        }
        FrameStep::Finished
    }

    /// Drop the current animation without firing its completion hook
    ///
    /// Returns whether anything was playing.
    pub fn stop(&mut self) -> bool {
        match self.current.take() {
            Some(name) => {
                log::debug!("Animation '{}' stopped", name);
                true
            }
            None => false,
        }
    }

    /// The animation currently playing, if any
    pub fn current_animation(&self) -> Option<&Animation> {
        self.current
            .as_deref()
            .and_then(|name| self.animations.get(name))
    }

    /// Name of the animation currently playing, if any
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Image of the current frame, if playing
    pub fn current_image(&self) -> Option<ImageName> {
        self.current_animation()
            .and_then(|a| a.images().get(self.frame).copied())
    }

    pub fn current_frame(&self) -> usize {
        self.frame
    }

    /// Game time of the last frame change
    pub fn frame_time(&self) -> u64 {
        self.frame_time
    }

    pub fn is_playing(&self) -> bool {
        self.current.is_some()
    }

}
