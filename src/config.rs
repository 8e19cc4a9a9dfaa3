// Game tuning constants and small config structs

/// Minimum time in milliseconds that must pass before an animation advances a frame
pub const ANIMATION_FRAME_SPEED_MS: u64 = 250;

/// Size of the skier's collision box in world units (pixels)
pub const SKIER_SIZE: (f32, f32) = (24.0, 28.0);

/// Size of an obstacle's collision box in world units (pixels)
pub const OBSTACLE_SIZE: (f32, f32) = (28.0, 30.0);

/// Animation pacing for a single animated entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Milliseconds between frame advances
    pub frame_duration_ms: u64,
}

impl AnimationConfig {
    /// Create a config with a custom frame duration
    pub fn new(frame_duration_ms: u64) -> Self {
        Self { frame_duration_ms }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new(ANIMATION_FRAME_SPEED_MS)
    }
}
