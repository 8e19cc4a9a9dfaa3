//! Game clock for the frame loop
//!
//! Produces the monotonic millisecond "game time" that animated entities are
//! paced against. Time spent paused is excluded so animations freeze with
//! the game and pick up where they left off.

use std::time::{Duration, Instant};

/// Target frame interval for the demo loop (~60 frames per second)
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Game clock state
pub struct GameClock {
    /// Time when the clock started
    start_time: Instant,

    /// Total time spent paused, excluded from game time
    paused_total: Duration,

    /// When the current pause began, if paused
    paused_at: Option<Instant>,

    /// Current frame number
    frame_count: u64,

    /// Game time of the previous frame
    last_frame_ms: u64,
}

impl GameClock {
    /// Create a clock starting now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a clock with an explicit start instant
    pub fn starting_at(start_time: Instant) -> Self {
        Self {
            start_time,
            paused_total: Duration::ZERO,
            paused_at: None,
            frame_count: 0,
            last_frame_ms: 0,
        }
    }

    /// Game time at `now`, in milliseconds since start
    pub fn game_time_at(&self, now: Instant) -> u64 {
        // A paused clock reads as of the moment it was paused
        let effective_now = self.paused_at.unwrap_or(now).max(self.start_time);
        let running = effective_now
            .duration_since(self.start_time)
            .saturating_sub(self.paused_total);
        running.as_millis() as u64
    }

    /// Current game time in milliseconds
    pub fn game_time(&self) -> u64 {
        self.game_time_at(Instant::now())
    }

    /// Begin a new frame, returns the game time to animate with
    ///
    /// The returned value never decreases between calls.
    pub fn begin_frame(&mut self) -> u64 {
        self.begin_frame_at(Instant::now())
    }

    /// Begin a new frame as of `now`
    pub fn begin_frame_at(&mut self, now: Instant) -> u64 {
        self.frame_count += 1;
        let game_time = self.game_time_at(now).max(self.last_frame_ms);
        self.last_frame_ms = game_time;
        game_time
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Check if the clock is paused
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Pause the clock
    pub fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    /// Pause the clock as of `now`
    pub fn pause_at(&mut self, now: Instant) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
            log::info!("Game paused");
        }
    }

    /// Resume the clock
    pub fn resume(&mut self) {
        self.resume_at(Instant::now());
    }

    /// Resume the clock as of `now`
    pub fn resume_at(&mut self, now: Instant) {
        if let Some(paused_at) = self.paused_at.take() {
            self.paused_total += now.saturating_duration_since(paused_at);
            log::info!("Game resumed");
        }
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_creation() {
        let clock = GameClock::new();
        assert_eq!(clock.frame_count(), 0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_game_time_tracks_elapsed() {
        let start = Instant::now();
        let clock = GameClock::starting_at(start);
        assert_eq!(clock.game_time_at(start + Duration::from_millis(120)), 120);
    }

    #[test]
    fn test_frame_counting() {
        let start = Instant::now();
        let mut clock = GameClock::starting_at(start);

        clock.begin_frame_at(start);
        assert_eq!(clock.frame_count(), 1);

        clock.begin_frame_at(start + FRAME_INTERVAL);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_pause_resume() {
        let mut clock = GameClock::new();
        clock.pause();
        assert!(clock.is_paused());

        clock.resume();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_paused_time_excluded() {
        let start = Instant::now();
        let mut clock = GameClock::starting_at(start);

        clock.pause_at(start + Duration::from_millis(100));
        // Reads stay frozen while paused
        assert_eq!(clock.game_time_at(start + Duration::from_millis(400)), 100);

        clock.resume_at(start + Duration::from_millis(500));
        assert_eq!(clock.game_time_at(start + Duration::from_millis(550)), 150);
    }

    #[test]
    fn test_frame_time_never_decreases() {
        let start = Instant::now();
        let mut clock = GameClock::starting_at(start);

        let later = clock.begin_frame_at(start + Duration::from_millis(300));
        let earlier = clock.begin_frame_at(start + Duration::from_millis(200));
        assert_eq!(later, 300);
        assert_eq!(earlier, 300);
    }
}
