use std::thread;

use anyhow::Result;
use glam::Vec2;
use log::info;

use ski_slope::config::{AnimationConfig, OBSTACLE_SIZE, SKIER_SIZE};
use ski_slope::engine::game_loop::{GameClock, FRAME_INTERVAL};
use ski_slope::game::entities::{Entity, Obstacle, Skier, SkierState};
use ski_slope::game::resolve_skier_collisions;
use ski_slope::logging;

/// Frames to simulate (~5 seconds at 60 FPS)
const DEMO_FRAMES: u64 = 300;

/// Distance the skier travels down the slope each frame
const SKIER_STEP: f32 = 4.0;

/// Frames a crashed skier stays down before getting up
const CRASH_RECOVERY_FRAMES: u64 = 45;

fn main() -> Result<()> {
    // Initialize logger (RUST_LOG overrides the info default)
    logging::init();

    info!("Starting ski slope demo...");

    let mut rng = fastrand::Rng::new();
    let obstacles: Vec<Obstacle> = (1..=40)
        .map(|i| {
            let x = rng.f32() * 60.0 - 30.0;
            Obstacle::with_rng(Vec2::new(x, i as f32 * 30.0), &mut rng)
        })
        .collect();
    info!("Placed {} obstacles", obstacles.len());

    let mut clock = GameClock::new();
    let mut skier = Skier::new(Vec2::ZERO, AnimationConfig::default(), clock.game_time())?;
    let skier_size = Vec2::from(SKIER_SIZE);
    let obstacle_size = Vec2::from(OBSTACLE_SIZE);
    let mut crashed_at: Option<u64> = None;

    while clock.frame_count() < DEMO_FRAMES {
        let game_time = clock.begin_frame();
        let frame = clock.frame_count();

        skier.update(game_time);
        skier.move_down(SKIER_STEP);

        if let Some(hit) = resolve_skier_collisions(&mut skier, skier_size, &obstacles, obstacle_size)
        {
            if skier.state() == SkierState::Crashed && crashed_at.is_none() {
                info!(
                    "Frame {}: crashed into {}",
                    frame,
                    obstacles[hit.obstacle].image_name()
                );
                crashed_at = Some(frame);
            }
        }

        if let Some(at) = crashed_at {
            if frame - at >= CRASH_RECOVERY_FRAMES {
                skier.recover();
                // Step past whatever knocked us down
                skier.move_down(obstacle_size.y);
                crashed_at = None;
                info!("Frame {}: back on skis", frame);
            }
        }

        thread::sleep(FRAME_INTERVAL);
    }

    info!(
        "Demo finished after {} frames at y={:.0}, skier {:?}",
        clock.frame_count(),
        skier.position().y,
        skier.state()
    );

    Ok(())
}
