// Engine modules: assets, game clock, collision bounds

pub mod assets;
pub mod game_loop;
pub mod physics;
