pub mod game;
pub mod runner;

pub use game::FlappyGame;
pub use runner::{FrameStats, GameRunner};
