use serde::{Deserialize, Deserializer, Serialize};

use crate::api::types::NodeId;
use crate::core::tree::SceneTree;
use crate::input::queue::InputQueue;

/// Configuration for the engine, provided by the game.
///
/// Every field has a default, so a JSON override only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window / surface title.
    pub title: String,
    /// Surface width in pixels (default: 288).
    pub width: u32,
    /// Surface height in pixels (default: 512).
    pub height: u32,
    /// Fixed timestep in seconds (default: 1/60). Must be finite and positive.
    #[serde(deserialize_with = "positive_seconds")]
    pub fixed_dt: f32,
    /// Font used for the FPS overlay. No overlay font if `None`.
    pub font_path: Option<String>,
    /// Overlay font size in pixels (default: 20).
    pub font_size: f32,
    /// Draw the FPS counter each frame.
    pub show_fps: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Flappy Bird".to_string(),
            width: 288,
            height: 512,
            fixed_dt: Self::DEFAULT_FIXED_DT,
            font_path: None,
            font_size: 20.0,
            show_fps: true,
        }
    }
}

impl GameConfig {
    pub const DEFAULT_FIXED_DT: f32 = 1.0 / 60.0;

    /// Parse a config from a JSON string. Missing fields take their defaults;
    /// a zero, negative or non-finite `fixed_dt` is an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether `dt` can drive a fixed timestep.
    pub fn is_valid_fixed_dt(dt: f32) -> bool {
        dt.is_finite() && dt > 0.0
    }
}

fn positive_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    let dt = f32::deserialize(deserializer)?;
    if GameConfig::is_valid_fixed_dt(dt) {
        Ok(dt)
    } else {
        Err(serde::de::Error::custom(format!(
            "fixed_dt must be a positive number of seconds, got {dt}"
        )))
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the scene tree and set `ctx.root`.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Called once per frame, before the fixed steps, with the frame's input.
    fn update(&mut self, _ctx: &mut EngineContext, _input: &InputQueue) {}
}

/// Mutable engine state, passed to [`Game::init`] and [`Game::update`].
#[derive(Debug)]
pub struct EngineContext {
    pub tree: SceneTree,
    /// Root of the scene the drivers walk. Nothing is updated or drawn
    /// while this is `None`.
    pub root: Option<NodeId>,
    running: bool,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            tree: SceneTree::new(),
            root: None,
            running: true,
        }
    }

    /// Ask the runner to stop after the current frame.
    pub fn request_quit(&mut self) {
        if self.running {
            log::info!("quit requested");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.title, "Flappy Bird");
        assert_eq!((config.width, config.height), (288, 512));
        assert_eq!(config.fixed_dt, 1.0 / 60.0);
        assert_eq!(config.font_path, None);
        assert!(config.show_fps);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "width": 576, "show_fps": false }"#).unwrap();
        assert_eq!(config.width, 576);
        assert_eq!(config.height, 512);
        assert!(!config.show_fps);
        assert_eq!(config.title, "Flappy Bird");
    }

    #[test]
    fn font_path_from_json() {
        let config = GameConfig::from_json(r#"{ "font_path": "assets/fonts/arial.ttf", "font_size": 14 }"#).unwrap();
        assert_eq!(config.font_path.as_deref(), Some("assets/fonts/arial.ttf"));
        assert_eq!(config.font_size, 14.0);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(GameConfig::from_json(r#"{ "width": "wide" }"#).is_err());
    }

    #[test]
    fn non_positive_fixed_dt_is_rejected() {
        for json in [r#"{ "fixed_dt": 0 }"#, r#"{ "fixed_dt": -0.1 }"#] {
            let err = GameConfig::from_json(json).unwrap_err();
            assert!(err.to_string().contains("fixed_dt"), "{err}");
        }
        assert_eq!(GameConfig::from_json(r#"{ "fixed_dt": 0.02 }"#).unwrap().fixed_dt, 0.02);
    }

    #[test]
    fn fixed_dt_validity() {
        assert!(GameConfig::is_valid_fixed_dt(GameConfig::DEFAULT_FIXED_DT));
        assert!(!GameConfig::is_valid_fixed_dt(0.0));
        assert!(!GameConfig::is_valid_fixed_dt(-1.0));
        assert!(!GameConfig::is_valid_fixed_dt(f32::NAN));
        assert!(!GameConfig::is_valid_fixed_dt(f32::INFINITY));
    }

    #[test]
    fn quit_is_sticky() {
        let mut ctx = EngineContext::new();
        assert!(ctx.is_running());
        assert!(ctx.root.is_none());
        ctx.request_quit();
        ctx.request_quit();
        assert!(!ctx.is_running());
    }
}
