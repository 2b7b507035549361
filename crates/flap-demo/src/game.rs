//! The Flappy Bird scene: a scrolling background, a bobbing bird and a
//! wrapping ground strip, all driven by node scripts.

use glam::Vec2;

use flap_engine::{
    EngineContext, Game, GameConfig, NodeId, SceneTree, Script, ScriptComponent, SpriteComponent,
    TransformComponent,
};

pub const BACKGROUND_TEXTURE: &str = "assets/sprites/background_day.png";
pub const BIRD_TEXTURE: &str = "assets/sprites/yellowbird-midflap.png";
pub const GROUND_TEXTURE: &str = "assets/sprites/base.png";

/// Background drift, units per second.
pub const BACKGROUND_SPEED: f32 = 10.0;
/// Ground scroll, units per second.
pub const GROUND_SPEED: f32 = 60.0;
/// Horizontal repeat of the ground strip: `base.png` is 336 wide, the
/// screen 288.
pub const GROUND_WRAP: f32 = 48.0;
/// Height of `base.png`.
pub const GROUND_HEIGHT: f32 = 112.0;

/// Peak bird tilt in radians.
pub const BIRD_TILT: f32 = 0.5;
/// Angular frequency of the bird's bob, radians per second.
pub const BIRD_BOB_RATE: f32 = 2.0;

/// Bird tilt after `elapsed` seconds.
pub fn bird_rotation(elapsed: f32) -> f32 {
    BIRD_TILT * (BIRD_BOB_RATE * elapsed).sin()
}

/// Slides the node left at a constant speed.
struct Scroll {
    speed: f32,
}

impl Script for Scroll {
    fn on_fixed_update(&mut self, node: NodeId, tree: &mut SceneTree, delta: f32) {
        if let Some(transform) = tree.component_mut::<TransformComponent>(node) {
            transform.translate_by(Vec2::new(-self.speed * delta, 0.0));
        }
    }
}

/// Slides the node left and jumps it back by `wrap` once it has moved that far.
struct WrappingScroll {
    speed: f32,
    wrap: f32,
}

impl Script for WrappingScroll {
    fn on_fixed_update(&mut self, node: NodeId, tree: &mut SceneTree, delta: f32) {
        if let Some(transform) = tree.component_mut::<TransformComponent>(node) {
            transform.translation.x -= self.speed * delta;
            if transform.translation.x <= -self.wrap {
                transform.translation.x += self.wrap;
            }
        }
    }
}

/// Rocks the bird back and forth.
#[derive(Default)]
struct Bob {
    elapsed: f32,
}

impl Script for Bob {
    fn on_ready(&mut self, node: NodeId, tree: &mut SceneTree) {
        self.elapsed = 0.0;
        if let Some(transform) = tree.component_mut::<TransformComponent>(node) {
            transform.rotation = bird_rotation(0.0);
        }
        log::debug!("bird ready at {}", tree.path(node));
    }

    fn on_fixed_update(&mut self, node: NodeId, tree: &mut SceneTree, delta: f32) {
        self.elapsed += delta;
        if let Some(transform) = tree.component_mut::<TransformComponent>(node) {
            transform.rotation = bird_rotation(self.elapsed);
        }
    }
}

/// Node ids of the built scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlappyScene {
    pub main: NodeId,
    pub background: NodeId,
    pub bird: NodeId,
    pub ground: NodeId,
}

/// Build `Main -> {Background, Bird, Ground}` for a `width` x `height` screen.
pub fn build_scene(tree: &mut SceneTree, width: f32, height: f32) -> FlappyScene {
    let main = tree.create_node("Main");

    let background = tree.spawn_child(main, "Background");
    tree.set_component(background, TransformComponent::new().with_scale(Vec2::splat(2.0)));
    tree.set_component(background, SpriteComponent::new(BACKGROUND_TEXTURE));
    tree.set_component(background, ScriptComponent::new(Scroll { speed: BACKGROUND_SPEED }));

    let bird = tree.spawn_child(main, "Bird");
    tree.set_component(bird, TransformComponent::from_translation(Vec2::new(width, height) * 0.5));
    tree.set_component(bird, SpriteComponent::new(BIRD_TEXTURE).with_anchor(Vec2::splat(0.5)));
    tree.set_component(bird, ScriptComponent::new(Bob::default()));

    let ground = tree.spawn_child(main, "Ground");
    tree.set_component(
        ground,
        TransformComponent::from_translation(Vec2::new(0.0, height - GROUND_HEIGHT)),
    );
    tree.set_component(ground, SpriteComponent::new(GROUND_TEXTURE));
    tree.set_component(
        ground,
        ScriptComponent::new(WrappingScroll {
            speed: GROUND_SPEED,
            wrap: GROUND_WRAP,
        }),
    );

    FlappyScene { main, background, bird, ground }
}

pub struct FlappyGame {
    config: GameConfig,
    scene: Option<FlappyScene>,
}

impl FlappyGame {
    pub fn new(config: GameConfig) -> Self {
        Self { config, scene: None }
    }

    /// Ids of the scene built by `init`.
    pub fn scene(&self) -> Option<FlappyScene> {
        self.scene
    }
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game for FlappyGame {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let scene = build_scene(
            &mut ctx.tree,
            self.config.width as f32,
            self.config.height as f32,
        );
        ctx.root = Some(scene.main);
        self.scene = Some(scene);
        log::info!("scene built: {} nodes", ctx.tree.len());
    }
}
