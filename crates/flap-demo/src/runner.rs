use flap_engine::{
    draw_fps_overlay, fixed_update, ready_scripts, render_scene, AssetCache, AssetLoader,
    EngineContext, FixedTimestep, FontHandle, FpsCounter, Game, GameConfig, InputEvent,
    InputQueue, RenderStats, Renderer, TreeWalker,
};

/// What one [`GameRunner::tick`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Fixed logic steps run this frame.
    pub steps: u32,
    /// Script callbacks invoked across those steps.
    pub scripts: usize,
    pub render: RenderStats,
}

/// Generic game runner that wires up the engine loop.
///
/// Owns the game, its scene, and the collaborators the drivers need. The
/// platform layer feeds it input events and frame times; it never sleeps or
/// reads a clock itself.
pub struct GameRunner<G: Game, R: Renderer, L: AssetLoader> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    timestep: FixedTimestep,
    fps: FpsCounter,
    walker: TreeWalker,
    assets: AssetCache<L>,
    renderer: R,
    config: GameConfig,
    font: Option<FontHandle>,
    initialized: bool,
    frames: u64,
}

impl<G: Game, R: Renderer, L: AssetLoader> GameRunner<G, R, L> {
    pub fn new(game: G, renderer: R, loader: L) -> Self {
        let config = game.config();
        let timestep = fixed_timestep(&config);

        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            timestep,
            fps: FpsCounter::new(),
            walker: TreeWalker::new(),
            assets: AssetCache::new(loader),
            renderer,
            config,
            font: None,
            initialized: false,
            frames: 0,
        }
    }

    /// Initialize the game. Call once after construction; later calls are
    /// ignored.
    ///
    /// Builds the scene, loads the overlay font and fires `on_ready` on every
    /// script in the scene.
    pub fn init(&mut self) {
        if self.initialized {
            log::warn!("GameRunner::init called twice; ignoring");
            return;
        }
        self.config = self.game.config();
        self.timestep = fixed_timestep(&self.config);
        self.game.init(&mut self.ctx);

        self.font = match &self.config.font_path {
            Some(path) => self.assets.load_font(path),
            None => None,
        };

        let readied = match self.ctx.root {
            Some(root) => ready_scripts(&mut self.ctx.tree, root, &mut self.walker),
            None => {
                log::warn!("game did not set a root node; nothing will update or draw");
                0
            }
        };
        log::info!(
            "'{}' initialized: {} nodes, {} scripts ready, renderer '{}'",
            self.config.title,
            self.ctx.tree.len(),
            readied,
            self.renderer.backend()
        );
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame of `dt` seconds: process input, run the fixed logic
    /// steps, then redraw the scene and the FPS overlay.
    ///
    /// Does nothing before [`init`](Self::init) or after a quit.
    pub fn tick(&mut self, dt: f32) -> FrameStats {
        let mut stats = FrameStats::default();
        if !self.initialized || !self.ctx.is_running() {
            return stats;
        }

        self.game.update(&mut self.ctx, &self.input);
        if self.input.drain().iter().any(InputEvent::is_quit) {
            self.ctx.request_quit();
            return stats;
        }

        stats.steps = self.timestep.accumulate(dt);
        if let Some(root) = self.ctx.root {
            for _ in 0..stats.steps {
                stats.scripts +=
                    fixed_update(&mut self.ctx.tree, root, &mut self.walker, self.timestep.dt());
            }
        }

        self.renderer.clear();
        if let Some(root) = self.ctx.root {
            stats.render = render_scene(
                &self.ctx.tree,
                root,
                &mut self.walker,
                &mut self.assets,
                &mut self.renderer,
            );
        }
        if self.config.show_fps {
            if let Some(font) = &self.font {
                draw_fps_overlay(&mut self.renderer, font, self.config.font_size, self.fps.fps());
            }
        }

        self.fps.count_frame(dt);
        self.frames += 1;
        stats
    }

    pub fn is_running(&self) -> bool {
        self.ctx.is_running()
    }

    /// Frames ticked since init.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut EngineContext {
        &mut self.ctx
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn assets(&self) -> &AssetCache<L> {
        &self.assets
    }

    /// Seconds per fixed logic step.
    pub fn fixed_dt(&self) -> f32 {
        self.timestep.dt()
    }
}

// Configs built in code skip the JSON validation, so check again here.
fn fixed_timestep(config: &GameConfig) -> FixedTimestep {
    if GameConfig::is_valid_fixed_dt(config.fixed_dt) {
        FixedTimestep::new(config.fixed_dt)
    } else {
        log::warn!(
            "invalid fixed_dt {}; falling back to {}",
            config.fixed_dt,
            GameConfig::DEFAULT_FIXED_DT
        );
        FixedTimestep::new(GameConfig::DEFAULT_FIXED_DT)
    }
}
