use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;

use crate::config::binding::InputId;
use crate::config::overlay_config::OverlayConfig;
use crate::overlay::fade::FadeParams;
use crate::overlay::gradient::OverlayGradient;
use crate::overlay::key_entry::{KeyEntry, TrackedInput};
use crate::overlay::stepper::{EngineParams, OverlayEngine};
use crate::render::draw_list::{self, DrawList};
use crate::render::layout::Layout;
use crate::traits::input::InputSource;

/// Everything derived from one configuration snapshot. Replaced as a
/// whole on reload so per-key state and geometry can never desync.
#[derive(Debug)]
struct AppState {
    config: OverlayConfig,
    layout: Layout,
    ids: Vec<InputId>,
    engine: OverlayEngine,
    gradient: OverlayGradient,
    generation: u64,
}

impl AppState {
    fn build(mut config: OverlayConfig) -> Result<Self> {
        config.validate()?;
        let layout = Layout::compute(&config);

        let mut ids = Vec::with_capacity(config.keys.len());
        let mut entries = Vec::with_capacity(config.keys.len());
        for (key, square) in config.keys.iter().zip(&layout.squares) {
            let id = key.bind.resolve()?;
            ids.push(id);
            entries.push(KeyEntry::new(
                TrackedInput {
                    id,
                    label: key.display_label().to_string(),
                    pressed_color: key.pressed_color,
                    size: key.size,
                },
                square.bar_ceiling(),
            ));
        }

        let params = EngineParams {
            fade: FadeParams {
                duration: config.general.key_fade_time,
                exponent: config.general.key_fade_exponent,
            },
            bar_speed: config.general.bar_speed,
            background: config.general.background_color,
        };
        let gradient = OverlayGradient::build(
            config.general.background_color,
            layout.window_width,
            layout.ratio_y,
        );

        Ok(Self {
            config,
            layout,
            ids,
            engine: OverlayEngine::new(entries, params),
            gradient,
            generation: 0,
        })
    }
}

/// Process-wide overlay state behind one coarse lock: the render loop
/// holds it for a frame's update, a reload holds it for the swap.
#[derive(Debug)]
pub struct OverlayApp {
    state: Mutex<AppState>,
}

impl OverlayApp {
    pub fn new(config: OverlayConfig) -> Result<Self> {
        let state = AppState::build(config)?;
        info!(
            keys = state.ids.len(),
            width = state.layout.window_width,
            height = state.layout.window_height,
            "overlay initialized"
        );
        Ok(Self {
            state: Mutex::new(state),
        })
    }

    /// Rebuild all per-key state and derived geometry from a fresh
    /// configuration snapshot. All-or-nothing: on error the previous
    /// state stays in place. Safe to call while the render loop runs.
    pub fn reload(&self, config: OverlayConfig) -> Result<()> {
        let mut fresh = AppState::build(config)?;
        let mut state = self.lock();
        fresh.generation = state.generation + 1;
        *state = fresh;
        info!(
            keys = state.ids.len(),
            generation = state.generation,
            "configuration reloaded"
        );
        Ok(())
    }

    /// Advance the animation by one frame and return the draw list.
    /// `elapsed_seconds` is the time since the previous frame.
    pub fn frame(&self, input: &dyn InputSource, elapsed_seconds: f32) -> DrawList {
        let mut state = self.lock();
        let active: Vec<bool> = state.ids.iter().map(|id| input.is_active(*id)).collect();
        let frames = state.engine.step(&active, elapsed_seconds);
        draw_list::compose(&state.config, &state.layout, &frames)
    }

    pub fn window_size(&self) -> (u32, u32) {
        let state = self.lock();
        (state.layout.window_width, state.layout.window_height)
    }

    pub fn max_fps(&self) -> u32 {
        self.lock().config.general.fps
    }

    /// Bumped on every successful reload; the host rebuilds the
    /// gradient texture when it changes.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Snapshot of the current gradient buffer for texture upload.
    pub fn gradient(&self) -> OverlayGradient {
        self.lock().gradient.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AppState> {
        self.state.lock().expect("overlay state lock poisoned")
    }
}

/// Frame-rate cap for the render loop: sleeps out the remainder of the
/// frame budget after each presented frame.
pub struct FrameLimiter {
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new() -> Self {
        Self {
            frame_start: Instant::now(),
        }
    }

    pub fn wait(&mut self, fps: u32) {
        let budget = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        let elapsed = self.frame_start.elapsed();
        if elapsed < budget {
            std::thread::sleep(budget - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new()
    }
}
