use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use clap::Parser;
use macroquad::prelude::{Conf, Texture2D, next_frame, request_new_screen_size, screen_height, screen_width};
use tracing::{error, info, warn};

use keyglow::app::{FrameLimiter, OverlayApp};
use keyglow::config::overlay_config::OverlayConfig;
use keyglow::input::LiveInput;
use keyglow::render::draw;
use keyglow::traits::time::{FrameClock, SystemTimeSource};
use keyglow::util::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "keyglow", about = "Real-time key and mouse press overlay")]
struct Args {
    /// Path to the overlay configuration file.
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Directory for rolling log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "keyglow".to_owned(),
        window_width: 600,
        window_height: 800,
        window_resizable: false,
        ..Default::default()
    }
}

fn config_mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

const RELOAD_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_dir.as_deref(), args.verbose) {
        eprintln!("failed to initialize logging: {e:#}");
    }

    let config = match OverlayConfig::load_from(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load config {}: {e:#}", args.config.display());
            std::process::exit(1);
        }
    };

    // Write the defaults out on first run so there is a file to edit.
    if !args.config.exists() {
        if let Err(e) = config.save_to(&args.config) {
            warn!("could not write default config {}: {e:#}", args.config.display());
        } else {
            info!("wrote default config to {}", args.config.display());
        }
    }

    let app = match OverlayApp::new(config) {
        Ok(app) => app,
        Err(e) => {
            error!("invalid configuration: {e:#}");
            std::process::exit(1);
        }
    };

    let input = LiveInput::new();
    let time = SystemTimeSource::new();
    let mut clock = FrameClock::new();
    let mut limiter = FrameLimiter::new();

    let mut watched_mtime = config_mtime(&args.config);
    let mut last_poll = Instant::now();

    let mut gradient_texture: Option<(u64, Texture2D)> = None;

    loop {
        // The config file watch: cheap mtime poll once a second; a
        // change triggers an all-or-nothing reload.
        if last_poll.elapsed() >= RELOAD_POLL_INTERVAL {
            last_poll = Instant::now();
            let mtime = config_mtime(&args.config);
            if mtime != watched_mtime {
                watched_mtime = mtime;
                match OverlayConfig::load_from(&args.config) {
                    Ok(config) => {
                        if let Err(e) = app.reload(config) {
                            warn!("reload rejected, keeping previous state: {e:#}");
                        }
                    }
                    Err(e) => warn!("cannot read {}: {e:#}", args.config.display()),
                }
            }
        }

        let (width, height) = app.window_size();
        if screen_width() as u32 != width || screen_height() as u32 != height {
            request_new_screen_size(width as f32, height as f32);
        }

        let elapsed = clock.tick(&time);
        let list = app.frame(&input, elapsed);

        let generation = app.generation();
        let rebuild = gradient_texture
            .as_ref()
            .map(|(g, _)| *g != generation)
            .unwrap_or(true);
        if rebuild && list.show_gradient {
            gradient_texture = Some((generation, draw::gradient_texture(&app.gradient())));
        }

        draw::paint(&list, gradient_texture.as_ref().map(|(_, t)| t));

        limiter.wait(app.max_fps());
        next_frame().await;
    }
}
