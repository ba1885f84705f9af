// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_precision_loss)] // u32->f32 for view sizes
#![allow(clippy::cast_possible_wrap)] // u32->i32 for pixel positions
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! Shot clock desktop simulator.
//!
//! Opens a 320×240 `embedded-graphics-simulator` window with a header bar on
//! top and the shot clock below it. The frame loop doubles as the clock host:
//! it keeps the pending tick in a [`DeadlineScheduler`], feeds due ticks back
//! to the clock and repaints only what changed.
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `S` | Start the countdown |
//! | `P` / `Space` | Stop the countdown |
//! | `R` | Reset (stop and zero) |
//! | `Up` / `Down` | Grow / shrink the view padding |
//!
//! # Configuration
//!
//! `--config clock.toml` loads settings (see [`shot_clock::settings`]) and
//! `--value` overrides the initial value. Logging goes through `env_logger`;
//! set `RUST_LOG=debug` for layout and timer details.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info};
use shot_clock::colors::BLACK;
use shot_clock::config::{
    CLOCK_AREA_HEIGHT,
    DEFAULT_VIEW_PADDING,
    FRAME_TIME,
    HEADER_HEIGHT,
    MAX_VIEW_PADDING,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    VIEW_PADDING_STEP,
};
use shot_clock::render::{Popup, RenderState};
use shot_clock::scheduler::DeadlineScheduler;
use shot_clock::settings::config_from_toml;
use shot_clock::widgets::{draw_buzzer_popup, draw_header, draw_reset_popup};
use shot_clock::{ClockConfig, ClockHost, DrawTargetSurface, Padding, ShotClock, TickToken};

/// Screen region below the header where the clock view lives.
const CLOCK_AREA: Rectangle = Rectangle::new(
    Point::new(0, HEADER_HEIGHT as i32),
    Size::new(SCREEN_WIDTH, CLOCK_AREA_HEIGHT),
);

#[derive(Parser, Debug)]
#[command(name = "shot-clock-sim")]
#[command(about = "24-second shot clock on a simulated 320x240 display", long_about = None)]
#[command(version)]
struct Args {
    /// TOML settings file (keys at the top level or in a [clock] table)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window pixel scale
    #[arg(long, default_value_t = 2)]
    scale: u32,

    /// Initial clock value, overrides the settings file
    #[arg(long)]
    value: Option<i64>,

    /// Inset around the clock view in pixels
    #[arg(long, default_value_t = DEFAULT_VIEW_PADDING)]
    padding: u32,
}

// =============================================================================
// Simulator Host
// =============================================================================

/// Frame-loop side of the clock: tick deadlines, redraw flags and the buzzer.
struct SimHost {
    /// Start of the frame being processed. Tick deadlines are measured from here.
    now: Instant,
    scheduler: DeadlineScheduler,
    render_state: RenderState,
    active_popup: Option<Popup>,
}

impl SimHost {
    fn new() -> Self {
        Self {
            now: Instant::now(),
            scheduler: DeadlineScheduler::new(),
            render_state: RenderState::new(),
            active_popup: None,
        }
    }
}

impl ClockHost for SimHost {
    fn schedule_tick(
        &mut self,
        token: TickToken,
        delay: Duration,
    ) {
        self.scheduler.schedule_after(token, self.now, delay);
    }

    fn cancel_tick(
        &mut self,
        token: TickToken,
    ) {
        self.scheduler.cancel(token);
    }

    fn request_redraw(&mut self) { self.render_state.request_clock(); }

    fn play_buzzer(&mut self) {
        info!("BUZZER");
        self.active_popup = Some(Popup::Buzzer(Instant::now()));
        // Terminal bell stands in for the sound effect
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

// =============================================================================
// Startup
// =============================================================================

fn load_config(args: &Args) -> Result<ClockConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let source = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
            config_from_toml(&source).with_context(|| format!("invalid settings in {}", path.display()))?
        }
        None => ClockConfig::default(),
    };

    if let Some(value) = args.value {
        config
            .set("initialValue", &value.to_string())
            .context("invalid --value")?;
    }

    Ok(config)
}

fn view_padding(padding: u32) -> Padding { Padding::uniform(padding as f32) }

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let mut padding = args.padding.min(MAX_VIEW_PADDING);
    info!("starting simulator, initial value {}, padding {padding}", config.initial_value);
    debug!("{config:?}");

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale.max(1)).build();
    let mut window = Window::new("Shot Clock", &output_settings);

    let mut clock = ShotClock::new(&config);
    clock.resize(SCREEN_WIDTH as f32, CLOCK_AREA_HEIGHT as f32, view_padding(padding));

    let mut host = SimHost::new();
    clock.attach(&mut host);

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();
        host.now = frame_start;

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    info!("window closed");
                    return Ok(());
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat so holding a key does not spam actions
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::S => {
                            clock.start(&mut host);
                        }
                        Keycode::P | Keycode::Space => {
                            clock.stop(&mut host);
                        }
                        Keycode::R => {
                            clock.reset(&mut host);
                            host.active_popup = Some(Popup::Reset(Instant::now()));
                        }
                        Keycode::Up => {
                            padding = (padding + VIEW_PADDING_STEP).min(MAX_VIEW_PADDING);
                            clock.resize(SCREEN_WIDTH as f32, CLOCK_AREA_HEIGHT as f32, view_padding(padding));
                            host.render_state.request_clock();
                        }
                        Keycode::Down => {
                            padding = padding.saturating_sub(VIEW_PADDING_STEP);
                            clock.resize(SCREEN_WIDTH as f32, CLOCK_AREA_HEIGHT as f32, view_padding(padding));
                            host.render_state.request_clock();
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if let Some(token) = host.scheduler.poll(frame_start) {
            clock.on_tick(token, &mut host);
        }

        // Expire the popup before updating render state so cleanup happens this frame
        if let Some(ref popup) = host.active_popup
            && popup.is_expired()
        {
            host.active_popup = None;
        }
        host.render_state.update_popup(host.active_popup.as_ref());

        if host.render_state.is_first_frame() || host.render_state.popup_just_closed() {
            display.clear(BLACK).ok();
        }

        if host.render_state.check_header_dirty(clock.state(), padding) {
            draw_header(&mut display, clock.state(), padding);
        }

        if host.render_state.need_clock() {
            let mut area = display.cropped(&CLOCK_AREA);
            clock.render(&mut DrawTargetSurface::new(&mut area));
        }

        // Popups stay on top of anything repainted underneath
        match host.active_popup {
            Some(Popup::Buzzer(_)) => draw_buzzer_popup(&mut display),
            Some(Popup::Reset(_)) => draw_reset_popup(&mut display),
            None => {}
        }

        host.render_state.end_frame();
        window.update(&display);

        // Sleep to maintain target frame rate (~50 FPS)
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
