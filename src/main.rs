mod algorithms;
mod engine;
mod geometry;
mod renderer;

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use engine::{Engine, Tick};
use renderer::Renderer;
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

const DEFAULT_COUNT: usize = 10;
const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(100);

/// Animated bubble sort over a row of bars.
#[derive(Parser)]
#[command(name = "bubbleviz")]
#[command(about = "Watch bubble sort rearrange a row of bars")]
struct Args {
    /// Number of bars to sort (at least 2)
    #[arg(default_value_t = DEFAULT_COUNT)]
    count: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut count = args.count;
    if count < 2 {
        log::warn!("{count} bar(s) cannot be sorted, falling back to {DEFAULT_COUNT}");
        count = DEFAULT_COUNT;
    }

    pollster::block_on(run(count))
}

async fn run(count: usize) -> Result<()> {
    let mut engine = Engine::random(count)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Bubbleviz - wgpu")
        .with_inner_size(PhysicalSize::new(1024, 768))
        .build(&event_loop)?;

    // Leak the window to satisfy the surface lifetime; acceptable for single-window app
    let window: &'static _ = Box::leak(Box::new(window));

    let mut renderer = Renderer::new(window).await?;
    renderer.upload_vertices(engine.vertices());
    renderer.upload_colors(engine.colors());

    log::info!("sorting {count} bars, one step per {DEFAULT_STEP_INTERVAL:?}");

    let mut paused = false;
    let mut step_interval = DEFAULT_STEP_INTERVAL;
    let mut last_step = Instant::now();
    let window_ref = window;

    Ok(event_loop.run(move |event, target| {
        let window = window_ref;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => target.exit(),
                WindowEvent::Resized(size) => {
                    renderer.resize(size);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    // Fire once per key-down, never on held-key repeats
                    if event.state == ElementState::Pressed && !event.repeat {
                        match event.physical_key {
                            PhysicalKey::Code(KeyCode::Space) => paused = !paused,
                            PhysicalKey::Code(KeyCode::KeyR) => {
                                engine.reset();
                                renderer.upload_vertices(engine.vertices());
                                renderer.upload_colors(engine.colors());
                            }
                            PhysicalKey::Code(KeyCode::ArrowUp) => {
                                step_interval = step_interval
                                    .mul_f32(0.5)
                                    .max(Duration::from_millis(1));
                                log::debug!("step interval now {step_interval:?}");
                            }
                            PhysicalKey::Code(KeyCode::ArrowDown) => {
                                step_interval = step_interval.mul_f32(1.5);
                                log::debug!("step interval now {step_interval:?}");
                            }
                            PhysicalKey::Code(KeyCode::Escape) => target.exit(),
                            _ => {}
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    if !paused && !engine.is_done() && last_step.elapsed() >= step_interval {
                        last_step = Instant::now();
                        match engine.step() {
                            Tick::Vertices => renderer.upload_vertices(engine.vertices()),
                            Tick::Colors => renderer.upload_colors(engine.colors()),
                            Tick::Done => log::info!(
                                "sorted after {} comparisons and {} swaps",
                                engine.comparisons(),
                                engine.swaps()
                            ),
                        }
                    }
                    if let Err(err) = renderer.render() {
                        log::error!("render error: {err:?}");
                        target.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        }
    })?)
}
