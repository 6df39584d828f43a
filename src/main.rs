//! Headless carousel demo.
//!
//! Usage: `vitrine [OPTIONS_TOML] [CONTENT_TOML]`
//!
//! Builds a carousel from the given presets (or built-in defaults), plays
//! a short scripted input sequence through the input processor, and logs
//! the carousel position as each scroll animation runs. Run with
//! `RUST_LOG=debug` to see selection and transition details.

use std::path::Path;
use std::time::Duration;

use vitrine::carousel::Carousel;
use vitrine::error::CarouselError;
use vitrine::input::{InputEvent, InputProcessor};
use vitrine::options::CarouselOptions;
use vitrine::slot::{DisplayCase, DisplayContent, Material, ModelPrefab};
use vitrine::util::frame_timing::FrameClock;

const TARGET_FPS: u32 = 60;

fn default_content() -> DisplayContent {
    DisplayContent::new(
        ModelPrefab::new("display_model"),
        vec![
            Material::new("crimson", [0.86, 0.08, 0.24, 1.0]),
            Material::new("teal", [0.0, 0.5, 0.5, 1.0]),
            Material::new("gold", [1.0, 0.84, 0.0, 1.0]),
            Material::new("slate", [0.44, 0.5, 0.56, 1.0]),
        ],
    )
}

/// Run frames until the current scroll animation settles.
fn run_until_idle(carousel: &mut Carousel, clock: &mut FrameClock) {
    while carousel.is_animating() {
        if !clock.should_tick() {
            std::thread::sleep(clock.frame_budget() / 8);
            continue;
        }
        let delta = clock.tick();
        carousel.advance(delta);
        log::debug!("frame {:.1} fps -> {}", clock.fps(), carousel.position());
    }
    let selected = carousel
        .selected_display()
        .and_then(|d| d.material())
        .map_or("none", |m| m.name.as_str());
    log::info!("settled at {} showing {selected}", carousel.position());
}

fn main() -> Result<(), CarouselError> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match args.first() {
        Some(path) => CarouselOptions::load(Path::new(path))?,
        None => CarouselOptions::default(),
    };
    let content = match args.get(1) {
        Some(path) => DisplayContent::load(Path::new(path))?,
        None => default_content(),
    };

    let input = InputProcessor::new(options.keybindings.clone());
    let mut carousel = Carousel::new(options, content);
    let _ = carousel.on_display_change(|change| {
        log::info!("display changed {:?} -> {:?}", change.previous, change.current);
    });
    let _ = carousel.on_click(|click| {
        log::info!("{} clicked", click.carousel);
    });
    carousel.initialize()?;
    log::info!(
        "{} ready with {} display cases",
        carousel.id(),
        carousel.display_cases().len()
    );

    let first = carousel.display_cases().first().map(DisplayCase::id);
    let mut script = vec![
        InputEvent::key("ArrowRight"),
        InputEvent::key("ArrowRight"),
        InputEvent::Scroll { delta: -1.0 },
        InputEvent::key("ArrowLeft"),
    ];
    if let Some(slot) = first {
        script.push(InputEvent::SlotClicked { slot });
    }

    let mut clock = FrameClock::new(TARGET_FPS).with_max_delta(Duration::from_millis(50));
    for event in &script {
        log::info!("input: {event:?}");
        if let Some(command) = input.handle_event(event) {
            carousel.execute(command)?;
        }
        let _ = clock.tick();
        run_until_idle(&mut carousel, &mut clock);
    }

    carousel.clean_up();
    Ok(())
}
