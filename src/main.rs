use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

mod audio;
mod carousel;
mod cli;
mod constants;
mod engine;
mod error;
mod fade;
mod floating;
mod input;
mod page;
mod panels;
mod photos;
mod render;
mod texture_loader;
mod timer;
mod track;

use crate::audio::{AudioSink, Silence, StreamSink};
use crate::cli::Cli;
use crate::constants::*;
use crate::page::Page;
use crate::render::{draw_page, glyph_set};
use crate::texture_loader::{load_sorted_image_paths, PhotoLibrary};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.page_config().context("Failed to prepare the message panel")?;
    let image_paths = load_sorted_image_paths(&cli.photos)
        .with_context(|| format!("Failed to list photos in {:?}", cli.photos))?;
    info!("Photos: {:?}, carousel: {:?}", cli.photos, config.carousel);

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Keepsake")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(cli.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Emoji font (optional) ---
    let emoji_font = cli.emoji_font.as_ref().and_then(|path| {
        let size = FLOAT_GLYPH_SIZE as i32 * 2;
        match rl.load_font_ex(&thread, &path.to_string_lossy(), size, Some(&glyph_set())) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!("Could not load emoji font {:?}: {}, using the default font", path, e);
                None
            }
        }
    });

    // --- Music (optional) ---
    let audio = match RaylibAudio::init_audio_device() {
        Ok(audio) => Some(audio),
        Err(e) => {
            warn!("Audio device unavailable: {:?}", e);
            None
        }
    };
    let sink: Box<dyn AudioSink + '_> = match (&audio, &cli.music) {
        (Some(device), Some(path)) => match device.new_music(&path.to_string_lossy()) {
            Ok(music) => Box::new(StreamSink::new(music)),
            Err(e) => {
                warn!("Could not open music {:?}: {}", path, e);
                Box::new(Silence::new(format!("cannot open {:?}", path)))
            }
        },
        (None, Some(_)) => Box::new(Silence::new("no audio device")),
        (_, None) => Box::new(Silence::new("no music file configured")),
    };

    let mut library = PhotoLibrary::new(image_paths);
    let mut page = Page::new(config, sink, rl.get_screen_width() as f32, rl.get_screen_height() as f32);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        library.load_next(&mut rl, &thread);

        input::poll(&mut rl, &mut page, library.set());
        page.update(dt, library.set());

        let mut d = rl.begin_drawing(&thread);
        draw_page(&mut d, &page, &library, emoji_font.as_ref());
    }

    page.shutdown();
    Ok(())
}
