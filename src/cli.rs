use std::fs;
use std::path::PathBuf;
use clap::Parser;
use tracing::Level;
use crate::carousel::CarouselKind;
use crate::constants::*;
use crate::error::KeepsakeError;
use crate::page::PageConfig;

#[derive(Debug, Parser)]
#[command(name = "keepsake", version, about = "A small personal page: photo carousel, flowers and a message")]
pub struct Cli {
    /// Directory holding the carousel photos
    #[arg(env = "KEEPSAKE_PHOTOS")]
    pub photos: PathBuf,

    /// Background music file (ogg, mp3, wav...)
    #[arg(long, env = "KEEPSAKE_MUSIC")]
    pub music: Option<PathBuf>,

    /// Text of the message panel
    #[arg(long, conflicts_with = "message_file", env = "KEEPSAKE_MESSAGE")]
    pub message: Option<String>,

    /// Read the message panel text from a file
    #[arg(long, env = "KEEPSAKE_MESSAGE_FILE")]
    pub message_file: Option<PathBuf>,

    /// Carousel style
    #[arg(long, value_enum, default_value_t = CarouselKind::Track, env = "KEEPSAKE_CAROUSEL")]
    pub carousel: CarouselKind,

    /// Font containing the emoji glyphs; the default font is used without it
    #[arg(long, env = "KEEPSAKE_EMOJI_FONT")]
    pub emoji_font: Option<PathBuf>,

    /// Glyphs per bouquet burst
    #[arg(long, default_value_t = BURST_SIZE, env = "KEEPSAKE_BURST", value_parser = clap::value_parser!(u8).range(BURST_MIN as i64..=BURST_MAX as i64))]
    pub burst: u8,

    #[arg(long, default_value_t = WINDOW_WIDTH, env = "KEEPSAKE_WIDTH")]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT, env = "KEEPSAKE_HEIGHT")]
    pub height: i32,

    #[arg(long, default_value_t = FPS, env = "KEEPSAKE_FPS")]
    pub fps: u32,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, default_value_t = Level::INFO, env = "KEEPSAKE_LOG")]
    pub log_level: Level,
}

impl Cli {
    pub fn page_config(&self) -> Result<PageConfig, KeepsakeError> {
        let message = match (&self.message, &self.message_file) {
            (Some(text), _) => Some(text.clone()),
            (None, Some(path)) => {
                let text = fs::read_to_string(path).map_err(|e| KeepsakeError::io(path, e))?;
                Some(text.trim_end().to_string())
            }
            (None, None) => Some(DEFAULT_MESSAGE.to_string()),
        };

        Ok(PageConfig {
            carousel: self.carousel,
            burst: self.burst as usize,
            message: message.filter(|m| !m.is_empty()),
        })
    }
}
