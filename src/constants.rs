pub const WINDOW_WIDTH: i32 = 1280;          // Default window width
pub const WINDOW_HEIGHT: i32 = 720;          // Default window height
pub const FPS: u32 = 60;                     // Frames per second

pub const NAV_HEIGHT: f32 = 64.0;            // Height of the top navigation bar
pub const NAV_BUTTON_WIDTH: f32 = 150.0;
pub const NAV_BUTTON_GAP: f32 = 12.0;
pub const BOUQUET_SIZE: f32 = 180.0;         // Side of the square bouquet control

// Track carousel (seconds)
pub const TRANSITION_DURATION: f32 = 0.7;    // Horizontal move to the next photo
pub const PAUSE_DURATION: f32 = 1.7;         // Idle time before the next move
pub const SETTLE_DELAY: f32 = 0.05;          // Delay between first centering and the loop start
pub const STYLE_DURATION: f32 = 0.6;         // Scale/opacity easing of the items
pub const DIM_SCALE: f32 = 0.7;              // Scale of the items that are not current
pub const DIM_OPACITY: f32 = 0.6;            // Opacity of the items that are not current
pub const ITEM_GAP: f32 = 24.0;              // Horizontal gap between items (pixels)
pub const ITEM_HEIGHT_RATIO: f32 = 0.7;      // Item height relative to the photo area height

// Fade carousel (seconds)
pub const FADE_DWELL: f32 = 3.0;             // Time each photo stays on screen
pub const FADE_RESET_PAUSE: f32 = 0.5;       // Blank pause before starting over
pub const FADE_IN_DURATION: f32 = 0.8;       // Fade-in animation of each photo
pub const FIT_RATIO: f32 = 0.9;              // Fraction of the area a photo may cover

// Floating glyphs
pub const FLOAT_MIN_DURATION: f32 = 1.4;
pub const FLOAT_DURATION_SPREAD: f32 = 0.9;  // Duration lies in [min, min + spread)
pub const FLOAT_REMOVAL_GRACE: f32 = 0.08;   // Extra lifetime after the animation ends
pub const FLOAT_DRIFT: f32 = 120.0;          // Total width of the horizontal drift range
pub const FLOAT_RISE: f32 = 160.0;           // Vertical travel over the animation
pub const FLOAT_ANCHOR: f32 = 12.0;          // Offset from the pointer to the glyph corner
pub const FLOAT_GLYPH_SIZE: f32 = 32.0;
pub const BURST_SIZE: u8 = 12;               // Default bouquet burst
pub const BURST_MIN: u8 = 10;
pub const BURST_MAX: u8 = 20;
pub const CLUSTER_MAX: usize = 3;            // Small clusters hold 1..=CLUSTER_MAX glyphs
pub const BOUQUET_GLYPHS: [&str; 5] = ["💗", "🌸", "💐", "✨", "💕"];

pub const ICON_PAUSED: &str = "🎵";
pub const ICON_PLAYING: &str = "⏸️";

pub const DEFAULT_MESSAGE: &str = "Every photo here is a day I'm grateful for.\nThank you for all of them.";
