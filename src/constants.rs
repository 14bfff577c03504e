pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 800;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const SLIDE_INTERVAL_MS: u64 = 5000;      // Hero carousel auto-advance period (milliseconds)
pub const FADE_DURATION: f32 = 1.0;           // Hero crossfade duration (seconds)

pub const GALLERY_COLUMNS: usize = 3;         // Artwork grid columns
pub const SITE_NAME: &str = "Art Gallery";
