// Drawing and page-wiring constants used by the web frontend.

// Page
pub const CANVAS_ID: &str = "universe-canvas";
pub const FRAME_LOG_EVERY: u64 = 600; // frames between debug status lines

// Background
pub const BACKGROUND_CSS: &str = "#0a0015";

// Stars and constellation (world-space sizes)
pub const STAR_SIZE: f32 = 0.3;
pub const STAR_OPACITY: f32 = 0.8;
pub const STAR_COLOR_LEVELS: f32 = 16.0; // per-channel steps when batching fills
pub const CONSTELLATION_LINE_RGB: [f32; 3] = [1.0, 0.702, 0.851];
pub const CONSTELLATION_LINE_OPACITY: f32 = 0.3;
pub const CONSTELLATION_POINT_RADIUS: f32 = 0.15;
pub const CONSTELLATION_POINT_RGB: [f32; 3] = [1.0, 0.843, 0.0];
pub const CONSTELLATION_POINT_OPACITY: f32 = 0.9;

// Particles
pub const PARTICLE_SIZE: f32 = 0.15;
pub const PARTICLE_RGB: [f32; 3] = [1.0, 0.702, 0.851];
pub const PARTICLE_OPACITY: f32 = 0.6;

// Hearts
pub const MAIN_HEART_RGB: [f32; 3] = [1.0, 0.078, 0.576]; // deep pink
pub const MAIN_HEART_EMISSIVE_RGB: [f32; 3] = [1.0, 0.412, 0.706]; // hot pink
pub const GLOW_RGB: [f32; 3] = [1.0, 0.412, 0.706];
pub const FLOATING_SATURATION: f32 = 0.8;
pub const FLOATING_LIGHTNESS: f32 = 0.6;
pub const HOVER_BRIGHTEN: f32 = 1.4;

// Anything projected smaller than this is still drawn at this size (pixels)
pub const MIN_POINT_PX: f32 = 0.5;
