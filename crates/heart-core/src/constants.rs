// Shared animation tuning constants used by both web and native frontends.

// Reference frame for per-frame increments (seconds). Frequencies below are
// f64 so phases stay exact over long sessions.
pub const REFERENCE_FRAME_SEC: f64 = 1.0 / 60.0;
pub const MAX_FRAME_DELTA_SEC: f64 = 0.25; // wall clock cap after a stalled tab

// Main heart
pub const MAIN_HEART_REST_SCALE: f32 = 0.15;
pub const MAIN_HEART_REST_EMISSIVE: f32 = 0.5;
pub const MAIN_HEART_SPIN_PER_FRAME: f32 = 0.005; // rad around Y
pub const MAIN_HEART_TILT_FREQ: f64 = 0.5;
pub const MAIN_HEART_TILT_AMPLITUDE: f32 = 0.1;

// Heartbeat window: rest until the phase passes START, pulse until it passes END
pub const HEARTBEAT_START_SEC: f64 = 1.5;
pub const HEARTBEAT_END_SEC: f64 = 1.8;
pub const HEARTBEAT_FREQ: f64 = 10.0;
pub const HEARTBEAT_SCALE_AMPLITUDE: f32 = 0.08;
pub const HEARTBEAT_EMISSIVE_AMPLITUDE: f32 = 0.3;

// Glow aura around the main heart (relative to the heart)
pub const GLOW_REST_SCALE: f32 = 1.2;
pub const GLOW_REST_OPACITY: f32 = 0.3;
pub const GLOW_BASE_OPACITY: f32 = 0.2;
pub const GLOW_FREQ: f64 = 3.0;
pub const GLOW_AMPLITUDE: f32 = 0.15;

// Floating hearts
pub const FLOATING_HEART_COUNT: usize = 8;
pub const FLOATING_HEART_EMISSIVE: f32 = 0.3;
pub const FLOATING_HEART_OPACITY: f32 = 0.7;
pub const FLOAT_AMPLITUDE: f32 = 1.0; // bounded bob half-height
pub const FLOAT_DRIFT_PER_FRAME: f32 = 0.01; // cumulative bob nudge
pub const FLOAT_PULSE_FREQ: f64 = 2.0;
pub const FLOAT_PULSE_AMPLITUDE: f32 = 0.1;
pub const HOVER_PULSE_FREQ: f64 = 5.0;
pub const HOVER_PULSE_AMPLITUDE: f32 = 0.2;
pub const HOVER_RETAIN_PER_FRAME: f32 = 0.95; // exponential smoothing factor

// Star field and constellation
pub const STAR_COUNT: usize = 3000;
pub const STAR_SPREAD: f32 = 200.0;
pub const STARFIELD_SPIN_PER_FRAME: f32 = 0.0002;
pub const CONSTELLATION_POINTS: usize = 15;
pub const CONSTELLATION_LINK_DISTANCE: f32 = 8.0;
pub const CONSTELLATION_SPIN_PER_FRAME: f32 = 0.0003;

// Particle cloud
pub const PARTICLE_COUNT: usize = 500;
pub const PARTICLE_BOUNDS: [f32; 3] = [25.0, 25.0, 15.0];
pub const PARTICLE_MAX_SPEED: f32 = 0.01; // per axis, per frame

// Camera
pub const CAMERA_DISTANCE: f32 = 15.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_ORBIT_FREQ: [f64; 2] = [0.3, 0.24];
pub const CAMERA_ORBIT_AMPLITUDE: [f32; 2] = [0.5, 0.3];

// Interaction
pub const HEART_PICK_RADIUS: f32 = 11.0; // bounding sphere of the centered heart mesh, model units
