use crate::constants::*;
use crate::error::SceneError;
use glam::Vec3;

/// How floating hearts move vertically and react to hover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionStyle {
    /// Height and scale are recomputed from the base values every frame.
    #[default]
    Bounded,
    /// Height is nudged every frame and hover multiplies the current scale.
    Drift,
}

/// Scene-wide construction parameters.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub floating_hearts: usize,
    pub stars: usize,
    pub constellation_points: usize,
    pub particles: usize,
    pub particle_bounds: Vec3,
    pub main_heart: bool,
    pub glow: bool,
    pub motion: MotionStyle,
    pub float_amplitude: f32,
    pub camera_distance: f32,
    pub fovy_radians: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            floating_hearts: FLOATING_HEART_COUNT,
            stars: STAR_COUNT,
            constellation_points: CONSTELLATION_POINTS,
            particles: PARTICLE_COUNT,
            particle_bounds: Vec3::from_array(PARTICLE_BOUNDS),
            main_heart: true,
            glow: true,
            motion: MotionStyle::Bounded,
            float_amplitude: FLOAT_AMPLITUDE,
            camera_distance: CAMERA_DISTANCE,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
        }
    }
}

impl SceneParams {
    pub fn validate(&self) -> Result<(), SceneError> {
        let b = self.particle_bounds;
        if !b.is_finite() || b.min_element() <= 0.0 {
            return Err(SceneError::invalid(
                "particle_bounds",
                format!("every axis must be finite and positive, got {b}"),
            ));
        }
        if !self.float_amplitude.is_finite() || self.float_amplitude < 0.0 {
            return Err(SceneError::invalid(
                "float_amplitude",
                format!("must be finite and non-negative, got {}", self.float_amplitude),
            ));
        }
        if !self.camera_distance.is_finite() || self.camera_distance <= CAMERA_ZNEAR {
            return Err(SceneError::invalid(
                "camera_distance",
                format!(
                    "must be finite and beyond the near plane ({CAMERA_ZNEAR}), got {}",
                    self.camera_distance
                ),
            ));
        }
        if !(self.fovy_radians > 0.0 && self.fovy_radians < std::f32::consts::PI) {
            return Err(SceneError::invalid(
                "fovy_radians",
                format!("must lie in (0, pi), got {}", self.fovy_radians),
            ));
        }
        Ok(())
    }
}

/// Per-instance animation parameters of one floating heart.
///
/// Drawn once at construction and never reassigned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingHeartParams {
    pub rotation_speed: Vec3,
    pub float_speed: f32,
    pub float_offset: f32,
    pub base_scale: f32,
    pub hue: f32,
}
