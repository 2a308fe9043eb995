//! Per-frame procedural animation.
//!
//! Every rule touches a disjoint set of fields, so the order below does not
//! matter. Cumulative increments are expressed per reference frame
//! ([`REFERENCE_FRAME_SEC`]) and scaled by the actual delta, which makes a
//! zero-delta call leave every accumulated field untouched.

use crate::constants::*;
use crate::params::MotionStyle;
use crate::scene::{
    Constellation, FloatingHeart, MainHeart, ParticleCloud, Scene, StarField,
};
use crate::state::Camera;
use glam::Vec3;

/// Advance the scene by one rendered frame.
///
/// `delta_seconds` is the time since the previous frame and `elapsed_seconds`
/// the time since the animation started. Negative or non-finite deltas are
/// treated as zero.
pub fn advance(scene: &mut Scene, delta_seconds: f64, elapsed_seconds: f64) {
    let delta = if delta_seconds.is_finite() {
        delta_seconds.max(0.0)
    } else {
        0.0
    };
    let frames = (delta / REFERENCE_FRAME_SEC) as f32;
    let t = if elapsed_seconds.is_finite() {
        elapsed_seconds
    } else {
        0.0
    };

    if let Some(heart) = scene.main_heart.as_mut() {
        animate_main_heart(heart, delta, frames, t);
    }

    match scene.motion {
        MotionStyle::Bounded => {
            let amplitude = scene.float_amplitude;
            for heart in &mut scene.floating_hearts {
                animate_floating_bounded(heart, frames, t, amplitude);
            }
        }
        MotionStyle::Drift => {
            for heart in &mut scene.floating_hearts {
                animate_floating_drift(heart, frames, t);
            }
        }
    }

    if let Some(stars) = scene.star_field.as_mut() {
        spin_star_field(stars, frames);
    }
    if let Some(constellation) = scene.constellation.as_mut() {
        spin_constellation(constellation, frames);
    }
    if let Some(particles) = scene.particles.as_mut() {
        step_particles(particles, frames);
    }

    orbit_camera(&mut scene.camera, scene.camera_distance, t);
}

fn animate_main_heart(heart: &mut MainHeart, delta: f64, frames: f32, t: f64) {
    let transform = &mut heart.object.transform;
    transform.rotation.y += MAIN_HEART_SPIN_PER_FRAME * frames;
    transform.rotation.x = wave(t, MAIN_HEART_TILT_FREQ, 0.0) * MAIN_HEART_TILT_AMPLITUDE;

    heart.heartbeat_time += delta;
    if heart.heartbeat_time > HEARTBEAT_START_SEC {
        let w = wave(t, HEARTBEAT_FREQ, 0.0);
        let beat = 1.0 + w * HEARTBEAT_SCALE_AMPLITUDE;
        transform.set_uniform_scale(MAIN_HEART_REST_SCALE * beat);
        heart.object.material.emissive_intensity =
            MAIN_HEART_REST_EMISSIVE + w * HEARTBEAT_EMISSIVE_AMPLITUDE;
        if heart.heartbeat_time > HEARTBEAT_END_SEC {
            heart.heartbeat_time = 0.0;
        }
    } else {
        transform.set_uniform_scale(MAIN_HEART_REST_SCALE);
        heart.object.material.emissive_intensity = MAIN_HEART_REST_EMISSIVE;
    }

    if let Some(glow) = heart.glow.as_mut() {
        let w = wave(t, GLOW_FREQ, 0.0) * GLOW_AMPLITUDE;
        glow.transform.set_uniform_scale(GLOW_REST_SCALE + w);
        glow.material.opacity = GLOW_BASE_OPACITY + w;
    }
}

/// `sin(t * freq + offset)` with the phase formed in `f64`, so long sessions
/// keep full precision.
#[inline]
fn wave(t: f64, freq: f64, offset: f64) -> f32 {
    (t * freq + offset).sin() as f32
}

#[inline]
fn hover_target(t: f64) -> f32 {
    1.0 + wave(t, HOVER_PULSE_FREQ, 0.0) * HOVER_PULSE_AMPLITUDE
}

fn animate_floating_bounded(heart: &mut FloatingHeart, frames: f32, t: f64, amplitude: f32) {
    let params = *heart.params();
    let transform = &mut heart.object.transform;
    transform.rotation += params.rotation_speed * frames;

    let bob = wave(t, params.float_speed as f64, params.float_offset as f64) * amplitude;
    transform.position.y = heart.base_position.y + bob;

    let target = if heart.is_hovered { hover_target(t) } else { 1.0 };
    let alpha = 1.0 - HOVER_RETAIN_PER_FRAME.powf(frames);
    heart.hover_gain += (target - heart.hover_gain) * alpha;

    let pulse = 1.0 + wave(t, FLOAT_PULSE_FREQ, heart.index as f64) * FLOAT_PULSE_AMPLITUDE;
    transform.set_uniform_scale(params.base_scale * pulse * heart.hover_gain);
}

fn animate_floating_drift(heart: &mut FloatingHeart, frames: f32, t: f64) {
    let params = *heart.params();
    let transform = &mut heart.object.transform;
    transform.rotation += params.rotation_speed * frames;
    let nudge = wave(t, params.float_speed as f64, params.float_offset as f64);
    transform.position.y += nudge * FLOAT_DRIFT_PER_FRAME * frames;

    if heart.is_hovered {
        let pull = HOVER_RETAIN_PER_FRAME + hover_target(t) * (1.0 - HOVER_RETAIN_PER_FRAME);
        transform.scale *= pull.powf(frames);
    }
}

fn spin_star_field(stars: &mut StarField, frames: f32) {
    stars.rotation.y += STARFIELD_SPIN_PER_FRAME * frames;
}

fn spin_constellation(constellation: &mut Constellation, frames: f32) {
    constellation.rotation.y += CONSTELLATION_SPIN_PER_FRAME * frames;
}

/// Move every particle by its velocity, then reflect the velocity on each
/// axis where the particle is past the bound and still heading outward.
/// Positions are never clamped.
pub fn step_particles(cloud: &mut ParticleCloud, frames: f32) {
    let bounds = cloud.bounds;
    for (pos, vel) in cloud.positions.iter_mut().zip(cloud.velocities.iter_mut()) {
        *pos += *vel * frames;
        for axis in 0..3 {
            if pos[axis].abs() > bounds[axis] && pos[axis] * vel[axis] > 0.0 {
                vel[axis] = -vel[axis];
            }
        }
    }
}

fn orbit_camera(camera: &mut Camera, distance: f32, t: f64) {
    camera.eye = Vec3::new(
        wave(t, CAMERA_ORBIT_FREQ[0], 0.0) * CAMERA_ORBIT_AMPLITUDE[0],
        (t * CAMERA_ORBIT_FREQ[1]).cos() as f32 * CAMERA_ORBIT_AMPLITUDE[1],
        distance,
    );
    camera.target = Vec3::ZERO;
}
