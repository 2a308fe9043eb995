use crate::constants::*;
use crate::error::SceneError;
use crate::params::{FloatingHeartParams, MotionStyle, SceneParams};
use crate::state::{AnimatedObject, Camera, FrameTime, MaterialParams, Transform};
use glam::{Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

// One RNG stream per subsystem: changing one count never reshuffles another
const STREAM_HEARTS: u64 = 0;
const STREAM_STARS: u64 = 1;
const STREAM_CONSTELLATION: u64 = 2;
const STREAM_PARTICLES: u64 = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct MainHeart {
    pub object: AnimatedObject,
    /// Phase accumulator driving the periodic pulse.
    pub heartbeat_time: f64,
    pub glow: Option<AnimatedObject>,
}

impl MainHeart {
    fn new(with_glow: bool) -> Self {
        let glow = with_glow.then(|| AnimatedObject {
            transform: Transform::default().with_uniform_scale(GLOW_REST_SCALE),
            material: MaterialParams {
                emissive_intensity: 0.0,
                opacity: GLOW_REST_OPACITY,
            },
        });
        Self {
            object: AnimatedObject {
                transform: Transform::default().with_uniform_scale(MAIN_HEART_REST_SCALE),
                material: MaterialParams {
                    emissive_intensity: MAIN_HEART_REST_EMISSIVE,
                    opacity: 1.0,
                },
            },
            heartbeat_time: 0.0,
            glow,
        }
    }

    pub fn is_beating(&self) -> bool {
        self.heartbeat_time > HEARTBEAT_START_SEC
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingHeart {
    pub object: AnimatedObject,
    pub hover_gain: f32,
    pub(crate) index: usize,
    pub(crate) base_position: Vec3,
    pub(crate) is_hovered: bool,
    params: FloatingHeartParams,
}

impl FloatingHeart {
    fn random(index: usize, rng: &mut StdRng) -> Self {
        let position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 30.0,
            (rng.gen::<f32>() - 0.5) * 20.0,
            (rng.gen::<f32>() - 0.5) * 20.0 - 5.0,
        );
        let base_scale = rng.gen::<f32>() * 0.05 + 0.04;
        let rotation = Vec3::new(
            rng.gen::<f32>() * PI,
            rng.gen::<f32>() * PI,
            rng.gen::<f32>() * PI,
        );
        let params = FloatingHeartParams {
            rotation_speed: Vec3::new(
                (rng.gen::<f32>() - 0.5) * 0.02,
                (rng.gen::<f32>() - 0.5) * 0.02,
                (rng.gen::<f32>() - 0.5) * 0.02,
            ),
            float_speed: rng.gen::<f32>() * 0.5 + 0.3,
            float_offset: rng.gen::<f32>() * TAU,
            base_scale,
            hue: rng.gen::<f32>() * 0.1 + 0.9,
        };
        Self {
            object: AnimatedObject {
                transform: Transform {
                    position,
                    rotation,
                    scale: Vec3::splat(base_scale),
                },
                material: MaterialParams {
                    emissive_intensity: FLOATING_HEART_EMISSIVE,
                    opacity: FLOATING_HEART_OPACITY,
                },
            },
            index,
            base_position: position,
            hover_gain: 1.0,
            is_hovered: false,
            params,
        }
    }

    /// Position in the scene's heart list.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Spawn position; bounded motion bobs around its height.
    #[inline]
    pub fn base_position(&self) -> Vec3 {
        self.base_position
    }

    #[inline]
    pub fn params(&self) -> &FloatingHeartParams {
        &self.params
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    /// World-space radius used for hover picking.
    #[inline]
    pub fn pick_radius(&self) -> f32 {
        HEART_PICK_RADIUS * self.object.transform.scale.max_element()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarField {
    pub positions: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
    pub rotation: Vec3,
}

impl StarField {
    fn random(count: usize, rng: &mut StdRng) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * STAR_SPREAD,
                (rng.gen::<f32>() - 0.5) * STAR_SPREAD,
                (rng.gen::<f32>() - 0.5) * STAR_SPREAD,
            ));
            let choice = rng.gen::<f32>();
            let color = if choice < 0.4 {
                // pink
                [1.0, 0.7 + rng.gen::<f32>() * 0.3, 0.85 + rng.gen::<f32>() * 0.15]
            } else if choice < 0.7 {
                // violet
                [0.7 + rng.gen::<f32>() * 0.3, 0.5 + rng.gen::<f32>() * 0.3, 1.0]
            } else {
                [1.0, 1.0, 1.0]
            };
            colors.push(color);
        }
        Self {
            positions,
            colors,
            rotation: Vec3::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Constellation {
    pub points: Vec<Vec3>,
    pub segments: Vec<(usize, usize)>,
    pub rotation: Vec3,
}

impl Constellation {
    fn random(count: usize, rng: &mut StdRng) -> Self {
        let points: Vec<Vec3> = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 25.0,
                    (rng.gen::<f32>() - 0.5) * 15.0,
                    (rng.gen::<f32>() - 0.5) * 10.0 - 10.0,
                )
            })
            .collect();
        Self {
            segments: link_nearby(&points, CONSTELLATION_LINK_DISTANCE),
            points,
            rotation: Vec3::ZERO,
        }
    }
}

/// Every index pair `(i, j)` with `i < j` closer than `max_distance`.
pub fn link_nearby(points: &[Vec3], max_distance: f32) -> Vec<(usize, usize)> {
    let mut segments = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points[i].distance(points[j]) < max_distance {
                segments.push((i, j));
            }
        }
    }
    segments
}

/// Point positions and velocities paired by index, kept inside `bounds` by
/// reflecting velocities.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleCloud {
    pub(crate) positions: Vec<Vec3>,
    pub(crate) velocities: Vec<Vec3>,
    pub(crate) bounds: Vec3,
}

impl ParticleCloud {
    /// Pair `positions[i]` with `velocities[i]`. Both lists must have the
    /// same length.
    pub fn new(
        positions: Vec<Vec3>,
        velocities: Vec<Vec3>,
        bounds: Vec3,
    ) -> Result<Self, SceneError> {
        if positions.len() != velocities.len() {
            return Err(SceneError::invalid(
                "velocities",
                format!(
                    "expected one per position ({}), got {}",
                    positions.len(),
                    velocities.len()
                ),
            ));
        }
        Ok(Self {
            positions,
            velocities,
            bounds,
        })
    }

    fn random(count: usize, bounds: Vec3, rng: &mut StdRng) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * bounds.x,
                (rng.gen::<f32>() - 0.5) * 2.0 * bounds.y,
                (rng.gen::<f32>() - 0.5) * 2.0 * bounds.z,
            ));
            velocities.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
                (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
                (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
            ));
        }
        Self {
            positions,
            velocities,
            bounds,
        }
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    #[inline]
    pub fn bounds(&self) -> Vec3 {
        self.bounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions as a flat `x, y, z, x, y, z, ...` buffer.
    pub fn position_buffer(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Largest absolute coordinate per axis.
    pub fn extent(&self) -> Vec3 {
        self.positions
            .iter()
            .fold(Vec3::ZERO, |acc, p| acc.max(p.abs()))
    }
}

/// Owns every animated entity. Optional entities that were never built are
/// skipped by the animator.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub(crate) motion: MotionStyle,
    pub(crate) float_amplitude: f32,
    pub(crate) camera_distance: f32,
    pub(crate) main_heart: Option<MainHeart>,
    pub(crate) floating_hearts: Vec<FloatingHeart>,
    pub(crate) star_field: Option<StarField>,
    pub(crate) constellation: Option<Constellation>,
    pub(crate) particles: Option<ParticleCloud>,
    pub(crate) camera: Camera,
}

impl Scene {
    pub fn new(params: SceneParams, seed: u64) -> Result<Self, SceneError> {
        params.validate()?;

        let mut hearts_rng = stream_rng(seed, STREAM_HEARTS);
        let floating_hearts = (0..params.floating_hearts)
            .map(|i| FloatingHeart::random(i, &mut hearts_rng))
            .collect::<Vec<_>>();

        let star_field = (params.stars > 0)
            .then(|| StarField::random(params.stars, &mut stream_rng(seed, STREAM_STARS)));
        let constellation = (params.constellation_points > 0).then(|| {
            Constellation::random(
                params.constellation_points,
                &mut stream_rng(seed, STREAM_CONSTELLATION),
            )
        });
        let particles = (params.particles > 0).then(|| {
            ParticleCloud::random(
                params.particles,
                params.particle_bounds,
                &mut stream_rng(seed, STREAM_PARTICLES),
            )
        });

        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, params.camera_distance),
            fovy_radians: params.fovy_radians,
            ..Camera::default()
        };

        let scene = Self {
            motion: params.motion,
            float_amplitude: params.float_amplitude,
            camera_distance: params.camera_distance,
            main_heart: params.main_heart.then(|| MainHeart::new(params.glow)),
            floating_hearts,
            star_field,
            constellation,
            particles,
            camera,
        };
        log::info!(
            "[scene] seed={} hearts={} stars={} constellation_links={} particles={} motion={:?}",
            seed,
            scene.floating_hearts.len(),
            scene.star_field.as_ref().map_or(0, |s| s.positions.len()),
            scene.constellation.as_ref().map_or(0, |c| c.segments.len()),
            scene.particles.as_ref().map_or(0, |p| p.len()),
            scene.motion,
        );
        Ok(scene)
    }

    /// Apply one frame of animation. See [`crate::animator::advance`].
    #[inline]
    pub fn advance(&mut self, time: FrameTime) {
        crate::animator::advance(self, time.delta, time.elapsed);
    }

    pub fn motion(&self) -> MotionStyle {
        self.motion
    }

    pub fn main_heart(&self) -> Option<&MainHeart> {
        self.main_heart.as_ref()
    }

    pub fn floating_hearts(&self) -> &[FloatingHeart] {
        &self.floating_hearts
    }

    pub fn star_field(&self) -> Option<&StarField> {
        self.star_field.as_ref()
    }

    pub fn constellation(&self) -> Option<&Constellation> {
        self.constellation.as_ref()
    }

    pub fn particles(&self) -> Option<&ParticleCloud> {
        self.particles.as_ref()
    }

    /// Replace (or remove) the particle cloud.
    pub fn set_particles(&mut self, particles: Option<ParticleCloud>) {
        self.particles = particles;
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.floating_hearts.iter().position(|h| h.is_hovered)
    }

    /// Mark exactly the heart at `index` as hovered, clearing all others.
    /// Out-of-range indices clear everything.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        for heart in &mut self.floating_hearts {
            heart.is_hovered = false;
        }
        if let Some(heart) = index.and_then(|i| self.floating_hearts.get_mut(i)) {
            heart.is_hovered = true;
        }
    }

    /// Re-run hover picking for a pointer at `ndc` (x right, y up, both in
    /// [-1, 1]). `None` means the pointer left the canvas.
    pub fn update_hover(&mut self, ndc: Option<Vec2>) -> Option<usize> {
        let previous = self.hovered_index();
        let hit = ndc.and_then(|p| {
            crate::picking::pick_floating_heart(&self.camera, &self.floating_hearts, p)
        });
        self.set_hovered(hit);
        if hit != previous {
            log::debug!("[hover] {:?} -> {:?}", previous, hit);
        }
        hit
    }
}

fn stream_rng(seed: u64, stream: u64) -> StdRng {
    let mix = seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(mix)
}
