use crate::scene::FloatingHeart;
use crate::state::Camera;
use glam::{Vec2, Vec3, Vec4};

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t = -b - sq;
    if t >= 0.0 {
        return Some(t);
    }
    // Origin inside the sphere: take the exit point
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

/// Compute a world-space ray through a point in normalized device
/// coordinates (x right, y up, both in [-1, 1]).
///
/// Returns `(ray_origin, ray_direction)` with a unit direction.
pub fn ndc_to_world_ray(camera: &Camera, ndc: Vec2) -> (Vec3, Vec3) {
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize();
    (ro, rd)
}

/// Index of the nearest floating heart whose bounding sphere the pointer ray
/// hits.
pub fn pick_floating_heart(camera: &Camera, hearts: &[FloatingHeart], ndc: Vec2) -> Option<usize> {
    let (ro, rd) = ndc_to_world_ray(camera, ndc);
    let mut best = None::<(usize, f32)>;
    for (i, heart) in hearts.iter().enumerate() {
        let center = heart.object.transform.position;
        if let Some(t) = ray_sphere(ro, rd, center, heart.pick_radius()) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
