use glam::{Mat4, Vec3};
use std::collections::BTreeMap;

/// A world-space point after projection to canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Clip-space w, i.e. distance in front of the camera.
    pub w: f32,
}

/// Project `world` through `view_proj` onto a `width` x `height` canvas with
/// y pointing down. Points behind the camera or past the far plane are culled.
#[inline]
pub fn project(view_proj: &Mat4, world: Vec3, width: f32, height: f32) -> Option<ScreenPoint> {
    let clip = *view_proj * world.extend(1.0);
    if clip.w <= 1e-4 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if ndc.z > 1.0 {
        return None;
    }
    Some(ScreenPoint {
        x: (ndc.x * 0.5 + 0.5) * width,
        y: (0.5 - ndc.y * 0.5) * height,
        w: clip.w,
    })
}

/// Pixel radius of a world-space sphere of `world_radius` at clip depth `w`.
#[inline]
pub fn projected_radius(world_radius: f32, w: f32, fovy_radians: f32, height: f32) -> f32 {
    world_radius / w * (height * 0.5) / (fovy_radians * 0.5).tan()
}

/// HSL (all components in [0, 1]) to linear RGB, hue wrapping.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// `rgba(r, g, b, a)` CSS color, channels clamped.
pub fn css_rgba(rgb: [f32; 3], alpha: f32) -> String {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {:.3})",
        c(rgb[0]),
        c(rgb[1]),
        c(rgb[2]),
        alpha.clamp(0.0, 1.0)
    )
}

#[inline]
pub fn scale_rgb(rgb: [f32; 3], k: f32) -> [f32; 3] {
    [rgb[0] * k, rgb[1] * k, rgb[2] * k]
}

/// Base color plus emissive color weighted by intensity.
#[inline]
pub fn add_emissive(base: [f32; 3], emissive: [f32; 3], intensity: f32) -> [f32; 3] {
    [
        base[0] + emissive[0] * intensity * 0.5,
        base[1] + emissive[1] * intensity * 0.5,
        base[2] + emissive[2] * intensity * 0.5,
    ]
}

/// Point indices grouped by CSS fill. Channels are snapped to `levels` steps
/// so near-identical colours share one `fillStyle`.
pub fn group_by_fill(colors: &[[f32; 3]], alpha: f32, levels: f32) -> Vec<(String, Vec<usize>)> {
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (i, rgb) in colors.iter().enumerate() {
        let snapped = rgb.map(|c| (c * levels).round() / levels);
        groups.entry(css_rgba(snapped, alpha)).or_default().push(i);
    }
    groups.into_iter().collect()
}
