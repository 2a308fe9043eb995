// Host-side tests for the canvas projection and color helpers.

#![allow(dead_code)]
mod projection {
    include!("../src/render/projection.rs");
}

use glam::{Mat4, Vec3};
use heart_core::Camera;
use projection::*;

#[test]
fn origin_projects_to_canvas_center() {
    let cam = Camera::default();
    let sp = project(&cam.view_projection(), Vec3::ZERO, 1600.0, 900.0).unwrap();
    assert!((sp.x - 800.0).abs() < 1e-3);
    assert!((sp.y - 450.0).abs() < 1e-3);
    assert!((sp.w - cam.eye.z).abs() < 1e-3);
}

#[test]
fn positive_y_projects_upward_on_canvas() {
    let cam = Camera::default();
    let vp = cam.view_projection();
    let up = project(&vp, Vec3::new(0.0, 1.0, 0.0), 1600.0, 900.0).unwrap();
    assert!(up.y < 450.0);
}

#[test]
fn points_behind_camera_are_culled() {
    let cam = Camera::default();
    let behind = Vec3::new(0.0, 0.0, cam.eye.z + 5.0);
    assert!(project(&cam.view_projection(), behind, 100.0, 100.0).is_none());
}

#[test]
fn projected_radius_shrinks_with_distance() {
    let fovy = 75f32.to_radians();
    let near = projected_radius(1.0, 5.0, fovy, 900.0);
    let far = projected_radius(1.0, 50.0, fovy, 900.0);
    assert!(near > far);
    assert!((near / far - 10.0).abs() < 1e-3);
}

#[test]
fn identity_projection_keeps_ndc() {
    let sp = project(&Mat4::IDENTITY, Vec3::new(1.0, -1.0, 0.0), 200.0, 100.0).unwrap();
    assert_eq!((sp.x, sp.y), (200.0, 100.0));
}

#[test]
fn hsl_primaries() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
    let grey = hsl_to_rgb(0.7, 0.0, 0.25);
    for (got, want) in [(red, [1.0, 0.0, 0.0]), (green, [0.0, 1.0, 0.0]), (grey, [0.25; 3])] {
        for c in 0..3 {
            assert!((got[c] - want[c]).abs() < 1e-5, "{:?} vs {:?}", got, want);
        }
    }
}

#[test]
fn hsl_hue_wraps() {
    let a = hsl_to_rgb(0.95, 0.8, 0.6);
    let b = hsl_to_rgb(1.95, 0.8, 0.6);
    for c in 0..3 {
        assert!((a[c] - b[c]).abs() < 1e-5);
    }
}

#[test]
fn css_rgba_clamps_channels() {
    assert_eq!(css_rgba([1.5, 0.5, -1.0], 0.25), "rgba(255, 128, 0, 0.250)");
    assert_eq!(css_rgba([0.0, 0.0, 0.0], 2.0), "rgba(0, 0, 0, 1.000)");
}

#[test]
fn emissive_brightens_base() {
    let lit = add_emissive([0.2, 0.2, 0.2], [1.0, 0.0, 0.5], 0.4);
    assert!((lit[0] - 0.4).abs() < 1e-6);
    assert!((lit[1] - 0.2).abs() < 1e-6);
    assert!((lit[2] - 0.3).abs() < 1e-6);
    assert_eq!(scale_rgb([0.5, 0.25, 0.0], 2.0), [1.0, 0.5, 0.0]);
}

#[test]
fn near_identical_colors_share_one_fill() {
    let colors = [
        [1.0, 1.0, 1.0],
        [1.0, 0.71, 0.9],
        [1.0, 1.0, 1.0],
        [1.0, 0.705, 0.9],
        [0.8, 0.5, 1.0],
    ];
    let groups = group_by_fill(&colors, 0.8, 16.0);
    assert_eq!(groups.len(), 3);

    let mut seen: Vec<usize> = groups.iter().flat_map(|(_, ix)| ix.iter().copied()).collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);

    let white = groups
        .iter()
        .find(|(fill, _)| fill == "rgba(255, 255, 255, 0.800)")
        .unwrap();
    assert_eq!(white.1, vec![0, 2]);
}

#[test]
fn no_colors_no_fills() {
    assert!(group_by_fill(&[], 0.8, 16.0).is_empty());
}
