// Host-side tests for hover picking.

use glam::{Vec2, Vec3, Vec4};
use heart_core::picking::{ndc_to_world_ray, ray_sphere};
use heart_core::{Camera, FrameTime, Scene, SceneParams};

fn project_to_ndc(camera: &Camera, world: Vec3) -> Vec2 {
    let clip = camera.view_projection() * Vec4::new(world.x, world.y, world.z, 1.0);
    Vec2::new(clip.x / clip.w, clip.y / clip.w)
}

#[test]
fn ray_sphere_hits_in_front() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_misses_to_the_side_and_behind() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_from_inside_returns_exit_point() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::ZERO, 2.0).unwrap();
    assert!((t - 2.0).abs() < 1e-5);
}

#[test]
fn center_ray_points_at_target() {
    let camera = Camera::default();
    let (ro, rd) = ndc_to_world_ray(&camera, Vec2::ZERO);
    assert_eq!(ro, camera.eye);
    assert!((rd - Vec3::NEG_Z).length() < 1e-4);
}

#[test]
fn pointer_over_heart_center_hovers_it() {
    let params = SceneParams {
        floating_hearts: 1,
        ..SceneParams::default()
    };
    let mut s = Scene::new(params, 21).unwrap();
    s.set_viewport(1600, 900);
    s.advance(FrameTime {
        delta: 0.0,
        elapsed: 1.0,
    });
    let center = s.floating_hearts()[0].object.transform.position;
    let ndc = project_to_ndc(s.camera(), center);

    assert_eq!(s.update_hover(Some(ndc)), Some(0));
    assert!(s.floating_hearts()[0].is_hovered());
    assert_eq!(s.hovered_index(), Some(0));
}

#[test]
fn pointer_leaving_clears_hover() {
    let mut s = Scene::new(SceneParams::default(), 22).unwrap();
    s.set_hovered(Some(4));
    assert_eq!(s.update_hover(None), None);
    assert!(s.floating_hearts().iter().all(|h| !h.is_hovered()));
}

#[test]
fn at_most_one_heart_hovered_after_any_update() {
    let mut s = Scene::new(SceneParams::default(), 23).unwrap();
    s.set_viewport(1280, 720);
    for iy in 0..=20 {
        for ix in 0..=20 {
            let ndc = Vec2::new(ix as f32 / 10.0 - 1.0, iy as f32 / 10.0 - 1.0);
            let hit = s.update_hover(Some(ndc));
            let hovered: Vec<usize> = s
                .floating_hearts()
                .iter()
                .filter(|h| h.is_hovered())
                .map(|h| h.index())
                .collect();
            assert!(hovered.len() <= 1);
            assert_eq!(hovered.first().copied(), hit);
        }
    }
}

#[test]
fn nearest_of_overlapping_hearts_wins() {
    let mut s = Scene::new(SceneParams::default(), 24).unwrap();
    let camera = s.camera().clone();
    let hearts = s.floating_hearts().to_vec();
    for (i, h) in hearts.iter().enumerate() {
        let ndc = project_to_ndc(&camera, h.object.transform.position);
        let (ro, rd) = ndc_to_world_ray(&camera, ndc);
        let hit = s.update_hover(Some(ndc)).unwrap();
        let t_hit = ray_sphere(ro, rd, hearts[hit].object.transform.position, hearts[hit].pick_radius())
            .unwrap();
        let t_own = ray_sphere(ro, rd, h.object.transform.position, h.pick_radius()).unwrap();
        assert!(t_hit <= t_own + 1e-4, "heart {} hidden behind {}", i, hit);
    }
}

#[test]
fn set_hovered_out_of_range_clears_all() {
    let mut s = Scene::new(SceneParams::default(), 25).unwrap();
    s.set_hovered(Some(1));
    s.set_hovered(Some(999));
    assert_eq!(s.hovered_index(), None);
}
