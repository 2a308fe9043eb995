// Host-side tests for scene construction and parameter validation.

use glam::Vec3;
use heart_core::constants::*;
use heart_core::{
    link_nearby, FrameClock, Scene, SceneError, SceneParams, SteppedClock,
};

#[test]
fn default_scene_has_expected_population() {
    let s = Scene::new(SceneParams::default(), 42).unwrap();
    assert_eq!(s.floating_hearts().len(), FLOATING_HEART_COUNT);
    assert_eq!(s.star_field().unwrap().positions.len(), STAR_COUNT);
    assert_eq!(s.star_field().unwrap().colors.len(), STAR_COUNT);
    assert_eq!(s.constellation().unwrap().points.len(), CONSTELLATION_POINTS);
    assert_eq!(s.particles().unwrap().len(), PARTICLE_COUNT);
    assert_eq!(s.particles().unwrap().position_buffer().len(), PARTICLE_COUNT * 3);
    let heart = s.main_heart().unwrap();
    assert_eq!(heart.object.transform.scale, Vec3::splat(MAIN_HEART_REST_SCALE));
    assert!(heart.glow.is_some());
    assert_eq!(s.hovered_index(), None);
}

#[test]
fn floating_hearts_are_indexed_in_order() {
    let s = Scene::new(SceneParams::default(), 42).unwrap();
    for (i, h) in s.floating_hearts().iter().enumerate() {
        assert_eq!(h.index(), i);
        assert_eq!(h.base_position(), h.object.transform.position);
        let p = h.params();
        assert!((0.04..0.09).contains(&p.base_scale));
        assert!((0.3..0.8).contains(&p.float_speed));
        assert!((0.9..1.0).contains(&p.hue));
        assert!(p.rotation_speed.abs().max_element() <= 0.01);
    }
}

#[test]
fn same_seed_builds_identical_scenes_and_trajectories() {
    let mut a = Scene::new(SceneParams::default(), 7).unwrap();
    let mut b = Scene::new(SceneParams::default(), 7).unwrap();
    assert_eq!(a, b);

    let mut ca = SteppedClock::from_fps(60.0);
    let mut cb = SteppedClock::from_fps(60.0);
    for _ in 0..120 {
        a.advance(ca.tick());
        b.advance(cb.tick());
    }
    assert_eq!(a, b);
}

#[test]
fn different_seeds_build_different_scenes() {
    let a = Scene::new(SceneParams::default(), 1).unwrap();
    let b = Scene::new(SceneParams::default(), 2).unwrap();
    assert_ne!(
        a.floating_hearts()[0].base_position(),
        b.floating_hearts()[0].base_position()
    );
}

#[test]
fn changing_one_count_leaves_other_subsystems_alone() {
    let a = Scene::new(SceneParams::default(), 9).unwrap();
    let fewer = SceneParams {
        stars: 10,
        ..SceneParams::default()
    };
    let b = Scene::new(fewer, 9).unwrap();
    assert_eq!(a.floating_hearts(), b.floating_hearts());
    assert_eq!(a.particles(), b.particles());
    assert_eq!(a.constellation(), b.constellation());
}

#[test]
fn zero_counts_leave_objects_absent() {
    let params = SceneParams {
        floating_hearts: 0,
        stars: 0,
        constellation_points: 0,
        particles: 0,
        main_heart: false,
        ..SceneParams::default()
    };
    let s = Scene::new(params, 3).unwrap();
    assert!(s.floating_hearts().is_empty());
    assert!(s.star_field().is_none());
    assert!(s.constellation().is_none());
    assert!(s.particles().is_none());
    assert!(s.main_heart().is_none());
}

#[test]
fn particles_start_inside_bounds() {
    let s = Scene::new(SceneParams::default(), 5).unwrap();
    let p = s.particles().unwrap();
    assert!(p.extent().cmple(p.bounds()).all());
    for v in p.velocities() {
        assert!(v.abs().max_element() <= PARTICLE_MAX_SPEED);
    }
}

#[test]
fn constellation_links_only_close_points() {
    let s = Scene::new(SceneParams::default(), 11).unwrap();
    let c = s.constellation().unwrap();
    for &(i, j) in &c.segments {
        assert!(i < j);
        assert!(c.points[i].distance(c.points[j]) < CONSTELLATION_LINK_DISTANCE);
    }
}

#[test]
fn link_nearby_pairs_each_close_pair_once() {
    let points = [
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(100.0, 0.0, 0.0),
    ];
    assert_eq!(link_nearby(&points, 8.0), vec![(0, 1)]);
    assert!(link_nearby(&points, 0.5).is_empty());
}

#[test]
fn validate_rejects_bad_bounds() {
    for bounds in [
        Vec3::new(0.0, 25.0, 15.0),
        Vec3::new(25.0, -1.0, 15.0),
        Vec3::new(25.0, 25.0, f32::INFINITY),
    ] {
        let params = SceneParams {
            particle_bounds: bounds,
            ..SceneParams::default()
        };
        match Scene::new(params, 0) {
            Err(SceneError::InvalidParam { name, .. }) => assert_eq!(name, "particle_bounds"),
            other => panic!("expected invalid bounds, got {:?}", other.map(|_| ())),
        }
    }
}

#[test]
fn validate_rejects_bad_amplitude_distance_and_fov() {
    let cases = [
        (
            SceneParams {
                float_amplitude: -1.0,
                ..SceneParams::default()
            },
            "float_amplitude",
        ),
        (
            SceneParams {
                camera_distance: f32::NAN,
                ..SceneParams::default()
            },
            "camera_distance",
        ),
        (
            SceneParams {
                fovy_radians: 0.0,
                ..SceneParams::default()
            },
            "fovy_radians",
        ),
    ];
    for (params, expected) in cases {
        let err = params.validate().unwrap_err();
        let SceneError::InvalidParam { name, .. } = &err;
        assert_eq!(*name, expected);
        assert!(err.to_string().contains(expected));
    }
}

#[test]
fn default_params_validate() {
    assert!(SceneParams::default().validate().is_ok());
}

#[test]
fn set_viewport_updates_aspect_and_ignores_zero() {
    let mut s = Scene::new(SceneParams::default(), 1).unwrap();
    s.set_viewport(800, 400);
    assert_eq!(s.camera().aspect, 2.0);
    s.set_viewport(0, 400);
    assert_eq!(s.camera().aspect, 2.0);
}
