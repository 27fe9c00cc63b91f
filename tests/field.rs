use glam::Vec2;
use mistline::field::{color_at, fbm, snoise, warp};

const RES: Vec2 = Vec2::new(1920.0, 1080.0);

fn grid() -> impl Iterator<Item = Vec2> {
    (0..8).flat_map(|i| {
        (0..6).map(move |j| Vec2::new(i as f32 * 240.0 + 0.5, j as f32 * 180.0 + 0.5))
    })
}

#[test]
fn color_field_is_deterministic() {
    for t in [0.0, 1.5, 37.25, 600.0] {
        for px in grid() {
            assert_eq!(color_at(t, RES, px), color_at(t, RES, px));
        }
    }
}

#[test]
fn color_channels_stay_in_exposure_range() {
    for t in [0.0, 12.0, 240.0] {
        for px in grid() {
            let c = color_at(t, RES, px);
            for ch in c.to_array() {
                assert!(ch.is_finite() && (0.0..=1.2).contains(&ch), "{c:?} at {px:?}, t={t}");
            }
        }
    }
}

#[test]
fn color_field_is_continuous_in_time() {
    let dt = 1e-3;
    for start in [0.0f32, 5.0, 90.0] {
        for px in grid() {
            let mut prev = color_at(start, RES, px);
            for step in 1..=20 {
                let next = color_at(start + step as f32 * dt, RES, px);
                let jump = (next - prev).abs().max_element();
                assert!(jump < 0.05, "jump {jump} at {px:?}, t={start}+{step}dt");
                prev = next;
            }
        }
    }
}

#[test]
fn field_moves_over_time() {
    let px = Vec2::new(960.5, 540.5);
    assert_ne!(color_at(0.0, RES, px), color_at(30.0, RES, px));
}

#[test]
fn first_warp_layer_is_static() {
    // q has no time term; only r and f drift
    let st = Vec2::new(0.8, 0.4);
    let a = warp(st, 0.0);
    let b = warp(st, 50.0);
    assert_eq!(a.q, b.q);
    assert_ne!(a.r, b.r);
}

#[test]
fn simplex_noise_is_bounded_and_zero_on_lattice_origin() {
    assert_eq!(snoise(Vec2::ZERO), 0.0);
    for i in 0..200 {
        let p = Vec2::new(i as f32 * 0.173 - 17.0, i as f32 * -0.291 + 9.0);
        let n = snoise(p);
        assert!(n.abs() <= 1.1, "snoise({p:?}) = {n}");
    }
}

#[test]
fn fbm_differs_from_single_octave() {
    let p = Vec2::new(0.3, 0.7);
    assert_ne!(fbm(p), 0.5 * snoise(p));
}
