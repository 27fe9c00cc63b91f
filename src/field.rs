//! CPU reference of the mist colour field.
//!
//! Mirrors `FRAGMENT_SHADER` operation for operation so the field can be
//! sampled and checked off the GPU. All math is `f32` like the shader.

use glam::{Mat2, Vec2, Vec3, Vec4};

const C: Vec4 = Vec4::new(
    0.211_324_87,  // (3 - sqrt(3)) / 6
    0.366_025_4,   // (sqrt(3) - 1) / 2
    -0.577_350_26, // -1 + 2 * C.x
    0.024_390_243, // 1 / 41
);

pub const OCTAVES: usize = 5;
const OCTAVE_ANGLE: f32 = 0.5;
const OCTAVE_SHIFT: f32 = 100.0;

/// Dark brown, sepia, cream.
pub const PALETTE: [Vec3; 3] = [
    Vec3::new(0.1, 0.08, 0.06),
    Vec3::new(0.5, 0.4, 0.3),
    Vec3::new(0.8, 0.7, 0.5),
];

pub const TIME_SCALE: f32 = 0.1;
const DRIFT_X: f32 = 0.15;
const DRIFT_Y: f32 = 0.126;
const GRAIN: f32 = 0.05;
const VIGNETTE: f32 = 0.5;
const EXPOSURE: f32 = 1.2;

fn mod289(x: Vec3) -> Vec3 {
    x - (x / 289.0).floor() * 289.0
}

fn permute(x: Vec3) -> Vec3 {
    mod289((x * 34.0 + 1.0) * x)
}

fn fract3(x: Vec3) -> Vec3 {
    x - x.floor()
}

/// 2D simplex noise, roughly in [-1, 1].
pub fn snoise(v: Vec2) -> f32 {
    let i = (v + v.dot(Vec2::splat(C.y))).floor();
    let x0 = v - i + i.dot(Vec2::splat(C.x));
    let i1 = if x0.x > x0.y { Vec2::X } else { Vec2::Y };

    let x1 = x0 + Vec2::splat(C.x) - i1;
    let x2 = x0 + Vec2::splat(C.z);

    let i = i - (i / 289.0).floor() * 289.0;
    let p = permute(
        permute(Vec3::splat(i.y) + Vec3::new(0.0, i1.y, 1.0))
            + Vec3::splat(i.x)
            + Vec3::new(0.0, i1.x, 1.0),
    );

    let mut m = (Vec3::splat(0.5) - Vec3::new(x0.dot(x0), x1.dot(x1), x2.dot(x2))).max(Vec3::ZERO);
    m = m * m;
    m = m * m;

    let x = 2.0 * fract3(p * C.w) - 1.0;
    let h = x.abs() - 0.5;
    let ox = (x + 0.5).floor();
    let a0 = x - ox;
    m *= Vec3::splat(1.792_842_9) - 0.853_734_7 * (a0 * a0 + h * h);

    let g = Vec3::new(
        a0.x * x0.x + h.x * x0.y,
        a0.y * x1.x + h.y * x1.y,
        a0.z * x2.x + h.z * x2.y,
    );
    130.0 * m.dot(g)
}

/// Fractal Brownian motion over [`OCTAVES`] octaves of [`snoise`].
pub fn fbm(mut x: Vec2) -> f32 {
    let rot = Mat2::from_angle(OCTAVE_ANGLE);
    let shift = Vec2::splat(OCTAVE_SHIFT);
    let mut v = 0.0;
    let mut a = 0.5;
    for _ in 0..OCTAVES {
        v += a * snoise(x);
        x = rot * x * 2.0 + shift;
        a *= 0.5;
    }
    v
}

/// Intermediate fields of the two warp passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Warp {
    pub q: Vec2,
    pub r: Vec2,
    pub f: f32,
}

/// Domain-warped scalar field at aspect-corrected position `st`.
pub fn warp(st: Vec2, time: f32) -> Warp {
    let t = time * TIME_SCALE;
    let q = Vec2::new(fbm(st + 0.0 * t), fbm(st + Vec2::ONE));
    let r = Vec2::new(
        fbm(st + q + Vec2::new(1.7, 9.2) + DRIFT_X * t),
        fbm(st + q + Vec2::new(8.3, 2.8) + DRIFT_Y * t),
    );
    let f = fbm(st + r);
    Warp { q, r, f }
}

/// Per-pixel hash grain in [0, 1).
pub fn grain(uv: Vec2) -> f32 {
    let s = uv.dot(Vec2::new(12.9898, 78.233)).sin() * 43_758.547;
    s - s.floor()
}

/// Final RGB for the fragment at `frag_coord` (pixel centre, origin bottom-left).
pub fn color_at(time: f32, resolution: Vec2, frag_coord: Vec2) -> Vec3 {
    let uv = frag_coord / resolution;
    let st = Vec2::new(uv.x * resolution.x / resolution.y, uv.y);

    let Warp { q, f, .. } = warp(st, time);
    let [c1, c2, c3] = PALETTE;
    let mut color = c1.lerp(c2, (f * f * 4.0).clamp(0.0, 1.0));
    color = color.lerp(c3, q.length().clamp(0.0, 1.0));

    color += Vec3::splat(grain(uv) * GRAIN);
    color *= 1.0 - uv.distance(Vec2::splat(0.5)) * VIGNETTE;
    color * EXPOSURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grain_is_unit_interval() {
        for i in 0..64 {
            let g = grain(Vec2::new(i as f32 / 64.0, 1.0 - i as f32 / 64.0));
            assert!((0.0..1.0).contains(&g), "grain {g}");
        }
    }

    #[test]
    fn fbm_is_bounded_by_amplitude_sum() {
        // amplitudes 0.5 + 0.25 + ... < 1
        for i in 0..32 {
            let v = fbm(Vec2::new(i as f32 * 0.37, i as f32 * -0.21));
            assert!(v.abs() < 1.05, "fbm {v}");
        }
    }
}
