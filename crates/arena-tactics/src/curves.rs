//! Easing and normalisation helpers used by the scoring formulas.

use std::f32::consts::PI;

/// Clamps into `[0, 1]`; NaN becomes `0`.
pub fn fix(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Where `v` sits between `a` (0) and `b` (1). Not clamped.
pub fn inv_lerp(a: f32, b: f32, v: f32) -> f32 {
    if (b - a).abs() <= f32::EPSILON {
        return 0.0;
    }
    (v - a) / (b - a)
}

/// Maps `v` from the range `a..b` onto `c..d`. Not clamped.
pub fn remap(a: f32, b: f32, c: f32, d: f32, v: f32) -> f32 {
    c + inv_lerp(a, b, v) * (d - c)
}

/// Ease-out of degree `n`: fast start, gentle arrival at `1`.
pub fn smooth_stop(n: i32, t: f32) -> f32 {
    1.0 - (1.0 - t).powi(n)
}

/// Distance normalised against the field diagonal scale.
pub fn dist_01(dist: f32) -> f32 {
    const FAR: f32 = 10_000.0;
    fix(dist / FAR)
}

/// `1` when facing straight at something, `0` when facing directly away.
pub fn face_ang_01(angle: f32) -> f32 {
    fix(1.0 - angle.abs() / PI)
}
