//! Speed-dependent turning geometry of a car driving at full steer.

/// Path curvature (1/uu) at full steer for the given forward speed.
///
/// Piecewise linear fit of measured turning circles. Speeds past the table's end have zero
/// curvature.
pub fn curvature(speed: f32) -> f32 {
    let v = speed.abs();
    if v < 500.0 {
        0.006900 - 5.84e-6 * v
    } else if v < 1000.0 {
        0.005610 - 3.26e-6 * v
    } else if v < 1500.0 {
        0.004300 - 1.95e-6 * v
    } else if v < 1750.0 {
        0.003025 - 1.10e-6 * v
    } else if v < 2500.0 {
        0.001800 - 0.40e-6 * v
    } else {
        0.0
    }
}

/// Radius of the tightest circle the car can drive at `speed`.
///
/// A stationary car has no turning constraint and reports `0.0`. Zero curvature means the car
/// cannot turn at all and reports `f32::INFINITY`.
pub fn turn_radius(speed: f32) -> f32 {
    let v = speed.abs();
    if !v.is_finite() {
        return f32::INFINITY;
    }
    if v <= f32::EPSILON {
        return 0.0;
    }
    let k = curvature(v);
    if k <= 0.0 {
        f32::INFINITY
    } else {
        1.0 / k
    }
}
