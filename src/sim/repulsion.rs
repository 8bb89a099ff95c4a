//! Repulsion forces and speed shaping
//!
//! Forces fall off linearly from full strength at an obstacle's center to
//! zero at its radius.

use glam::Vec2;

use super::layout::Obstacle;

/// Distances at or below this are treated as coincident (no defined direction)
const MIN_DISTANCE: f32 = 0.001;

/// Speeds at or below this have no usable direction for rescaling
const MIN_RESCALE_SPEED: f32 = 0.01;

/// Velocity change pushing `point` away from `obstacle` over `dt`
///
/// Zero outside the radius, and zero when the distance is non-finite or too
/// small to give a direction.
pub fn repulsion(point: Vec2, obstacle: &Obstacle, strength: f32, dt: f32) -> Vec2 {
    let away = point - obstacle.center;
    let dist = away.length();
    if !dist.is_finite() || dist <= MIN_DISTANCE || dist >= obstacle.radius {
        return Vec2::ZERO;
    }

    let falloff = (obstacle.radius - dist) / obstacle.radius;
    away / dist * strength * falloff * dt
}

/// Scale `vel` down to `max` if it is faster
pub fn cap_speed(vel: Vec2, max: f32) -> Vec2 {
    let speed = vel.length();
    if speed > max {
        vel / speed * max
    } else {
        vel
    }
}

/// Keep speed within `[min, max]`; near-zero velocities are left alone
pub fn band_speed(vel: Vec2, min: f32, max: f32) -> Vec2 {
    let speed = vel.length();
    if speed < min && speed > MIN_RESCALE_SPEED {
        vel / speed * min
    } else if speed > max {
        vel / speed * max
    } else {
        vel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle() -> Obstacle {
        Obstacle {
            center: Vec2::new(100.0, 100.0),
            radius: 50.0,
        }
    }

    #[test]
    fn test_outside_radius_is_zero() {
        let o = obstacle();
        assert_eq!(repulsion(Vec2::new(150.0, 100.0), &o, 1000.0, 0.016), Vec2::ZERO);
        assert_eq!(repulsion(Vec2::new(300.0, 300.0), &o, 1000.0, 0.016), Vec2::ZERO);
    }

    #[test]
    fn test_coincident_point_is_zero() {
        let o = obstacle();
        let dv = repulsion(o.center, &o, 1000.0, 0.016);
        assert_eq!(dv, Vec2::ZERO);
        assert!(dv.is_finite());
    }

    #[test]
    fn test_non_finite_point_is_zero() {
        let o = obstacle();
        assert_eq!(repulsion(Vec2::new(f32::NAN, 0.0), &o, 1000.0, 0.016), Vec2::ZERO);
        assert_eq!(repulsion(Vec2::new(f32::INFINITY, 0.0), &o, 1000.0, 0.016), Vec2::ZERO);
    }

    #[test]
    fn test_linear_falloff_points_away() {
        let o = obstacle();
        // Halfway in: factor 0.5, pointing +x
        let dv = repulsion(Vec2::new(125.0, 100.0), &o, 1000.0, 0.1);
        assert!((dv.x - 50.0).abs() < 1e-3);
        assert!(dv.y.abs() < 1e-6);

        // Closer means stronger
        let near = repulsion(Vec2::new(90.0, 100.0), &o, 1000.0, 0.1);
        assert!(near.x < 0.0);
        assert!(near.length() > dv.length());
    }

    #[test]
    fn test_cap_speed() {
        let v = cap_speed(Vec2::new(300.0, 400.0), 100.0);
        assert!((v.length() - 100.0).abs() < 1e-3);
        assert_eq!(cap_speed(Vec2::new(3.0, 4.0), 100.0), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_band_speed() {
        let slow = band_speed(Vec2::new(3.0, 4.0), 32.0, 64.0);
        assert!((slow.length() - 32.0).abs() < 1e-3);
        let fast = band_speed(Vec2::new(300.0, 400.0), 32.0, 64.0);
        assert!((fast.length() - 64.0).abs() < 1e-3);
        assert_eq!(band_speed(Vec2::ZERO, 32.0, 64.0), Vec2::ZERO);
    }
}
