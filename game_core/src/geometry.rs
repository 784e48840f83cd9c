use glam::Vec2;
use rand::Rng;

use crate::resources::GameRng;

/// Largest value [`random_unit`] can return after rounding
const UNIT_MAX: f32 = 0.9999;

/// Euclidean distance between two points
pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
    p1.distance(p2)
}

/// Gap between two circle edges, rounded up to a whole pixel.
///
/// Negative when the circles overlap.
pub fn circle_gap(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> f32 {
    (distance(c1, c2) - (r1 + r2)).ceil()
}

pub fn to_radians(degrees: f32) -> f32 {
    degrees / 180.0 * std::f32::consts::PI
}

/// Uniform integer in `[min, max)`. Returns `min` for an empty range.
pub fn random_int(rng: &mut GameRng, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.0.gen_range(min..max)
}

/// Uniform value in `[0, 1)` kept to four significant digits
pub fn random_unit(rng: &mut GameRng) -> f32 {
    let raw: f64 = rng.0.gen();
    (round_significant(raw, 4) as f32).min(UNIT_MAX)
}

/// Uniform value in `[0, 1)` at full precision
pub fn random_f32(rng: &mut GameRng) -> f32 {
    rng.0.gen::<f32>()
}

/// +1 or -1 with equal odds
pub fn random_sign(rng: &mut GameRng) -> f32 {
    if random_unit(rng) < 0.5 {
        1.0
    } else {
        -1.0
    }
}

fn round_significant(value: f64, digits: i32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32 + 1;
    let scale = 10f64.powi(digits - magnitude);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_circle_gap_rounds_up() {
        // centres 10.2 apart, radii sum 5 -> 5.2 -> 6
        let gap = circle_gap(Vec2::ZERO, 2.0, Vec2::new(10.2, 0.0), 3.0);
        assert_eq!(gap, 6.0);
    }

    #[test]
    fn test_circle_gap_negative_on_overlap() {
        let gap = circle_gap(Vec2::ZERO, 10.0, Vec2::new(5.0, 0.0), 10.0);
        assert_eq!(gap, -15.0);
    }

    #[test]
    fn test_to_radians() {
        assert!((to_radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
        assert!((to_radians(90.0) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_random_int_stays_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let v = random_int(&mut rng, 2, 8);
            assert!((2..8).contains(&v), "{v} out of [2, 8)");
        }
    }

    #[test]
    fn test_random_int_empty_range() {
        let mut rng = GameRng::new(7);
        assert_eq!(random_int(&mut rng, 5, 5), 5);
    }

    #[test]
    fn test_random_unit_precision() {
        let mut rng = GameRng::new(99);
        for _ in 0..1000 {
            let v = random_unit(&mut rng) as f64;
            assert!((0.0..1.0).contains(&v));
            let rounded = round_significant(v, 4);
            assert!((v - rounded).abs() < 1e-6, "{v} has more than 4 significant digits");
        }
    }

    #[test]
    fn test_round_significant() {
        assert!((round_significant(0.123456, 4) - 0.1235).abs() < 1e-12);
        assert!((round_significant(0.00123456, 4) - 0.001235).abs() < 1e-12);
        assert_eq!(round_significant(0.0, 4), 0.0);
    }
}
