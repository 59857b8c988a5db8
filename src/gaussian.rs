use std::f64::consts::PI;

use tinyrand::Rand;

/// Draws one sample from N(`mean`, `stddev`) using the Box-Muller transform.
/// `stddev` must be positive.
#[inline]
pub fn sample(mean: f64, stddev: f64, rand: &mut impl Rand) -> f64 {
    debug_assert!(stddev > 0.0, "invalid stddev {stddev}");

    // u1 is floored away from zero; ln(0) is -inf
    let u1 = f64::max(random_f64(rand), f64::EPSILON);
    let u2 = random_f64(rand);
    let z = f64::sqrt(-2.0 * f64::ln(u1)) * f64::cos(2.0 * PI * u2);
    mean + stddev * z
}

#[inline]
fn random_f64(rand: &mut impl Rand) -> f64 {
    rand.next_u64() as f64 / u64::MAX as f64
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use tinyrand::{Seeded, StdRand};
    use tinyrand_alloc::Mock;

    use super::*;

    #[test]
    fn scripted_midpoint_draw() {
        // uniforms of exactly 0.5 collapse the transform to -sqrt(2 ln 2)
        let mut rand = Mock::default().with_next_u128(|_| (u64::MAX / 2) as u128);
        let z = -f64::sqrt(2.0 * f64::ln(2.0));
        assert_float_absolute_eq!(z, sample(0.0, 1.0, &mut rand), 1e-9);
        assert_float_absolute_eq!(10.0 + 3.0 * z, sample(10.0, 3.0, &mut rand), 1e-9);
    }

    #[test]
    fn zero_uniform_stays_finite() {
        let mut rand = Mock::default().with_next_u128(|_| 0);
        assert!(sample(0.0, 1.0, &mut rand).is_finite());
    }

    #[test]
    fn seeded_moments() {
        const SAMPLES: u32 = 50_000;
        let mut rand = StdRand::seed(42);
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for _ in 0..SAMPLES {
            let x = sample(30.0, 8.0, &mut rand);
            sum += x;
            sum_sq += x * x;
        }
        let mean = sum / SAMPLES as f64;
        let variance = sum_sq / SAMPLES as f64 - mean * mean;
        assert_float_absolute_eq!(30.0, mean, 0.25);
        assert_float_absolute_eq!(8.0, variance.sqrt(), 0.25);
    }
}
