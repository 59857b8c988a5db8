/// Maps `x` linearly from `domain` onto `range`, clamping `x` into the domain first.
/// The domain must be ascending; the range may run downhill, letting a growing input
/// drive a shrinking output.
#[inline]
pub fn lerp(x: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let (x0, x1) = domain;
    let (y0, y1) = range;
    debug_assert!(x1 > x0, "invalid domain {domain:?}");
    let clamped = f64::min(f64::max(x, x0), x1);
    y0 + (clamped - x0) / (x1 - x0) * (y1 - y0)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;

    use super::*;

    #[test]
    fn endpoints() {
        assert_float_absolute_eq!(4.0, lerp(200.0, (200.0, 320.0), (4.0, -2.0)));
        assert_float_absolute_eq!(-2.0, lerp(320.0, (200.0, 320.0), (4.0, -2.0)));
        assert_float_absolute_eq!(12.0, lerp(0.0, (0.0, 100.0), (12.0, 6.0)));
        assert_float_absolute_eq!(6.0, lerp(100.0, (0.0, 100.0), (12.0, 6.0)));
    }

    #[test]
    fn midpoints() {
        assert_float_absolute_eq!(1.0, lerp(260.0, (200.0, 320.0), (4.0, -2.0)));
        assert_float_absolute_eq!(9.0, lerp(50.0, (0.0, 100.0), (12.0, 6.0)));
        assert_float_absolute_eq!(0.5, lerp(5.0, (0.0, 10.0), (0.0, 1.0)));
    }

    #[test]
    fn clamps_outside_domain() {
        assert_float_absolute_eq!(4.0, lerp(150.0, (200.0, 320.0), (4.0, -2.0)));
        assert_float_absolute_eq!(-2.0, lerp(400.0, (200.0, 320.0), (4.0, -2.0)));
        assert_float_absolute_eq!(12.0, lerp(-5.0, (0.0, 100.0), (12.0, 6.0)));
        assert_float_absolute_eq!(6.0, lerp(1_000.0, (0.0, 100.0), (12.0, 6.0)));
    }
}
