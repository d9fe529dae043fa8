//! Distance-to-intensity mapping for the actuator.

/// Convert a signed surface distance (millimeters) into an actuator
/// intensity.
///
/// The distance is assumed to already be projected onto the shape's local
/// outward normal by the caller; no projection happens here. Inside or past
/// the surface (negative distance) drives the actuator flat out at 255.
/// Outside, intensity starts at 128 on contact and falls off by 4 per
/// millimeter, truncated to an integer and clamped at zero.
///
/// # Example
/// ```
/// use haptos::feedback::intensity;
///
/// assert_eq!(intensity(-5.0), 255);
/// assert_eq!(intensity(0.0), 128);
/// assert_eq!(intensity(10.0), 88);
/// assert_eq!(intensity(32.0), 0);
/// ```
pub fn intensity(distance_mm: f64) -> u8 {
    if distance_mm < 0.0 {
        return u8::MAX;
    }
    (128.0 - 4.0 * distance_mm).clamp(0.0, 128.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_saturates() {
        assert_eq!(intensity(-5.0), 255);
        assert_eq!(intensity(-0.001), 255);
    }

    #[test]
    fn contact_is_half_scale() {
        assert_eq!(intensity(0.0), 128);
    }

    #[test]
    fn falls_off_linearly_and_truncates() {
        assert_eq!(intensity(1.0), 124);
        assert_eq!(intensity(10.0), 88);
        assert_eq!(intensity(0.4), 126); // 126.4 truncated
    }

    #[test]
    fn clamps_to_zero_far_away() {
        assert_eq!(intensity(32.0), 0);
        assert_eq!(intensity(100.0), 0);
    }
}
