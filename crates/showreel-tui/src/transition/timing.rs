//! Time calculation helpers for transitions

use std::time::{Duration, Instant};

/// Progress (0.0 to 1.0) of a transition started at `start`
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = start.elapsed().as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, duration: Duration) -> bool {
    start.elapsed() >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, -300.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, -300.0, 0.5) + 150.0).abs() < 0.001);
        assert!((lerp(-100.0, -300.0, 1.0) + 300.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, Duration::ZERO) - 1.0).abs() < 0.001);
        assert!(is_complete(start, Duration::ZERO));
    }

    #[test]
    fn test_progress_long_duration_starts_low() {
        let start = Instant::now();
        assert!(progress(start, Duration::from_secs(3600)) < 0.01);
        assert!(!is_complete(start, Duration::from_secs(3600)));
    }
}
