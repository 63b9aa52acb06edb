//! Helpers over the transition settings from showreel-core

use std::time::Duration;

pub use showreel_core::{EasingType, TransitionConfig};

/// Extension trait for TransitionConfig with utility methods
pub trait TransitionConfigExt {
    /// Transition length as Duration
    fn duration(&self) -> Duration;

    /// Whether transitions are effectively enabled
    fn is_smooth(&self) -> bool;
}

impl TransitionConfigExt for TransitionConfig {
    #[inline]
    fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.enabled && self.duration_ms > 0 && self.easing != EasingType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let config = TransitionConfig {
            duration_ms: 200,
            ..Default::default()
        };
        assert_eq!(config.duration(), Duration::from_millis(200));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = TransitionConfig::default();
        assert!(config.is_smooth());

        config.enabled = false;
        assert!(!config.is_smooth());

        config.enabled = true;
        config.duration_ms = 0;
        assert!(!config.is_smooth());

        config.duration_ms = 500;
        config.easing = EasingType::None;
        assert!(!config.is_smooth());
    }
}
