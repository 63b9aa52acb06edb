//! Track offset animation controller

use std::time::{Duration, Instant};

use super::config::{TransitionConfig, TransitionConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// Running transition
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Interpolates the rendered track offset towards a target
///
/// Set a target with [`set_target`](Self::set_target), then call
/// [`update`](Self::update) each frame to get the offset to draw. A new
/// target mid-flight starts from wherever the track currently is.
#[derive(Debug, Clone)]
pub struct OffsetAnimator {
    animation: Option<ActiveAnimation>,
    config: TransitionConfig,
    /// Offset (percent of viewport width) as of the last update
    current: f64,
}

impl Default for OffsetAnimator {
    fn default() -> Self {
        Self::new(TransitionConfig::default())
    }
}

impl OffsetAnimator {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Final offset once the running transition completes
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Jump to `offset` with no transition
    pub fn snap_to(&mut self, offset: f64) {
        self.animation = None;
        self.current = offset;
    }

    /// Start a transition towards `offset`
    ///
    /// Jumps immediately when transitions are disabled. Re-targeting to the
    /// offset already being approached leaves the running transition alone.
    pub fn set_target(&mut self, offset: f64) {
        if !self.config.is_smooth() {
            self.snap_to(offset);
            return;
        }

        if (self.target() - offset).abs() < f64::EPSILON {
            return;
        }

        if (self.current - offset).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from: self.current,
            to: offset,
            duration: self.config.duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the transition and return the offset to draw
    pub fn update(&mut self) -> f64 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration) {
                self.current = anim.to;
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration);
                self.current = lerp(anim.from, anim.to, anim.easing.apply(t));
            }
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_when_disabled() {
        let config = TransitionConfig {
            enabled: false,
            ..Default::default()
        };
        let mut animator = OffsetAnimator::new(config);

        animator.set_target(-300.0);
        assert_eq!(animator.current(), -300.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_starts() {
        let config = TransitionConfig {
            duration_ms: 10_000,
            ..Default::default()
        };
        let mut animator = OffsetAnimator::new(config);

        animator.set_target(-100.0);
        assert!(animator.is_animating());
        assert_eq!(animator.target(), -100.0);

        let drawn = animator.update();
        assert!(drawn <= 0.0 && drawn > -100.0);
    }

    #[test]
    fn test_retarget_mid_flight() {
        let config = TransitionConfig {
            duration_ms: 10_000,
            ..Default::default()
        };
        let mut animator = OffsetAnimator::new(config);
        animator.set_target(-100.0);
        animator.set_target(-200.0);
        assert_eq!(animator.target(), -200.0);
    }

    #[test]
    fn test_same_target_is_noop() {
        let mut animator = OffsetAnimator::default();
        animator.set_target(0.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_snap_cancels() {
        let config = TransitionConfig {
            duration_ms: 10_000,
            ..Default::default()
        };
        let mut animator = OffsetAnimator::new(config);
        animator.set_target(-100.0);
        animator.snap_to(-33.0);
        assert!(!animator.is_animating());
        assert_eq!(animator.update(), -33.0);
    }

    #[test]
    fn test_zero_duration_completes_on_update() {
        let config = TransitionConfig {
            duration_ms: 0,
            ..Default::default()
        };
        let mut animator = OffsetAnimator::new(config);
        animator.set_target(-50.0);
        assert_eq!(animator.update(), -50.0);
    }
}
