use std::time::Duration;

use crate::animation::ease::Ease;

/// Duration of the front-layer shrink that reveals the back layer.
pub const ACTIVATE_BACK_DURATION: Duration = Duration::from_millis(200);
/// Duration of the front-layer grow that covers the back layer.
pub const ACTIVATE_FRONT_DURATION: Duration = Duration::from_millis(250);

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Outcome of advancing a [`HeightTransition`] by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionStep {
    /// Height for this frame; more frames follow.
    Running(f64),
    /// Final height; the transition is over.
    Finished(f64),
}

impl TransitionStep {
    /// Height carried by either variant.
    pub fn height(self) -> f64 {
        match self {
            Self::Running(h) | Self::Finished(h) => h,
        }
    }

    /// Whether this was the last frame.
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// A single front-height interpolation from `start` to `target`.
///
/// Sampling is a pure function of elapsed time:
/// `height(t) = lerp(start, target, ease(t / duration))`. The driver only
/// accumulates elapsed time; cancelling a transition means dropping it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightTransition {
    start: f64,
    target: f64,
    duration: Duration,
    ease: Ease,
    elapsed: Duration,
}

impl HeightTransition {
    /// Transition that has not advanced yet.
    pub fn new(start: f64, target: f64, duration: Duration, ease: Ease) -> Self {
        Self {
            start,
            target,
            duration,
            ease,
            elapsed: Duration::ZERO,
        }
    }

    /// Height the transition started from.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Height the transition ends at.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Total running time.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Curve applied to progress.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Time advanced so far, never past the duration.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whether elapsed time has reached the duration.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Height at an arbitrary point in the transition, clamped to its span.
    pub fn sample(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.target;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        lerp(self.start, self.target, self.ease.apply(t))
    }

    /// Height at the current elapsed time.
    pub fn current(&self) -> f64 {
        self.sample(self.elapsed)
    }

    /// Add `dt` to the elapsed time and sample the new height.
    pub fn advance(&mut self, dt: Duration) -> TransitionStep {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        let height = self.current();
        if self.is_finished() {
            TransitionStep::Finished(height)
        } else {
            TransitionStep::Running(height)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
