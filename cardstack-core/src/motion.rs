//! Time-based tweening between transform descriptors.
//!
//! Callers pass the current [`Instant`] in; nothing here reads the clock.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::error::CoreError;
use crate::transform::TransformDescriptor;

/// Default time a card takes to move between two descriptors.
pub const CARD_TRANSITION_DURATION: Duration = Duration::from_millis(600);

/// Delay before the active card's caption starts fading in.
pub const CAPTION_DELAY: Duration = Duration::from_millis(300);

pub const CAPTION_FADE_DURATION: Duration = Duration::from_millis(300);

/// Distance the caption rises while it fades in.
pub const CAPTION_RISE: f32 = 20.0;

/// Easing curves available to card transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum EasingFunction {
    Linear,
    EaseOutQuad,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutQuart,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EasingFunction::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EasingFunction::Linear => "linear",
            EasingFunction::EaseOutQuad => "ease-out-quad",
            EasingFunction::EaseOutCubic => "ease-out-cubic",
            EasingFunction::EaseInOutCubic => "ease-in-out-cubic",
            EasingFunction::EaseOutQuart => "ease-out-quart",
        }
    }
}

impl fmt::Display for EasingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EasingFunction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(EasingFunction::Linear),
            "ease-out-quad" => Ok(EasingFunction::EaseOutQuad),
            "ease-out-cubic" => Ok(EasingFunction::EaseOutCubic),
            "ease-in-out-cubic" => Ok(EasingFunction::EaseInOutCubic),
            "ease-out-quart" => Ok(EasingFunction::EaseOutQuart),
            other => Err(CoreError::UnknownEasing(other.to_string())),
        }
    }
}

/// Timing shared by every card transition and the caption reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub duration: Duration,
    pub easing: EasingFunction,
    pub caption_delay: Duration,
    pub caption_duration: Duration,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            duration: CARD_TRANSITION_DURATION,
            easing: EasingFunction::default(),
            caption_delay: CAPTION_DELAY,
            caption_duration: CAPTION_FADE_DURATION,
        }
    }
}

/// A single descriptor-to-descriptor transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: TransformDescriptor,
    pub to: TransformDescriptor,
    pub started_at: Instant,
    pub duration: Duration,
    pub easing: EasingFunction,
}

impl Tween {
    pub fn new(
        from: TransformDescriptor,
        to: TransformDescriptor,
        started_at: Instant,
        spec: &TransitionSpec,
    ) -> Self {
        Self {
            from,
            to,
            started_at,
            duration: spec.duration,
            easing: spec.easing,
        }
    }

    /// Linear time progress in `[0, 1]`.
    pub fn raw_progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn progress(&self, now: Instant) -> f32 {
        self.easing.apply(self.raw_progress(now))
    }

    pub fn sample(&self, now: Instant) -> TransformDescriptor {
        self.from.lerp(&self.to, self.progress(now))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.raw_progress(now) >= 1.0
    }

    /// Restart toward `to` from wherever this tween currently is.
    pub fn retarget(
        &self,
        to: TransformDescriptor,
        now: Instant,
        spec: &TransitionSpec,
    ) -> Self {
        Self::new(self.sample(now), to, now, spec)
    }
}

/// Pose of the info overlay on the active card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptionPose {
    pub opacity: f32,
    /// Downward offset in logical pixels; reaches 0 when fully revealed.
    pub offset_y: f32,
}

impl CaptionPose {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        offset_y: CAPTION_RISE,
    };
}

/// Caption pose `now` for a card that became active at `since`.
pub fn caption_reveal(
    spec: &TransitionSpec,
    since: Instant,
    now: Instant,
) -> CaptionPose {
    let elapsed = now.saturating_duration_since(since);
    let Some(visible_for) = elapsed.checked_sub(spec.caption_delay) else {
        return CaptionPose::HIDDEN;
    };
    let t = if spec.caption_duration.is_zero() {
        1.0
    } else {
        visible_for.as_secs_f32() / spec.caption_duration.as_secs_f32()
    };
    let eased = spec.easing.apply(t);
    CaptionPose {
        opacity: eased,
        offset_y: CAPTION_RISE * (1.0 - eased),
    }
}

/// Whether the caption of a card active since `since` has finished revealing.
pub fn caption_settled(
    spec: &TransitionSpec,
    since: Instant,
    now: Instant,
) -> bool {
    now.saturating_duration_since(since)
        >= spec.caption_delay + spec.caption_duration
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose(x: f32) -> TransformDescriptor {
        TransformDescriptor {
            translate_x: x,
            ..TransformDescriptor::ACTIVE
        }
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [
            EasingFunction::Linear,
            EasingFunction::EaseOutQuad,
            EasingFunction::EaseOutCubic,
            EasingFunction::EaseInOutCubic,
            EasingFunction::EaseOutQuart,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing}");
            assert_eq!(easing.apply(-2.0), 0.0, "{easing}");
            assert_eq!(easing.apply(3.0), 1.0, "{easing}");
        }
    }

    #[test]
    fn easing_round_trips_through_names() {
        let parsed: EasingFunction = "Ease-In-Out-Cubic".parse().unwrap();
        assert_eq!(parsed, EasingFunction::EaseInOutCubic);
        assert_eq!(parsed.to_string().parse::<EasingFunction>(), Ok(parsed));
        assert_eq!(
            "bouncy".parse::<EasingFunction>(),
            Err(CoreError::UnknownEasing("bouncy".into()))
        );
    }

    #[test]
    fn tween_reaches_target_after_duration() {
        let start = Instant::now();
        let spec = TransitionSpec {
            easing: EasingFunction::Linear,
            ..TransitionSpec::default()
        };
        let tween = Tween::new(pose(-300.0), pose(0.0), start, &spec);

        assert_eq!(tween.sample(start).translate_x, -300.0);
        let half = tween.sample(start + Duration::from_millis(300));
        assert!((half.translate_x + 150.0).abs() < 1e-3);
        assert!(!tween.is_finished(start + Duration::from_millis(599)));
        assert!(tween.is_finished(start + Duration::from_millis(600)));
        assert_eq!(tween.sample(start + Duration::from_secs(5)), pose(0.0));
    }

    #[test]
    fn zero_duration_tween_is_immediately_done() {
        let start = Instant::now();
        let spec = TransitionSpec {
            duration: Duration::ZERO,
            ..TransitionSpec::default()
        };
        let tween = Tween::new(pose(300.0), pose(0.0), start, &spec);
        assert!(tween.is_finished(start));
        assert_eq!(tween.sample(start), pose(0.0));
    }

    #[test]
    fn retarget_starts_from_current_sample() {
        let start = Instant::now();
        let spec = TransitionSpec {
            easing: EasingFunction::Linear,
            ..TransitionSpec::default()
        };
        let tween = Tween::new(pose(0.0), pose(100.0), start, &spec);
        let now = start + Duration::from_millis(300);
        let next = tween.retarget(pose(-100.0), now, &spec);
        assert!((next.from.translate_x - 50.0).abs() < 1e-3);
        assert_eq!(next.started_at, now);
    }

    #[test]
    fn caption_waits_for_delay_then_rises() {
        let since = Instant::now();
        let spec = TransitionSpec::default();
        assert_eq!(
            caption_reveal(&spec, since, since + Duration::from_millis(100)),
            CaptionPose::HIDDEN
        );
        let done = caption_reveal(&spec, since, since + Duration::from_millis(600));
        assert_eq!(done.opacity, 1.0);
        assert_eq!(done.offset_y, 0.0);
        assert!(caption_settled(&spec, since, since + Duration::from_millis(600)));
        assert!(!caption_settled(&spec, since, since + Duration::from_millis(450)));
    }
}
