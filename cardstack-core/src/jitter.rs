//! Randomized rotation jitter for the hand-placed look of the stack.

use rand::Rng;

/// Closed range of degrees a jitter sample is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterRange {
    pub lo: f32,
    pub hi: f32,
}

impl JitterRange {
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.lo..=self.hi).contains(&value)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        jitter(rng, self.lo, self.hi)
    }
}

/// Tilt given to a card as it is first composed.
pub const ENTER_JITTER: JitterRange = JitterRange::new(-15.0, 15.0);

/// Tilt of a resting card behind the active one.
pub const REST_JITTER: JitterRange = JitterRange::new(-10.0, 10.0);

/// Uniform sample in `[lo, hi]`, rounded to two decimals.
///
/// Rounding can push a sample past a bound that is not itself a multiple of
/// 0.01, so the result is clamped back into range.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if lo == hi {
        return lo;
    }
    let raw: f32 = rng.random_range(lo..=hi);
    ((raw * 100.0).round() / 100.0).clamp(lo, hi)
}
