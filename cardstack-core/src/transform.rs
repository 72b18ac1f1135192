//! Stack-position transform model.
//!
//! Every card's pose is re-derived from `(entry, active)` on each change of
//! the active index. No per-card animation state lives here; the presence
//! tracker only tweens between the descriptors this module produces.

use rand::Rng;

use crate::jitter::{ENTER_JITTER, REST_JITTER};

/// Horizontal distance a card travels when entering or leaving the stack.
pub const OFFSTAGE_X: f32 = 300.0;

const ACTIVE_STACK_ORDER: i32 = 100;
const BASE_STACK_ORDER: i32 = 50;

/// Lifecycle phase a descriptor is derived for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Pose a card is first composed in, before it animates to rest.
    Enter,
    /// Steady-state pose.
    Rest,
    /// Pose a card animates to as it leaves the stack.
    Exit,
}

/// Visual parameters of one card at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformDescriptor {
    pub translate_x: f32,
    pub translate_y: f32,
    pub opacity: f32,
    pub scale: f32,
    pub rotation_deg: f32,
    /// Paint order; higher values render above lower ones.
    pub stack_order: i32,
}

impl TransformDescriptor {
    /// The foreground pose of the active card.
    pub const ACTIVE: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        opacity: 1.0,
        scale: 1.0,
        rotation_deg: 0.0,
        stack_order: ACTIVE_STACK_ORDER,
    };

    /// Exit poses only drive translation along x, opacity and scale. The
    /// remaining channels keep whatever `current` shows when the exit starts.
    pub fn holding(self, current: &TransformDescriptor) -> Self {
        Self {
            translate_y: current.translate_y,
            rotation_deg: current.rotation_deg,
            stack_order: current.stack_order,
            ..self
        }
    }

    /// Linear interpolation of the float channels. Stack order snaps to the
    /// target as soon as the transition starts.
    pub fn lerp(&self, to: &TransformDescriptor, t: f32) -> Self {
        if t >= 1.0 {
            return *to;
        }
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            translate_x: mix(self.translate_x, to.translate_x),
            translate_y: mix(self.translate_y, to.translate_y),
            opacity: mix(self.opacity, to.opacity),
            scale: mix(self.scale, to.scale),
            rotation_deg: mix(self.rotation_deg, to.rotation_deg),
            stack_order: to.stack_order,
        }
    }
}

/// Signed distance from the active entry, not wrapped around the cycle.
pub fn offset(entry: usize, active: usize) -> isize {
    entry as isize - active as isize
}

/// Derive the descriptor of `entry` for `phase` while `active` is in front.
///
/// `len` is the catalog size; both indices must be below it. Rotation
/// jitter is sampled from `rng` on every call.
pub fn transform<R: Rng + ?Sized>(
    entry: usize,
    active: usize,
    len: usize,
    phase: Phase,
    rng: &mut R,
) -> TransformDescriptor {
    debug_assert!(entry < len && active < len);
    let offset = offset(entry, active);
    match phase {
        Phase::Enter => enter(offset, rng),
        Phase::Rest => rest(offset, rng),
        Phase::Exit => exit(offset),
    }
}

fn rest<R: Rng + ?Sized>(offset: isize, rng: &mut R) -> TransformDescriptor {
    if offset == 0 {
        return TransformDescriptor::ACTIVE;
    }
    let distance = offset.unsigned_abs() as f32;
    TransformDescriptor {
        translate_x: offset as f32 * 20.0,
        translate_y: distance * 10.0,
        opacity: (1.0 - distance * 0.3).max(0.3),
        scale: (1.0 - distance * 0.1).max(0.7),
        rotation_deg: REST_JITTER.sample(rng),
        stack_order: rest_stack_order(offset),
    }
}

fn enter<R: Rng + ?Sized>(offset: isize, rng: &mut R) -> TransformDescriptor {
    let translate_x = match offset.signum() {
        1 => OFFSTAGE_X,
        -1 => -OFFSTAGE_X,
        _ => 0.0,
    };
    TransformDescriptor {
        translate_x,
        translate_y: 0.0,
        opacity: 0.0,
        scale: 0.8,
        rotation_deg: ENTER_JITTER.sample(rng),
        stack_order: rest_stack_order(offset),
    }
}

fn exit(offset: isize) -> TransformDescriptor {
    // The card coming to the front has no side to leave from; it goes right.
    let translate_x = if offset >= 0 { OFFSTAGE_X } else { -OFFSTAGE_X };
    TransformDescriptor {
        translate_x,
        translate_y: offset.unsigned_abs() as f32 * 10.0,
        opacity: 0.0,
        scale: 0.8,
        rotation_deg: 0.0,
        stack_order: rest_stack_order(offset),
    }
}

fn rest_stack_order(offset: isize) -> i32 {
    if offset == 0 {
        ACTIVE_STACK_ORDER
    } else {
        let distance = i32::try_from(offset.unsigned_abs()).unwrap_or(i32::MAX);
        BASE_STACK_ORDER.saturating_sub(distance)
    }
}

/// The three phase descriptors handed to the renderer for one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransforms {
    pub enter: TransformDescriptor,
    pub rest: TransformDescriptor,
    pub exit: TransformDescriptor,
}

impl CardTransforms {
    pub fn derive<R: Rng + ?Sized>(
        entry: usize,
        active: usize,
        len: usize,
        rng: &mut R,
    ) -> Self {
        Self {
            enter: transform(entry, active, len, Phase::Enter, rng),
            rest: transform(entry, active, len, Phase::Rest, rng),
            exit: transform(entry, active, len, Phase::Exit, rng),
        }
    }
}
