//! Keyed enter/exit bookkeeping for the card stack.
//!
//! Cards are keyed by `(entry, generation)`, where the generation is the
//! active index the card was composed for. Changing the active index
//! therefore swaps the whole keyed set: every live card animates out toward
//! its exit pose while a fresh set animates in from its enter pose. Exited
//! cards are dropped by [`StackPresence::prune`] once their tween completes.

use std::time::Instant;

use rand::Rng;

use crate::motion::{
    CaptionPose, TransitionSpec, Tween, caption_reveal, caption_settled,
};
use crate::transform::{Phase, TransformDescriptor, transform};

/// Stable identity of a card in the render tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardKey {
    pub entry: usize,
    pub generation: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Present,
    Exiting,
}

#[derive(Debug, Clone)]
struct CardPresence {
    key: CardKey,
    tween: Tween,
    stage: Stage,
}

/// One card as it should be painted at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    pub key: CardKey,
    pub pose: TransformDescriptor,
    pub is_active: bool,
    pub exiting: bool,
    /// Only the active card carries a caption.
    pub caption: Option<CaptionPose>,
}

#[derive(Debug, Clone)]
pub struct StackPresence {
    len: usize,
    generation: usize,
    active_since: Instant,
    spec: TransitionSpec,
    cards: Vec<CardPresence>,
}

impl StackPresence {
    /// Compose the first generation; every card enters.
    pub fn mount<R: Rng + ?Sized>(
        len: usize,
        active: usize,
        spec: TransitionSpec,
        now: Instant,
        rng: &mut R,
    ) -> Self {
        debug_assert!(active < len);
        let mut presence = Self {
            len,
            generation: active,
            active_since: now,
            spec,
            cards: Vec::with_capacity(len * 2),
        };
        for entry in 0..len {
            let card = presence.entering(entry, active, now, rng);
            presence.cards.push(card);
        }
        presence
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn spec(&self) -> &TransitionSpec {
        &self.spec
    }

    /// Number of cards currently in the render tree, exiting ones included.
    pub fn live_count(&self) -> usize {
        self.cards.len()
    }

    pub fn exiting_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| card.stage == Stage::Exiting)
            .count()
    }

    pub fn keys(&self) -> impl Iterator<Item = CardKey> + '_ {
        self.cards.iter().map(|card| card.key)
    }

    /// Re-derive the stack for a new active index.
    ///
    /// Returns false and leaves everything untouched when `active` is the
    /// generation already shown.
    pub fn recompose<R: Rng + ?Sized>(
        &mut self,
        active: usize,
        now: Instant,
        rng: &mut R,
    ) -> bool {
        debug_assert!(active < self.len);
        if active == self.generation {
            return false;
        }

        for card in &mut self.cards {
            if card.stage == Stage::Exiting {
                continue;
            }
            let current = card.tween.sample(now);
            let exit =
                transform(card.key.entry, active, self.len, Phase::Exit, rng)
                    .holding(&current);
            card.tween = Tween::new(current, exit, now, &self.spec);
            card.stage = Stage::Exiting;
        }

        let mut revived = 0usize;
        for entry in 0..self.len {
            let key = CardKey {
                entry,
                generation: active,
            };
            match self.cards.iter_mut().find(|card| card.key == key) {
                Some(card) => {
                    let rest =
                        transform(entry, active, self.len, Phase::Rest, rng);
                    card.tween = card.tween.retarget(rest, now, &self.spec);
                    card.stage = Stage::Present;
                    revived += 1;
                }
                None => {
                    let card = self.entering(entry, active, now, rng);
                    self.cards.push(card);
                }
            }
        }

        log::debug!(
            "Recomposed card stack {} -> {} ({} revived, {} live)",
            self.generation,
            active,
            revived,
            self.cards.len()
        );
        self.generation = active;
        self.active_since = now;
        true
    }

    /// Drop exiting cards whose exit transition has completed. Returns how
    /// many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.cards.len();
        self.cards.retain(|card| {
            !(card.stage == Stage::Exiting && card.tween.is_finished(now))
        });
        before - self.cards.len()
    }

    /// Whether any card or the active caption still has motion left.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.cards.iter().any(|card| !card.tween.is_finished(now))
            || !caption_settled(&self.spec, self.active_since, now)
    }

    /// Sampled poses of every live card, ordered back to front.
    pub fn frame(&self, now: Instant) -> Vec<CardFrame> {
        let mut frames: Vec<CardFrame> = self
            .cards
            .iter()
            .map(|card| {
                let exiting = card.stage == Stage::Exiting;
                let is_active = !exiting && card.key.entry == self.generation;
                CardFrame {
                    key: card.key,
                    pose: card.tween.sample(now),
                    is_active,
                    exiting,
                    caption: is_active.then(|| {
                        caption_reveal(&self.spec, self.active_since, now)
                    }),
                }
            })
            .collect();
        frames.sort_by(|a, b| {
            a.pose
                .stack_order
                .cmp(&b.pose.stack_order)
                .then(b.exiting.cmp(&a.exiting))
        });
        frames
    }

    fn entering<R: Rng + ?Sized>(
        &self,
        entry: usize,
        active: usize,
        now: Instant,
        rng: &mut R,
    ) -> CardPresence {
        let enter = transform(entry, active, self.len, Phase::Enter, rng);
        let rest = transform(entry, active, self.len, Phase::Rest, rng);
        CardPresence {
            key: CardKey {
                entry,
                generation: active,
            },
            tween: Tween::new(enter, rest, now, &self.spec),
            stage: Stage::Present,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::time::Duration;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::transform::OFFSTAGE_X;

    const LEN: usize = 7;

    fn settle() -> Duration {
        TransitionSpec::default().duration + Duration::from_millis(1)
    }

    #[test]
    fn mount_enters_every_card() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = Instant::now();
        let stack =
            StackPresence::mount(LEN, 0, TransitionSpec::default(), now, &mut rng);
        assert_eq!(stack.live_count(), LEN);
        assert_eq!(stack.exiting_count(), 0);
        assert!(stack.is_animating(now));

        let frames = stack.frame(now);
        assert!(frames.iter().all(|frame| frame.pose.opacity == 0.0));
        let front = frames.last().expect("front card");
        assert_eq!(front.key.entry, 0);
        assert!(front.is_active);
    }

    #[test]
    fn recompose_swaps_the_keyed_set() {
        let mut rng = StdRng::seed_from_u64(2);
        let start = Instant::now();
        let mut stack = StackPresence::mount(
            LEN,
            0,
            TransitionSpec::default(),
            start,
            &mut rng,
        );
        let now = start + settle();
        assert!(stack.recompose(1, now, &mut rng));
        assert_eq!(stack.live_count(), 2 * LEN);
        assert_eq!(stack.exiting_count(), LEN);

        let later = now + settle();
        assert_eq!(stack.prune(later), LEN);
        assert_eq!(stack.live_count(), LEN);
        assert!(stack.keys().all(|key| key.generation == 1));
        assert!(!stack.is_animating(later));
    }

    #[test]
    fn recompose_to_same_index_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(3);
        let now = Instant::now();
        let mut stack =
            StackPresence::mount(LEN, 4, TransitionSpec::default(), now, &mut rng);
        assert!(!stack.recompose(4, now, &mut rng));
        assert_eq!(stack.live_count(), LEN);
    }

    #[test]
    fn exiting_cards_leave_toward_their_side() {
        let mut rng = StdRng::seed_from_u64(4);
        let start = Instant::now();
        let mut stack = StackPresence::mount(
            LEN,
            2,
            TransitionSpec::default(),
            start,
            &mut rng,
        );
        let now = start + settle();
        stack.recompose(3, now, &mut rng);

        let end = now + settle();
        let frames = stack.frame(end);
        let exiting: Vec<_> = frames.iter().filter(|f| f.exiting).collect();
        assert_eq!(exiting.len(), LEN);
        for frame in exiting {
            let expected = if frame.key.entry >= 3 {
                OFFSTAGE_X
            } else {
                -OFFSTAGE_X
            };
            assert_eq!(frame.pose.translate_x, expected, "{:?}", frame.key);
            assert_eq!(frame.pose.opacity, 0.0);
            assert!(!frame.is_active);
            assert!(frame.caption.is_none());
        }
    }

    #[test]
    fn quick_return_revives_instead_of_duplicating() {
        let mut rng = StdRng::seed_from_u64(5);
        let start = Instant::now();
        let mut stack = StackPresence::mount(
            LEN,
            0,
            TransitionSpec::default(),
            start,
            &mut rng,
        );
        let t1 = start + Duration::from_millis(100);
        stack.recompose(1, t1, &mut rng);
        let t2 = t1 + Duration::from_millis(100);
        stack.recompose(0, t2, &mut rng);

        let keys: Vec<_> = stack.keys().collect();
        let unique: HashSet<_> = keys.iter().copied().collect();
        assert_eq!(keys.len(), unique.len());
        assert_eq!(stack.live_count(), 2 * LEN);
        assert_eq!(stack.exiting_count(), LEN);
        assert!(
            stack
                .frame(t2)
                .iter()
                .filter(|f| !f.exiting)
                .all(|f| f.key.generation == 0)
        );
    }

    #[test]
    fn settled_stack_shows_rest_poses() {
        let mut rng = StdRng::seed_from_u64(6);
        let start = Instant::now();
        let stack = StackPresence::mount(
            LEN,
            3,
            TransitionSpec::default(),
            start,
            &mut rng,
        );
        let frames = stack.frame(start + Duration::from_secs(2));
        let front = frames.last().expect("front card");
        assert_eq!(front.pose, TransformDescriptor::ACTIVE);
        assert_eq!(
            front.caption,
            Some(CaptionPose {
                opacity: 1.0,
                offset_y: 0.0
            })
        );
        let orders: Vec<i32> =
            frames.iter().map(|f| f.pose.stack_order).collect();
        assert!(orders.windows(2).all(|w| w[0] <= w[1]));
    }
}
