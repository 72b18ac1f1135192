//! # Cardstack Core
//!
//! UI-independent model for the card-stack carousel: the catalog of entries,
//! the cyclic navigation state machine, and the stack-position transform
//! model that the player animates.
//!
//! ## Overview
//!
//! - [`navigation`]: owns the active index and its cyclic advance/retreat/select
//! - [`transform`]: pure derivation of per-card enter/rest/exit descriptors
//! - [`jitter`]: rounded uniform rotation jitter
//! - [`motion`]: easing functions, tweens and the caption reveal
//! - [`presence`]: keyed enter/exit bookkeeping between descriptor sets
//!
//! Nothing in this crate reads a clock or spawns work. Time is passed in as
//! [`std::time::Instant`] and randomness as a [`rand::Rng`], which keeps the
//! whole model deterministic under test.
//!
//! ## Examples
//!
//! ```
//! use cardstack_core::{Navigator, Phase, transform};
//!
//! let mut nav = Navigator::new(7).unwrap();
//! nav.retreat();
//! assert_eq!(nav.active(), 6);
//!
//! let mut rng = rand::rng();
//! let rest = transform(6, nav.active(), nav.len(), Phase::Rest, &mut rng);
//! assert_eq!(rest.stack_order, 100);
//! ```

pub mod catalog;
pub mod error;
pub mod jitter;
pub mod motion;
pub mod navigation;
pub mod presence;
pub mod transform;

pub use catalog::{Catalog, CatalogEntry};
pub use error::{CoreError, Result};
pub use jitter::{ENTER_JITTER, JitterRange, REST_JITTER, jitter};
pub use motion::{
    CaptionPose, EasingFunction, TransitionSpec, Tween, caption_reveal,
};
pub use navigation::{Direction, Navigator};
pub use presence::{CardFrame, CardKey, StackPresence};
pub use transform::{CardTransforms, Phase, TransformDescriptor, transform};
