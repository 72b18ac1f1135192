//! Cardstack player library
//!
//! Application glue for the card-stack carousel: state, messages, update,
//! view and subscriptions, plus the canvas widget that paints the stack.
//! The executable in `src/main.rs` only wires logging and configuration.

pub mod app;
pub mod images;
pub mod message;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
pub mod widgets;

pub use message::Message;
pub use state::{CarouselState, State};
