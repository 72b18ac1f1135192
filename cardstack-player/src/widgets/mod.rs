pub mod card_stack;

pub use card_stack::{CARD_HEIGHT, CARD_WIDTH, CardStack};
