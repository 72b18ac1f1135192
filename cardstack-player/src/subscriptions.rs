//! Root-level subscription composition

use std::time::{Duration, Instant};

use iced::Subscription;
use iced::keyboard::{self, Key, key::Named};

use crate::message::Message;
use crate::state::State;

/// ~120 FPS, matching the frame pacing used for other UI transitions
const FRAME_INTERVAL: Duration = Duration::from_nanos(8_333_333);

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![arrow_keys()];

    if state.carousel.is_animating(Instant::now()) {
        subscriptions
            .push(iced::time::every(FRAME_INTERVAL).map(Message::AnimationTick));
    }

    Subscription::batch(subscriptions)
}

fn arrow_keys() -> Subscription<Message> {
    keyboard::on_key_press(|key, modifiers| {
        if modifiers.control() || modifiers.alt() || modifiers.logo() {
            return None;
        }
        key_message(&key)
    })
}

/// Keyboard shortcut mapping for the carousel controls.
pub fn key_message(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(Message::Previous),
        Key::Named(Named::ArrowRight) => Some(Message::Next),
        _ => None,
    }
}
