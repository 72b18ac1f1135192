use std::time::Instant;

use cardstack_core::Direction;
use iced::Task;

use crate::message::Message;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    if !matches!(message, Message::AnimationTick(_)) {
        log::debug!("Handling {}", message.name());
    }

    let mut rng = rand::rng();
    match message {
        Message::Next => {
            state
                .carousel
                .step(Direction::Next, Instant::now(), &mut rng);
        }
        Message::Previous => {
            state
                .carousel
                .step(Direction::Previous, Instant::now(), &mut rng);
        }
        Message::Select(index) => {
            if let Err(err) =
                state.carousel.select(index, Instant::now(), &mut rng)
            {
                log::warn!("Ignoring dot selection: {err}");
            }
        }
        Message::AnimationTick(now) => state.carousel.tick(now),
    }

    Task::none()
}
