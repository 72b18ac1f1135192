use iced::widget::{Canvas, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::state::State;
use crate::theme;
use crate::widgets::{CARD_HEIGHT, CardStack};

const DOT_SIZE: f32 = 12.0;
/// Vertical room above and below the card for resting offsets and tilt.
const STACK_HEADROOM: f32 = 96.0;

pub fn view(state: &State) -> Element<'_, Message> {
    let carousel = &state.carousel;

    let stack = Canvas::new(CardStack::new(
        carousel.frames(),
        carousel.catalog(),
        &state.images,
    ))
    .width(Length::Fill)
    .height(Length::Fixed(CARD_HEIGHT + STACK_HEADROOM));

    let controls = row![
        button(text("← Previous").size(16))
            .on_press(Message::Previous)
            .padding([12, 24])
            .style(theme::pill_button),
        button(text("Next →").size(16))
            .on_press(Message::Next)
            .padding([12, 24])
            .style(theme::pill_button),
    ]
    .spacing(16);

    let dots = carousel.catalog().iter().enumerate().fold(
        row![].spacing(8),
        |dots, (index, _)| {
            dots.push(
                button("")
                    .on_press(Message::Select(index))
                    .width(Length::Fixed(DOT_SIZE))
                    .height(Length::Fixed(DOT_SIZE))
                    .padding(0)
                    .style(theme::dot_button(carousel.active() == index)),
            )
        },
    );

    let content = column![stack, controls, dots]
        .spacing(24)
        .align_x(Alignment::Center);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(32)
        .style(theme::backdrop)
        .into()
}
