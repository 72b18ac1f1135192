//! Canvas-based card stack
//!
//! Paints the frames produced by the presence tracker back to front. Each
//! card is drawn in its own saved frame: translated to the stack center plus
//! its offset, rotated by its tilt, then scaled.

use cardstack_core::{CaptionPose, CardFrame, Catalog, TransformDescriptor};
use iced::advanced::graphics::core::Image;
use iced::font::Weight;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke, Text};
use iced::{
    Color, Degrees, Font, Pixels, Point, Radians, Rectangle, Renderer, Size,
    Theme, Vector, mouse,
};

use crate::images::CardImages;
use crate::theme::CardStackTheme;

pub const CARD_WIDTH: f32 = 320.0;
pub const CARD_HEIGHT: f32 = 384.0;
const CARD_RADIUS: f32 = 12.0;
const BORDER_WIDTH: f32 = 4.0;
const CAPTION_HEIGHT: f32 = 88.0;
const CAPTION_PADDING: f32 = 16.0;

/// Canvas program for one render of the stack.
#[derive(Debug)]
pub struct CardStack<'a> {
    frames: Vec<CardFrame>,
    catalog: &'a Catalog,
    images: &'a CardImages,
}

impl<'a> CardStack<'a> {
    pub fn new(
        frames: Vec<CardFrame>,
        catalog: &'a Catalog,
        images: &'a CardImages,
    ) -> Self {
        Self {
            frames,
            catalog,
            images,
        }
    }

    fn draw_card(&self, frame: &mut Frame, center: Point, card: &CardFrame) {
        let Some(entry) = self.catalog.get(card.key.entry) else {
            return;
        };
        let pose = card.pose;
        if pose.opacity <= 0.0 {
            return;
        }

        frame.with_save(|frame| {
            frame.translate(Vector::new(
                center.x + pose.translate_x,
                center.y + pose.translate_y,
            ));
            frame.rotate(Radians::from(Degrees(pose.rotation_deg)));
            frame.scale(pose.scale);

            let top_left = Point::new(-CARD_WIDTH / 2.0, -CARD_HEIGHT / 2.0);
            let size = Size::new(CARD_WIDTH, CARD_HEIGHT);
            let outline = Path::rounded_rectangle(top_left, size, CARD_RADIUS.into());

            match self.images.get(card.key.entry) {
                Some(handle) => frame.draw_image(
                    Rectangle::new(top_left, size),
                    Image::new(handle.clone()).opacity(pose.opacity),
                ),
                None => frame.fill(
                    &outline,
                    faded(CardStackTheme::placeholder(card.key.entry), pose.opacity),
                ),
            }

            let border = if card.is_active {
                CardStackTheme::BORDER_ACTIVE
            } else {
                CardStackTheme::BORDER_INACTIVE
            };
            frame.stroke(
                &outline,
                Stroke::default()
                    .with_width(BORDER_WIDTH)
                    .with_color(faded(border, pose.opacity)),
            );

            if let Some(caption) = card.caption {
                draw_caption(frame, entry.name, entry.scientific_name, &pose, caption);
            }
        });
    }
}

impl<Message> Program<Message, Theme, Renderer> for CardStack<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);

        for card in &self.frames {
            self.draw_card(&mut frame, center, card);
        }

        vec![frame.into_geometry()]
    }
}

fn draw_caption(
    frame: &mut Frame,
    name: &str,
    scientific_name: &str,
    pose: &TransformDescriptor,
    caption: CaptionPose,
) {
    let alpha = caption.opacity * pose.opacity;
    if alpha <= 0.0 {
        return;
    }

    let top = CARD_HEIGHT / 2.0 - CAPTION_HEIGHT + caption.offset_y;
    let left = -CARD_WIDTH / 2.0;
    let backdrop = Path::rounded_rectangle(
        Point::new(left, top),
        Size::new(CARD_WIDTH, CAPTION_HEIGHT - caption.offset_y),
        CARD_RADIUS.into(),
    );
    frame.fill(&backdrop, Color::from_rgba(0.0, 0.0, 0.0, 0.6 * alpha));

    frame.fill_text(Text {
        content: name.to_string(),
        position: Point::new(left + CAPTION_PADDING, top + CAPTION_PADDING),
        color: faded(CardStackTheme::TEXT_PRIMARY, alpha),
        size: Pixels(20.0),
        font: Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        },
        ..Text::default()
    });
    frame.fill_text(Text {
        content: scientific_name.to_string(),
        position: Point::new(left + CAPTION_PADDING, top + CAPTION_PADDING + 28.0),
        color: faded(CardStackTheme::TEXT_SECONDARY, alpha),
        size: Pixels(14.0),
        font: Font {
            style: iced::font::Style::Italic,
            ..Font::DEFAULT
        },
        ..Text::default()
    });
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faded_scales_alpha_only() {
        let color = faded(Color::from_rgba(0.2, 0.4, 0.6, 0.5), 0.5);
        assert_eq!(color.r, 0.2);
        assert_eq!(color.a, 0.25);
        assert_eq!(faded(Color::WHITE, 3.0).a, 1.0);
    }
}
