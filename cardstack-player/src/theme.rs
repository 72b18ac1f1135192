use iced::widget::{button, container};
use iced::{Background, Border, Color, Radians, Shadow, Theme, Vector, theme};

/// Warm amber/orange palette for the carousel window
#[derive(Debug, Clone, Copy)]
pub struct CardStackTheme;

impl CardStackTheme {
    // Backdrop gradient
    pub const AMBER_100: Color = Color::from_rgb(0.996, 0.953, 0.780); // #FEF3C7
    pub const ORANGE_200: Color = Color::from_rgb(0.996, 0.843, 0.667); // #FED7AA

    // Accents
    pub const ORANGE_500: Color = Color::from_rgb(0.976, 0.451, 0.086); // #F97316
    pub const ORANGE_600: Color = Color::from_rgb(0.918, 0.345, 0.047); // #EA580C

    // Card borders
    pub const BORDER_ACTIVE: Color = Color::WHITE;
    pub const BORDER_INACTIVE: Color = Color::from_rgb(0.898, 0.906, 0.922); // #E5E7EB

    // Caption text
    pub const TEXT_PRIMARY: Color = Color::WHITE;
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.898, 0.906, 0.922);

    /// Placeholder fills for cards without a local image, cycled by index
    pub const PLACEHOLDERS: [Color; 7] = [
        Color::from_rgb(0.839, 0.490, 0.180),
        Color::from_rgb(0.757, 0.604, 0.361),
        Color::from_rgb(0.667, 0.553, 0.365),
        Color::from_rgb(0.478, 0.376, 0.259),
        Color::from_rgb(0.780, 0.788, 0.800),
        Color::from_rgb(0.820, 0.690, 0.431),
        Color::from_rgb(0.584, 0.486, 0.400),
    ];

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::AMBER_100;
        palette.primary = Self::ORANGE_500;
        palette.text = Color::from_rgb(0.2, 0.13, 0.05);

        Theme::custom("Cardstack Amber", palette)
    }

    pub fn placeholder(index: usize) -> Color {
        Self::PLACEHOLDERS[index % Self::PLACEHOLDERS.len()]
    }
}

/// Diagonal amber-to-orange page background
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(
            iced::gradient::Linear::new(Radians(3.0 * std::f32::consts::PI / 4.0))
                .add_stop(0.0, CardStackTheme::AMBER_100)
                .add_stop(1.0, CardStackTheme::ORANGE_200)
                .into(),
        )),
        ..Default::default()
    }
}

/// Rounded orange pill used by the previous/next controls
pub fn pill_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            CardStackTheme::ORANGE_600
        }
        _ => CardStackTheme::ORANGE_500,
    };
    button::Style {
        background: Some(background.into()),
        text_color: Color::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Indicator dot; filled orange when it marks the active card
pub fn dot_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let color = match (active, status) {
            (true, _) => CardStackTheme::ORANGE_500,
            (false, button::Status::Hovered) => Color {
                a: 0.8,
                ..CardStackTheme::ORANGE_500
            },
            (false, _) => CardStackTheme::ORANGE_200,
        };
        button::Style {
            background: Some(color.into()),
            border: Border {
                radius: 999.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
