use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// "Next" button or right arrow
    Next,
    /// "Previous" button or left arrow
    Previous,
    /// Dot indicator for the given catalog index
    Select(usize),
    /// Frame-synchronized tick while the stack is animating
    AnimationTick(Instant),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Message::Next => "Carousel::Next",
            Message::Previous => "Carousel::Previous",
            Message::Select(_) => "Carousel::Select",
            Message::AnimationTick(_) => "Carousel::AnimationTick",
        }
    }
}
