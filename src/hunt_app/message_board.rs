///! The persistent text surface announcing the goal and the win.
///! One message is shown at a time, `draw_message` repaints the whole
///! surface and nothing of the previous content shows through.

use super::config::MessageStyle;

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    pub color: [u8; 4],
    pub font_size: f32,
}

#[derive(Debug, Default)]
pub struct MessageBoard {
    message: Option<Message>,
    revision: u64,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the surface content. The previous message is gone entirely.
    pub fn draw_message(&mut self, text: &str, color: [u8; 4], font_size: f32) {
        self.message = Some(Message {
            text: text.to_string(),
            color,
            font_size,
        });
        self.revision += 1;
    }

    pub fn draw_styled(&mut self, style: &MessageStyle) {
        self.draw_message(&style.text, style.color, style.font_size);
    }

    pub fn clear(&mut self) {
        if self.message.take().is_some() {
            self.revision += 1;
        }
    }

    pub fn current(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Bumped on every repaint, so observers can tell apart two identical draws.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_message_replaces_the_surface() {
        let mut board = MessageBoard::new();
        board.draw_message("Find all the golden spheres!", [255, 255, 255, 255], 80.0);
        board.draw_message("YOU WIN!", [255, 255, 255, 255], 120.0);

        let message = board.current().unwrap();
        assert_eq!(message.text, "YOU WIN!");
        assert_eq!(message.font_size, 120.0);
    }

    #[test]
    fn every_draw_bumps_the_revision() {
        let mut board = MessageBoard::new();
        let initial = board.revision();
        board.draw_message("same", [255, 255, 255, 255], 80.0);
        board.draw_message("same", [255, 255, 255, 255], 80.0);
        assert_eq!(board.revision(), initial + 2);
    }

    #[test]
    fn clear_removes_message_once() {
        let mut board = MessageBoard::new();
        board.draw_message("gone soon", [255, 255, 255, 255], 80.0);
        let after_draw = board.revision();

        board.clear();
        assert!(board.current().is_none());
        assert_eq!(board.revision(), after_draw + 1);

        board.clear();
        assert_eq!(board.revision(), after_draw + 1);
    }

    #[test]
    fn draw_styled_takes_the_configured_style() {
        let style = MessageStyle {
            text: "YOU WIN!".to_string(),
            color: [255, 255, 255, 255],
            font_size: 120.0,
        };
        let mut board = MessageBoard::new();
        board.draw_styled(&style);

        let message = board.current().unwrap();
        assert_eq!(message.text, style.text);
        assert_eq!(message.color, style.color);
        assert_eq!(message.font_size, style.font_size);
    }
}
