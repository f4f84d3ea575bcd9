use crate::gui::hit_test;
use crate::surface::{Surface, BLACK, GRAY, WHITE};
use crate::text::BitmapFont;
use sdl2::rect::{Point, Rect};

pub const CARD_WIDTH: u32 = 40;
pub const CARD_HEIGHT: u32 = 90;

/// A face-up playing card showing a number
///
/// Purely visual: black face, 1-pixel border and a numeric label. The border
/// and label turn gray while the pointer is over the card.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    x: i32,
    y: i32,
    value: i32,
    font: BitmapFont,
}

impl Card {
    pub fn new(x: i32, y: i32, value: i32) -> Self {
        Card {
            x,
            y,
            value,
            font: BitmapFont::new(2),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, CARD_WIDTH, CARD_HEIGHT)
    }

    /// Top-left corner of the value label
    ///
    /// Two-digit values start a third of the way across, single digits a
    /// quarter, which keeps both roughly centered.
    pub fn label_position(&self) -> Point {
        let divisor = if self.value > 9 { 3 } else { 4 };
        Point::new(
            self.x + CARD_WIDTH as i32 / divisor,
            self.y + CARD_HEIGHT as i32 / 3,
        )
    }

    pub fn render(&self, surface: &mut dyn Surface, pointer: Point) -> Result<(), String> {
        let rect = self.rect();
        let color = if hit_test(rect, pointer) { GRAY } else { WHITE };

        surface.fill_rect(rect, BLACK)?;
        surface.draw_rect(rect, color)?;

        let label = self.label_position();
        surface.draw_text(&self.value.to_string(), label.x(), label.y(), color, &self.font)
    }
}
