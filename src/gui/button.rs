//! Clickable Text Button

use crate::surface::{Surface, GRAY, WHITE};
use crate::text::BitmapFont;
use sdl2::rect::{Point, Rect};

/// Returns true if `pointer` lies inside `rect`
///
/// Top and left edges are inside, bottom and right edges are outside, so two
/// rectangles that share an edge never both claim a point on it.
pub fn hit_test(rect: Rect, pointer: Point) -> bool {
    rect.contains_point(pointer)
}

/// A text label that highlights while the pointer is over it
///
/// The clickable region is the measured extent of the label, anchored at the
/// button's position. Hover is never stored; it is worked out from the
/// pointer position whenever it is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    label: String,
    rect: Rect,
    font: BitmapFont,
}

impl Button {
    pub fn new(label: &str, x: i32, y: i32, font: BitmapFont) -> Self {
        let (width, height) = font.measure(label);
        Button {
            label: label.to_string(),
            rect: Rect::new(x, y, width, height),
            font,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_highlighted(&self, pointer: Point) -> bool {
        hit_test(self.rect, pointer)
    }

    /// Draws the label, gray when hovered and white otherwise
    pub fn render(&self, surface: &mut dyn Surface, pointer: Point) -> Result<(), String> {
        let color = if self.is_highlighted(pointer) { GRAY } else { WHITE };
        surface.draw_text(&self.label, self.rect.x(), self.rect.y(), color, &self.font)
    }
}
