//! Vertical Button Menu
//!
//! Buttons are stacked downward from the menu origin in the order they are
//! added. That order is also the display order and the hit-test order.

use super::Button;
use crate::surface::Surface;
use crate::text::BitmapFont;
use sdl2::rect::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    origin: Point,
    font: BitmapFont,
    buttons: Vec<Button>,
}

impl Menu {
    pub fn new(origin: Point, font: BitmapFont) -> Self {
        Menu {
            origin,
            font,
            buttons: Vec::new(),
        }
    }

    /// Appends a button one line below the last one
    pub fn add_button(&mut self, label: &str) {
        let y = self.origin.y() + self.buttons.len() as i32 * self.font.line_height() as i32;
        self.buttons
            .push(Button::new(label, self.origin.x(), y, self.font));
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn render(&self, surface: &mut dyn Surface, pointer: Point) -> Result<(), String> {
        for button in &self.buttons {
            button.render(surface, pointer)?;
        }
        Ok(())
    }

    /// First button under `pointer`, in insertion order
    pub fn highlighted_button(&self, pointer: Point) -> Option<&Button> {
        self.buttons
            .iter()
            .find(|button| button.is_highlighted(pointer))
    }
}
