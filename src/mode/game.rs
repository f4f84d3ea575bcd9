//! Game Mode
//!
//! The card table. Two cards are dealt face up at fixed positions; there is no
//! gameplay yet, so every event leaves the table unchanged and only a quit
//! request ends the mode.

use super::Transition;
use crate::card::Card;
use crate::input::InputEvent;
use crate::surface::Surface;
use sdl2::rect::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    cards: [Card; 2],
}

impl Game {
    pub fn new() -> Self {
        Game {
            cards: [Card::new(10, 20, 10), Card::new(200, 20, 9)],
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn render(&self, surface: &mut dyn Surface, pointer: Point) -> Result<(), String> {
        for card in &self.cards {
            card.render(surface, pointer)?;
        }
        Ok(())
    }

    pub fn handle_event(&self, _event: &InputEvent) -> Transition {
        Transition::Stay
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
