//! Application Modes
//!
//! A mode is a whole screen of the application: it draws itself and decides
//! what happens next for every input event. Exactly one mode is current at a
//! time. Handling an event never mutates the current mode; it yields a
//! [`Transition`] that either keeps it, replaces it, or ends the application.
//!
//! - `main_menu.rs`: start screen with the three-button menu
//! - `game.rs`: table with two face-up cards

pub mod game;
pub mod main_menu;

pub use game::Game;
pub use main_menu::{MainMenu, MainMenuOption};

use crate::input::InputEvent;
use crate::surface::Surface;
use sdl2::rect::Point;

/// Outcome of handling one input event
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Keep the current mode as it is
    Stay,
    /// Discard the current mode and continue with a new one
    Switch(Mode),
    /// Shut the application down
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    MainMenu(MainMenu),
    Game(Game),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::MainMenu(_) => "main menu",
            Mode::Game(_) => "game",
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, pointer: Point) -> Result<(), String> {
        match self {
            Mode::MainMenu(menu) => menu.render(surface, pointer),
            Mode::Game(game) => game.render(surface, pointer),
        }
    }

    pub fn handle_event(&self, event: &InputEvent) -> Transition {
        match self {
            Mode::MainMenu(menu) => menu.handle_event(event),
            Mode::Game(game) => game.handle_event(event),
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::MainMenu(MainMenu::new())
    }
}
