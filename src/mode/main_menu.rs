//! Main Menu Mode
//!
//! Start screen with three options stacked at (100, 100):
//! - Start new game: switches to the game table
//! - Options: not wired to anything yet, clicking it does nothing
//! - Exit: quits the application

use super::{Game, Mode, Transition};
use crate::gui::Menu;
use crate::input::InputEvent;
use crate::surface::Surface;
use crate::text::BitmapFont;
use sdl2::rect::Point;

const MENU_X: i32 = 100;
const MENU_Y: i32 = 100;
const MENU_FONT_SCALE: u32 = 3;

/// Options in the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuOption {
    StartNewGame,
    Options,
    Exit,
}

impl MainMenuOption {
    pub fn all() -> [Self; 3] {
        [Self::StartNewGame, Self::Options, Self::Exit]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::StartNewGame => "Start new game",
            Self::Options => "Options",
            Self::Exit => "Exit",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|option| option.label() == label)
    }
}

/// Wrapper around [`Menu`] that maps clicks to [`MainMenuOption`]s
#[derive(Debug, Clone, PartialEq)]
pub struct MainMenu {
    menu: Menu,
}

impl MainMenu {
    pub fn new() -> Self {
        let mut menu = Menu::new(Point::new(MENU_X, MENU_Y), BitmapFont::new(MENU_FONT_SCALE));
        for option in MainMenuOption::all() {
            menu.add_button(option.label());
        }

        MainMenu { menu }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Option under `pointer`, if any
    pub fn option_at(&self, pointer: Point) -> Option<MainMenuOption> {
        self.menu
            .highlighted_button(pointer)
            .and_then(|button| MainMenuOption::from_label(button.label()))
    }

    pub fn render(&self, surface: &mut dyn Surface, pointer: Point) -> Result<(), String> {
        self.menu.render(surface, pointer)
    }

    pub fn handle_event(&self, event: &InputEvent) -> Transition {
        let InputEvent::PointerPress { x, y } = *event else {
            return Transition::Stay;
        };

        match self.option_at(Point::new(x, y)) {
            Some(MainMenuOption::StartNewGame) => Transition::Switch(Mode::Game(Game::new())),
            Some(MainMenuOption::Exit) => Transition::Exit,
            Some(MainMenuOption::Options) | None => Transition::Stay,
        }
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}
