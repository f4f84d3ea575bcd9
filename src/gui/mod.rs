//! Screen-Space GUI
//!
//! Pointer-driven widgets drawn at fixed screen positions.
//!
//! # Available Components
//!
//! - [`Button`] - Text label that highlights under the pointer
//! - [`Menu`] - Vertical stack of buttons with first-hit resolution
//!
//! # Example Usage
//!
//! ```ignore
//! use animosity::gui::Menu;
//!
//! let mut menu = Menu::new(Point::new(100, 100), BitmapFont::new(3));
//! menu.add_button("Options");
//!
//! menu.render(&mut canvas, pointer)?;
//!
//! if let Some(button) = menu.highlighted_button(pointer) {
//!     println!("{} is under the pointer", button.label());
//! }
//! ```

pub mod button;
pub mod menu;

pub use button::{hit_test, Button};
pub use menu::Menu;
