//! animosity
//!
//! Card game shell: a main menu that leads to a table with two cards.
//! See [`app`] for the frame loop and [`mode`] for the screens it drives.

pub mod app;
pub mod card;
pub mod error;
pub mod frame_limiter;
pub mod gui;
pub mod input;
pub mod mode;
pub mod settings;
pub mod surface;
pub mod text;
