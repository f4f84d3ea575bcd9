//! Drawing Surface
//!
//! Everything on screen is drawn through the [`Surface`] trait. The window
//! canvas implements it for the running game, and tests substitute a
//! recording surface so rendering can be checked without opening a window.

use crate::text::BitmapFont;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const BLACK: Color = Color::RGB(0, 0, 0);
pub const WHITE: Color = Color::RGB(255, 255, 255);
pub const GRAY: Color = Color::RGB(125, 125, 125);

/// 2D drawing capabilities used by modes, menus and cards
///
/// Methods return SDL2-style `String` errors; the application loop turns them
/// into [`AppError::Render`](crate::error::AppError::Render).
pub trait Surface {
    /// Fills the whole surface with `color`
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Draws a 1-pixel outline just inside `rect`
    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Draws `text` with its top-left corner at (x, y)
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        font: &BitmapFont,
    ) -> Result<(), String> {
        for pixel in font.pixels(text, x, y) {
            self.fill_rect(pixel, color)?;
        }
        Ok(())
    }

    /// Shows everything drawn since the last clear
    fn present(&mut self);
}

impl Surface for Canvas<Window> {
    fn clear(&mut self, color: Color) {
        self.set_draw_color(color);
        Canvas::clear(self);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        Canvas::fill_rect(self, rect)
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        Canvas::draw_rect(self, rect)
    }

    fn present(&mut self) {
        Canvas::present(self);
    }
}

#[cfg(test)]
pub mod testing {
    //! In-memory surface for tests

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear(Color),
        Fill(Rect, Color),
        Outline(Rect, Color),
        Text { text: String, x: i32, y: i32, color: Color },
        Present,
    }

    /// Records every call instead of drawing
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        /// Text draw calls as (text, x, y, color)
        pub fn texts(&self) -> Vec<(String, i32, i32, Color)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Text { text, x, y, color } => Some((text.clone(), *x, *y, *color)),
                    _ => None,
                })
                .collect()
        }

        pub fn outlines(&self) -> Vec<(Rect, Color)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Outline(rect, color) => Some((*rect, *color)),
                    _ => None,
                })
                .collect()
        }

        pub fn presented(&self) -> bool {
            self.calls.contains(&DrawCall::Present)
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, color: Color) {
            self.calls.push(DrawCall::Clear(color));
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
            self.calls.push(DrawCall::Fill(rect, color));
            Ok(())
        }

        fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
            self.calls.push(DrawCall::Outline(rect, color));
            Ok(())
        }

        fn draw_text(
            &mut self,
            text: &str,
            x: i32,
            y: i32,
            color: Color,
            _font: &BitmapFont,
        ) -> Result<(), String> {
            self.calls.push(DrawCall::Text {
                text: text.to_string(),
                x,
                y,
                color,
            });
            Ok(())
        }

        fn present(&mut self) {
            self.calls.push(DrawCall::Present);
        }
    }

    /// Surface whose drawing calls always fail
    pub struct FailingSurface;

    impl Surface for FailingSurface {
        fn clear(&mut self, _color: Color) {}

        fn fill_rect(&mut self, _rect: Rect, _color: Color) -> Result<(), String> {
            Err("fill_rect failed".to_string())
        }

        fn draw_rect(&mut self, _rect: Rect, _color: Color) -> Result<(), String> {
            Err("draw_rect failed".to_string())
        }

        fn present(&mut self) {}
    }

    #[test]
    fn test_default_draw_text_fills_glyph_pixels() {
        struct Fills(Vec<Rect>);

        impl Surface for Fills {
            fn clear(&mut self, _color: Color) {}
            fn fill_rect(&mut self, rect: Rect, _color: Color) -> Result<(), String> {
                self.0.push(rect);
                Ok(())
            }
            fn draw_rect(&mut self, _rect: Rect, _color: Color) -> Result<(), String> {
                Ok(())
            }
            fn present(&mut self) {}
        }

        let font = BitmapFont::new(2);
        let mut surface = Fills(Vec::new());
        surface.draw_text("9", 5, 5, WHITE, &font).unwrap();
        assert_eq!(surface.0, font.pixels("9", 5, 5));
    }
}
