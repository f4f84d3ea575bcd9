//! Bitmap Font
//!
//! Procedural 5x7 font. Each glyph is drawn as a grid of filled squares, so
//! text needs no font asset and its extent is known without a renderer.

use sdl2::rect::Rect;

/// Glyph columns, not counting the spacing column
const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// Horizontal advance per character, in unscaled pixels
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Vertical advance per line, in unscaled pixels
const LINE_HEIGHT: u32 = GLYPH_HEIGHT + 1;

/// A 5x7 bitmap font drawn at an integer scale
///
/// Scale 3 gives 18x24 pixel cells, scale 2 gives 12x16.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    pub fn new(scale: u32) -> Self {
        BitmapFont { scale: scale.max(1) }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Distance between the tops of two consecutive lines
    pub fn line_height(&self) -> u32 {
        LINE_HEIGHT * self.scale
    }

    /// Size of the box `text` occupies when drawn: one advance per character
    /// wide and one line high
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let chars = text.chars().count() as u32;
        (chars * ADVANCE * self.scale, self.line_height())
    }

    /// Squares to fill to draw `text` with its top-left corner at (x, y)
    pub fn pixels(&self, text: &str, x: i32, y: i32) -> Vec<Rect> {
        let pixel_size = self.scale as i32;
        let advance = (ADVANCE * self.scale) as i32;
        let mut pixels = Vec::new();

        for (i, c) in text.chars().enumerate() {
            let char_x = x + i as i32 * advance;

            for (row, &pattern_row) in glyph(c).iter().enumerate() {
                for col in 0..GLYPH_WIDTH as i32 {
                    if (pattern_row >> (GLYPH_WIDTH as i32 - 1 - col)) & 1 == 1 {
                        pixels.push(Rect::new(
                            char_x + col * pixel_size,
                            y + row as i32 * pixel_size,
                            self.scale,
                            self.scale,
                        ));
                    }
                }
            }
        }

        pixels
    }
}

/// Row patterns for `c`, most significant bit on the left
///
/// Letters are case-insensitive; unknown characters draw as a full block.
fn glyph(c: char) -> [u8; GLYPH_HEIGHT as usize] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => [0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure() {
        let font = BitmapFont::new(3);
        assert_eq!(font.measure("Exit"), (72, 24));
        assert_eq!(font.measure(""), (0, 24));
        assert_eq!(font.line_height(), 24);
    }

    #[test]
    fn test_zero_scale_clamped() {
        assert_eq!(BitmapFont::new(0).scale(), 1);
    }

    #[test]
    fn test_space_draws_nothing() {
        let font = BitmapFont::new(2);
        assert!(font.pixels("   ", 0, 0).is_empty());
    }

    #[test]
    fn test_pixels_stay_inside_measured_box() {
        let font = BitmapFont::new(2);
        let (width, height) = font.measure("Start new game");
        let bounds = Rect::new(100, 100, width, height);

        let pixels = font.pixels("Start new game", 100, 100);
        assert!(!pixels.is_empty());
        for pixel in pixels {
            assert!(bounds.contains_rect(pixel), "{:?} outside {:?}", pixel, bounds);
        }
    }

    #[test]
    fn test_glyph_one() {
        // '1' has a single pixel in its top row, in the middle column
        let font = BitmapFont::new(1);
        let top_row: Vec<Rect> = font
            .pixels("1", 0, 0)
            .into_iter()
            .filter(|p| p.y() == 0)
            .collect();
        assert_eq!(top_row, vec![Rect::new(2, 0, 1, 1)]);
    }
}
