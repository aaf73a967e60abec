//! Bitmap glyph drawing backed by the public-domain `font8x8` set.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgba, RgbaImage};

/// Bitmap size of every `font8x8` glyph, in pixels per side.
const BITMAP_SIZE: f32 = 8.0;

/// 8x8 bitmap for `c`, or `None` for characters the font lacks.
///
/// Each row is a byte whose least significant bit is the leftmost pixel.
pub fn bitmap(c: char) -> Option<[u8; 8]> {
    BASIC_FONTS.get(c)
}

/// Draw `c` with its top-left corner at `(x, y)`.
///
/// The 8x8 bitmap is stretched nearest-neighbour into a `cell_width` x
/// `cell_height` box. Only set bits are painted; pixels outside the image
/// are clipped. Returns the number of pixels written.
pub fn draw_glyph(
    image: &mut RgbaImage,
    c: char,
    x: f32,
    y: f32,
    cell_width: f32,
    cell_height: f32,
    color: Rgba<u8>,
) -> usize {
    let Some(rows) = bitmap(c) else {
        return 0;
    };
    if cell_width <= 0.0 || cell_height <= 0.0 {
        return 0;
    }

    let (img_w, img_h) = image.dimensions();
    let x0 = x.floor().max(0.0) as u32;
    let y0 = y.floor().max(0.0) as u32;
    let x1 = ((x + cell_width).ceil() as u32).min(img_w);
    let y1 = ((y + cell_height).ceil() as u32).min(img_h);

    let mut painted = 0;
    for py in y0..y1 {
        // sample at pixel centers
        let v = (py as f32 + 0.5 - y) / cell_height;
        if !(0.0..1.0).contains(&v) {
            continue;
        }
        let bits = rows[(v * BITMAP_SIZE) as usize];
        if bits == 0 {
            continue;
        }
        for px in x0..x1 {
            let u = (px as f32 + 0.5 - x) / cell_width;
            if !(0.0..1.0).contains(&u) {
                continue;
            }
            let col = (u * BITMAP_SIZE) as u32;
            if (bits >> col) & 1 == 1 {
                image.put_pixel(px, py, color);
                painted += 1;
            }
        }
    }

    painted
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const FG: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn count_fg(image: &RgbaImage) -> usize {
        image.pixels().filter(|p| **p == FG).count()
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut image = RgbaImage::from_pixel(8, 8, BG);
        assert_eq!(draw_glyph(&mut image, ' ', 0.0, 0.0, 8.0, 8.0, FG), 0);
        assert_eq!(count_fg(&image), 0);
    }

    #[test]
    fn test_native_size_matches_bitmap() {
        let rows = bitmap('@').unwrap();
        let expected: u32 = rows.iter().map(|r| r.count_ones()).sum();

        let mut image = RgbaImage::from_pixel(8, 8, BG);
        let painted = draw_glyph(&mut image, '@', 0.0, 0.0, 8.0, 8.0, FG);
        assert_eq!(painted, expected as usize);
        assert_eq!(count_fg(&image), expected as usize);

        for (row, bits) in rows.iter().enumerate() {
            for col in 0..8u32 {
                let set = (bits >> col) & 1 == 1;
                assert_eq!(*image.get_pixel(col, row as u32) == FG, set);
            }
        }
    }

    #[test]
    fn test_clipped_at_edges() {
        let mut image = RgbaImage::from_pixel(3, 3, BG);
        // Mostly outside the canvas; must not panic.
        draw_glyph(&mut image, '#', 1.5, 1.5, 4.8, 8.0, FG);
        draw_glyph(&mut image, '#', 10.0, 10.0, 4.8, 8.0, FG);
    }

    #[test]
    fn test_stays_inside_cell() {
        let mut image = RgbaImage::from_pixel(20, 20, BG);
        draw_glyph(&mut image, '@', 4.8, 6.4, 4.8, 8.0, FG);
        for (px, py, p) in image.enumerate_pixels() {
            if *p == FG {
                assert!((4..10).contains(&px), "x {} outside cell", px);
                assert!((6..15).contains(&py), "y {} outside cell", py);
            }
        }
        assert!(count_fg(&image) > 0);
    }

    #[test]
    fn test_unknown_char_draws_nothing() {
        let mut image = RgbaImage::from_pixel(8, 8, BG);
        assert_eq!(draw_glyph(&mut image, '\u{1F600}', 0.0, 0.0, 8.0, 8.0, FG), 0);
    }
}
