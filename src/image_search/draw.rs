//! Marking matches on an output image

use image::RgbaImage;

use super::types::MatchBox;

/// Set the red channel to full along the four edges of a box.
///
/// The top and left edges start at `(row, col)`; the bottom edge sits on row
/// `row + height` and the right edge on column `col + width`. Green, blue and
/// alpha are left as they are. Edge pixels outside the image are skipped.
pub fn draw_box(image: &mut RgbaImage, row: u32, col: u32, width: u32, height: u32) {
    for i in 0..width {
        set_red(image, row, col + i);
        set_red(image, row + height, col + i);
    }
    for i in 0..height {
        set_red(image, row + i, col);
        set_red(image, row + i, col + width);
    }
}

/// Draw every match box onto `image`.
pub fn draw_matches(image: &mut RgbaImage, matches: &[MatchBox]) {
    for m in matches {
        draw_box(image, m.start_row, m.start_col, m.width(), m.height());
    }
}

fn set_red(image: &mut RgbaImage, row: u32, col: u32) {
    if let Some(pixel) = image.get_pixel_mut_checked(col, row) {
        pixel.0[0] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::collections::HashSet;

    const FILL: Rgba<u8> = Rgba([10, 20, 30, 200]);

    #[test]
    fn test_box_touches_only_edge_lines() {
        let mut image = RgbaImage::from_pixel(12, 12, FILL);
        let (row, col, width, height) = (2u32, 3u32, 4u32, 5u32);
        draw_box(&mut image, row, col, width, height);

        let mut edges = HashSet::new();
        for i in 0..width {
            edges.insert((row, col + i));
            edges.insert((row + height, col + i));
        }
        for i in 0..height {
            edges.insert((row + i, col));
            edges.insert((row + i, col + width));
        }

        for (x, y, pixel) in image.enumerate_pixels() {
            if edges.contains(&(y, x)) {
                assert_eq!(*pixel, Rgba([255, 20, 30, 200]), "edge pixel ({y}, {x})");
            } else {
                assert_eq!(*pixel, FILL, "untouched pixel ({y}, {x})");
            }
        }
    }

    #[test]
    fn test_box_is_clipped_at_image_border() {
        let mut image = RgbaImage::from_pixel(4, 4, FILL);
        draw_box(&mut image, 2, 2, 2, 2);

        assert_eq!(image.get_pixel(2, 2).0[0], 255);
        assert_eq!(image.get_pixel(3, 2).0[0], 255);
        assert_eq!(image.get_pixel(2, 3).0[0], 255);
        assert_eq!(image.get_pixel(3, 3).0[0], 10);
    }

    #[test]
    fn test_draw_matches_marks_each_box() {
        let mut image = RgbaImage::from_pixel(10, 10, FILL);
        draw_matches(&mut image, &[MatchBox::new(0, 0, 2, 2), MatchBox::new(5, 5, 2, 2)]);

        assert_eq!(image.get_pixel(0, 0).0[0], 255);
        assert_eq!(image.get_pixel(5, 5).0[0], 255);
        assert_eq!(image.get_pixel(1, 1).0[0], 10);
    }
}
