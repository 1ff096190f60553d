//! Per-pixel classification of a candidate window

use image::RgbaImage;

use super::types::{Pixel, Tally, pixel_at};

/// True when every RGB channel differs by strictly less than `tolerance`.
///
/// Alpha is ignored. A tolerance of 0 is never satisfied.
#[inline]
pub fn is_close_enough(pixel: Pixel, reference: Pixel, tolerance: u32) -> bool {
    let close = |a: u8, b: u8| u32::from(a.abs_diff(b)) < tolerance;
    close(pixel.red, reference.red)
        && close(pixel.green, reference.green)
        && close(pixel.blue, reference.blue)
}

/// Classify every mask position of the window at `(start_row, start_col)`.
///
/// Black mask pixels match when the main pixel is close to `background`;
/// any other mask pixel matches when it is *not* close to it.
pub fn evaluate_window(
    main_image: &RgbaImage,
    mask: &RgbaImage,
    start_row: u32,
    start_col: u32,
    background: Pixel,
    tolerance: u32,
) -> Tally {
    let mut tally = Tally::default();

    for m_row in 0..mask.height() {
        for m_col in 0..mask.width() {
            let pixel = pixel_at(main_image, start_row + m_row, start_col + m_col);
            let close = is_close_enough(pixel, background, tolerance);
            let matched = if pixel_at(mask, m_row, m_col).is_black() {
                close
            } else {
                !close
            };

            if matched {
                tally.match_count += 1;
            } else {
                tally.mismatch_count += 1;
            }
        }
    }

    tally
}

/// Compare the window directly against a literal search image.
pub fn evaluate_window_direct(
    main_image: &RgbaImage,
    search: &RgbaImage,
    start_row: u32,
    start_col: u32,
    tolerance: u32,
) -> Tally {
    let mut tally = Tally::default();

    for s_row in 0..search.height() {
        for s_col in 0..search.width() {
            let pixel = pixel_at(main_image, start_row + s_row, start_col + s_col);
            if is_close_enough(pixel, pixel_at(search, s_row, s_col), tolerance) {
                tally.match_count += 1;
            } else {
                tally.mismatch_count += 1;
            }
        }
    }

    tally
}
