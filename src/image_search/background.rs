//! Background colour estimation for a candidate window

use image::RgbaImage;

use super::types::{Pixel, pixel_at};

/// Average RGB of the main-image pixels sitting under black mask pixels.
///
/// Only the `mask_height x mask_width` top-left part of the mask is read. Channels
/// are integer averages truncated toward zero; alpha is always 0. A mask with no
/// black pixels yields all-zero channels.
pub fn estimate_background(
    main_image: &RgbaImage,
    mask: &RgbaImage,
    start_row: u32,
    start_col: u32,
    mask_height: u32,
    mask_width: u32,
) -> Pixel {
    let (mut red, mut green, mut blue, mut count) = (0u64, 0u64, 0u64, 0u64);

    for m_row in 0..mask_height {
        for m_col in 0..mask_width {
            if !pixel_at(mask, m_row, m_col).is_black() {
                continue;
            }
            let pixel = pixel_at(main_image, start_row + m_row, start_col + m_col);
            red += u64::from(pixel.red);
            green += u64::from(pixel.green);
            blue += u64::from(pixel.blue);
            count += 1;
        }
    }

    if count == 0 {
        return Pixel::new(0, 0, 0, 0);
    }

    // Each average is bounded by the largest contributing channel, so it fits in u8
    Pixel::new(
        (red / count) as u8,
        (green / count) as u8,
        (blue / count) as u8,
        0,
    )
}
