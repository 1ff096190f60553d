//! Data types shared by the matching engine

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use super::config::SearchConfig;

/// A single RGBA pixel, readable per channel or as one packed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    /// Opaque black: the mask value that marks a background-role pixel.
    pub const BLACK: Pixel = Pixel::new(0, 0, 0, 255);

    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Packed little-endian view: `alpha<<24 | blue<<16 | green<<8 | red`
    pub const fn packed(&self) -> u32 {
        u32::from_le_bytes([self.red, self.green, self.blue, self.alpha])
    }

    /// True when this is the opaque-black sentinel (all four channels compared).
    pub fn is_black(&self) -> bool {
        self.packed() == Self::BLACK.packed()
    }
}

impl From<Rgba<u8>> for Pixel {
    fn from(value: Rgba<u8>) -> Self {
        let [red, green, blue, alpha] = value.0;
        Self::new(red, green, blue, alpha)
    }
}

/// Read the pixel at `(row, col)`, origin top-left.
///
/// Callers keep the coordinate inside the image; the scan loop bounds guarantee it.
#[inline]
pub fn pixel_at(image: &RgbaImage, row: u32, col: u32) -> Pixel {
    Pixel::from(*image.get_pixel(col, row))
}

/// Per-window classification counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub match_count: u32,
    pub mismatch_count: u32,
}

impl Tally {
    pub fn total(&self) -> u32 {
        self.match_count + self.mismatch_count
    }
}

/// Bounding box of a detected occurrence, end coordinates exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBox {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl MatchBox {
    pub fn new(row: u32, col: u32, height: u32, width: u32) -> Self {
        Self {
            start_row: row,
            start_col: col,
            end_row: row + height,
            end_col: col + width,
        }
    }

    pub fn height(&self) -> u32 {
        self.end_row - self.start_row
    }

    pub fn width(&self) -> u32 {
        self.end_col - self.start_col
    }
}

impl std::fmt::Display for MatchBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.start_row, self.start_col, self.end_row, self.end_col
        )
    }
}

/// Outcome of one full scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub config: SearchConfig,
    pub matches: Vec<MatchBox>,
    pub match_count: usize,
    pub processing_time_ms: u64,
}

impl ScanReport {
    pub fn new(config: SearchConfig, matches: Vec<MatchBox>, processing_time_ms: u64) -> Self {
        Self {
            config,
            match_count: matches.len(),
            matches,
            processing_time_ms,
        }
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

/// One line per match followed by the total count.
impl std::fmt::Display for ScanReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for m in &self.matches {
            writeln!(f, "sub-image matched at: {m}")?;
        }
        writeln!(f, "Number of matches: {}", self.match_count)
    }
}
