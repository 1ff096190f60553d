//! Sliding-window scan over the main image
//!
//! Every top-left position that keeps the search window inside the main image is
//! evaluated. After a hit the column cursor jumps past the matched window, so a
//! row never reports horizontally overlapping boxes. Rows are independent: a
//! window matched on one row can be reported again on the next.

use std::sync::atomic::{AtomicUsize, Ordering};

use image::RgbaImage;
use rayon::prelude::*;

use super::background::estimate_background;
use super::config::{SearchConfig, SearchMode};
use super::evaluator::is_tally_match;
use super::types::{MatchBox, ScanReport, Tally};
use super::window::{evaluate_window, evaluate_window_direct};

/// Scan `main_image` for occurrences of `search_image`.
///
/// A search image larger than the main image in either dimension yields an
/// empty report.
pub fn scan(main_image: &RgbaImage, search_image: &RgbaImage, config: &SearchConfig) -> ScanReport {
    let start_time = std::time::Instant::now();

    let matches = match row_limit(main_image, search_image) {
        None => {
            log::debug!(
                "Search image {}x{} larger than main image {}x{}, nothing to scan",
                search_image.width(),
                search_image.height(),
                main_image.width(),
                main_image.height()
            );
            Vec::new()
        }
        Some(max_row) => {
            let progress = ScanProgress::new(max_row as usize + 1);
            let scan_one = |row: u32| {
                let row_matches = scan_row(main_image, search_image, row, config);
                if let Some(percent) = progress.row_done() {
                    log::debug!("  ⏳ Scanning: {percent}%");
                }
                row_matches
            };

            if config.parallel {
                (0..=max_row)
                    .into_par_iter()
                    .map(scan_one)
                    .collect::<Vec<_>>()
                    .into_iter()
                    .flatten()
                    .collect()
            } else {
                (0..=max_row).flat_map(scan_one).collect()
            }
        }
    };

    let elapsed = start_time.elapsed().as_millis() as u64;
    log::info!(
        "Scan finished: {} matches in {}ms ({:?} mode, {}%, tolerance {})",
        matches.len(),
        elapsed,
        config.mode,
        config.match_percent,
        config.tolerance
    );

    ScanReport::new(config.clone(), matches, elapsed)
}

/// Row completion counter shared by sequential and parallel scans.
struct ScanProgress {
    total_rows: usize,
    report_interval: usize,
    rows_done: AtomicUsize,
}

impl ScanProgress {
    fn new(total_rows: usize) -> Self {
        Self {
            total_rows,
            report_interval: (total_rows / 10).max(1),
            rows_done: AtomicUsize::new(0),
        }
    }

    /// Count one finished row; returns the percentage at every 10% step.
    fn row_done(&self) -> Option<usize> {
        let done = self.rows_done.fetch_add(1, Ordering::Relaxed) + 1;
        (done % self.report_interval == 0).then(|| done * 100 / self.total_rows)
    }
}

/// Last valid window row, or `None` when the search image does not fit.
fn row_limit(main_image: &RgbaImage, search_image: &RgbaImage) -> Option<u32> {
    if search_image.width() > main_image.width() {
        return None;
    }
    main_image.height().checked_sub(search_image.height())
}

/// Scan one row left to right, skipping past each matched window.
fn scan_row(
    main_image: &RgbaImage,
    search_image: &RgbaImage,
    row: u32,
    config: &SearchConfig,
) -> Vec<MatchBox> {
    let (search_width, search_height) = search_image.dimensions();
    let total_pixels = search_width * search_height;
    let max_col = main_image.width() - search_width;

    let mut matches = Vec::new();
    let mut col = 0;
    while col <= max_col {
        let tally = evaluate_at(main_image, search_image, row, col, config);

        if is_tally_match(&tally, total_pixels, config.match_percent) {
            log::trace!("Hit at ({row}, {col}) tally={tally:?}");
            matches.push(MatchBox::new(row, col, search_height, search_width));
            col += search_width.max(1);
        } else {
            col += 1;
        }
    }

    matches
}

fn evaluate_at(
    main_image: &RgbaImage,
    search_image: &RgbaImage,
    row: u32,
    col: u32,
    config: &SearchConfig,
) -> Tally {
    match config.mode {
        SearchMode::Mask => {
            let background = estimate_background(
                main_image,
                search_image,
                row,
                col,
                search_image.height(),
                search_image.width(),
            );
            evaluate_window(main_image, search_image, row, col, background, config.tolerance)
        }
        SearchMode::Image => {
            evaluate_window_direct(main_image, search_image, row, col, config.tolerance)
        }
    }
}
