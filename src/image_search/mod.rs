//! Masked sub-image search
//!
//! Locates occurrences of a small search image inside a larger image using
//! per-channel colour tolerance:
//! - Background colour estimated per window from the black mask pixels
//! - Strict per-channel tolerance test against that colour
//! - Percentage threshold on the net match count
//! - Horizontal skip-ahead after each hit, optional row-parallel scan
pub mod background;
pub mod config;
pub mod draw;
pub mod error;
pub mod evaluator;
pub mod io;
pub mod scanner;
pub mod types;
pub mod window;


pub use background::estimate_background;
pub use config::{DEFAULT_MATCH_PERCENT, DEFAULT_TOLERANCE, SearchConfig, SearchMode};
pub use draw::{draw_box, draw_matches};
pub use error::{SearchError, SearchResult};
pub use evaluator::is_match;
pub use io::{load_image, save_image, write_report};
pub use scanner::scan;
pub use types::{MatchBox, Pixel, ScanReport, Tally};
pub use window::{evaluate_window, evaluate_window_direct, is_close_enough};
