pub mod args;
pub mod image_search;

pub use image_search::{MatchBox, ScanReport, SearchConfig, SearchMode, scan};
