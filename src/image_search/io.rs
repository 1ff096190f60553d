//! Reading inputs and writing results

use std::path::Path;

use image::RgbaImage;

use super::error::{SearchError, SearchResult};
use super::types::ScanReport;

/// Load any supported image format as RGBA8.
///
/// Sources without alpha come back fully opaque, so a black RGB mask pixel
/// becomes the opaque-black sentinel.
pub fn load_image(path: impl AsRef<Path>) -> SearchResult<RgbaImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| SearchError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded {:?} ({}x{})", path, image.width(), image.height());
    Ok(image.to_rgba8())
}

/// Save an image; the format follows the file extension.
pub fn save_image(path: impl AsRef<Path>, image: &RgbaImage) -> SearchResult<()> {
    let path = path.as_ref();
    image.save(path).map_err(|source| SearchError::ImageSave {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Saved {:?}", path);
    Ok(())
}

/// Write the scan report as pretty JSON.
pub fn write_report(path: impl AsRef<Path>, report: &ScanReport) -> SearchResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json).map_err(|source| SearchError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })
}
