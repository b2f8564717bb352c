//! PNG export and output file naming

use crate::io::configuration::OUTPUT_PREFIX;
use crate::io::error::{ArtError, Result};
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name for a seed, with characters unsafe in paths replaced by `_`
pub fn output_file_name(seed: &str) -> String {
    let safe_seed: String = seed
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{OUTPUT_PREFIX}-{safe_seed}.png")
}

/// Output path for a seed inside `directory`
pub fn output_path(directory: &Path, seed: &str) -> PathBuf {
    directory.join(output_file_name(seed))
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ArtError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| ArtError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "exported"
    );
    Ok(())
}
