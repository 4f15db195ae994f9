//! Output path helpers for the XML writer

use crate::constants::OUTPUT_EXTENSION;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Compute the document path for a source workbook
///
/// The document takes the source base name with an `.xml` extension and is
/// placed in `output_dir`.
pub fn create_output_path(source_file: &Path, output_dir: &Path) -> Result<PathBuf> {
    let stem = source_file
        .file_stem()
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            Error::configuration(format!(
                "Source file has no base name: {}",
                source_file.display()
            ))
        })?;

    let mut file_name = stem.to_os_string();
    file_name.push(".");
    file_name.push(OUTPUT_EXTENSION);

    Ok(output_dir.join(file_name))
}

/// Create the output directory when missing and check it is a directory
pub fn ensure_output_directory(output_dir: &Path) -> Result<()> {
    if output_dir.exists() {
        if !output_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Output path is not a directory: {}",
                output_dir.display()
            )));
        }
        return Ok(());
    }

    debug!("Creating output directory: {}", output_dir.display());
    std::fs::create_dir_all(output_dir).map_err(|e| {
        Error::configuration(format!(
            "Failed to create output directory {}: {}",
            output_dir.display(),
            e
        ))
    })
}

/// Directory a file will be created in
pub(crate) fn parent_directory(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
