use std::path::Path;

use crate::error::AppError;

/// Accepted input extensions, matched case-insensitively.
const ACCEPTED: [&str; 3] = ["jpg", "jpeg", "png"];

/// Check the input path before any decoding happens: extension first,
/// then existence on disk.
pub fn check_input(path: &Path) -> Result<(), AppError> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ACCEPTED.iter().any(|a| ext.eq_ignore_ascii_case(a)));
    if !accepted {
        return Err(AppError::UnsupportedExtension);
    }

    if !path.exists() {
        return Err(AppError::MissingFile(path.to_path_buf()));
    }

    Ok(())
}
