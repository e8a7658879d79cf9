use std::path::Path;

/// Generate the destination filename: `{prefix}_{index:03}.{ext}`
///
/// The index is zero-padded to three digits and widens past 999.
/// The extension keeps whatever casing the source file had.
pub fn generate_filename(prefix: &str, index: usize, original_extension: &str) -> String {
    format!("{}_{:03}.{}", prefix, index, original_extension)
}

/// Get the file extension from a path
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Case-insensitive membership test against a lower-case extension list
pub fn is_recognized_extension(ext: &str, recognized: &[String]) -> bool {
    let lower = ext.to_lowercase();
    recognized.iter().any(|r| *r == lower)
}

/// Returns the extension of `path` if it is one of the recognized ones
pub fn image_extension(path: &Path, recognized: &[String]) -> Option<String> {
    get_extension(path).filter(|ext| is_recognized_extension(ext, recognized))
}
