use std::path::{Path, PathBuf};

/// First source folder, relative to the working directory
pub const FP_DIR: &str = "fp";

/// Second source folder, relative to the working directory
pub const SP_DIR: &str = "sp";

/// Folder all renamed copies land in
pub const DESTINATION_DIR: &str = "data";

/// Recognized image extensions (lower-case, no leading dot)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// A directory to import from, plus the prefix its copies are named with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDir {
    pub path: PathBuf,
    pub prefix: String,
}

impl SourceDir {
    pub fn new(path: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        SourceDir {
            path: path.into(),
            prefix: prefix.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub sources: Vec<SourceDir>,
    pub dest_dir: PathBuf,
    pub extensions: Vec<String>,
}

impl ImportConfig {
    /// Empty config writing into `dest_dir`, recognizing the default image extensions
    pub fn new(dest_dir: impl Into<PathBuf>) -> Self {
        ImportConfig {
            sources: Vec::new(),
            dest_dir: dest_dir.into(),
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Append a source directory; sources are imported in the order added
    pub fn with_source(mut self, path: impl AsRef<Path>, prefix: &str) -> Self {
        self.sources.push(SourceDir::new(path.as_ref(), prefix));
        self
    }

    /// Replace the recognized extensions. Leading dots and case are normalized away.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        ImportConfig::new(DESTINATION_DIR)
            .with_source(FP_DIR, FP_DIR)
            .with_source(SP_DIR, SP_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ImportConfig::default();
        assert_eq!(config.dest_dir, PathBuf::from("data"));
        assert_eq!(
            config.sources,
            vec![SourceDir::new("fp", "fp"), SourceDir::new("sp", "sp")]
        );
        assert_eq!(config.extensions, vec!["png", "jpg", "jpeg", "bmp", "gif"]);
    }

    #[test]
    fn test_with_extensions_normalizes() {
        let config = ImportConfig::new("out").with_extensions([".PNG", "Tiff"]);
        assert_eq!(config.extensions, vec!["png", "tiff"]);
        assert!(config.sources.is_empty());
    }
}
