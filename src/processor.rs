use anyhow::{Context, Result};
use filetime::FileTime;
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ImportConfig;
use crate::error::{self, ImportError};
use crate::filename::{generate_filename, image_extension};

/// Final line written once every source directory has been imported
pub const COMPLETION_MESSAGE: &str = "All images copied successfully!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRecord {
    pub source: PathBuf,
    pub destination: PathBuf,
}

#[derive(Debug, Default)]
pub struct ImportSummary {
    pub copied: Vec<CopyRecord>,
    pub skipped: usize,
}

impl ImportSummary {
    fn merge(&mut self, other: ImportSummary) {
        self.copied.extend(other.copied);
        self.skipped += other.skipped;
    }
}

/// Copy every image in `source_dir` into `dest_dir` as `{prefix}_{NNN}.{ext}`.
///
/// Entries are visited in file-name order; only regular files with a recognized
/// extension consume an index. One `Copied: <src> -> <dst>` line is written to
/// `out` per file. The first failure aborts the pass and leaves earlier copies
/// in place. Existing files with the same computed name are overwritten.
pub fn import_images<W: Write>(
    source_dir: &Path,
    prefix: &str,
    dest_dir: &Path,
    extensions: &[String],
    out: &mut W,
) -> error::Result<ImportSummary> {
    let entries = collect_entries(source_dir)?;
    if entries.is_empty() {
        warn!("Source directory {} is empty", source_dir.display());
    }

    let mut summary = ImportSummary::default();
    let mut index = 1;

    for path in entries {
        // Follows symlinks, so a link to an image counts as an image
        if !path.is_file() {
            debug!("Skipping non-file entry: {}", path.display());
            summary.skipped += 1;
            continue;
        }

        let extension = match image_extension(&path, extensions) {
            Some(ext) => ext,
            None => {
                debug!("Skipping non-image file: {}", path.display());
                summary.skipped += 1;
                continue;
            }
        };

        let target_path = dest_dir.join(generate_filename(prefix, index, &extension));
        copy_with_metadata(&path, &target_path).map_err(|source| ImportError::CopyFailure {
            source_path: path.clone(),
            destination: target_path.clone(),
            source,
        })?;

        writeln!(out, "Copied: {} -> {}", path.display(), target_path.display())?;

        summary.copied.push(CopyRecord {
            source: path,
            destination: target_path,
        });
        index += 1;
    }

    Ok(summary)
}

/// List the direct children of `dir`, sorted by file name
fn collect_entries(dir: &Path) -> error::Result<Vec<PathBuf>> {
    let not_found = |source: io::Error| ImportError::DirectoryNotFound {
        path: dir.to_path_buf(),
        source,
    };

    // WalkDir happily yields a lone file as its root, so check up front
    let metadata = fs::metadata(dir).map_err(not_found)?;
    if !metadata.is_dir() {
        return Err(not_found(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a directory",
        )));
    }

    let mut entries = Vec::new();

    for entry_result in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry_result.map_err(|err| not_found(io::Error::from(err)))?;
        entries.push(entry.into_path());
    }

    Ok(entries)
}

/// Copy contents and permission bits, then carry over access and modification times
fn copy_with_metadata(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;

    let metadata = fs::metadata(from)?;
    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(to, atime, mtime)
}

pub struct Processor {
    config: ImportConfig,
}

impl Processor {
    pub fn new(config: ImportConfig) -> Result<Self> {
        // Create output directory if it doesn't exist
        fs::create_dir_all(&config.dest_dir).with_context(|| {
            format!("Failed to create output directory: {}", config.dest_dir.display())
        })?;

        Ok(Processor { config })
    }

    /// Import each configured source in order, then write the completion line.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<ImportSummary> {
        let mut total = ImportSummary::default();

        for source in &self.config.sources {
            let summary = import_images(
                &source.path,
                &source.prefix,
                &self.config.dest_dir,
                &self.config.extensions,
                out,
            )
            .with_context(|| format!("Failed to import images from {}", source.path.display()))?;

            info!(
                "{}: copied {}, skipped {}",
                source.path.display(),
                summary.copied.len(),
                summary.skipped
            );
            total.merge(summary);
        }

        writeln!(out, "{}", COMPLETION_MESSAGE).context("Failed to write completion message")?;
        info!(
            "Import complete: {} copied, {} skipped",
            total.copied.len(),
            total.skipped
        );

        Ok(total)
    }
}
