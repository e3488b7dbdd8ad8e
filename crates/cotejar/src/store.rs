//! Artifact storage: baseline, actual, and diff images on disk.
//!
//! Layout, keyed by logical screenshot name:
//!
//! ```text
//! {baseline_dir}/{name}.png       reference image, created once
//! {actual_dir}/{name}.png         latest capture, overwritten every run
//! {diff_dir}/{name}-diff.png      latest diff, overwritten every run
//! ```
//!
//! Writes go through a temp-file-then-rename sequence, and callers can take
//! a per-name lock, so parallel test threads sharing the directories do not
//! interleave writes for the same screenshot name.

use crate::codec::encode_png;
use crate::result::{CotejarError, CotejarResult};
use image::RgbaImage;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Suffix appended to the screenshot name for diff artifacts
const DIFF_SUFFIX: &str = "-diff";

/// Extension used while an artifact write is in flight
const TEMP_EXTENSION: &str = "png.tmp";

/// Validate a logical screenshot name
///
/// Names become file stems inside the artifact directories, so they must be
/// non-empty and must not contain path separators or dot-segments.
pub fn validate_name(name: &str) -> CotejarResult<()> {
    if name.is_empty() {
        return Err(CotejarError::InvalidName {
            name: name.to_string(),
            message: "name must not be empty".to_string(),
        });
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(CotejarError::InvalidName {
            name: name.to_string(),
            message: "name must not contain path separators".to_string(),
        });
    }
    Ok(())
}

/// Disk store for the three artifact kinds
///
/// Holds the configured directories and a registry of per-name locks. The
/// store itself is immutable after construction; all mutable state is the
/// file system.
#[derive(Debug)]
pub struct ArtifactStore {
    baseline_dir: PathBuf,
    actual_dir: PathBuf,
    diff_dir: PathBuf,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ArtifactStore {
    /// Create a store over the given directories
    ///
    /// Directories are not touched here; they are created (with parents) the
    /// first time an artifact is written.
    #[must_use]
    pub fn new(
        baseline_dir: impl Into<PathBuf>,
        actual_dir: impl Into<PathBuf>,
        diff_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            baseline_dir: baseline_dir.into(),
            actual_dir: actual_dir.into(),
            diff_dir: diff_dir.into(),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Baseline image path for a name
    pub fn baseline_path(&self, name: &str) -> CotejarResult<PathBuf> {
        validate_name(name)?;
        Ok(self.baseline_dir.join(format!("{name}.png")))
    }

    /// Actual (latest capture) image path for a name
    pub fn actual_path(&self, name: &str) -> CotejarResult<PathBuf> {
        validate_name(name)?;
        Ok(self.actual_dir.join(format!("{name}.png")))
    }

    /// Diff image path for a name
    pub fn diff_path(&self, name: &str) -> CotejarResult<PathBuf> {
        validate_name(name)?;
        Ok(self.diff_dir.join(format!("{name}{DIFF_SUFFIX}.png")))
    }

    /// The configured baseline directory
    #[must_use]
    pub fn baseline_dir(&self) -> &Path {
        &self.baseline_dir
    }

    /// The configured actual directory
    #[must_use]
    pub fn actual_dir(&self) -> &Path {
        &self.actual_dir
    }

    /// The configured diff directory
    #[must_use]
    pub fn diff_dir(&self) -> &Path {
        &self.diff_dir
    }

    /// Whether a baseline exists for the given name
    pub fn has_baseline(&self, name: &str) -> CotejarResult<bool> {
        Ok(self.baseline_path(name)?.exists())
    }

    /// Get the shared lock handle for a screenshot name
    ///
    /// Callers hold the returned handle and lock it for the duration of any
    /// read-modify-write sequence over that name's artifacts. Distinct names
    /// get distinct locks, so unrelated comparisons never serialize.
    pub fn name_lock(&self, name: &str) -> Arc<Mutex<()>> {
        let mut registry = self
            .locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        registry.entry(name.to_string()).or_default().clone()
    }

    /// Write raw PNG bytes to an artifact path
    ///
    /// Creates the parent directory (with parents) if absent, writes to a
    /// temp file next to the destination, then renames into place so readers
    /// never observe a partially written artifact.
    pub fn write_bytes(&self, path: &Path, bytes: &[u8]) -> CotejarResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp = path.with_extension(TEMP_EXTENSION);
        fs::write(&temp, bytes)?;
        fs::rename(&temp, path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "artifact written");
        Ok(())
    }

    /// Encode an image to PNG and write it to an artifact path
    pub fn write_image(&self, path: &Path, image: &RgbaImage) -> CotejarResult<()> {
        let bytes = encode_png(image)?;
        self.write_bytes(path, &bytes)
    }

    /// Read raw artifact bytes
    pub fn read_bytes(&self, path: &Path) -> CotejarResult<Vec<u8>> {
        Ok(fs::read(path)?)
    }

    /// Load an artifact as an RGBA image
    pub fn load_image(&self, path: &Path) -> CotejarResult<RgbaImage> {
        let bytes = self.read_bytes(path)?;
        crate::codec::decode_png(&bytes)
    }

    /// List the logical names present in a directory, derived from `*.png`
    /// file stems; diff artifacts have their suffix stripped
    pub fn names_in(&self, dir: &Path) -> CotejarResult<Vec<String>> {
        let mut names = Vec::new();
        if !dir.exists() {
            return Ok(names);
        }
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "png") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    let name = stem.strip_suffix(DIFF_SUFFIX).unwrap_or(stem);
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        names.dedup();
        Ok(names)
    }
}
