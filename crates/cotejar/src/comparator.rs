//! Visual comparator: decide whether a named screenshot still matches its
//! accepted baseline.
//!
//! Each call is stateless and independent; the only persisted state is the
//! set of baseline files on disk. The first run for a new screenshot name
//! seeds the baseline from the current capture and always passes; later runs
//! compare against it and fail when the mismatch percentage exceeds the
//! configured threshold.

use crate::capture::RenderTarget;
use crate::codec::decode_png;
use crate::compare::{compare_pixels, PixelComparison};
use crate::region::IgnoreRegion;
use crate::result::{CotejarError, CotejarResult};
use crate::store::ArtifactStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

/// Configuration for the visual comparator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparatorConfig {
    /// Directory holding baseline (reference) images
    pub baseline_dir: PathBuf,
    /// Directory receiving freshly captured images
    pub actual_dir: PathBuf,
    /// Directory receiving generated diff images
    pub diff_dir: PathBuf,
    /// Maximum tolerated mismatch percentage (0.0-100.0); a comparison fails
    /// only when the measured mismatch is strictly greater than this
    pub mismatch_threshold_percent: f64,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            baseline_dir: PathBuf::from("__baselines__"),
            actual_dir: PathBuf::from("__actuals__"),
            diff_dir: PathBuf::from("__diffs__"),
            mismatch_threshold_percent: 0.0,
        }
    }
}

impl ComparatorConfig {
    /// Create a config with default directories and a zero threshold
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the baseline directory
    #[must_use]
    pub fn with_baseline_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.baseline_dir = dir.into();
        self
    }

    /// Set the actual directory
    #[must_use]
    pub fn with_actual_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.actual_dir = dir.into();
        self
    }

    /// Set the diff directory
    #[must_use]
    pub fn with_diff_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.diff_dir = dir.into();
        self
    }

    /// Set the mismatch threshold percentage
    #[must_use]
    pub const fn with_threshold_percent(mut self, percent: f64) -> Self {
        self.mismatch_threshold_percent = percent;
        self
    }
}

/// Detailed result of a comparison that ran to completion within tolerance
#[derive(Debug, Clone)]
pub struct MatchReport {
    /// Screenshot name
    pub name: String,
    /// Number of differing, non-ignored pixels
    pub mismatch_count: usize,
    /// Measured mismatch percentage (0.0-100.0)
    pub mismatch_percent: f64,
    /// Configured threshold percentage
    pub threshold_percent: f64,
    /// Width of the compared (overlapping) region
    pub compared_width: u32,
    /// Height of the compared (overlapping) region
    pub compared_height: u32,
    /// Where the diff visualization was written
    pub diff_path: PathBuf,
}

/// Successful outcome of a screenshot assertion
#[derive(Debug, Clone)]
pub enum MatchOutcome {
    /// No baseline existed; the capture was accepted as the new baseline and
    /// no comparison ran
    BaselineSeeded {
        /// Where the seeded baseline was written
        baseline_path: PathBuf,
    },
    /// A baseline existed and the measured mismatch was within tolerance
    Matched(MatchReport),
}

impl MatchOutcome {
    /// Whether this outcome seeded a new baseline
    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        matches!(self, Self::BaselineSeeded { .. })
    }
}

/// Compares named screenshots against stored baselines
///
/// Configuration is fixed at construction. Calls are synchronous and
/// blocking; concurrent calls for distinct names proceed independently,
/// while calls sharing a name serialize on a per-name lock so baseline,
/// actual, and diff files are never written concurrently.
#[derive(Debug)]
pub struct VisualComparator {
    config: ComparatorConfig,
    store: ArtifactStore,
}

impl Default for VisualComparator {
    fn default() -> Self {
        Self::new(ComparatorConfig::default())
    }
}

impl VisualComparator {
    /// Create a comparator from configuration
    #[must_use]
    pub fn new(config: ComparatorConfig) -> Self {
        let store = ArtifactStore::new(
            &config.baseline_dir,
            &config.actual_dir,
            &config.diff_dir,
        );
        Self { config, store }
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Access the underlying artifact store
    #[must_use]
    pub const fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Assert that the target's current rendering matches the stored
    /// baseline for `name`, excluding the given ignore regions
    ///
    /// Captures a full-page image and writes it to the actual path
    /// unconditionally. If no baseline exists the capture becomes the
    /// baseline and the call succeeds without comparing. Otherwise both
    /// images are compared pixel by pixel, the diff is written, and the call
    /// fails with [`CotejarError::MismatchExceeded`] iff the mismatch
    /// percentage is strictly greater than the configured threshold.
    ///
    /// # Errors
    ///
    /// [`CotejarError::MismatchExceeded`] on a threshold breach; any other
    /// variant indicates an environment problem (capture, codec, I/O).
    pub fn assert_matches(
        &self,
        target: &mut dyn RenderTarget,
        name: &str,
        ignore_regions: &[IgnoreRegion],
    ) -> CotejarResult<MatchOutcome> {
        let baseline_path = self.store.baseline_path(name)?;
        let actual_path = self.store.actual_path(name)?;
        let diff_path = self.store.diff_path(name)?;

        let lock = self.store.name_lock(name);
        let _guard = lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let captured = target.capture_png()?;
        self.store.write_bytes(&actual_path, &captured)?;
        debug!(name, bytes = captured.len(), "capture written");

        if !baseline_path.exists() {
            self.store.write_bytes(&baseline_path, &captured)?;
            info!(name, path = %baseline_path.display(), "baseline seeded");
            return Ok(MatchOutcome::BaselineSeeded { baseline_path });
        }

        let baseline = self.store.load_image(&baseline_path)?;
        let actual = decode_png(&captured)?;
        let comparison = compare_pixels(&baseline, &actual, ignore_regions);
        self.store.write_image(&diff_path, &comparison.diff)?;

        self.decide(name, comparison, diff_path)
    }

    fn decide(
        &self,
        name: &str,
        comparison: PixelComparison,
        diff_path: PathBuf,
    ) -> CotejarResult<MatchOutcome> {
        let threshold = self.config.mismatch_threshold_percent;
        if comparison.mismatch_percent > threshold {
            info!(
                name,
                mismatch_percent = comparison.mismatch_percent,
                threshold_percent = threshold,
                "visual mismatch"
            );
            return Err(CotejarError::MismatchExceeded {
                name: name.to_string(),
                mismatch_percent: comparison.mismatch_percent,
                threshold_percent: threshold,
                diff_path,
            });
        }

        debug!(
            name,
            mismatch_percent = comparison.mismatch_percent,
            mismatch_count = comparison.mismatch_count,
            "within tolerance"
        );
        Ok(MatchOutcome::Matched(MatchReport {
            name: name.to_string(),
            mismatch_count: comparison.mismatch_count,
            mismatch_percent: comparison.mismatch_percent,
            threshold_percent: threshold,
            compared_width: comparison.compared_width,
            compared_height: comparison.compared_height,
            diff_path,
        }))
    }
}
