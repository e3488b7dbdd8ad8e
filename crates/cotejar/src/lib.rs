//! Cotejar: visual regression testing with baseline screenshots.
//!
//! Cotejar (Spanish: "to collate/check against") decides, for a named
//! screenshot, whether the currently rendered UI still matches a previously
//! accepted baseline image, within a configurable tolerance, while excluding
//! known-volatile regions from the comparison.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    COTEJAR Architecture                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Render     │    │ Visual     │    │ Artifact   │            │
//! │   │ Target     │───►│ Comparator │───►│ Store      │            │
//! │   │ (capture)  │    │ (pixels)   │    │ (png x3)   │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The first run for a new screenshot name seeds the baseline and passes;
//! later runs compare pixel by pixel, write a diff visualization, and fail
//! when the mismatch percentage exceeds the configured threshold.
//!
//! # Example
//!
//! ```no_run
//! use cotejar::{ComparatorConfig, IgnoreRegion, StillImage, VisualComparator};
//! use image::Rgba;
//!
//! # fn main() -> cotejar::CotejarResult<()> {
//! let comparator = VisualComparator::new(
//!     ComparatorConfig::new().with_threshold_percent(0.5),
//! );
//! let mut page = StillImage::solid(1920, 1080, Rgba([255, 255, 255, 255]));
//! let masked = vec![IgnoreRegion::new(0, 0, 1920, 120)];
//! comparator.assert_matches(&mut page, "home-page", &masked)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Render target contract and built-in targets
pub mod capture;
/// PNG encode/decode helpers
pub mod codec;
/// Pixel-by-pixel comparison algorithm
pub mod compare;
/// The visual comparator and its configuration
pub mod comparator;
/// Ignore-region model
pub mod region;
/// Run reporting and artifact digests
pub mod report;
/// Result and error types
pub mod result;
/// Baseline/actual/diff artifact storage
pub mod store;

pub use capture::{PngFile, RenderTarget, StillImage};
pub use compare::{compare_pixels, PixelComparison, HIGHLIGHT_COLOR};
pub use comparator::{ComparatorConfig, MatchOutcome, MatchReport, VisualComparator};
pub use region::{any_contains, page_chrome_regions, IgnoreRegion};
pub use report::{file_digest, sha256_hex, ComparisonRecord, OutcomeKind, RunReport};
pub use result::{CotejarError, CotejarResult};
pub use store::ArtifactStore;
