//! Run reporting: an accumulating, serializable record of comparison
//! outcomes for a test run.
//!
//! The comparator itself is stateless; tests that want a machine-readable
//! summary push each outcome into a [`RunReport`] and export it as JSON at
//! the end of the run.

use crate::comparator::MatchOutcome;
use crate::result::{CotejarError, CotejarResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// How a single screenshot assertion ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// No baseline existed; this run's capture was accepted as the baseline
    BaselineSeeded,
    /// Compared and within tolerance
    Passed,
    /// Compared and above tolerance
    Failed,
}

/// One comparison outcome inside a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Screenshot name
    pub name: String,
    /// How the assertion ended
    pub outcome: OutcomeKind,
    /// Measured mismatch percentage; absent when the baseline was seeded
    pub mismatch_percent: Option<f64>,
    /// Threshold in force for this comparison
    pub threshold_percent: f64,
    /// Hex sha-256 of the baseline artifact, when recorded
    pub baseline_sha256: Option<String>,
    /// Hex sha-256 of the actual artifact, when recorded
    pub actual_sha256: Option<String>,
    /// Diff artifact location, when one was written
    pub diff_path: Option<PathBuf>,
}

/// Accumulated outcomes for one test run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// When the report was started (UTC)
    pub generated_at: DateTime<Utc>,
    /// One record per screenshot assertion
    pub records: Vec<ComparisonRecord>,
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

impl RunReport {
    /// Create an empty report stamped with the current time
    #[must_use]
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            records: Vec::new(),
        }
    }

    /// Record a successful assertion outcome
    pub fn record_outcome(&mut self, threshold_percent: f64, outcome: &MatchOutcome) {
        let record = match outcome {
            MatchOutcome::BaselineSeeded { baseline_path } => ComparisonRecord {
                name: name_from_path(baseline_path),
                outcome: OutcomeKind::BaselineSeeded,
                mismatch_percent: None,
                threshold_percent,
                baseline_sha256: None,
                actual_sha256: None,
                diff_path: None,
            },
            MatchOutcome::Matched(report) => ComparisonRecord {
                name: report.name.clone(),
                outcome: OutcomeKind::Passed,
                mismatch_percent: Some(report.mismatch_percent),
                threshold_percent: report.threshold_percent,
                baseline_sha256: None,
                actual_sha256: None,
                diff_path: Some(report.diff_path.clone()),
            },
        };
        self.records.push(record);
    }

    /// Record a threshold breach
    pub fn record_failure(
        &mut self,
        name: impl Into<String>,
        mismatch_percent: f64,
        threshold_percent: f64,
        diff_path: impl Into<PathBuf>,
    ) {
        self.records.push(ComparisonRecord {
            name: name.into(),
            outcome: OutcomeKind::Failed,
            mismatch_percent: Some(mismatch_percent),
            threshold_percent,
            baseline_sha256: None,
            actual_sha256: None,
            diff_path: Some(diff_path.into()),
        });
    }

    /// Attach artifact digests to the most recent record
    pub fn attach_digests(
        &mut self,
        baseline_sha256: Option<String>,
        actual_sha256: Option<String>,
    ) {
        if let Some(last) = self.records.last_mut() {
            last.baseline_sha256 = baseline_sha256;
            last.actual_sha256 = actual_sha256;
        }
    }

    /// Number of failed comparisons
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == OutcomeKind::Failed)
            .count()
    }

    /// Whether no comparison failed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failed_count() == 0
    }

    /// One-line human summary
    #[must_use]
    pub fn summary(&self) -> String {
        let seeded = self
            .records
            .iter()
            .filter(|r| r.outcome == OutcomeKind::BaselineSeeded)
            .count();
        let failed = self.failed_count();
        let passed = self.records.len() - seeded - failed;
        format!(
            "{} screenshot(s): {passed} passed, {failed} failed, {seeded} seeded",
            self.records.len()
        )
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> CotejarResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report to a file
    pub fn write_json(&self, path: &Path) -> CotejarResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Hex sha-256 digest of a byte slice
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Hex sha-256 digest of a file's contents
pub fn file_digest(path: &Path) -> CotejarResult<String> {
    let bytes = std::fs::read(path).map_err(CotejarError::from)?;
    Ok(sha256_hex(&bytes))
}

fn name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::MatchReport;

    fn matched_outcome(name: &str, mismatch_percent: f64) -> MatchOutcome {
        MatchOutcome::Matched(MatchReport {
            name: name.to_string(),
            mismatch_count: 1,
            mismatch_percent,
            threshold_percent: 5.0,
            compared_width: 10,
            compared_height: 10,
            diff_path: PathBuf::from(format!("__diffs__/{name}-diff.png")),
        })
    }

    mod record_tests {
        use super::*;

        #[test]
        fn test_record_seeded() {
            let mut report = RunReport::new();
            let outcome = MatchOutcome::BaselineSeeded {
                baseline_path: PathBuf::from("__baselines__/home.png"),
            };
            report.record_outcome(0.0, &outcome);
            assert_eq!(report.records.len(), 1);
            assert_eq!(report.records[0].outcome, OutcomeKind::BaselineSeeded);
            assert_eq!(report.records[0].name, "home");
            assert!(report.records[0].mismatch_percent.is_none());
        }

        #[test]
        fn test_record_passed() {
            let mut report = RunReport::new();
            report.record_outcome(5.0, &matched_outcome("cart", 1.25));
            let record = &report.records[0];
            assert_eq!(record.outcome, OutcomeKind::Passed);
            assert_eq!(record.name, "cart");
            assert!((record.mismatch_percent.unwrap() - 1.25).abs() < f64::EPSILON);
            assert!(record.diff_path.is_some());
        }

        #[test]
        fn test_record_failure() {
            let mut report = RunReport::new();
            report.record_failure("checkout", 9.5, 2.0, "__diffs__/checkout-diff.png");
            assert_eq!(report.failed_count(), 1);
            assert!(!report.passed());
        }

        #[test]
        fn test_attach_digests() {
            let mut report = RunReport::new();
            report.record_outcome(5.0, &matched_outcome("cart", 0.0));
            report.attach_digests(Some("aa".to_string()), Some("bb".to_string()));
            assert_eq!(report.records[0].baseline_sha256.as_deref(), Some("aa"));
            assert_eq!(report.records[0].actual_sha256.as_deref(), Some("bb"));
        }
    }

    mod summary_tests {
        use super::*;

        #[test]
        fn test_empty_report_passes() {
            let report = RunReport::new();
            assert!(report.passed());
            assert_eq!(report.summary(), "0 screenshot(s): 0 passed, 0 failed, 0 seeded");
        }

        #[test]
        fn test_mixed_summary() {
            let mut report = RunReport::new();
            report.record_outcome(
                0.0,
                &MatchOutcome::BaselineSeeded {
                    baseline_path: PathBuf::from("b/new.png"),
                },
            );
            report.record_outcome(5.0, &matched_outcome("ok", 0.5));
            report.record_failure("bad", 8.0, 1.0, "d/bad-diff.png");
            assert_eq!(
                report.summary(),
                "3 screenshot(s): 1 passed, 1 failed, 1 seeded"
            );
        }
    }

    mod json_tests {
        use super::*;

        #[test]
        fn test_json_round_trip() {
            let mut report = RunReport::new();
            report.record_outcome(5.0, &matched_outcome("cart", 1.0));
            let json = report.to_json().unwrap();
            let back: RunReport = serde_json::from_str(&json).unwrap();
            assert_eq!(back.records.len(), 1);
            assert_eq!(back.records[0].name, "cart");
        }

        #[test]
        fn test_write_json_creates_parents() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("nested/report.json");
            RunReport::new().write_json(&path).unwrap();
            assert!(path.exists());
        }
    }

    mod digest_tests {
        use super::*;

        #[test]
        fn test_sha256_known_vector() {
            // Empty input digest is a fixed constant.
            assert_eq!(
                sha256_hex(b""),
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
            );
        }

        #[test]
        fn test_file_digest_matches_bytes_digest() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("artifact.png");
            std::fs::write(&path, b"pixels").unwrap();
            assert_eq!(file_digest(&path).unwrap(), sha256_hex(b"pixels"));
        }

        #[test]
        fn test_file_digest_missing_file_errors() {
            assert!(file_digest(Path::new("/nonexistent/x.png")).is_err());
        }
    }
}
