//! Pixel-by-pixel image comparison with ignore regions.
//!
//! Comparison is bounded to the overlapping region of the two images and
//! uses exact per-channel RGB equality. Rendering nondeterminism (font
//! hinting, sub-pixel anti-aliasing, GPU differences) registers as a
//! mismatch unless covered by an ignore region.

use crate::region::{any_contains, IgnoreRegion};
use image::{Rgba, RgbaImage};

/// Highlight color painted into the diff image at mismatched pixels
pub const HIGHLIGHT_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Result of comparing two images
///
/// The diff image has the bounded dimensions: every pixel in it is either
/// the baseline's color (identical or ignored) or [`HIGHLIGHT_COLOR`]
/// (mismatched and not ignored).
#[derive(Debug, Clone)]
pub struct PixelComparison {
    /// Number of non-ignored pixels whose color differs
    pub mismatch_count: usize,
    /// Width of the compared region: `min(baseline.width, actual.width)`
    pub compared_width: u32,
    /// Height of the compared region: `min(baseline.height, actual.height)`
    pub compared_height: u32,
    /// Mismatched pixels as a percentage (0.0-100.0) of the full bounded
    /// pixel count, ignored pixels included in the denominator
    pub mismatch_percent: f64,
    /// Rendered diff visualization, sized to the compared region
    pub diff: RgbaImage,
}

impl PixelComparison {
    /// Whether no compared pixel differed
    #[must_use]
    pub const fn is_identical(&self) -> bool {
        self.mismatch_count == 0
    }

    /// Total number of pixels in the bounded comparison grid
    #[must_use]
    pub const fn total_pixels(&self) -> usize {
        self.compared_width as usize * self.compared_height as usize
    }
}

/// Exact RGB equality; alpha is not part of the comparison
const fn rgb_equal(a: Rgba<u8>, b: Rgba<u8>) -> bool {
    let Rgba([r1, g1, b1, _]) = a;
    let Rgba([r2, g2, b2, _]) = b;
    r1 == r2 && g1 == g2 && b1 == b2
}

/// Compare `actual` against `baseline`, excluding pixels inside any of the
/// given ignore regions
///
/// The grid is bounded to `min(widths) x min(heights)`; extra area in the
/// larger image is not compared. For every bounded pixel in row-major order:
/// an ignored pixel copies the baseline color into the diff and does not
/// count toward the mismatch; an identical pixel copies the baseline color;
/// a differing pixel paints [`HIGHLIGHT_COLOR`] and increments the count.
///
/// Ignored pixels stay in the denominator, so heavy ignore-region usage
/// mechanically lowers the achievable mismatch percentage.
#[must_use]
pub fn compare_pixels(
    baseline: &RgbaImage,
    actual: &RgbaImage,
    ignore: &[IgnoreRegion],
) -> PixelComparison {
    let width = baseline.width().min(actual.width());
    let height = baseline.height().min(actual.height());

    let mut diff = RgbaImage::new(width, height);
    let mut mismatch_count = 0usize;

    for y in 0..height {
        for x in 0..width {
            let baseline_pixel = *baseline.get_pixel(x, y);

            if any_contains(ignore, x, y) {
                diff.put_pixel(x, y, baseline_pixel);
                continue;
            }

            if rgb_equal(baseline_pixel, *actual.get_pixel(x, y)) {
                diff.put_pixel(x, y, baseline_pixel);
            } else {
                diff.put_pixel(x, y, HIGHLIGHT_COLOR);
                mismatch_count += 1;
            }
        }
    }

    let total = width as usize * height as usize;
    let mismatch_percent = if total > 0 {
        (mismatch_count as f64 / total as f64) * 100.0
    } else {
        0.0
    };

    PixelComparison {
        mismatch_count,
        compared_width: width,
        compared_height: height,
        mismatch_percent,
        diff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
        let mut img = RgbaImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = color;
        }
        img
    }

    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    mod equality_tests {
        use super::*;

        #[test]
        fn test_identical_images_zero_mismatch() {
            let img = solid(10, 10, BLUE);
            let result = compare_pixels(&img, &img, &[]);
            assert!(result.is_identical());
            assert_eq!(result.mismatch_count, 0);
            assert!((result.mismatch_percent - 0.0).abs() < f64::EPSILON);
        }

        #[test]
        fn test_identical_images_zero_mismatch_with_regions() {
            let img = solid(10, 10, BLUE);
            let regions = vec![IgnoreRegion::new(0, 0, 5, 5)];
            let result = compare_pixels(&img, &img, &regions);
            assert!(result.is_identical());
        }

        #[test]
        fn test_diff_is_baseline_colored_when_identical() {
            let img = solid(4, 4, BLUE);
            let result = compare_pixels(&img, &img, &[]);
            for pixel in result.diff.pixels() {
                assert_eq!(*pixel, BLUE);
            }
        }

        #[test]
        fn test_alpha_difference_is_not_a_mismatch() {
            let baseline = solid(2, 2, Rgba([10, 20, 30, 255]));
            let actual = solid(2, 2, Rgba([10, 20, 30, 128]));
            let result = compare_pixels(&baseline, &actual, &[]);
            assert!(result.is_identical());
        }
    }

    mod mismatch_tests {
        use super::*;

        #[test]
        fn test_five_changed_pixels_on_10x10() {
            let baseline = solid(10, 10, BLUE);
            let mut actual = solid(10, 10, BLUE);
            for x in 0..5 {
                actual.put_pixel(x, 0, RED);
            }
            let result = compare_pixels(&baseline, &actual, &[]);
            assert_eq!(result.mismatch_count, 5);
            assert!((result.mismatch_percent - 5.0).abs() < f64::EPSILON);
        }

        #[test]
        fn test_black_square_on_white_100x100() {
            let baseline = solid(100, 100, WHITE);
            let mut actual = solid(100, 100, WHITE);
            for y in 0..10 {
                for x in 0..10 {
                    actual.put_pixel(x, y, BLACK);
                }
            }
            let result = compare_pixels(&baseline, &actual, &[]);
            assert_eq!(result.mismatch_count, 100);
            assert!((result.mismatch_percent - 1.0).abs() < f64::EPSILON);
        }

        #[test]
        fn test_mismatched_pixels_are_highlighted() {
            let baseline = solid(3, 3, BLUE);
            let mut actual = solid(3, 3, BLUE);
            actual.put_pixel(1, 1, RED);
            let result = compare_pixels(&baseline, &actual, &[]);
            assert_eq!(*result.diff.get_pixel(1, 1), HIGHLIGHT_COLOR);
            assert_eq!(*result.diff.get_pixel(0, 0), BLUE);
        }

        #[test]
        fn test_every_diff_pixel_is_highlight_or_baseline() {
            let baseline = solid(8, 8, BLUE);
            let mut actual = solid(8, 8, BLUE);
            actual.put_pixel(2, 3, WHITE);
            actual.put_pixel(5, 5, BLACK);
            let regions = vec![IgnoreRegion::new(4, 4, 4, 4)];
            let result = compare_pixels(&baseline, &actual, &regions);
            for pixel in result.diff.pixels() {
                assert!(*pixel == HIGHLIGHT_COLOR || *pixel == BLUE);
            }
        }
    }

    mod ignore_region_tests {
        use super::*;

        #[test]
        fn test_ignored_changes_do_not_count() {
            let baseline = solid(10, 10, BLUE);
            let mut actual = solid(10, 10, BLUE);
            for x in 0..5 {
                actual.put_pixel(x, 0, RED);
            }
            let regions = vec![IgnoreRegion::new(0, 0, 5, 1)];
            let result = compare_pixels(&baseline, &actual, &regions);
            assert!(result.is_identical());
            assert!((result.mismatch_percent - 0.0).abs() < f64::EPSILON);
        }

        #[test]
        fn test_ignored_diff_pixel_shows_baseline_color() {
            let baseline = solid(10, 10, BLUE);
            let mut actual = solid(10, 10, BLUE);
            actual.put_pixel(2, 2, RED);
            let regions = vec![IgnoreRegion::new(0, 0, 5, 5)];
            let result = compare_pixels(&baseline, &actual, &regions);
            assert_eq!(*result.diff.get_pixel(2, 2), BLUE);
        }

        #[test]
        fn test_ignored_pixels_stay_in_denominator() {
            // 10x10 grid, 50 pixels ignored, 5 non-ignored pixels changed:
            // mismatch is 5/100 = 5.0%, not 5/50 = 10.0%.
            let baseline = solid(10, 10, BLUE);
            let mut actual = solid(10, 10, BLUE);
            for x in 0..5 {
                actual.put_pixel(x, 9, RED);
            }
            let regions = vec![IgnoreRegion::new(0, 0, 10, 5)];
            let result = compare_pixels(&baseline, &actual, &regions);
            assert_eq!(result.mismatch_count, 5);
            assert!((result.mismatch_percent - 5.0).abs() < f64::EPSILON);
        }

        #[test]
        fn test_change_outside_region_still_counts() {
            let baseline = solid(10, 10, BLUE);
            let mut actual = solid(10, 10, BLUE);
            actual.put_pixel(9, 9, RED);
            let regions = vec![IgnoreRegion::new(0, 0, 5, 5)];
            let result = compare_pixels(&baseline, &actual, &regions);
            assert_eq!(result.mismatch_count, 1);
        }
    }

    mod bounded_comparison_tests {
        use super::*;

        #[test]
        fn test_bounds_to_overlapping_region() {
            let baseline = solid(100, 100, BLUE);
            let actual = solid(50, 200, BLUE);
            let result = compare_pixels(&baseline, &actual, &[]);
            assert_eq!(result.compared_width, 50);
            assert_eq!(result.compared_height, 100);
            assert_eq!(result.diff.dimensions(), (50, 100));
            assert_eq!(result.total_pixels(), 5000);
        }

        #[test]
        fn test_extra_area_not_counted() {
            let baseline = solid(100, 100, BLUE);
            let mut actual = solid(50, 200, BLUE);
            // Changes below the overlap must not register.
            for y in 100..200 {
                actual.put_pixel(0, y, RED);
            }
            let result = compare_pixels(&baseline, &actual, &[]);
            assert!(result.is_identical());
        }

        #[test]
        fn test_zero_overlap_yields_zero_percent() {
            let baseline = solid(0, 0, BLUE);
            let actual = solid(10, 10, BLUE);
            let result = compare_pixels(&baseline, &actual, &[]);
            assert_eq!(result.total_pixels(), 0);
            assert!((result.mismatch_percent - 0.0).abs() < f64::EPSILON);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_mismatch_percent_bounded(
                width in 1u32..32,
                height in 1u32..32,
                seed in 0u8..=255,
            ) {
                let baseline = solid(width, height, Rgba([seed, 0, 0, 255]));
                let actual = solid(width, height, Rgba([seed.wrapping_add(1), 0, 0, 255]));
                let result = compare_pixels(&baseline, &actual, &[]);
                prop_assert!(result.mismatch_percent >= 0.0);
                prop_assert!(result.mismatch_percent <= 100.0);
            }

            #[test]
            fn prop_self_comparison_is_identical(
                width in 1u32..32,
                height in 1u32..32,
                r in 0u8..=255,
                g in 0u8..=255,
                b in 0u8..=255,
            ) {
                let img = solid(width, height, Rgba([r, g, b, 255]));
                let result = compare_pixels(&img, &img, &[]);
                prop_assert!(result.is_identical());
            }

            #[test]
            fn prop_mismatch_count_never_exceeds_total(
                width in 1u32..24,
                height in 1u32..24,
            ) {
                let baseline = solid(width, height, Rgba([0, 0, 0, 255]));
                let actual = solid(width, height, Rgba([255, 255, 255, 255]));
                let result = compare_pixels(&baseline, &actual, &[]);
                prop_assert!(result.mismatch_count <= result.total_pixels());
            }
        }
    }
}
