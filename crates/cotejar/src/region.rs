//! Ignore regions: rectangular areas excluded from pixel comparison.
//!
//! Volatile page areas (ads, timestamps, live-updating widgets) register as
//! mismatches under exact pixel comparison. Declaring them as ignore regions
//! keeps them out of the mismatch count while the rest of the page is still
//! compared.

use crate::result::CotejarError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An axis-aligned rectangle, in image-pixel coordinates, excluded from
/// comparison
///
/// A region contains pixel `(px, py)` iff `px` is within `[x, x + width)` and
/// `py` within `[y, y + height)`. Regions may overlap; a pixel is ignored if
/// it falls inside any declared region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreRegion {
    /// X coordinate of top-left corner
    pub x: u32,
    /// Y coordinate of top-left corner
    pub y: u32,
    /// Width of the region
    pub width: u32,
    /// Height of the region
    pub height: u32,
}

impl IgnoreRegion {
    /// Create a new ignore region
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a pixel coordinate falls within this region
    #[must_use]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Whether the region covers no pixels at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl FromStr for IgnoreRegion {
    type Err = CotejarError;

    /// Parse `"x,y,width,height"` (as accepted by the CLI's `--ignore` flag)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(CotejarError::InvalidRegion {
                input: s.to_string(),
                message: "expected region as x,y,width,height".to_string(),
            });
        }
        let mut values = [0u32; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| CotejarError::InvalidRegion {
                input: s.to_string(),
                message: format!("{part:?} is not a valid pixel count"),
            })?;
        }
        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}

/// Check whether any region in the slice contains the given pixel
#[must_use]
pub fn any_contains(regions: &[IgnoreRegion], px: u32, py: u32) -> bool {
    regions.iter().any(|r| r.contains(px, py))
}

/// Example ignore-region set masking commonly volatile page chrome in a
/// 1920x1080 full-page layout: the top banner, the bottom footer strip, and
/// the right-side panel.
///
/// This is an application-specific convenience, not a general-purpose
/// default. Layouts with different chrome need their own region set.
#[must_use]
pub fn page_chrome_regions() -> Vec<IgnoreRegion> {
    vec![
        IgnoreRegion::new(0, 0, 1920, 120),
        IgnoreRegion::new(0, 960, 1920, 120),
        IgnoreRegion::new(1600, 120, 320, 840),
    ]
}
