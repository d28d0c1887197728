//! Configuration constants and settings for layout calculation.

/// Floating-point comparison epsilon (mm / mm²).
pub const EPS: f64 = 0.0001;

/// Default sheet width in mm (standard 8 ft board).
pub const DEFAULT_SHEET_WIDTH_MM: f64 = 2440.0;

/// Default sheet height in mm (standard 4 ft board).
pub const DEFAULT_SHEET_HEIGHT_MM: f64 = 1220.0;

/// Default saw kerf in mm.
pub const DEFAULT_KERF_MM: f64 = 3.0;

/// Upper bound for reported utilization percentages.
pub const MAX_UTILIZATION_PERCENT: f64 = 100.0;

/// Settings for layout self-checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Absolute tolerance for coordinate comparisons.
    pub tolerance: f64,
    /// Relative tolerance for area accounting (fraction of sheet area).
    pub area_tolerance: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tolerance: EPS,
            area_tolerance: 1e-9,
        }
    }
}

impl LayoutConfig {
    /// Absolute area tolerance for a sheet of the given area.
    pub fn area_epsilon(&self, sheet_area: f64) -> f64 {
        (sheet_area * self.area_tolerance).max(self.tolerance)
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }

    /// Check if a is in range [min, max] with epsilon tolerance.
    #[inline]
    pub fn in_range(a: f64, min: f64, max: f64) -> bool {
        a >= min - EPS && a <= max + EPS
    }
}

/// Percentage of `used` over `available`, clamped to [0, 100].
pub fn utilization_percent(used: f64, available: f64) -> f64 {
    if available <= 0.0 {
        return 0.0;
    }
    (used / available * 100.0).clamp(0.0, MAX_UTILIZATION_PERCENT)
}
