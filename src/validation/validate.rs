//! Validation logic for job input and packing output.

use crate::config::{float_cmp, LayoutConfig, MAX_UTILIZATION_PERCENT};
use crate::model::{FreeRect, Layout, SheetLayout, SheetSize};
use crate::parser::Job;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a job before packing. Reports every problem, not just the first.
pub fn validate_job(job: &Job) -> ValidationResult {
    let mut result = ValidationResult::ok();

    let sheet = match job.sheet_size() {
        Ok(sheet) => Some(sheet),
        Err(err) => {
            result.add_error(err.to_string());
            None
        }
    };

    for index in job.incomplete_indices() {
        if job.cuts[index].is_blank() {
            result.add_warning(format!("Cut {}: blank row skipped", index + 1));
        } else {
            result.add_warning(format!("Cut {}: incomplete row skipped", index + 1));
        }
    }

    let specs = job.valid_specs();
    if specs.is_empty() {
        result.add_error("No valid cut entries");
    }

    for (index, spec) in &specs {
        if let Err(err) = spec.check(*index) {
            result.add_error(err.to_string());
            continue;
        }

        if float_cmp::approx_zero(spec.kerf) {
            result.add_warning(format!("Cut {}: zero kerf", index + 1));
        }

        if let Some(sheet) = sheet {
            if !sheet.fits(spec.packing_width(), spec.packing_height()) {
                result.add_error(format!(
                    "Cut {}: {} x {} with kerf {} does not fit sheet {}",
                    index + 1,
                    spec.length,
                    spec.width,
                    spec.kerf,
                    sheet
                ));
            }
        }
    }

    result
}

/// Validate a computed layout: bounds, overlaps and area accounting.
pub fn validate_layout(layout: &Layout, config: &LayoutConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if layout.sheet_count != layout.sheets.len() {
        result.add_error(format!(
            "Sheet count {} does not match {} sheet layouts",
            layout.sheet_count,
            layout.sheets.len()
        ));
    }

    for sheet in &layout.sheets {
        result.merge(validate_sheet(sheet, layout.sheet, config));
    }

    let placed = layout.placements().count();
    if placed != layout.total_pieces {
        result.add_error(format!(
            "Total pieces {} does not match {} placements",
            layout.total_pieces, placed
        ));
    }

    let used: f64 = layout.sheets.iter().map(|s| s.used_area).sum();
    if (used - layout.total_used_area).abs() > config.area_epsilon(layout.total_sheet_area()) {
        result.add_error(format!(
            "Total used area {} does not match sheet sum {}",
            layout.total_used_area, used
        ));
    }

    if !(0.0..=MAX_UTILIZATION_PERCENT).contains(&layout.total_utilization_percent) {
        result.add_error(format!(
            "Total utilization {} is outside 0-100",
            layout.total_utilization_percent
        ));
    }

    result
}

/// Validate one sheet of a layout.
fn validate_sheet(sheet: &SheetLayout, size: SheetSize, config: &LayoutConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let tol = config.tolerance;

    let rects: Vec<FreeRect> = sheet
        .pieces
        .iter()
        .map(|p| p.bounds())
        .chain(sheet.free_rects.iter().copied())
        .collect();

    for (idx, rect) in rects.iter().enumerate() {
        let inside = rect.x >= -tol
            && rect.y >= -tol
            && rect.x_max() <= size.width + tol
            && rect.y_max() <= size.height + tol;
        if !inside {
            let what = if idx < sheet.pieces.len() {
                format!("Piece {}", idx + 1)
            } else {
                format!("Free region {}", idx + 1 - sheet.pieces.len())
            };
            result.add_error(format!(
                "Sheet {}, {}: extends beyond sheet bounds",
                sheet.id, what
            ));
        }
    }

    for (i, j) in find_overlaps(&rects, tol) {
        result.add_error(format!(
            "Sheet {}: regions {} and {} overlap",
            sheet.id,
            i + 1,
            j + 1
        ));
    }

    let area_eps = config.area_epsilon(size.area());
    let covered = sheet.used_area + sheet.free_area();
    if (covered - size.area()).abs() > area_eps {
        result.add_error(format!(
            "Sheet {}: pieces and free regions cover {} of {} mm²",
            sheet.id,
            covered,
            size.area()
        ));
    }

    let used: f64 = sheet.pieces.iter().map(|p| p.area()).sum();
    if (used - sheet.used_area).abs() > area_eps
        || (size.area() - used - sheet.wasted_area).abs() > area_eps
    {
        result.add_error(format!("Sheet {}: area metrics are inconsistent", sheet.id));
    }

    if !float_cmp::in_range(sheet.utilization_percent, 0.0, MAX_UTILIZATION_PERCENT) {
        result.add_error(format!(
            "Sheet {}: utilization {} is outside 0-100",
            sheet.id, sheet.utilization_percent
        ));
    }

    if sheet.pieces.is_empty() {
        result.add_warning(format!("Sheet {}: no pieces placed", sheet.id));
    }

    result
}

/// Find all pairs of overlapping rectangles.
pub fn find_overlaps(rects: &[FreeRect], tolerance: f64) -> Vec<(usize, usize)> {
    let mut overlaps = Vec::new();

    for i in 0..rects.len() {
        for j in i + 1..rects.len() {
            if rects[i].overlaps(&rects[j], tolerance) {
                overlaps.push((i, j));
            }
        }
    }

    overlaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CutSpec, PlacedPiece};
    use crate::parser::{CutRequest, SheetRequest};

    fn create_basic_job() -> Job {
        Job::new(
            SheetSize::new(1000.0, 500.0),
            &[CutSpec::new(200.0, 300.0, 2, 3.0)],
        )
    }

    fn placed(x: f64, y: f64, w: f64, h: f64) -> PlacedPiece {
        PlacedPiece {
            x,
            y,
            packing_width: w,
            packing_height: h,
            original_width: w,
            original_height: h,
            spec_index: 0,
        }
    }

    fn layout_with(sheet: SheetLayout, size: SheetSize) -> Layout {
        let used = sheet.used_area;
        Layout {
            sheet: size,
            sheet_count: 1,
            total_pieces: sheet.pieces.len(),
            total_used_area: used,
            total_wasted_area: size.area() - used,
            total_utilization_percent: used / size.area() * 100.0,
            total_cut_perimeter: sheet.pieces.iter().map(|p| p.perimeter()).sum(),
            sheets: vec![sheet],
            specs: Vec::new(),
        }
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== validate_job tests ====================

    #[test]
    fn test_validate_job_valid() {
        let result = validate_job(&create_basic_job());
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_job_invalid_sheet() {
        let mut job = create_basic_job();
        job.sheet.height = None;
        let result = validate_job(&job);
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("Invalid sheet dimensions")));
    }

    #[test]
    fn test_validate_job_incomplete_rows_warn() {
        let mut job = create_basic_job();
        job.cuts.push(CutRequest::default());
        job.cuts.push(CutRequest {
            length: Some(10.0),
            ..Default::default()
        });
        let result = validate_job(&job);
        assert!(result.passed);
        assert_eq!(
            result.warnings,
            vec![
                "Cut 2: blank row skipped".to_string(),
                "Cut 3: incomplete row skipped".to_string(),
            ]
        );
    }

    #[test]
    fn test_validate_job_no_valid_cuts() {
        let job = Job {
            name: None,
            sheet: SheetRequest {
                width: Some(100.0),
                height: Some(100.0),
            },
            cuts: vec![CutRequest::default()],
        };
        let result = validate_job(&job);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e == "No valid cut entries"));
    }

    #[test]
    fn test_validate_job_collects_all_errors() {
        let job = Job::new(
            SheetSize::new(1000.0, 500.0),
            &[
                CutSpec::new(600.0, 100.0, 1, 3.0),
                CutSpec::new(100.0, 100.0, 0, 3.0),
                CutSpec::new(100.0, 1001.0, 1, 0.0),
            ],
        );
        let result = validate_job(&job);
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors[0].starts_with("Cut 1:"));
        assert!(result.errors[1].contains("quantity"));
        assert!(result.errors[2].starts_with("Cut 3:"));
        assert_eq!(result.warnings, vec!["Cut 3: zero kerf".to_string()]);
    }

    // ==================== validate_layout tests ====================

    #[test]
    fn test_validate_layout_consistent() {
        let size = SheetSize::new(100.0, 50.0);
        let sheet = SheetLayout {
            id: 1,
            pieces: vec![placed(0.0, 0.0, 40.0, 50.0)],
            free_rects: vec![FreeRect::new(40.0, 0.0, 60.0, 50.0)],
            used_area: 2000.0,
            wasted_area: 3000.0,
            utilization_percent: 40.0,
        };
        let result = validate_layout(&layout_with(sheet, size), &LayoutConfig::default());
        assert!(result.passed, "errors: {:?}", result.errors);
    }

    #[test]
    fn test_validate_layout_detects_overlap() {
        let size = SheetSize::new(100.0, 50.0);
        let sheet = SheetLayout {
            id: 1,
            pieces: vec![placed(0.0, 0.0, 40.0, 50.0), placed(30.0, 0.0, 40.0, 50.0)],
            free_rects: vec![],
            used_area: 4000.0,
            wasted_area: 1000.0,
            utilization_percent: 80.0,
        };
        let result = validate_layout(&layout_with(sheet, size), &LayoutConfig::default());
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("overlap")));
    }

    #[test]
    fn test_validate_layout_detects_out_of_bounds() {
        let size = SheetSize::new(100.0, 50.0);
        let sheet = SheetLayout {
            id: 1,
            pieces: vec![placed(80.0, 0.0, 40.0, 50.0)],
            free_rects: vec![],
            used_area: 2000.0,
            wasted_area: 3000.0,
            utilization_percent: 40.0,
        };
        let result = validate_layout(&layout_with(sheet, size), &LayoutConfig::default());
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("extends beyond sheet bounds")));
    }

    // ==================== find_overlaps tests ====================

    #[test]
    fn test_find_overlaps() {
        let rects = [
            FreeRect::new(0.0, 0.0, 10.0, 10.0),
            FreeRect::new(10.0, 0.0, 10.0, 10.0),
            FreeRect::new(5.0, 5.0, 10.0, 10.0),
        ];
        assert_eq!(find_overlaps(&rects, 0.0), vec![(0, 2), (1, 2)]);
    }
}
