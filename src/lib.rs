//! panel-layout - Sheet layout calculation for panel cutting jobs.
//!
//! Lays rectangular cut pieces onto standard material sheets with a
//! first-fit guillotine packer and reports how many sheets a job needs,
//! where each piece goes, and how much material is used or wasted.
//!
//! # Example
//!
//! ```
//! use panel_layout::{calculate_layout, CutSpec, SheetSize};
//!
//! let sheet = SheetSize::new(2440.0, 1220.0);
//! let specs = [
//!     CutSpec::new(1200.0, 900.0, 1, 3.0),
//!     CutSpec::new(500.0, 900.0, 2, 3.0),
//! ];
//! let layout = calculate_layout(sheet, &specs).unwrap();
//! assert_eq!(layout.sheet_count, 1);
//! assert_eq!(layout.total_pieces, 3);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod packing;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use config::LayoutConfig;
pub use error::{ErrorKind, LayoutError, Result};
pub use model::{CutSpec, FreeRect, Layout, PlacedPiece, SheetLayout, SheetSize, UnitPiece};
pub use parser::{parse_job_file, parse_job_str, CutRequest, Job, SheetRequest};
pub use validation::{validate_job, validate_layout, ValidationResult};

/// Compute a multi-sheet layout for a cut list.
///
/// Pipeline:
/// 1. Check the sheet dimensions
/// 2. Expand specs into unit pieces (fails atomically on any oversized spec)
/// 3. Sort tallest first
/// 4. Pack onto sheets
/// 5. Aggregate metrics
///
/// The computation is pure; every call starts from scratch.
pub fn calculate_layout(sheet: SheetSize, specs: &[CutSpec]) -> Result<Layout> {
    sheet.validate()?;

    if specs.is_empty() {
        return Err(LayoutError::NoValidPieces);
    }

    let mut pieces = packing::expand_pieces(sheet, specs)?;
    packing::sort_pieces(&mut pieces);
    let sheets = packing::pack_pieces(sheet, &pieces)?;
    let layout = packing::aggregate(sheet, sheets, specs);

    tracing::info!(
        "Packed {} piece(s) onto {} sheet(s) of {} ({:.1}% utilization)",
        layout.total_pieces,
        layout.sheet_count,
        sheet,
        layout.total_utilization_percent
    );

    Ok(layout)
}

/// Compute a layout for a job as entered, skipping incomplete cut rows.
///
/// Errors name cuts by their row in the job, not by their position among
/// the complete rows.
pub fn calculate_job(job: &Job) -> Result<Layout> {
    let sheet = job.sheet_size()?;

    for index in job.incomplete_indices() {
        tracing::warn!("Cut {}: incomplete row skipped", index + 1);
    }

    let (rows, specs): (Vec<usize>, Vec<CutSpec>) = job.valid_specs().into_iter().unzip();

    calculate_layout(sheet, &specs).map_err(|err| match err {
        LayoutError::OversizedPiece {
            index,
            length,
            width,
            kerf,
            sheet_width,
            sheet_height,
        } => LayoutError::OversizedPiece {
            index: rows[index],
            length,
            width,
            kerf,
            sheet_width,
            sheet_height,
        },
        LayoutError::InvalidCut {
            index,
            field,
            value,
        } => LayoutError::InvalidCut {
            index: rows[index],
            field,
            value,
        },
        other => other,
    })
}

/// Load a job file and compute its layout.
pub fn calculate_job_file(path: &std::path::Path) -> Result<Layout> {
    let job = parse_job_file(path)?;
    tracing::info!("Calculating '{}'", job.display_name());
    calculate_job(&job)
}
