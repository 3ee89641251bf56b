//! Output formatting and report generation

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{BatchExport, BatchReport, ScreeningReport, SkippedDocument};
