//! Rendering module for turning analyses and diff results into text or JSON.

pub mod analysis;
mod json;
mod options;
mod report;

pub use analysis::AnalysisReport;
pub use json::{to_json, JsonFormat};
pub use options::ReportOptions;
pub use report::DiffReport;
