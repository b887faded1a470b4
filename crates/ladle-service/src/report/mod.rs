//! Sales reporting.

pub mod sales;

pub use sales::{ReportGranularity, SalesReport, SalesReportService};
