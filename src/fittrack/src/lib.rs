#[macro_use]
extern crate log;

pub mod kinds;
pub mod packages;

mod report;
pub use report::{OutputFormat, ReportOptions, ReportSummary, render, run_report};

pub use fittrack_algos as algos;
