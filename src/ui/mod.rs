// UI and formatting module

pub mod report_formatters;

pub use report_formatters::{format_metric_value, print_report, print_summary};
