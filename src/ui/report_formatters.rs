use colored::*;
use humansize::{format_size, BINARY};

use crate::core::health::{ComponentReport, Reading, Status, Unit};

fn colored_status(status: Status) -> ColoredString {
    match status {
        Status::Pass => "PASS".green().bold(),
        Status::Warn => "WARN".yellow().bold(),
        Status::Fail => "FAIL".red().bold(),
    }
}

/// Render a reading value in its unit; underivable values show as n/a
pub fn format_metric_value(value: Option<f64>, unit: Unit) -> String {
    match (value, unit) {
        (None, _) => "n/a".to_string(),
        (Some(v), Unit::Percentage) => format!("{:.1}%", v),
        (Some(v), Unit::Bytes) if v >= 0.0 => format_size(v as u64, BINARY),
        (Some(v), Unit::Bytes) => format!("{} B", v),
    }
}

fn print_reading(reading: &Reading) {
    println!(
        "  {:<6} {:>12}  {}",
        colored_status(reading.status),
        format_metric_value(reading.metric_value, reading.metric_unit),
        reading.metric_unit.as_str().dimmed()
    );

    if let Some(ref output) = reading.output {
        println!("         {}", output.yellow());
    }
}

pub fn print_report(report: &ComponentReport) {
    let title = report.title();
    println!("\n{} {}", title.bold().bright_cyan(), colored_status(report.status));
    println!("{}", "-".repeat(title.len() + 5));
    println!(
        "  {} v{}",
        report.description.dimmed(),
        report.version.dimmed()
    );

    for reading in &report.component_value {
        print_reading(reading);
    }
}

pub fn print_summary(reports: &[ComponentReport]) {
    let failing = reports.iter().filter(|r| !r.healthy()).count();

    println!();
    if failing == 0 {
        println!(
            "{} {}",
            "All health checks healthy".green().bold(),
            format!("({} total)", reports.len()).dimmed()
        );
    } else {
        println!(
            "{} {}",
            format!("{} health check(s) unhealthy", failing).red().bold(),
            format!("({} total)", reports.len()).dimmed()
        );
    }
}
