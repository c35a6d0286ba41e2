//! Output formatting utilities

use crate::application::{ConvertReport, QualifyReport};

/// Summary line for a conversion run
pub fn format_convert_summary(report: &ConvertReport) -> String {
    if report.converted.is_empty() {
        return "No HTML documents found".to_string();
    }

    if report.dry_run {
        format!(
            "Dry run: {} document(s) would be converted.",
            report.converted.len()
        )
    } else {
        format!("Converted {} document(s).", report.converted.len())
    }
}

/// Summary line for a qualification run
pub fn format_qualify_summary(report: &QualifyReport) -> String {
    if report.scanned_files == 0 {
        return "No help documents found".to_string();
    }

    if report.dry_run {
        format!(
            "Dry run: {} of {} file(s) would be updated with {} tag(s).",
            report.changed_files, report.scanned_files, report.total_replacements
        )
    } else {
        format!(
            "Qualified {} tag(s) in {} of {} file(s).",
            report.total_replacements, report.changed_files, report.scanned_files
        )
    }
}
