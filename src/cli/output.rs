//! Output formatting utilities

use crate::application::ConversionReport;

/// Format a conversion report for display
pub fn format_conversion_report(report: &ConversionReport) -> String {
    let mut output = String::new();
    for doc in &report.documents {
        output.push_str(&format!(
            "{} -> {}",
            doc.input.display(),
            doc.output.display()
        ));
        if let Some(title) = &doc.title {
            output.push_str(&format!("  \"{}\"", title));
        }
        if doc.tag_count > 0 {
            output.push_str(&format!("  [{} tags]", doc.tag_count));
        }
        output.push('\n');
    }

    let count = report.documents.len();
    output.push_str(&format!(
        "Converted {} document{}\n",
        count,
        if count == 1 { "" } else { "s" }
    ));
    output
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}\n", tag));
    }

    output
}
