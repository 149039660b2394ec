use crate::summary::Summary;

/// Plain-text report: one line per [`ReportLine`](crate::ReportLine), newline-terminated.
pub fn format_text(summary: &Summary) -> String {
    let mut out = String::new();
    for line in summary.lines() {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}
