use crate::types::SummaryResult;

/// Format a summary as Markdown
pub fn format_summary_markdown(summary: &SummaryResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Summary of: {}\n\n", summary.title));
    output.push_str(&format!("Original video: {}\n\n", summary.original_video_url));
    output.push_str(&format!(
        "Video length: {} minutes\n\n",
        summary.duration_in_minutes
    ));

    output.push_str("## Summary\n\n");
    output.push_str(&summary.summary_text);
    output.push_str("\n\n");

    output.push_str("## Key Points\n\n");
    for point in &summary.key_points {
        output.push_str(&format!("- {}\n", point));
    }
    output.push('\n');

    output.push_str(&format!(
        "*Transcript length: {} words*\n",
        summary.transcript_length
    ));

    output
}
