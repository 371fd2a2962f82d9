use unisweep_core::{Dataset, DatasetSummary};

const SAMPLE_EMOJIS: usize = 20;

/// Human-readable summary of a dataset analysis
pub fn summary_lines(source: &str, dataset: &Dataset, summary: &DatasetSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Analyzing unicode content in {source}"),
        format!(
            "Dataset shape: ({}, {})",
            dataset.len(),
            dataset.columns().len()
        ),
        String::new(),
        "=".repeat(50),
        "Unicode Statistics:".to_string(),
        format!(
            "- Texts with unicode characters: {}/{} ({:.1}%)",
            summary.with_unicode,
            summary.total,
            summary.unicode_percentage()
        ),
        format!(
            "- Texts with emojis: {}/{} ({:.1}%)",
            summary.with_emojis,
            summary.total,
            summary.emoji_percentage()
        ),
        format!("- Unique unicode characters found: {}", summary.unique_chars.len()),
        format!("- Unique emojis found: {}", summary.unique_emojis.len()),
    ];

    if !summary.unique_emojis.is_empty() {
        let sample: String = summary.sample_emojis(SAMPLE_EMOJIS).into_iter().collect();
        lines.push(String::new());
        lines.push(format!("Sample emojis: {sample}"));
    }

    lines
}
