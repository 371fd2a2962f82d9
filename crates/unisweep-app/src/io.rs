use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, bail};
use unisweep_core::{Dataset, Row};

/// Parse records from a JSON array of objects or from JSON Lines
pub fn parse_dataset(content: &str) -> anyhow::Result<Dataset> {
    if content.trim_start().starts_with('[') {
        let rows: Vec<Row> = serde_json::from_str(content).context("parsing JSON array")?;
        return Ok(Dataset::new(rows));
    }

    let mut rows = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<serde_json::Value>(line)
            .with_context(|| format!("parsing line {}", index + 1))?
        {
            serde_json::Value::Object(row) => rows.push(row),
            other => bail!("line {}: expected an object, got {}", index + 1, other),
        }
    }

    Ok(Dataset::new(rows))
}

pub fn read_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let dataset = parse_dataset(&content)?;
    tracing::debug!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// One JSON object per line
pub fn write_json_lines(dataset: &Dataset, mut writer: impl Write) -> anyhow::Result<()> {
    for row in dataset.rows() {
        serde_json::to_writer(&mut writer, row)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
