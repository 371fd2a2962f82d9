use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::classify::analyze_unicode;
use crate::emoji::{count_emoji_runs, has_emoji};
use crate::error::{Error, Result};
use crate::preprocess::{PreprocessOptions, coerce_text, preprocess_text};

pub type Row = Map<String, Value>;

/// In-memory table of records keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in order of first appearance
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        for row in &self.rows {
            for key in row.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
        columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.rows.iter().any(|row| row.contains_key(name))
    }

    /// Cell values of a column; `None` for null or missing cells
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Option<&'a Value>> + 'a {
        self.rows
            .iter()
            .map(move |row| row.get(name).filter(|value| !value.is_null()))
    }

    /// Copy of the dataset with `name` set from `values`, one per row
    pub fn with_column(&self, name: &str, values: Vec<Value>) -> Self {
        let rows = self
            .rows
            .iter()
            .zip(values)
            .map(|(row, value)| {
                let mut row = row.clone();
                row.insert(name.to_string(), value);
                row
            })
            .collect();

        Self { rows }
    }

    fn require_column(&self, name: &str) -> Result<()> {
        if self.is_empty() || self.has_column(name) {
            Ok(())
        } else {
            Err(Error::MissingColumn(name.to_string()))
        }
    }
}

impl From<Vec<Row>> for Dataset {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

/// Derived per-record fields for one raw cell
fn record_analysis(raw: Option<&Value>) -> (Value, Value, Value) {
    let Some(raw) = raw else {
        return (Value::Bool(false), Value::from(0), Value::Array(vec![]));
    };

    let text = coerce_text(raw);
    let categories = analyze_unicode(&text)
        .non_empty_categories()
        .into_iter()
        .map(|c| Value::from(c.as_str()))
        .collect();

    (
        Value::Bool(has_emoji(&text)),
        Value::from(count_emoji_runs(&text)),
        Value::Array(categories),
    )
}

/// Run the preprocessing pipeline over `column` and return a new dataset with
/// `{column}_processed` appended. With `include_analysis`, also appends
/// `{column}_has_emojis`, `{column}_emoji_count` and
/// `{column}_unicode_categories`, all computed on the raw text.
///
/// Null or missing cells get a null processed value and empty analysis.
pub fn process_records(
    dataset: &Dataset,
    column: &str,
    options: &PreprocessOptions,
    include_analysis: bool,
) -> Result<Dataset> {
    dataset.require_column(column)?;

    let processed: Vec<Value> = dataset
        .column(column)
        .map(|cell| match cell {
            Some(value) => Value::String(preprocess_text(&coerce_text(value), options)),
            None => Value::Null,
        })
        .collect();

    let mut output = dataset.with_column(&format!("{column}_processed"), processed);

    if include_analysis {
        let mut has_emojis = Vec::with_capacity(dataset.len());
        let mut emoji_counts = Vec::with_capacity(dataset.len());
        let mut categories = Vec::with_capacity(dataset.len());

        for cell in dataset.column(column) {
            let (has, count, cats) = record_analysis(cell);
            has_emojis.push(has);
            emoji_counts.push(count);
            categories.push(cats);
        }

        output = output
            .with_column(&format!("{column}_has_emojis"), has_emojis)
            .with_column(&format!("{column}_emoji_count"), emoji_counts)
            .with_column(&format!("{column}_unicode_categories"), categories);
    }

    tracing::debug!(
        "Processed {} records of column '{}' (emoji: {}, analysis: {})",
        dataset.len(),
        column,
        options.emoji_handling,
        include_analysis
    );

    Ok(output)
}

/// Unicode and emoji prevalence over one column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// All records, including null ones
    pub total: usize,
    pub with_unicode: usize,
    pub with_emojis: usize,
    pub unique_chars: BTreeSet<char>,
    pub unique_emojis: BTreeSet<char>,
}

impl DatasetSummary {
    pub fn unicode_percentage(&self) -> f64 {
        percentage(self.with_unicode, self.total)
    }

    pub fn emoji_percentage(&self) -> f64 {
        percentage(self.with_emojis, self.total)
    }

    /// First `limit` distinct emoji in code point order
    pub fn sample_emojis(&self, limit: usize) -> Vec<char> {
        self.unique_emojis.iter().copied().take(limit).collect()
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Aggregate Unicode statistics over `column`. Null cells are skipped but
/// still count towards the total.
pub fn analyze_dataset_unicode(dataset: &Dataset, column: &str) -> Result<DatasetSummary> {
    dataset.require_column(column)?;

    let mut summary = DatasetSummary {
        total: dataset.len(),
        ..Default::default()
    };

    for value in dataset.column(column).flatten() {
        let analysis = analyze_unicode(&coerce_text(value));

        if !analysis.is_empty() {
            summary.with_unicode += 1;
        }

        if !analysis.emojis.is_empty() {
            summary.with_emojis += 1;
            summary.unique_emojis.extend(analysis.emojis.iter().copied());
        }

        summary.unique_chars.extend(analysis.all_chars());
    }

    tracing::info!(
        "Analyzed {} records: {} with unicode, {} with emoji",
        summary.total,
        summary.with_unicode,
        summary.with_emojis
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn dataset(values: Vec<Value>) -> Dataset {
        values
            .into_iter()
            .map(|v| {
                let mut row = Row::new();
                row.insert("Text".to_string(), v);
                row
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_column_treats_null_and_missing_as_absent() {
        let mut rows = dataset(vec![json!("a"), Value::Null]).into_rows();
        rows.push(Row::new());
        let data = Dataset::new(rows);

        let cells: Vec<_> = data.column("Text").collect();
        assert_eq!(cells, vec![Some(&json!("a")), None, None]);
        assert_eq!(data.columns(), vec!["Text".to_string()]);
    }

    #[test]
    fn test_with_column_copies() {
        let data = dataset(vec![json!("a"), json!("b")]);
        let extended = data.with_column("n", vec![json!(1), json!(2)]);

        assert!(!data.has_column("n"));
        assert_eq!(extended.rows()[1]["n"], json!(2));
        assert_eq!(extended.rows()[1]["Text"], json!("b"));
    }

    #[test]
    fn test_missing_column() {
        let data = dataset(vec![json!("a")]);
        assert_eq!(
            process_records(&data, "Body", &PreprocessOptions::default(), false),
            Err(Error::MissingColumn("Body".to_string()))
        );
        assert!(analyze_dataset_unicode(&data, "Body").is_err());
        assert!(analyze_dataset_unicode(&Dataset::default(), "Body").is_ok());
    }

    #[test]
    fn test_percentages() {
        let summary = DatasetSummary {
            total: 4,
            with_unicode: 1,
            with_emojis: 3,
            ..Default::default()
        };
        assert_eq!(summary.unicode_percentage(), 25.0);
        assert_eq!(summary.emoji_percentage(), 75.0);
        assert_eq!(DatasetSummary::default().emoji_percentage(), 0.0);
    }
}
