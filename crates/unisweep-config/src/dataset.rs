use serde::{Deserialize, Serialize};

fn default_text_column() -> String {
    "Text".to_string()
}

fn default_create_analysis_columns() -> bool {
    false
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    #[serde(default = "default_text_column")]
    pub text_column: String,
    /// Append has-emoji, emoji-count and category columns when processing
    #[serde(default = "default_create_analysis_columns")]
    pub create_analysis_columns: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            text_column: default_text_column(),
            create_analysis_columns: default_create_analysis_columns(),
        }
    }
}
