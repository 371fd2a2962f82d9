use serde::{Deserialize, Serialize};

use self::dataset::DatasetConfig;
use self::preprocess::PreprocessConfig;

pub mod dataset;
pub mod preprocess;

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub preprocess: PreprocessConfig,
    pub dataset: DatasetConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}
