pub mod classify;
pub mod dataset;
pub mod emoji;
pub mod error;
pub mod formatting;
pub mod normalize;
pub mod preprocess;
pub mod types;


pub use classify::{UnicodeAnalysis, analyze_unicode, classify};
pub use dataset::{Dataset, DatasetSummary, Row, analyze_dataset_unicode, process_records};
pub use emoji::{remove_emojis, replace_emojis_with_text};
pub use error::{Error, Result};
pub use formatting::clean_formatting_chars;
pub use normalize::{normalize_unicode, normalize_unicode_str};
pub use preprocess::{
    PreprocessOptions, Preprocessor, TextPreprocessor, coerce_text, preprocess_text,
    preprocess_value,
};
pub use types::{Category, EmojiHandling, NormalizationForm};
