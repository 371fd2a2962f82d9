#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid normalization form: {0} (expected NFC, NFD, NFKC or NFKD)")]
    InvalidNormalizationForm(String),

    #[error("Invalid emoji handling: {0} (expected keep, remove or replace)")]
    InvalidEmojiHandling(String),

    #[error("Column not found: {0}")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, Error>;
