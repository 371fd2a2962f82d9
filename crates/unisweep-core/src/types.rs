use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Semantic category of a non-ASCII character
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Emoji,
    Symbol,
    Formatting,
    Mark,
    Other,
}

impl Category {
    /// Categories in the order analysis results report them
    pub const ALL: [Category; 5] = [
        Category::Emoji,
        Category::Symbol,
        Category::Formatting,
        Category::Mark,
        Category::Other,
    ];

    /// Name of the analysis bucket this category fills
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Emoji => "emojis",
            Category::Symbol => "special_symbols",
            Category::Formatting => "formatting_chars",
            Category::Mark => "accented_chars",
            Category::Other => "other_unicode",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unicode normalization form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NormalizationForm {
    #[default]
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl NormalizationForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizationForm::Nfc => "NFC",
            NormalizationForm::Nfd => "NFD",
            NormalizationForm::Nfkc => "NFKC",
            NormalizationForm::Nfkd => "NFKD",
        }
    }
}

impl FromStr for NormalizationForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NFC" => Ok(NormalizationForm::Nfc),
            "NFD" => Ok(NormalizationForm::Nfd),
            "NFKC" => Ok(NormalizationForm::Nfkc),
            "NFKD" => Ok(NormalizationForm::Nfkd),
            _ => Err(Error::InvalidNormalizationForm(s.to_string())),
        }
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the pipeline does with emoji
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EmojiHandling {
    #[default]
    Keep,
    Remove,
    Replace,
}

impl EmojiHandling {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmojiHandling::Keep => "keep",
            EmojiHandling::Remove => "remove",
            EmojiHandling::Replace => "replace",
        }
    }
}

impl FromStr for EmojiHandling {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep" => Ok(EmojiHandling::Keep),
            "remove" => Ok(EmojiHandling::Remove),
            "replace" => Ok(EmojiHandling::Replace),
            _ => Err(Error::InvalidEmojiHandling(s.to_string())),
        }
    }
}

impl fmt::Display for EmojiHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
