use serde::{Deserialize, Serialize};
use unisweep_core::{EmojiHandling, NormalizationForm, PreprocessOptions};

fn default_remove_formatting() -> bool {
    true
}

fn default_normalize() -> bool {
    true
}

fn default_normalization_form() -> String {
    NormalizationForm::default().as_str().to_string()
}

fn default_emoji_handling() -> String {
    EmojiHandling::default().as_str().to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PreprocessConfig {
    #[serde(default = "default_remove_formatting")]
    pub remove_formatting: bool,
    #[serde(default = "default_normalize")]
    pub normalize: bool,
    /// One of NFC, NFD, NFKC, NFKD
    #[serde(default = "default_normalization_form")]
    pub normalization_form: String,
    /// One of keep, remove, replace
    #[serde(default = "default_emoji_handling")]
    pub emoji_handling: String,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            remove_formatting: default_remove_formatting(),
            normalize: default_normalize(),
            normalization_form: default_normalization_form(),
            emoji_handling: default_emoji_handling(),
        }
    }
}

impl PreprocessConfig {
    /// Validate the named form and emoji mode
    pub fn to_options(&self) -> unisweep_core::Result<PreprocessOptions> {
        Ok(PreprocessOptions {
            remove_formatting: self.remove_formatting,
            normalize: self.normalize,
            normalization_form: self.normalization_form.parse()?,
            emoji_handling: self.emoji_handling.parse()?,
        })
    }
}
