use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::emoji::{remove_emojis, replace_emojis_with_text};
use crate::formatting::clean_formatting_chars;
use crate::normalize::normalize_unicode;
use crate::types::{EmojiHandling, NormalizationForm};

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Which pipeline stages run and how
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreprocessOptions {
    pub remove_formatting: bool,
    pub normalize: bool,
    pub normalization_form: NormalizationForm,
    pub emoji_handling: EmojiHandling,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            remove_formatting: true,
            normalize: true,
            normalization_form: NormalizationForm::Nfc,
            emoji_handling: EmojiHandling::Keep,
        }
    }
}

impl PreprocessOptions {
    pub fn with_emoji_handling(mut self, emoji_handling: EmojiHandling) -> Self {
        self.emoji_handling = emoji_handling;
        self
    }
}

pub trait Preprocessor {
    fn process(&self, text: &str) -> String;

    /// Any cell value is accepted; non-strings are coerced first
    fn process_value(&self, value: &Value) -> String {
        self.process(&coerce_text(value))
    }
}

/// Pipeline with fixed options
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPreprocessor {
    options: PreprocessOptions,
}

impl TextPreprocessor {
    pub fn new(options: PreprocessOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }
}

impl Preprocessor for TextPreprocessor {
    fn process(&self, text: &str) -> String {
        preprocess_text(text, &self.options)
    }
}

/// Textual form of a cell value. Null becomes the empty string, strings are
/// taken as is, everything else uses its JSON rendering.
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Collapse whitespace runs into one space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Run formatting removal, normalization, emoji handling and whitespace
/// collapse, in that order.
pub fn preprocess_text(text: &str, options: &PreprocessOptions) -> String {
    let mut text = text.to_string();

    if options.remove_formatting {
        text = clean_formatting_chars(&text);
    }

    if options.normalize {
        text = normalize_unicode(&text, options.normalization_form);
    }

    text = match options.emoji_handling {
        EmojiHandling::Keep => text,
        EmojiHandling::Remove => remove_emojis(&text),
        EmojiHandling::Replace => replace_emojis_with_text(&text),
    };

    collapse_whitespace(&text)
}

pub fn preprocess_value(value: &Value, options: &PreprocessOptions) -> String {
    preprocess_text(&coerce_text(value), options)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_coerce_text() {
        assert_eq!(coerce_text(&json!("abc")), "abc");
        assert_eq!(coerce_text(&json!(42)), "42");
        assert_eq!(coerce_text(&json!(1.5)), "1.5");
        assert_eq!(coerce_text(&json!(true)), "true");
        assert_eq!(coerce_text(&Value::Null), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t\n b\u{3000}c  "), "a b c");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_stages_can_be_disabled() {
        let options = PreprocessOptions {
            remove_formatting: false,
            normalize: false,
            ..Default::default()
        };
        assert_eq!(
            preprocess_text("a\u{200B}b cafe\u{301}", &options),
            "a\u{200B}b cafe\u{301}"
        );
        assert_eq!(
            preprocess_text("a\u{200B}b cafe\u{301}", &PreprocessOptions::default()),
            "ab caf\u{e9}"
        );
    }

    #[test]
    fn test_normalization_form_is_honoured() {
        let options = PreprocessOptions {
            normalization_form: NormalizationForm::Nfkc,
            ..Default::default()
        };
        assert_eq!(preprocess_text("\u{FF21}\u{FB01}", &options), "Afi");
    }

    #[test]
    fn test_trait_object() {
        let preprocessor: Box<dyn Preprocessor> = Box::new(TextPreprocessor::new(
            PreprocessOptions::default().with_emoji_handling(EmojiHandling::Remove),
        ));
        assert_eq!(preprocessor.process(" hi 🔥 "), "hi");
        assert_eq!(preprocessor.process_value(&json!(7)), "7");
    }
}
