use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::types::NormalizationForm;

/// Apply a standard Unicode normalization form.
pub fn normalize_unicode(text: &str, form: NormalizationForm) -> String {
    match form {
        NormalizationForm::Nfc => text.nfc().collect(),
        NormalizationForm::Nfd => text.nfd().collect(),
        NormalizationForm::Nfkc => text.nfkc().collect(),
        NormalizationForm::Nfkd => text.nfkd().collect(),
    }
}

/// Like [`normalize_unicode`], with the form given by name ("NFC", "NFKD", ...).
pub fn normalize_unicode_str(text: &str, form: &str) -> Result<String> {
    let form = form.parse::<NormalizationForm>()?;
    Ok(normalize_unicode(text, form))
}
