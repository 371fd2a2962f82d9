/// Invisible directional and joining controls that carry no meaning for
/// downstream text processing.
pub const FORMATTING_CHARS: &[char] = &[
    '\u{202A}', // Left-to-right embedding
    '\u{202B}', // Right-to-left embedding
    '\u{202C}', // Pop directional formatting
    '\u{202D}', // Left-to-right override
    '\u{202E}', // Right-to-left override
    '\u{2066}', // Left-to-right isolate
    '\u{2067}', // Right-to-left isolate
    '\u{2068}', // First strong isolate
    '\u{2069}', // Pop directional isolate
    '\u{200B}', // Zero-width space
    '\u{200C}', // Zero-width non-joiner
    '\u{200D}', // Zero-width joiner
    '\u{FEFF}', // BOM / zero-width no-break space
];

pub fn is_formatting_char(c: char) -> bool {
    FORMATTING_CHARS.contains(&c)
}

/// Remove every formatting character from `text`.
pub fn clean_formatting_chars(text: &str) -> String {
    if !text.contains(FORMATTING_CHARS) {
        return text.to_string();
    }

    text.chars().filter(|c| !is_formatting_char(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_every_formatting_char() {
        let noisy: String = FORMATTING_CHARS.iter().collect();
        assert_eq!(clean_formatting_chars(&format!("a{noisy}b")), "ab");
    }

    #[test]
    fn test_keeps_other_text() {
        assert_eq!(clean_formatting_chars(""), "");
        assert_eq!(clean_formatting_chars("caf\u{e9} \u{2060}"), "caf\u{e9} \u{2060}");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "he\u{200B}llo",
            "\u{202E}reversed\u{202C}",
            "\u{FEFF}\u{FEFF}",
            "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}",
        ];
        for s in samples {
            let once = clean_formatting_chars(s);
            assert_eq!(clean_formatting_chars(&once), once);
        }
    }
}
