use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::emoji::is_emoji_char;
use crate::formatting::is_formatting_char;
use crate::types::Category;

static MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{M}$").expect("mark pattern is valid"));

static SYMBOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Sm}\p{Sc}\p{Sk}\p{So}]$").expect("symbol pattern is valid"));

fn matches_char(pattern: &Regex, c: char) -> bool {
    let mut buf = [0u8; 4];
    pattern.is_match(c.encode_utf8(&mut buf))
}

/// Classify a single character. ASCII is never classified.
///
/// Checks run in a fixed order: formatting set, emoji ranges, combining
/// marks, symbols. A character satisfying several takes the first.
pub fn classify(c: char) -> Option<Category> {
    if c.is_ascii() {
        return None;
    }

    let category = if is_formatting_char(c) {
        Category::Formatting
    } else if is_emoji_char(c) {
        Category::Emoji
    } else if matches_char(&MARK, c) {
        Category::Mark
    } else if matches_char(&SYMBOL, c) {
        Category::Symbol
    } else {
        Category::Other
    };

    Some(category)
}

/// Distinct non-ASCII characters of a text, bucketed by [`Category`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnicodeAnalysis {
    pub emojis: BTreeSet<char>,
    pub special_symbols: BTreeSet<char>,
    pub formatting_chars: BTreeSet<char>,
    pub accented_chars: BTreeSet<char>,
    pub other_unicode: BTreeSet<char>,
}

impl UnicodeAnalysis {
    pub fn get(&self, category: Category) -> &BTreeSet<char> {
        match category {
            Category::Emoji => &self.emojis,
            Category::Symbol => &self.special_symbols,
            Category::Formatting => &self.formatting_chars,
            Category::Mark => &self.accented_chars,
            Category::Other => &self.other_unicode,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut BTreeSet<char> {
        match category {
            Category::Emoji => &mut self.emojis,
            Category::Symbol => &mut self.special_symbols,
            Category::Formatting => &mut self.formatting_chars,
            Category::Mark => &mut self.accented_chars,
            Category::Other => &mut self.other_unicode,
        }
    }

    /// True when the text had no non-ASCII characters
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_empty())
    }

    pub fn non_empty_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| !self.get(*c).is_empty())
            .collect()
    }

    pub fn all_chars(&self) -> BTreeSet<char> {
        Category::ALL
            .iter()
            .flat_map(|c| self.get(*c).iter().copied())
            .collect()
    }

    pub fn total_distinct(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}

/// Classify every non-ASCII character of `text`.
pub fn analyze_unicode(text: &str) -> UnicodeAnalysis {
    let mut analysis = UnicodeAnalysis::default();

    for (c, category) in text.chars().filter_map(|c| classify(c).map(|cat| (c, cat))) {
        analysis.get_mut(category).insert(c);
    }

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_not_classified() {
        for c in ['a', 'Z', '0', ' ', '~', '\u{7F}', '\0'] {
            assert_eq!(classify(c), None);
        }
    }

    #[test]
    fn test_classification_order() {
        assert_eq!(classify('\u{200D}'), Some(Category::Formatting));
        assert_eq!(classify('\u{FEFF}'), Some(Category::Formatting));
        assert_eq!(classify('🔥'), Some(Category::Emoji));
        // Dingbat and misc symbol blocks are emoji ranges even though So
        assert_eq!(classify('✨'), Some(Category::Emoji));
        assert_eq!(classify('☕'), Some(Category::Emoji));
        assert_eq!(classify('\u{301}'), Some(Category::Mark));
        assert_eq!(classify('\u{FE0F}'), Some(Category::Mark));
        assert_eq!(classify('€'), Some(Category::Symbol));
        assert_eq!(classify('±'), Some(Category::Symbol));
        assert_eq!(classify('⭐'), Some(Category::Symbol));
        assert_eq!(classify('\u{e9}'), Some(Category::Other));
        assert_eq!(classify('日'), Some(Category::Other));
        // Format (Cf) characters outside the fixed set fall through
        assert_eq!(classify('\u{2060}'), Some(Category::Other));
    }

    #[test]
    fn test_empty_input() {
        let analysis = analyze_unicode("");
        assert!(analysis.is_empty());
        assert_eq!(analysis.total_distinct(), 0);
        assert!(analysis.non_empty_categories().is_empty());
    }

    #[test]
    fn test_deduplicates() {
        let analysis = analyze_unicode("🔥🔥 🔥 €€");
        assert_eq!(analysis.emojis, BTreeSet::from(['🔥']));
        assert_eq!(analysis.special_symbols, BTreeSet::from(['€']));
        assert_eq!(
            analysis.non_empty_categories(),
            vec![Category::Emoji, Category::Symbol]
        );
    }

    #[test]
    fn test_cafe_decomposed() {
        let analysis = analyze_unicode("cafe\u{301}");
        assert_eq!(analysis.accented_chars, BTreeSet::from(['\u{301}']));
        assert!(analysis.emojis.is_empty());
        assert!(analysis.special_symbols.is_empty());
        assert!(analysis.formatting_chars.is_empty());
        assert!(analysis.other_unicode.is_empty());
    }

    #[test]
    fn test_cafe_precomposed() {
        let analysis = analyze_unicode("caf\u{e9}");
        assert_eq!(analysis.other_unicode, BTreeSet::from(['\u{e9}']));
        assert!(analysis.accented_chars.is_empty());
    }

    #[test]
    fn test_partition_is_exclusive() {
        let text = "H\u{e9}llo\u{200B} w\u{301}orld 🔥✨ € ≠ 日本 \u{202E}x\u{1F1EF}\u{1F1F5}";
        let analysis = analyze_unicode(text);
        let all = analysis.all_chars();

        assert_eq!(all.len(), analysis.total_distinct());
        for c in text.chars().filter(|c| !c.is_ascii()) {
            let hits = Category::ALL
                .iter()
                .filter(|cat| analysis.get(**cat).contains(&c))
                .count();
            assert_eq!(hits, 1, "{c:?}");
        }
    }

    #[test]
    fn test_serializes_with_bucket_names() {
        let analysis = analyze_unicode("🔥");
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["emojis"], serde_json::json!(["🔥"]));
        assert_eq!(value["other_unicode"], serde_json::json!([]));
    }
}
