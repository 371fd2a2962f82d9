//! Emoji detection and substitution.
//!
//! Everything that decides "is this an emoji" goes through [`EMOJI_RANGES`]:
//! single-character classification and run matching both read from it.
//! The table is a subset of the Unicode emoji blocks (Symbols and Pictographs
//! Extended-A is not in it); widening it changes the counts reported by
//! dataset analysis.

use once_cell::sync::Lazy;
use regex::Regex;

/// Code point ranges treated as emoji, inclusive.
pub const EMOJI_RANGES: &[(char, char)] = &[
    ('\u{1F600}', '\u{1F64F}'), // Emoticons
    ('\u{1F300}', '\u{1F5FF}'), // Symbols & pictographs
    ('\u{1F680}', '\u{1F6FF}'), // Transport & map symbols
    ('\u{1F1E0}', '\u{1F1FF}'), // Flags (regional indicators)
    ('\u{1F900}', '\u{1F9FF}'), // Supplemental symbols & pictographs
    ('\u{2600}', '\u{26FF}'),   // Miscellaneous symbols
    ('\u{2700}', '\u{27BF}'),   // Dingbats
];

/// Placeholder for emoji that have no entry in [`EMOJI_REPLACEMENTS`].
pub const GENERIC_EMOJI_TAG: &str = "[emoji]";

/// Emoji and the tag each one becomes, applied top to bottom.
///
/// Multi-code-point sequences come first so that none of their members is
/// consumed by a shorter entry (the pride flag ends in a rainbow).
pub const EMOJI_REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}", "[pride_flag]"),
    ("\u{1F3F3}\u{FE0F}\u{200D}\u{26A7}\u{FE0F}", "[trans_flag]"),
    ("\u{2600}\u{FE0F}", "[sun]"),
    ("\u{2744}\u{FE0F}", "[snowflake]"),
    ("🎨", "[art]"),
    ("💜", "[heart]"),
    ("🔞", "[adult]"),
    ("🌙", "[moon]"),
    ("☕", "[coffee]"),
    ("🐂", "[bull]"),
    ("✨", "[sparkles]"),
    ("💤", "[sleep]"),
    ("🍋", "[lemon]"),
    ("🔥", "[fire]"),
    ("⭐", "[star]"),
    ("🌟", "[glowing_star]"),
    ("💫", "[dizzy]"),
    ("🎯", "[target]"),
    ("🚀", "[rocket]"),
    ("💎", "[diamond]"),
    ("🎪", "[circus]"),
    ("🌈", "[rainbow]"),
    ("🎃", "[pumpkin]"),
    ("🎄", "[christmas_tree]"),
    ("💘", "[cupid]"),
    ("🎊", "[confetti]"),
    ("🌸", "[cherry_blossom]"),
    ("🍂", "[fallen_leaves]"),
    ("🎮", "[video_game]"),
    ("🐾", "[paw_prints]"),
];

/// Matches maximal runs of emoji-range code points.
pub static EMOJI_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let class: String = EMOJI_RANGES
        .iter()
        .map(|(start, end)| format!(r"\x{{{:X}}}-\x{{{:X}}}", *start as u32, *end as u32))
        .collect();
    Regex::new(&format!("[{class}]+")).expect("emoji range table builds a valid pattern")
});

pub fn is_emoji_char(c: char) -> bool {
    EMOJI_RANGES
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&c))
}

pub fn has_emoji(text: &str) -> bool {
    EMOJI_PATTERN.is_match(text)
}

/// Number of emoji runs; adjacent emoji count once.
pub fn count_emoji_runs(text: &str) -> usize {
    EMOJI_PATTERN.find_iter(text).count()
}

pub fn find_emoji_runs(text: &str) -> Vec<&str> {
    EMOJI_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Delete every emoji run.
pub fn remove_emojis(text: &str) -> String {
    EMOJI_PATTERN.replace_all(text, "").into_owned()
}

/// Replace known emoji with their tag, then any remaining run with
/// [`GENERIC_EMOJI_TAG`]. Tags are padded with one space on each side.
pub fn replace_emojis_with_text(text: &str) -> String {
    let mut text = text.to_string();

    for &(emoji, tag) in EMOJI_REPLACEMENTS {
        if text.contains(emoji) {
            text = text.replace(emoji, &format!(" {tag} "));
        }
    }

    let generic = format!(" {GENERIC_EMOJI_TAG} ");
    EMOJI_PATTERN
        .replace_all(&text, regex::NoExpand(&generic))
        .into_owned()
}
