use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// At most this many keywords are kept per poem (first found wins).
pub const MAX_KEYWORDS: usize = 30;

/// Common two-character function words that never make a given name.
pub const FUNCTION_WORDS: &[&str] = &[
    "之乎", "者也", "而已", "以为", "所以", "可以", "不可", "何以", "之于", "于是", "是以",
];

// Punctuation (any Unicode P category: ，。！？；：“”‘’、《》…) and whitespace
static RE_STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{P}\s]+").unwrap());

/// CJK Unified Ideographs, basic block as used for names.
pub fn is_han(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Extract two-character naming candidates from a poem's text.
///
/// Punctuation and whitespace are removed, then a two-character window
/// slides over what remains. A window is kept if both characters are Han,
/// it is not a function word, and it was not seen earlier in the poem.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let clean: Vec<char> = RE_STRIP.replace_all(text, "").chars().collect();

    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for pair in clean.windows(2) {
        if keywords.len() >= MAX_KEYWORDS {
            break;
        }
        if !pair.iter().all(|&c| is_han(c)) {
            continue;
        }
        let word: String = pair.iter().collect();
        if FUNCTION_WORDS.contains(&word.as_str()) {
            continue;
        }
        if seen.insert(word.clone()) {
            keywords.push(word);
        }
    }

    keywords
}
