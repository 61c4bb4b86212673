//! Title normalization.
//!
//! Video titles carry a lot of noise that the catalog search chokes on:
//! the channel name, "(Official Video)" style markers, and text in other
//! scripts. This strips it down to something searchable.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};
use unicode_script::{Script, UnicodeScript};

/// Suffix the video platform appends to auto-generated artist channels.
const TOPIC_SUFFIX: &str = "- Topic";

/// Promotional tokens removed after the artist name, in this order.
pub const NOISE_TOKENS: [&str; 8] = [
    "(", ")", "Official", "Lyrics", "Lyric", "Video", "Audio", "MV",
];

/// Characters that survive filtering regardless of script.
const KEPT_PUNCTUATION: [char; 5] = [' ', '.', ',', '?', '!'];

/// Ordered list of literal substrings to strip from a title.
///
/// Removal is sequential, so when tokens overlap ("Lyrics" / "Lyric") the
/// earlier entry wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    tokens: Vec<String>,
}

impl FilterSet {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// The artist name followed by [`NOISE_TOKENS`].
    pub fn for_artist(artist: &str) -> Self {
        let mut tokens = Vec::with_capacity(NOISE_TOKENS.len() + 1);
        tokens.push(normalize_artist(artist));
        tokens.extend(NOISE_TOKENS.iter().map(|t| t.to_string()));
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Remove every literal occurrence of each token, first to last.
    pub fn apply(&self, raw: &str) -> String {
        self.tokens
            .iter()
            .filter(|token| !token.is_empty())
            .fold(raw.to_string(), |acc, token| acc.replace(token.as_str(), ""))
    }
}

/// Strip the "- Topic" channel suffix and surrounding whitespace.
pub fn normalize_artist(author: &str) -> String {
    author.replace(TOPIC_SUFFIX, "").trim().to_string()
}

/// Whether a character survives script filtering.
///
/// Only letters (general category L*) count. Digits, symbols, letter-like
/// numerals such as Ⅻ and circled letters such as Ⓐ are dropped even though
/// they belong to the Latin or Common script.
pub fn is_retained(c: char) -> bool {
    if KEPT_PUNCTUATION.contains(&c) {
        return true;
    }
    is_letter(c) && matches!(c.script(), Script::Latin | Script::Common)
}

fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Drop every character that fails [`is_retained`].
pub fn retain_latin(s: &str) -> String {
    s.chars().filter(|&c| is_retained(c)).collect()
}

/// Normalize a raw video title for catalog search.
pub fn normalize_title(raw_title: &str, artist: &str) -> String {
    let stripped = FilterSet::for_artist(artist).apply(raw_title);
    retain_latin(&stripped).trim().to_string()
}
