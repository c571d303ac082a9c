//! Video title normalization.
//!
//! Video platforms decorate music titles with boilerplate ("[Official
//! Video]", "(Official Audio)", bracketed channel tags) that hurts catalog
//! search relevance. This module strips that noise and, when the title uses
//! the conventional "Artist - Song" form, reorders it to "Song Artist",
//! which searches better than the raw title.
//!
//! Stripping is deliberately aggressive: step 3 removes ANY remaining
//! bracketed or parenthesized span, including legitimate disambiguators like
//! "(Live)" or "(Remix)". This is accepted lossy behavior, not a bug.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::NormalizedTitle;

/// Known boilerplate markers, matched case-insensitively in both bracket styles
static OFFICIAL_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\[Official (Video|Audio|Music Video|Lyric Video)\]|\(Official (Video|Audio|Music Video|Lyric Video)\)",
    )
    .expect("valid regex")
});

/// Standalone boilerplate words, word-boundary matched even outside brackets
static STANDALONE_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(Official|Video|Audio)\b").expect("valid regex"));

/// Any remaining bracketed span, regardless of content
static ANY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]|\([^)]*\)").expect("valid regex"));

/// "ft"/"feat" markers, normalized to the literal "feat."
static FEATURING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bft\b|\bfeat\b").expect("valid regex"));

/// Normalize a raw video title.
///
/// Total over all inputs; never panics and never returns an error. An
/// empty or whitespace-only title yields an empty `cleaned_text` with both
/// guesses `None`. If a non-empty title strips down to nothing, the trimmed
/// original is kept so the caller always has something to search with.
pub fn normalize(raw_title: &str) -> NormalizedTitle {
    let stripped = OFFICIAL_MARKERS.replace_all(raw_title, "");
    let stripped = STANDALONE_WORDS.replace_all(&stripped, "");
    let stripped = ANY_BRACKETS.replace_all(&stripped, "");
    let stripped = FEATURING.replace_all(&stripped, "feat.");

    let collapsed = collapse_whitespace(&stripped);

    // Aggressive stripping must not leave the caller with nothing
    let cleaned = if collapsed.is_empty() {
        raw_title.trim().to_string()
    } else {
        collapsed
    };

    // "Artist - Song" convention: exactly one delimiter, reorder for search
    match split_once_exact(&cleaned, " - ") {
        Some((artist, song)) => NormalizedTitle {
            cleaned_text: format!("{song} {artist}"),
            song_guess: Some(song.to_string()),
            artist_guess: Some(artist.to_string()),
        },
        None => NormalizedTitle {
            cleaned_text: cleaned,
            song_guess: None,
            artist_guess: None,
        },
    }
}

/// Collapse runs of whitespace to single spaces and trim the ends.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split on `delim` only when it occurs exactly once.
fn split_once_exact<'a>(s: &'a str, delim: &str) -> Option<(&'a str, &'a str)> {
    if s.matches(delim).count() == 1 {
        s.split_once(delim)
    } else {
        None
    }
}
