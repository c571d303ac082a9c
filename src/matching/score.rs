//! Candidate admissibility scoring.
//!
//! A candidate either passes or it does not - this is a binary filter, not a
//! numeric rank. Containment (rather than equality) is used in both
//! directions because channel names are an imperfect proxy for artist names:
//! "AdeleVEVO" or "Adele - Topic" should still match "Adele". The title
//! containment rule catches uploads by curator/compilation channels where
//! the channel name has nothing to do with the artist.

use crate::domain::{Candidate, MatchReason, NormalizedTitle};

/// Decide whether `candidate` is admissible, and why.
///
/// Channel/artist overlap is checked before title containment; a candidate
/// that satisfies both is reported as [`MatchReason::ChannelArtistOverlap`].
/// Returns `None` for a candidate that satisfies neither rule.
pub fn match_reason(
    candidate: &Candidate,
    normalized: &NormalizedTitle,
    channel: &str,
) -> Option<MatchReason> {
    let artist = candidate.primary_artist.to_lowercase();
    let name = candidate.name.to_lowercase();
    let channel = channel.to_lowercase();
    let title = normalized.cleaned_text.to_lowercase();

    if channel.contains(&artist) || artist.contains(&channel) {
        return Some(MatchReason::ChannelArtistOverlap);
    }

    if title.contains(&artist) && title.contains(&name) {
        return Some(MatchReason::TitleContainsBoth);
    }

    None
}

/// Binary form of [`match_reason`].
pub fn passes(candidate: &Candidate, normalized: &NormalizedTitle, channel: &str) -> bool {
    match_reason(candidate, normalized, channel).is_some()
}
