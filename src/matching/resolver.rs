//! Best-match resolution over an ordered candidate list.

use tracing::debug;

use crate::domain::{Candidate, MatchReason, MatchResult, SourceDescriptor};
use crate::matching::{normalize, score};

/// Pick the best candidate for a scraped source, or `NoMatch` when there are
/// no candidates at all.
///
/// Candidates are scanned in their given order (the provider's own relevance
/// ranking) and the first admissible one wins. When none passes, the top
/// result is returned tagged [`MatchReason::FallbackFirst`] - a plausible
/// guess is preferred over failure, and callers that want strict matching
/// must inspect the reason.
pub fn resolve(candidates: &[Candidate], source: &SourceDescriptor) -> MatchResult {
    let Some(first) = candidates.first() else {
        return MatchResult::NoMatch;
    };

    let normalized = normalize(&source.title);

    for candidate in candidates {
        if let Some(reason) = score::match_reason(candidate, &normalized, &source.channel) {
            debug!(
                track = %candidate.name,
                artist = %candidate.primary_artist,
                ?reason,
                "candidate accepted"
            );
            return MatchResult::Matched {
                candidate: candidate.clone(),
                reason,
            };
        }
    }

    debug!(track = %first.name, "no candidate passed, falling back to top result");
    MatchResult::Matched {
        candidate: first.clone(),
        reason: MatchReason::FallbackFirst,
    }
}
