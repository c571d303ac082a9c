//! Playlist duplicate detection over a paginated listing.
//!
//! The remote listing is abstracted behind [`PageFetcher`] so the scan can
//! be tested without a network and reused against any paginated collection.
//! Pages are fetched strictly sequentially - each request depends on the
//! previous page being full, and termination depends on observing a short
//! page - so there is never more than one fetch in flight.

use async_trait::async_trait;

use crate::domain::ApiError;

/// Fixed page size for playlist scans. Matches the API's maximum page size
/// so the scan issues as few requests as possible.
pub const PAGE_SIZE: u32 = 100;

/// One page of entry URIs from a remote collection.
///
/// A returned page shorter than `limit` signals end-of-data.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(
        &self,
        target_id: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<String>, ApiError>;
}

/// Result of a duplicate scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateReport {
    /// Whether `candidate_uri` was observed in any page
    pub found: bool,
    /// Number of pages fetched before the scan stopped
    pub pages_examined: usize,
}

/// Scan `target_id` for `candidate_uri`.
///
/// Short-circuits as soon as the URI is observed; otherwise scans until a
/// short page marks the end of the collection. A fetch failure at any
/// offset aborts the whole scan and propagates unmodified - it is never
/// reported as "not a duplicate".
pub async fn exists<F: PageFetcher + ?Sized>(
    fetcher: &F,
    target_id: &str,
    candidate_uri: &str,
) -> Result<DuplicateReport, ApiError> {
    let mut offset = 0;
    let mut pages_examined = 0;

    loop {
        let page = fetcher.fetch_page(target_id, offset, PAGE_SIZE).await?;
        pages_examined += 1;

        if page.iter().any(|uri| uri == candidate_uri) {
            return Ok(DuplicateReport {
                found: true,
                pages_examined,
            });
        }

        if page.len() < PAGE_SIZE as usize {
            return Ok(DuplicateReport {
                found: false,
                pages_examined,
            });
        }

        offset += PAGE_SIZE;
    }
}
