//! Track resolution core - decides whether a catalog candidate is the same
//! song as a scraped video.
//!
//! # Architecture
//!
//! Three pure, total stages:
//! - **Normalize** (`normalize.rs`) - strip platform noise from the video
//!   title and extract a (song, artist) decomposition when possible
//! - **Score** (`score.rs`) - binary admissibility of one candidate against
//!   the normalized source
//! - **Resolve** (`resolver.rs`) - scan the ordered candidate list and pick
//!   a winner, with a best-guess fallback
//!
//! Nothing in this module performs I/O or holds state between calls; given
//! the same candidate order and the same source, the result is identical on
//! every call.

mod normalize;
mod resolver;
mod score;

pub use normalize::normalize;
pub use resolver::resolve;
pub use score::{match_reason, passes};
