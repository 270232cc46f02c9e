//! Listing image quality scoring for the PRISM pipeline.
//!
//! Fetches a listing photo, converts it to single-channel intensity, and
//! maps the share of non-background pixels to a discrete quality tier.
//! Marketplace product photography is reliably shot on a near-white
//! backdrop, so background thresholding is sufficient signal — no object
//! detection involved.

mod analyze;
mod client;
mod error;
mod retry;
mod scorer;

pub use error::ListingError;
pub use scorer::ListingQualityScorer;
