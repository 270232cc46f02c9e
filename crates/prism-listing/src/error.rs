use thiserror::Error;

/// Internal failure states of an image fetch-and-analyze attempt.
///
/// Never escapes the crate's public API: [`crate::ListingQualityScorer`]
/// folds every variant into the `Error` quality tier.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("image decode error for {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },

    #[error("image has no pixels: {url}")]
    EmptyImage { url: String },
}
