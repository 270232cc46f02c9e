//! Background-coverage analysis of decoded listing photos.

use image::GrayImage;
use prism_core::ListingQuality;

use crate::error::ListingError;

/// Intensity above which a pixel counts as near-white background.
const BACKGROUND_CUTOFF: u8 = 240;

/// Coverage above this share of the frame reads as a large, clear product shot.
const GOOD_COVERAGE: f64 = 70.0;

/// Coverage at or above this share reads as acceptable framing.
const AVERAGE_COVERAGE: f64 = 50.0;

/// Decodes image bytes and maps background coverage to a quality tier.
///
/// # Errors
///
/// - [`ListingError::Decode`] — bytes are not a decodable image.
/// - [`ListingError::EmptyImage`] — decoded frame has zero pixels.
pub(crate) fn analyze_bytes(bytes: &[u8], url: &str) -> Result<ListingQuality, ListingError> {
    let decoded = image::load_from_memory(bytes).map_err(|source| ListingError::Decode {
        url: url.to_owned(),
        source,
    })?;
    let gray = decoded.to_luma8();
    if gray.as_raw().is_empty() {
        return Err(ListingError::EmptyImage {
            url: url.to_owned(),
        });
    }
    Ok(tier_for_coverage(coverage_percent(&gray)))
}

/// Share of non-background (foreground) pixels in the frame, in percent.
///
/// Caller guarantees a non-empty frame.
fn coverage_percent(gray: &GrayImage) -> f64 {
    let total = gray.as_raw().len();
    let foreground = gray
        .as_raw()
        .iter()
        .filter(|&&p| p <= BACKGROUND_CUTOFF)
        .count();
    #[allow(clippy::cast_precision_loss)]
    {
        foreground as f64 / total as f64 * 100.0
    }
}

/// Maps a coverage percentage to the discrete quality tier.
fn tier_for_coverage(coverage: f64) -> ListingQuality {
    if coverage > GOOD_COVERAGE {
        ListingQuality::Good
    } else if coverage >= AVERAGE_COVERAGE {
        ListingQuality::Average
    } else {
        ListingQuality::Poor
    }
}
