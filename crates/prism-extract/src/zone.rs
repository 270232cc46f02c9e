//! Golden-zone slicing of raw listing titles.

/// Maximum characters retained from the front of a title.
const ZONE_LIMIT: usize = 50;

/// Slices the bounded "golden zone" prefix from a raw title.
///
/// Marketing titles front-load the essential noun phrase and append specs,
/// use-cases, and SEO keywords later, so a short prefix captures the
/// headline reliably while bounding cost. Titles longer than the limit
/// extend to the next space at-or-after the limit rather than cutting
/// mid-word; when no later space exists the title is hard-cut at the limit.
///
/// The limit counts characters, not bytes — titles may carry non-Latin text.
#[must_use]
pub(crate) fn golden_zone(title: &str) -> &str {
    match title.char_indices().nth(ZONE_LIMIT) {
        // Limit chars or fewer: the zone is the whole title.
        None => title,
        Some((limit_idx, _)) => match title[limit_idx..].find(' ') {
            Some(rel) => &title[..limit_idx + rel],
            None => &title[..limit_idx],
        },
    }
}
