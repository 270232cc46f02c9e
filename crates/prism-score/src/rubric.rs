//! Category banding and score assembly.

use prism_core::{ListingQuality, Potential, PrismScore};

/// Total rubric points when every category has usable data.
const TOTAL_POINTS: u32 = 15;

/// Category maximums. A category's maximum is subtracted from the
/// denominator when its input is absent.
const PRICE_MAX: u32 = 4;
const REVIEWS_MAX: u32 = 3;
const RATING_MAX: u32 = 3;
const QUALITY_MAX: u32 = 2;
const SALES_MAX: u32 = 3;

/// Per-category inputs for one product row.
///
/// `None` models an absent field; `NaN` in a present numeric field is
/// treated as absent. A present [`ListingQuality::Error`] tier is data (it
/// earns zero points), not missing data — only a never-computed quality is
/// `None`. Likewise zero sales is data in the lowest band, while `None`
/// sales excludes the category from the denominator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInputs {
    pub price: Option<f64>,
    pub review_count: Option<u32>,
    pub rating: Option<f64>,
    pub listing_quality: Option<ListingQuality>,
    pub monthly_sales: Option<f64>,
}

/// Evaluates the composite rubric for one row.
///
/// Pure and total: no well-typed input produces a panic. The score is
/// `round(points_earned / points_available * 100)`, defined as `0` when no
/// category has usable data.
#[must_use]
pub fn evaluate(inputs: &ScoreInputs) -> PrismScore {
    let mut points_earned = 0u32;
    let mut points_available = TOTAL_POINTS;
    let mut missing_data = false;

    match finite(inputs.price) {
        Some(price) => points_earned += price_points(price),
        None => {
            points_available -= PRICE_MAX;
            missing_data = true;
        }
    }

    match inputs.review_count {
        Some(reviews) => points_earned += review_points(reviews),
        None => {
            points_available -= REVIEWS_MAX;
            missing_data = true;
        }
    }

    match finite(inputs.rating) {
        Some(rating) => points_earned += rating_points(rating),
        None => {
            points_available -= RATING_MAX;
            missing_data = true;
        }
    }

    match inputs.listing_quality {
        Some(quality) => points_earned += quality_points(quality),
        None => {
            points_available -= QUALITY_MAX;
            missing_data = true;
        }
    }

    match finite(inputs.monthly_sales) {
        Some(sales) => points_earned += sales_points(sales),
        None => {
            points_available -= SALES_MAX;
            missing_data = true;
        }
    }

    let score = if points_available == 0 {
        0
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded =
            (f64::from(points_earned) / f64::from(points_available) * 100.0).round() as u8;
        rounded
    };

    PrismScore {
        score,
        potential: potential_for(score),
        missing_data,
    }
}

/// Filters out `NaN`/infinite values so a garbage numeric field behaves
/// exactly like an absent one.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Price: the 200–350 band is the sourcing sweet spot.
fn price_points(price: f64) -> u32 {
    if (200.0..=350.0).contains(&price) {
        4
    } else if (175.0..200.0).contains(&price) || price > 350.0 {
        2
    } else {
        1
    }
}

fn review_points(reviews: u32) -> u32 {
    if reviews >= 100 {
        3
    } else if reviews >= 50 {
        2
    } else {
        1
    }
}

fn rating_points(rating: f64) -> u32 {
    if rating >= 4.2 {
        3
    } else if rating >= 3.6 {
        2
    } else if rating >= 3.0 {
        1
    } else {
        0
    }
}

/// Deliberate inversion: a visually under-optimized (`Poor`) photo marks an
/// improvable listing, so it earns the category maximum, while
/// already-optimized `Good`/`Average` photos earn less. `Error` carries no
/// signal and earns nothing.
fn quality_points(quality: ListingQuality) -> u32 {
    match quality {
        ListingQuality::Poor => 2,
        ListingQuality::Average | ListingQuality::Good => 1,
        ListingQuality::Error => 0,
    }
}

fn sales_points(sales: f64) -> u32 {
    if sales >= 500.0 {
        3
    } else if sales >= 100.0 {
        2
    } else {
        1
    }
}

fn potential_for(score: u8) -> Potential {
    if score > 80 {
        Potential::High
    } else if score >= 66 {
        Potential::Moderate
    } else {
        Potential::Low
    }
}
