use serde::{Deserialize, Serialize};

/// Sentinel display value produced when extraction leaves no usable tokens.
pub const NOT_FOUND: &str = "Not Found";

/// Quality tier assigned to a listing photo by background-coverage analysis.
///
/// `Error` covers every degraded path: absent or malformed URL, network or
/// HTTP failure, and undecodable image bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingQuality {
    Good,
    Average,
    Poor,
    Error,
}

impl ListingQuality {
    /// Returns `true` for the degraded `Error` tier.
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, ListingQuality::Error)
    }
}

impl std::fmt::Display for ListingQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingQuality::Good => write!(f, "Good"),
            ListingQuality::Average => write!(f, "Average"),
            ListingQuality::Poor => write!(f, "Poor"),
            ListingQuality::Error => write!(f, "Error"),
        }
    }
}

/// Opportunity bucket derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Potential {
    High,
    Moderate,
    Low,
}

impl std::fmt::Display for Potential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Potential::High => write!(f, "High"),
            Potential::Moderate => write!(f, "Moderate"),
            Potential::Low => write!(f, "Low"),
        }
    }
}

/// Composite rubric output for one product row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrismScore {
    /// Normalized opportunity score in `[0, 100]`.
    pub score: u8,
    pub potential: Potential,
    /// `true` when at least one rubric category had no usable input.
    pub missing_data: bool,
}

/// One fully analyzed product row: the raw input fields plus the three
/// derived signals attached by the pipeline.
///
/// Rows are independent of each other — every derived field is a pure
/// function of this row's inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Raw listing title as supplied by the dataset.
    pub title: String,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    pub review_count: Option<u32>,
    /// Star rating in `[0.0, 5.0]`, pre-parsed upstream.
    pub rating: Option<f64>,
    /// Monthly sales volume, pre-parsed upstream from display text
    /// such as `"3K+"`.
    pub monthly_sales: Option<f64>,
    /// Title-Cased core item phrase, or [`NOT_FOUND`].
    pub identified_item: String,
    pub listing_quality: ListingQuality,
    pub prism_score: u8,
    pub potential: Potential,
    pub missing_data: bool,
}

impl ProductRecord {
    /// Returns `true` when extraction produced a real item phrase rather
    /// than the [`NOT_FOUND`] sentinel.
    #[must_use]
    pub fn is_identified(&self) -> bool {
        self.identified_item != NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> ProductRecord {
        ProductRecord {
            title: "Boldfit Yoga Mat for Men Women".to_string(),
            image_url: Some("https://img.example.com/mat.jpg".to_string()),
            price: Some(249.0),
            review_count: Some(120),
            rating: Some(4.3),
            monthly_sales: Some(800.0),
            identified_item: "Yoga Mat".to_string(),
            listing_quality: ListingQuality::Poor,
            prism_score: 93,
            potential: Potential::High,
            missing_data: false,
        }
    }

    #[test]
    fn is_identified_true_for_item_phrase() {
        assert!(make_record().is_identified());
    }

    #[test]
    fn is_identified_false_for_sentinel() {
        let mut record = make_record();
        record.identified_item = NOT_FOUND.to_string();
        assert!(!record.is_identified());
    }

    #[test]
    fn listing_quality_is_error_only_for_error() {
        assert!(ListingQuality::Error.is_error());
        assert!(!ListingQuality::Good.is_error());
        assert!(!ListingQuality::Average.is_error());
        assert!(!ListingQuality::Poor.is_error());
    }

    #[test]
    fn listing_quality_serializes_snake_case() {
        let json = serde_json::to_string(&ListingQuality::Average).unwrap();
        assert_eq!(json, "\"average\"");
    }

    #[test]
    fn potential_serializes_snake_case() {
        let json = serde_json::to_string(&Potential::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
    }

    #[test]
    fn display_forms_are_title_cased() {
        assert_eq!(ListingQuality::Poor.to_string(), "Poor");
        assert_eq!(Potential::High.to_string(), "High");
    }

    #[test]
    fn serde_roundtrip_record() {
        let record = make_record();
        let json = serde_json::to_string(&record).expect("serialization failed");
        let decoded: ProductRecord = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded.identified_item, record.identified_item);
        assert_eq!(decoded.listing_quality, record.listing_quality);
        assert_eq!(decoded.prism_score, record.prism_score);
        assert_eq!(decoded.potential, record.potential);
    }
}
