//! The public, total scoring surface.

use std::collections::HashMap;

use prism_core::{AppConfig, ListingQuality};
use tokio::sync::Mutex;

use crate::analyze::analyze_bytes;
use crate::client::ImageClient;
use crate::error::ListingError;

/// Scores listing photos by background coverage.
///
/// [`score`](Self::score) is total: every degraded path — absent or
/// unusable URL, network or HTTP failure, undecodable bytes — folds into
/// [`ListingQuality::Error`] rather than surfacing an error. Tiers are
/// memoized per URL for the lifetime of the scorer, so repeated URLs in a
/// batch fetch once.
pub struct ListingQualityScorer {
    client: ImageClient,
    cache: Mutex<HashMap<String, ListingQuality>>,
}

impl ListingQualityScorer {
    /// Creates a scorer from the application config.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, ListingError> {
        Ok(Self {
            client: ImageClient::new(config)?,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// Scores one listing image URL.
    pub async fn score(&self, image_url: Option<&str>) -> ListingQuality {
        let Some(url) = image_url else {
            return ListingQuality::Error;
        };
        if !is_fetchable(url) {
            return ListingQuality::Error;
        }

        if let Some(tier) = self.cache.lock().await.get(url).copied() {
            tracing::debug!(%url, %tier, "listing tier served from cache");
            return tier;
        }

        let tier = match self.fetch_and_analyze(url).await {
            Ok(tier) => tier,
            Err(e) => {
                tracing::warn!(%url, error = %e, "listing image degraded to Error tier");
                ListingQuality::Error
            }
        };

        self.cache.lock().await.insert(url.to_owned(), tier);
        tier
    }

    async fn fetch_and_analyze(&self, url: &str) -> Result<ListingQuality, ListingError> {
        let bytes = self.client.fetch_bytes(url).await?;
        analyze_bytes(&bytes, url)
    }
}

/// Rejects obviously unusable URLs before any network traffic: empty
/// strings, non-HTTP schemes, and the stand-in assets marketplace exports
/// use for listings without a photo.
fn is_fetchable(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return false;
    }
    !(url.contains("no-image") || url.contains("placeholder"))
}
