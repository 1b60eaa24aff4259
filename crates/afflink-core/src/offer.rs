//! Offer records as returned by the affiliate API.

use serde::Deserialize;

/// One brand offer from the `data` array of `affiliates/offers.json`.
///
/// Only the fields needed to build the brand index are modelled; everything
/// else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BrandOffer {
    #[serde(default)]
    pub name: String,
    /// Merchant landing page. The brand's domain is derived from this URL.
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub tracking_link: Option<String>,
}
