//! Domain-keyed brand index built from an offer list.

use std::collections::BTreeMap;

use crate::domain::extract_domain_from_preview;
use crate::offer::BrandOffer;

/// The brand and tracking link registered for one merchant domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandIndexEntry {
    pub name: String,
    pub tracking_link: String,
}

/// Mapping from normalized merchant domain to its [`BrandIndexEntry`].
///
/// Built wholesale by [`build_index`] and never updated in place; a fresh
/// offer list produces a fresh index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandIndex {
    entries: BTreeMap<String, BrandIndexEntry>,
}

impl BrandIndex {
    /// Returns an index with no brands.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact lookup by normalized domain.
    #[must_use]
    pub fn get(&self, domain: &str) -> Option<&BrandIndexEntry> {
        self.entries.get(domain)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in domain order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BrandIndexEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates indexed domains in order.
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Builds a [`BrandIndex`] from offers in API order.
///
/// Offers without a derivable preview domain or without a tracking link are
/// skipped. When two offers share a domain the later one wins.
#[must_use]
pub fn build_index(offers: &[BrandOffer]) -> BrandIndex {
    let mut entries = BTreeMap::new();

    for offer in offers {
        let Some(domain) = extract_domain_from_preview(offer.preview_url.as_deref()) else {
            tracing::debug!(brand = %offer.name, "skipping offer: no usable preview_url");
            continue;
        };
        let Some(tracking_link) = offer.tracking_link.as_deref().filter(|l| !l.is_empty()) else {
            tracing::debug!(brand = %offer.name, %domain, "skipping offer: empty tracking_link");
            continue;
        };

        entries.insert(
            domain,
            BrandIndexEntry {
                name: offer.name.clone(),
                tracking_link: tracking_link.to_owned(),
            },
        );
    }

    BrandIndex { entries }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
