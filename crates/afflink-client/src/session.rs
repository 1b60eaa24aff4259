//! Session lifecycle: stored key, brand index, and conversions.
//!
//! A [`Session`] is created empty, loaded by validating a key, used for any
//! number of conversions, and cleared. The index is swapped wholesale; it is
//! never edited in place.
//!
//! Loads may overlap (for example a key re-saved while the previous fetch is
//! still in flight). Every load takes a ticket from a generation counter and
//! its result is applied only if no newer load or clear has started since.
//! Stale results come back as [`LoadOutcome::Superseded`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use afflink_core::{build_index, BrandIndex, ConvertError};
use chrono::{DateTime, Utc};

use crate::client::{AffiliatesClient, ClientOptions};
use crate::error::{ClientError, SessionError, StoreError};
use crate::probe::{probe_key, ValidationOutcome};
use crate::store::KeyValueStore;

/// Key store slot holding the affiliate API key.
pub const API_KEY_SLOT: &str = "affiliate_api_key";

/// Brand data loaded for the current key.
#[derive(Debug, Clone)]
pub struct LoadedBrands {
    pub index: BrandIndex,
    /// Number of offers the API returned, before any were filtered out.
    pub offer_count: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Result of [`Session::validate_and_load`].
#[derive(Debug)]
pub enum LoadOutcome {
    /// The key is valid and the index was rebuilt from its active offers.
    Valid { offers: usize, indexed: usize },
    /// The key is valid but has no approved offers; the index is empty.
    ValidNoBrands,
    /// The key is invalid or unauthorized; no index is loaded.
    Invalid,
    /// Validity could not be decided; no index is loaded.
    TransportError(ClientError),
    /// A newer load or a clear started while this one was in flight; the
    /// session was left as the newer operation set it.
    Superseded,
}

impl LoadOutcome {
    /// Whether the key was accepted upstream.
    #[must_use]
    pub fn is_valid_key(&self) -> bool {
        matches!(self, LoadOutcome::Valid { .. } | LoadOutcome::ValidNoBrands)
    }
}

pub struct Session<S> {
    options: ClientOptions,
    store: S,
    generation: AtomicU64,
    loaded: RwLock<Option<Arc<LoadedBrands>>>,
}

impl<S: KeyValueStore> Session<S> {
    /// Creates a session with no brands loaded.
    #[must_use]
    pub fn new(options: ClientOptions, store: S) -> Self {
        Self {
            options,
            store,
            generation: AtomicU64::new(0),
            loaded: RwLock::new(None),
        }
    }

    /// Reads the stored API key, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the key store cannot be read.
    pub fn stored_key(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .store
            .get(API_KEY_SLOT)?
            .filter(|key| !key.trim().is_empty()))
    }

    /// Loads brands for the stored key. Returns `Ok(None)` when no key is
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the key store cannot be read.
    pub async fn load_stored(&self) -> Result<Option<LoadOutcome>, SessionError> {
        let Some(key) = self.stored_key()? else {
            return Ok(None);
        };
        Ok(Some(self.validate_and_load(&key).await))
    }

    /// Stores `key` (trimmed) and loads brands for it.
    ///
    /// The key is persisted before validation, so an invalid key stays
    /// stored until it is replaced or cleared.
    ///
    /// # Errors
    ///
    /// - [`SessionError::EmptyKey`] if `key` is blank.
    /// - [`SessionError::Store`] if the key cannot be written.
    pub async fn save_key(&self, key: &str) -> Result<LoadOutcome, SessionError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(SessionError::EmptyKey);
        }
        self.store.set(API_KEY_SLOT, key)?;
        Ok(self.validate_and_load(key).await)
    }

    /// Probes `key` and, unless a newer load or clear has started, replaces
    /// the session's brand data with the result.
    pub async fn validate_and_load(&self, key: &str) -> LoadOutcome {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let outcome = match AffiliatesClient::new(key, &self.options) {
            Ok(client) => probe_key(&client).await,
            Err(e) => ValidationOutcome::TransportError(e),
        };

        let (next, result) = match outcome {
            ValidationOutcome::Valid(offers) => {
                let index = build_index(&offers);
                let result = LoadOutcome::Valid {
                    offers: offers.len(),
                    indexed: index.len(),
                };
                let loaded = LoadedBrands {
                    index,
                    offer_count: offers.len(),
                    loaded_at: Utc::now(),
                };
                (Some(Arc::new(loaded)), result)
            }
            ValidationOutcome::ValidNoBrands => {
                let loaded = LoadedBrands {
                    index: BrandIndex::empty(),
                    offer_count: 0,
                    loaded_at: Utc::now(),
                };
                (Some(Arc::new(loaded)), LoadOutcome::ValidNoBrands)
            }
            ValidationOutcome::Invalid => (None, LoadOutcome::Invalid),
            ValidationOutcome::TransportError(e) => (None, LoadOutcome::TransportError(e)),
        };

        let mut slot = self.loaded.write().unwrap_or_else(PoisonError::into_inner);
        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::warn!(ticket, "discarding stale brand load");
            return LoadOutcome::Superseded;
        }
        *slot = next;
        match &result {
            LoadOutcome::Valid { offers, indexed } => {
                tracing::info!(offers, indexed, "loaded brand index");
            }
            LoadOutcome::ValidNoBrands => tracing::info!("API key valid but has no approved brands"),
            LoadOutcome::Invalid => tracing::info!("API key invalid or unauthorized"),
            LoadOutcome::TransportError(e) => tracing::warn!(error = %e, "brand load failed"),
            LoadOutcome::Superseded => {}
        }
        result
    }

    /// Converts `input_url` against the loaded index. With nothing loaded the
    /// index is empty, so every well-formed URL is [`ConvertError::BrandNotFound`].
    ///
    /// # Errors
    ///
    /// See [`afflink_core::convert`].
    pub fn convert(&self, input_url: &str) -> Result<String, ConvertError> {
        match self.loaded() {
            Some(loaded) => afflink_core::convert(input_url, &loaded.index),
            None => afflink_core::convert(input_url, &BrandIndex::empty()),
        }
    }

    /// The current brand data, if a valid key has been loaded.
    #[must_use]
    pub fn loaded(&self) -> Option<Arc<LoadedBrands>> {
        self.loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Discards loaded brands, invalidates in-flight loads, and deletes the
    /// stored key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the stored key cannot be removed. The
    /// in-memory index is discarded either way.
    pub fn clear(&self) -> Result<(), StoreError> {
        {
            let mut slot = self.loaded.write().unwrap_or_else(PoisonError::into_inner);
            self.generation.fetch_add(1, Ordering::SeqCst);
            *slot = None;
        }
        self.store.remove(API_KEY_SLOT)
    }
}
