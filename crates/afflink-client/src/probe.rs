//! Inferring API key validity from offer availability.
//!
//! The affiliate API has no "validate key" endpoint. A key that returns
//! approved offers is valid; if it returns none, an unfiltered request tells
//! an account with no approved brands apart from a key that sees nothing.

use afflink_core::BrandOffer;

use crate::client::AffiliatesClient;
use crate::error::ClientError;
use crate::types::ApprovalFilter;

/// Result of probing an API key.
#[derive(Debug)]
pub enum ValidationOutcome {
    /// The key sees approved offers; carries them for indexing.
    Valid(Vec<BrandOffer>),
    /// The key works but the account has no approved offers.
    ValidNoBrands,
    /// No usable data under any query variant, or the API rejected the key.
    Invalid,
    /// The request failed before validity could be decided.
    TransportError(ClientError),
}

/// Probes the client's key with a filtered request, falling back to an
/// unfiltered one when the filtered list is empty or malformed.
pub async fn probe_key(client: &AffiliatesClient) -> ValidationOutcome {
    match client.fetch_offers(ApprovalFilter::Active).await {
        Ok(offers) if !offers.is_empty() => return ValidationOutcome::Valid(offers),
        Ok(_) => tracing::debug!("no active offers, probing without approval filter"),
        Err(ClientError::MissingData { context }) => {
            tracing::debug!(%context, "malformed active offers, probing without approval filter");
        }
        Err(ClientError::Unauthorized { status }) => {
            tracing::info!(status, "API key rejected");
            return ValidationOutcome::Invalid;
        }
        Err(e) => return ValidationOutcome::TransportError(e),
    }

    match client.fetch_offers(ApprovalFilter::Any).await {
        Ok(offers) if !offers.is_empty() => ValidationOutcome::ValidNoBrands,
        Ok(_) | Err(ClientError::MissingData { .. } | ClientError::Unauthorized { .. }) => {
            ValidationOutcome::Invalid
        }
        Err(e) => ValidationOutcome::TransportError(e),
    }
}
