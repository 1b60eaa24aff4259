//! User-facing wording for load outcomes and conversion failures.

use afflink_client::LoadOutcome;
use afflink_core::ConvertError;

pub(crate) const NO_KEY_HINT: &str = "no API key stored; run `afflink key set <KEY>` first";

pub(crate) fn load_outcome_message(outcome: &LoadOutcome) -> String {
    match outcome {
        LoadOutcome::Valid { offers, indexed } => {
            format!("API key accepted: loaded {offers} brands ({indexed} with a convertible domain)")
        }
        LoadOutcome::ValidNoBrands => {
            "API key accepted, but the account has no approved brands yet".to_string()
        }
        LoadOutcome::Invalid => {
            "API key is invalid or unauthorized; check it and run `afflink key set` again"
                .to_string()
        }
        LoadOutcome::TransportError(e) => format!("could not fetch brands: {e}"),
        LoadOutcome::Superseded => "brand load was replaced by a newer request".to_string(),
    }
}

pub(crate) fn convert_error_message(err: &ConvertError) -> String {
    match err {
        ConvertError::EmptyInput => "please enter a URL".to_string(),
        ConvertError::InvalidUrlFormat => "invalid URL format".to_string(),
        ConvertError::BrandNotFound {
            domain,
            near_misses,
        } if !near_misses.is_empty() => format!(
            "no brand found for \"{domain}\" (similar brand domains: {})",
            near_misses.join(", ")
        ),
        ConvertError::BrandNotFound { .. } => {
            "this site is not in the affiliate network's supported brand list".to_string()
        }
    }
}

/// Confirmation for a successful clipboard copy. `transient` is set when the
/// copy will vanish with this process.
pub(crate) fn copied_message(transient: bool) -> &'static str {
    if transient {
        "copied to clipboard (it may vanish when afflink exits unless a clipboard \
         manager keeps it; `afflink shell --copy` stays running)"
    } else {
        "copied to clipboard"
    }
}

/// Shows only enough of a key to recognise it.
pub(crate) fn redact_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    if key.chars().count() <= 8 {
        "********".to_string()
    } else {
        format!("{visible}********")
    }
}
