//! Merchant URL to affiliate tracking URL conversion.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::extract_domain;
use crate::error::ConvertError;
use crate::index::BrandIndex;

/// Characters left unescaped by ECMAScript `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Query separator and parameter name the tracking endpoint expects before
/// the encoded merchant URL. Appended as-is, even when the tracking link has
/// no query string yet.
const TARGET_PARAM: &str = "&t=";

/// Percent-encodes `value` the way the tracking endpoint decodes it.
#[must_use]
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Resolves `input_url` against `index` and builds the tracking URL.
///
/// # Errors
///
/// - [`ConvertError::EmptyInput`] if the input is empty or whitespace.
/// - [`ConvertError::InvalidUrlFormat`] if no domain can be parsed from it.
/// - [`ConvertError::BrandNotFound`] if the domain is not indexed.
pub fn convert(input_url: &str, index: &BrandIndex) -> Result<String, ConvertError> {
    if input_url.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let domain = extract_domain(input_url).ok_or(ConvertError::InvalidUrlFormat)?;

    let Some(entry) = index.get(&domain) else {
        let near_misses = near_misses(&domain, index);
        return Err(ConvertError::BrandNotFound {
            domain,
            near_misses,
        });
    };

    Ok(format!(
        "{}{TARGET_PARAM}{}",
        entry.tracking_link,
        encode_uri_component(input_url)
    ))
}

/// Lists indexed domains that contain `domain` or are contained in it.
///
/// Only used to explain a miss; [`convert`] never resolves through these.
#[must_use]
pub fn near_misses(domain: &str, index: &BrandIndex) -> Vec<String> {
    if domain.is_empty() {
        return Vec::new();
    }
    index
        .domains()
        .filter(|d| d.contains(domain) || domain.contains(d))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod tests;
