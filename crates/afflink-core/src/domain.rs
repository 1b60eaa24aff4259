//! Host extraction for merchant and preview URLs.

use url::Url;

/// Extracts the normalized domain from an absolute URL.
///
/// The host is lowercased and a single leading `www.` label is removed, so
/// `"https://WWW.Nike.com:8443/tw?x=1"` yields `"nike.com"`. Returns `None`
/// when the input is not an absolute URL, carries no host, or the host is
/// nothing but `www.`.
#[must_use]
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    if host.is_empty() {
        return None;
    }
    let domain = host.strip_prefix("www.").unwrap_or(&host);
    if domain.is_empty() {
        return None;
    }
    Some(domain.to_owned())
}

/// Extracts the domain from an offer's `preview_url`, treating a missing or
/// empty value as "no domain".
#[must_use]
pub fn extract_domain_from_preview(preview_url: Option<&str>) -> Option<String> {
    match preview_url {
        Some(url) if !url.is_empty() => extract_domain(url),
        _ => None,
    }
}
