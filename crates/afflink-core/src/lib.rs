//! Core link-conversion logic for afflink.
//!
//! Turns an affiliate offer list into a domain-keyed [`BrandIndex`] and
//! resolves merchant URLs against it. Everything in this crate is synchronous;
//! fetching offers lives in `afflink-client`.

pub mod app_config;
pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod index;
pub mod offer;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use convert::{convert, encode_uri_component, near_misses};
pub use domain::{extract_domain, extract_domain_from_preview};
pub use error::{ConfigError, ConvertError};
pub use index::{build_index, BrandIndex, BrandIndexEntry};
pub use offer::BrandOffer;
