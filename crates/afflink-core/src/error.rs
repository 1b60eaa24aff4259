use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("could not resolve state directory: {0}")]
    StateDir(String),
}

/// Reasons a merchant URL could not be turned into a tracking link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("no URL was given")]
    EmptyInput,

    #[error("not a valid URL")]
    InvalidUrlFormat,

    /// The URL parsed, but its domain has no entry in the brand index.
    ///
    /// `near_misses` lists indexed domains that overlap the input domain as
    /// substrings. They are diagnostic only and never used to resolve a link.
    #[error("no affiliate brand found for \"{domain}\"")]
    BrandNotFound {
        domain: String,
        near_misses: Vec<String>,
    },
}
