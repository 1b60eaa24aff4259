//! Request parameters for the affiliate offers endpoint.

/// Which offers to request from `affiliates/offers.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalFilter {
    /// Only offers the publisher is approved for (`approval_statuses=Active`).
    Active,
    /// Every offer visible to the key, regardless of approval status.
    Any,
}

impl ApprovalFilter {
    /// Value for the `approval_statuses` query parameter, if any.
    #[must_use]
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            ApprovalFilter::Active => Some("Active"),
            ApprovalFilter::Any => None,
        }
    }
}
