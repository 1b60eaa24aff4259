//! Affiliate API access and session lifecycle for afflink.
//!
//! [`AffiliatesClient`] fetches offer lists, [`probe_key`] infers whether an
//! API key is usable, and [`Session`] ties a stored key to the brand index
//! that conversions run against.

pub mod client;
pub mod error;
pub mod probe;
pub mod session;
pub mod store;
pub mod types;

pub use client::{AffiliatesClient, ClientOptions};
pub use error::{ClientError, SessionError, StoreError};
pub use probe::{probe_key, ValidationOutcome};
pub use session::{LoadOutcome, LoadedBrands, Session, API_KEY_SLOT};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use types::ApprovalFilter;
