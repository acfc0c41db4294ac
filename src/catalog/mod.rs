//! Endpoint catalogs, one per server variant.
//!
//! Each catalog owns a [`RequestDispatcher`](crate::api::RequestDispatcher)
//! and maps named operations to endpoint descriptors. The two servers share
//! paths and parameter names but expose different operation sets.

pub mod ed;
pub mod ih;

pub use ed::EnsembleDataClient;
pub use ih::InfluencerHuntersClient;

/// Default `depth` for post listings.
pub const DEFAULT_DEPTH: u32 = 1;

/// Default look-back window, in days, for recent hashtag posts.
pub const DEFAULT_RECENT_DAYS: u32 = 10;
