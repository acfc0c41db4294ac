//! # TikTok Data SDK
//!
//! A Rust client for the TikTok data proxy APIs.
//!
//! ## Modules
//!
//! - [`api`]: Authenticated request dispatch, endpoint table, request and
//!   response types
//! - [`catalog`]: Named operations for each server variant
//!   ([`InfluencerHuntersClient`](catalog::InfluencerHuntersClient) and
//!   [`EnsembleDataClient`](catalog::EnsembleDataClient))
//! - [`network`]: Default base URLs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tiktok_data_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EnsembleDataClient::new("my-token")?;
//!
//!     match client.get_hashtag_posts("magic", 0i64).await? {
//!         ApiResponse::Success(data) => println!("{}", data),
//!         ApiResponse::Failure(failure) => println!("failed: {:?}", failure.status()),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Responses are untyped JSON. Pagination is left to the caller: pass the
//! cursor returned in one page to the next call.

// ============================================================================
// MODULES
// ============================================================================

/// Network URL constants for both server variants.
pub mod network;

/// Request dispatch: transport, endpoints, errors and types.
pub mod api;

/// Endpoint catalogs for the IH and ED servers.
pub mod catalog;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use tiktok_data_sdk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiError, ApiResponse, ApiResult, Endpoint, Failure, KeywordSearch, ParamValue, Payload,
        RawResponse, Request, RequestDispatcher, RequestDispatcherBuilder, ReqwestTransport,
        Transport, DEFAULT_ATTEMPTS,
    };

    pub use crate::catalog::{
        EnsembleDataClient, InfluencerHuntersClient, DEFAULT_DEPTH, DEFAULT_RECENT_DAYS,
    };

    pub use crate::network::{DEFAULT_ED_API_URL, DEFAULT_IH_API_URL};
}
