//! Request dispatch layer for the TikTok data APIs.
//!
//! This module provides the authenticated GET dispatcher shared by both
//! server variants, the endpoint table and the request/response types.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tiktok_data_sdk::api::{Request, RequestDispatcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dispatcher = RequestDispatcher::builder("my-token").build()?;
//!
//!     let response = dispatcher.execute(Request::user_info("someone")).await?;
//!     if let Some(data) = response.data() {
//!         println!("{}", data);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Non-200 responses are not errors. They come back as
//! [`ApiResponse::Failure`] holding the last response so callers can inspect
//! it. [`ApiError`] covers requests that cannot be made at all and 200
//! responses whose body lacks the `data` field:
//!
//! ```rust,ignore
//! match dispatcher.execute(request).await {
//!     Ok(ApiResponse::Success(data)) => println!("{}", data),
//!     Ok(ApiResponse::Failure(failure)) => println!("failed: {:?}", failure.status()),
//!     Err(ApiError::MissingData { url }) => println!("malformed body from {}", url),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{RequestDispatcher, RequestDispatcherBuilder, DEFAULT_ATTEMPTS};
pub use endpoints::{Endpoint, Request};
pub use error::{ApiError, ApiResult};
pub use transport::{ReqwestTransport, Transport};
pub use types::*;
