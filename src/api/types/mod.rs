//! Request and response types for the TikTok data APIs.
//!
//! The APIs return dynamically shaped JSON, so response payloads stay as
//! [`serde_json::Value`]; only the envelope around them is typed.

pub mod params;
pub mod response;

// Re-export all types for convenience
pub use params::*;
pub use response::*;
