//! # rest-client
//!
//! Thin JSON REST client over a shared [`reqwest::Client`].
//!
//! Builds requests against a configured base URL, optionally serializes a
//! payload to indented JSON, and returns the HTTP status code together with
//! the raw response body. HTTP 4xx/5xx statuses are returned like any other
//! response; only serialization, request construction, transport, and
//! body-read failures surface as errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rest_client::{RestClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = RestClient::builder()
//!         .base_url("https://api.example.com")
//!         .header("Authorization", "Bearer secret")
//!         .build()?;
//!
//!     let response = client
//!         .post("/items", Some(&serde_json::json!({ "name": "a" })))
//!         .await?;
//!
//!     println!("{} {}", response.status, response.text());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod headers;

// Re-exports for ergonomic usage
pub use client::{RestClient, RestClientBuilder, RestResponse};
pub use error::{Error, Result};
