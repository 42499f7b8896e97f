//! # ghost-admin - Ghost Admin API client for Rust
//!
//! A blocking client for the [Ghost Admin API](https://ghost.org/docs/admin-api/).
//! It signs short-lived admin tokens from an Admin API key, builds requests
//! with the headers Ghost expects, and hands back raw HTTP responses.
//!
//! ## Features
//!
//! - Token authentication: HS256 tokens with the `/admin/` audience and a
//!   five minute lifetime, generated fresh for every request
//! - Request building with JSON bodies and `Accept-Version` / `User-Agent` headers
//! - Endpoint helpers for `/{ghost_path}/api/{api}/{resource}/` style paths
//! - Token decoding and verification for tests and local servers
//!
//! ## Basic Usage
//!
//! ```no_run
//! use ghost_admin::GhostClient;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GhostClient::new(
//!         "https://blog.example.com",
//!         "6489f2c1e1a6b0001c3d7a2f:4f1d0e8c1c9b4a3e2d1f0a9b8c7d6e5f4a3b2c1d0e9f8a7b6c5d4e3f2a1b0c9d",
//!     )?;
//!
//!     let path = client.endpoint("admin", "posts");
//!     let response = client.request("POST", &path, Some(&serde_json::json!({
//!         "posts": [{ "title": "Hello world" }]
//!     })))?;
//!
//!     println!("status: {}", response.status());
//!     Ok(())
//! }
//! ```
//!
//! ## Building Without Sending
//!
//! ```no_run
//! use ghost_admin::{Config, GhostClient};
//! use std::time::Duration;
//!
//! let config = Config::default()
//!     .with_version("v5.0")
//!     .with_timeout(Duration::from_secs(30));
//! let client = GhostClient::with_config("https://blog.example.com", "", config)?;
//!
//! let path = client.endpoint_for_slug("admin", "posts", "welcome");
//! let request = client.new_request::<serde_json::Value>("GET", &path, None)?;
//! let response = client.execute(request)?;
//! # Ok::<(), ghost_admin::GhostError>(())
//! ```

pub mod apikey;
pub mod client;
pub mod error;
pub mod rest;
pub mod token;

// Re-export main types for convenience
pub use apikey::{generate_token, AdminKey};
pub use client::Config;
pub use error::{GhostError, Result};
pub use rest::GhostClient;

// Re-export serde_json for convenience
pub use serde_json::json;
