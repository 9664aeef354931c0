//! # fundlink
//!
//! Higher-level async client library for the FundLink fundraising platform
//! API.
//!
//! ## Overview
//!
//! The crate is split into a domain-agnostic request/transport core and a
//! typed wrapper over the platform's endpoints. The core builds requests,
//! renders bodies from named templates, transports calls singly or as a
//! concurrent batch, and logs per-call metadata through an injected
//! capability; the wrapper maps platform responses onto typed results and
//! augments failures with secondary validation calls.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Request building, templating, transport and batch dispatch |
//! | [`client`] | The [`Client`] wrapper over platform operations |
//! | [`models`] | Platform value objects and date parsing |
//! | [`error`] | Unified error type |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fundlink::{api::TracingLogger, ClientBuilder, Env};
//!
//! #[tokio::main]
//! async fn main() -> fundlink::Result<()> {
//!     let client = ClientBuilder::new("your-api-key")
//!         .env(Env::Sandbox)
//!         .logger(Arc::new(TracingLogger))
//!         .build()
//!         .await?;
//!
//!     let available = client.account_availability_check("ada@example.com").await?;
//!     println!("available: {available}");
//!     Ok(())
//! }
//! ```
//!
//! Batch dispatch is exposed directly from [`api`] for callers composing
//! their own request sets:
//!
//! ```rust,no_run
//! use fundlink::api::{build_request, execute_batch};
//!
//! # async fn demo(http: reqwest::Client) -> fundlink::Result<()> {
//! let requests = vec![
//!     build_request("ua", "application/json", "GET", "https://api.example.com/a", None)?,
//!     build_request("ua", "application/json", "GET", "https://api.example.com/b", None)?,
//! ];
//! let results = execute_batch(&http, "demo", "Fetch", requests, Vec::new(), None).await;
//! assert_eq!(results.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod models;

pub use client::{Client, ClientBuilder, Env, CONTENT_TYPE, USER_AGENT};

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library.
pub mod error;
pub use error::Error;
