//! HTTP client for the stroke prediction service
//!
//! Thin wrapper over `reqwest` shared by every Strokecast crate that talks to the network.
//!
//! ## Features
//!
//! - **Trait-based design**: Mockable via `HttpClientTrait`
//! - **Configurable**: Optional timeouts, proxy, user-agent, redirects
//! - **JSON helpers**: `post_json` sets the content type and encodes the body
//! - **Connection pooling**: Managed by underlying reqwest client
//! - **Testing support**: Exercised against wiremock servers

pub mod client;
pub mod config;
pub mod error;

pub use client::{shared_client, HttpClient, HttpClientTrait};
pub use config::HttpConfig;
pub use error::{HttpError, Result};

/// Re-export commonly used types
pub use reqwest::{header, Method, Response, StatusCode};
