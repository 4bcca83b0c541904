//! Async client SDK for the Whapi messaging REST API.
//!
//! # Overview
//! `WhapiClient` binds a bearer token to eight operations over communities,
//! groups and messages. Each method maps to exactly one HTTP request and
//! returns the decoded JSON body untouched.
//!
//! # Design
//! - Endpoint functions in [`endpoints`] are split into a pure `build_*`
//!   step producing an `HttpRequest` and an async step that sends it through
//!   a [`Transport`]. The default transport is [`ReqwestTransport`].
//! - Validation errors and transport/remote errors share one type,
//!   [`WhapiError`], discriminated by [`ErrorKind`].
//! - No retries, caching or timeouts; those belong to the transport the
//!   caller supplies.
//!
//! ```no_run
//! # async fn demo() -> Result<(), whapi_core::WhapiError> {
//! let client = whapi_core::WhapiClient::new("my-token")?;
//! let groups = client.get_groups(5).await?;
//! println!("{groups}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{WhapiClient, WhapiClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{AppError, BoxError, ErrorKind, WhapiError};
pub use http::{auth_headers, HttpMethod, HttpRequest, HttpResponse, Transport};
pub use transport::ReqwestTransport;
pub use types::{CreateGroup, InviteCode, TextMessage};
