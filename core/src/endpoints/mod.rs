//! One function per remote Whapi operation.
//!
//! # Design
//! Every operation comes as a pair: a pure `build_*` function producing the
//! `HttpRequest`, and an async function that builds, sends it through a
//! `Transport`, and decodes the body. Both take the token explicitly and do
//! no validation of their own; that lives in `WhapiClient`.
//!
//! Decoding is deliberately thin: 2xx bodies are parsed into
//! `serde_json::Value` and returned untouched, anything else becomes
//! `WhapiError::Http` with the raw body. Nothing is retried.

pub mod communities;
pub mod groups;
pub mod messages;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::WhapiError;
use crate::http::{auth_headers, HttpMethod, HttpRequest, HttpResponse, Transport};

pub use communities::{
    build_get_communities, build_get_sub_groups_of_community, get_communities,
    get_sub_groups_of_community,
};
pub use groups::{
    accept_group_invite, build_accept_group_invite, build_create_group, build_get_group_details,
    build_get_groups, build_send_group_invite, create_group, get_group_details, get_groups,
    send_group_invite,
};
pub use messages::{build_send_text_message, send_text_message};

fn request_without_body(method: HttpMethod, url: String, token: &str) -> HttpRequest {
    HttpRequest {
        method,
        url,
        headers: auth_headers(token),
        body: None,
    }
}

fn request_with_body<T: Serialize>(
    method: HttpMethod,
    url: String,
    token: &str,
    body: &T,
) -> Result<HttpRequest, WhapiError> {
    let body =
        serde_json::to_string(body).map_err(|e| WhapiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        url,
        headers: auth_headers(token),
        body: Some(body),
    })
}

/// Send `request` and decode the response body.
pub(crate) async fn execute(
    transport: &dyn Transport,
    request: HttpRequest,
) -> Result<Value, WhapiError> {
    let method = request.method;
    let url = request.url.clone();
    debug!(%method, %url, "sending whapi request");

    let response = match transport.execute(request).await {
        Ok(response) => response,
        Err(err) => {
            debug!(%method, %url, error = %err, "whapi request failed");
            return Err(WhapiError::Transport(err));
        }
    };

    debug!(%method, %url, status = response.status, "received whapi response");
    parse_response(response)
}

/// Map a raw response to the decoded body or an `Http` error.
pub fn parse_response(response: HttpResponse) -> Result<Value, WhapiError> {
    if !response.is_success() {
        return Err(WhapiError::Http {
            status: response.status,
            body: response.body,
        });
    }
    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&response.body).map_err(|e| WhapiError::Deserialization(e.to_string()))
}
