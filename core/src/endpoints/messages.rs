//! Message endpoints.

use serde_json::Value;

use super::{execute, request_with_body};
use crate::error::WhapiError;
use crate::http::{HttpMethod, HttpRequest, Transport};
use crate::types::TextMessage;

/// `POST /messages/text` with `{to, body}`.
pub fn build_send_text_message(
    base_url: &str,
    token: &str,
    to: &str,
    body: &str,
) -> Result<HttpRequest, WhapiError> {
    let payload = TextMessage {
        to: to.to_string(),
        body: body.to_string(),
    };
    request_with_body(
        HttpMethod::Post,
        format!("{base_url}/messages/text"),
        token,
        &payload,
    )
}

pub async fn send_text_message(
    transport: &dyn Transport,
    base_url: &str,
    token: &str,
    to: &str,
    body: &str,
) -> Result<Value, WhapiError> {
    let request = build_send_text_message(base_url, token, to, body)?;
    execute(transport, request).await
}
