//! Group endpoints.

use serde_json::Value;

use super::{execute, request_with_body, request_without_body};
use crate::error::WhapiError;
use crate::http::{HttpMethod, HttpRequest, Transport};
use crate::types::{CreateGroup, InviteCode};

/// `GET /groups?count={count}`
pub fn build_get_groups(base_url: &str, token: &str, count: u32) -> HttpRequest {
    request_without_body(
        HttpMethod::Get,
        format!("{base_url}/groups?count={count}"),
        token,
    )
}

/// `POST /communities/{communityId}/createGroup`
pub fn build_create_group(
    base_url: &str,
    token: &str,
    community_id: &str,
    subject: &str,
    participants: &[String],
    is_hidden: bool,
) -> Result<HttpRequest, WhapiError> {
    let payload = CreateGroup {
        subject: subject.to_string(),
        participants: participants.to_vec(),
        is_hidden,
    };
    request_with_body(
        HttpMethod::Post,
        format!("{base_url}/communities/{community_id}/createGroup"),
        token,
        &payload,
    )
}

/// `PUT /groups` with `{inviteCode}`.
pub fn build_accept_group_invite(
    base_url: &str,
    token: &str,
    invite_code: &str,
) -> Result<HttpRequest, WhapiError> {
    let payload = InviteCode {
        invite_code: invite_code.to_string(),
    };
    request_with_body(HttpMethod::Put, format!("{base_url}/groups"), token, &payload)
}

/// `GET /groups/{groupId}`
pub fn build_get_group_details(base_url: &str, token: &str, group_id: &str) -> HttpRequest {
    request_without_body(
        HttpMethod::Get,
        format!("{base_url}/groups/{group_id}"),
        token,
    )
}

/// `POST /groups/link` with `{inviteCode}`.
pub fn build_send_group_invite(
    base_url: &str,
    token: &str,
    invite_code: &str,
) -> Result<HttpRequest, WhapiError> {
    let payload = InviteCode {
        invite_code: invite_code.to_string(),
    };
    request_with_body(
        HttpMethod::Post,
        format!("{base_url}/groups/link"),
        token,
        &payload,
    )
}

pub async fn get_groups(
    transport: &dyn Transport,
    base_url: &str,
    token: &str,
    count: u32,
) -> Result<Value, WhapiError> {
    execute(transport, build_get_groups(base_url, token, count)).await
}

pub async fn create_group(
    transport: &dyn Transport,
    base_url: &str,
    token: &str,
    community_id: &str,
    subject: &str,
    participants: &[String],
    is_hidden: bool,
) -> Result<Value, WhapiError> {
    let request = build_create_group(
        base_url,
        token,
        community_id,
        subject,
        participants,
        is_hidden,
    )?;
    execute(transport, request).await
}

pub async fn accept_group_invite(
    transport: &dyn Transport,
    base_url: &str,
    token: &str,
    invite_code: &str,
) -> Result<Value, WhapiError> {
    let request = build_accept_group_invite(base_url, token, invite_code)?;
    execute(transport, request).await
}

pub async fn get_group_details(
    transport: &dyn Transport,
    base_url: &str,
    token: &str,
    group_id: &str,
) -> Result<Value, WhapiError> {
    execute(transport, build_get_group_details(base_url, token, group_id)).await
}

pub async fn send_group_invite(
    transport: &dyn Transport,
    base_url: &str,
    token: &str,
    invite_code: &str,
) -> Result<Value, WhapiError> {
    let request = build_send_group_invite(base_url, token, invite_code)?;
    execute(transport, request).await
}
