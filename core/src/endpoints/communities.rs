//! Community endpoints.

use serde_json::Value;

use super::{execute, request_without_body};
use crate::error::WhapiError;
use crate::http::{HttpMethod, HttpRequest, Transport};

/// `GET /communities?count={count}`
pub fn build_get_communities(base_url: &str, token: &str, count: u32) -> HttpRequest {
    request_without_body(
        HttpMethod::Get,
        format!("{base_url}/communities?count={count}"),
        token,
    )
}

/// `GET /communities/{communityId}/subGroups`
pub fn build_get_sub_groups_of_community(
    base_url: &str,
    token: &str,
    community_id: &str,
) -> HttpRequest {
    request_without_body(
        HttpMethod::Get,
        format!("{base_url}/communities/{community_id}/subGroups"),
        token,
    )
}

pub async fn get_communities(
    transport: &dyn Transport,
    base_url: &str,
    token: &str,
    count: u32,
) -> Result<Value, WhapiError> {
    execute(transport, build_get_communities(base_url, token, count)).await
}

pub async fn get_sub_groups_of_community(
    transport: &dyn Transport,
    base_url: &str,
    token: &str,
    community_id: &str,
) -> Result<Value, WhapiError> {
    execute(
        transport,
        build_get_sub_groups_of_community(base_url, token, community_id),
    )
    .await
}
