//! Request payloads sent to the Whapi API.
//!
//! # Design
//! Responses are returned as `serde_json::Value` and never interpreted, so
//! only outgoing bodies get types here. Field names follow the wire format
//! (camelCase).

use serde::{Deserialize, Serialize};

/// Body of `POST /communities/{communityId}/createGroup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroup {
    pub subject: String,
    pub participants: Vec<String>,
    #[serde(default)]
    pub is_hidden: bool,
}

/// Body of `PUT /groups` and `POST /groups/link`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InviteCode {
    pub invite_code: String,
}

/// Body of `POST /messages/text`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextMessage {
    pub to: String,
    pub body: String,
}
