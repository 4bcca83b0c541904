//! The `WhapiClient` facade.
//!
//! # Design
//! `WhapiClient` binds a token, a base URL and a `Transport` once, then
//! forwards each method to the matching endpoint function. It holds no
//! mutable state, so a single instance (or its clones, which share the
//! transport) can serve concurrent calls.
//!
//! Only construction and `create_group` validate input locally; every other
//! method fails exactly as its endpoint function fails.

use std::sync::Arc;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::endpoints;
use crate::error::WhapiError;
use crate::http::{auth_headers, Transport};
use crate::transport::ReqwestTransport;

/// Authenticated client for the Whapi REST API.
#[derive(Clone)]
pub struct WhapiClient {
    token: String,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl WhapiClient {
    /// Client for the hosted gateway using the default transport.
    ///
    /// Fails with a 400 bad request when `token` is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, WhapiError> {
        Self::from_config(ClientConfig::new(token))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, WhapiError> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, WhapiError> {
        config.validate()?;
        Ok(Self {
            base_url: config.normalized_base_url(),
            token: config.token,
            transport,
        })
    }

    pub fn builder() -> WhapiClientBuilder {
        WhapiClientBuilder::default()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `Authorization: Bearer <token>` and `Content-Type: application/json`.
    pub fn auth_headers(&self) -> Vec<(String, String)> {
        auth_headers(&self.token)
    }

    pub async fn get_communities(&self, count: u32) -> Result<Value, WhapiError> {
        endpoints::get_communities(self.transport.as_ref(), &self.base_url, &self.token, count)
            .await
    }

    pub async fn get_sub_groups_of_community(
        &self,
        community_id: &str,
    ) -> Result<Value, WhapiError> {
        endpoints::get_sub_groups_of_community(
            self.transport.as_ref(),
            &self.base_url,
            &self.token,
            community_id,
        )
        .await
    }

    pub async fn get_groups(&self, count: u32) -> Result<Value, WhapiError> {
        endpoints::get_groups(self.transport.as_ref(), &self.base_url, &self.token, count).await
    }

    /// Create a group inside a community.
    ///
    /// An empty community id or subject is rejected before any request is
    /// built. Participants are forwarded as given, even an empty list.
    /// `is_hidden` of `None` is sent as `false`.
    ///
    /// A non-string subject does not compile:
    ///
    /// ```compile_fail
    /// # async fn demo(client: whapi_core::WhapiClient) {
    /// let _ = client.create_group("120363@g.us", 42, &["15551234567"], None).await;
    /// # }
    /// ```
    pub async fn create_group<S: AsRef<str>>(
        &self,
        community_id: &str,
        subject: &str,
        participants: &[S],
        is_hidden: Option<bool>,
    ) -> Result<Value, WhapiError> {
        validate_create_group(community_id, subject)?;
        let participants: Vec<String> = participants
            .iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        endpoints::create_group(
            self.transport.as_ref(),
            &self.base_url,
            &self.token,
            community_id,
            subject,
            &participants,
            is_hidden.unwrap_or(false),
        )
        .await
    }

    pub async fn accept_group_invite(&self, invite_code: &str) -> Result<Value, WhapiError> {
        endpoints::accept_group_invite(
            self.transport.as_ref(),
            &self.base_url,
            &self.token,
            invite_code,
        )
        .await
    }

    pub async fn get_group_details(&self, group_id: &str) -> Result<Value, WhapiError> {
        endpoints::get_group_details(self.transport.as_ref(), &self.base_url, &self.token, group_id)
            .await
    }

    pub async fn send_group_invite(&self, invite_code: &str) -> Result<Value, WhapiError> {
        endpoints::send_group_invite(
            self.transport.as_ref(),
            &self.base_url,
            &self.token,
            invite_code,
        )
        .await
    }

    /// Send `message` as a text message to `to` (phone number or chat id).
    pub async fn send_text_message(&self, to: &str, message: &str) -> Result<Value, WhapiError> {
        endpoints::send_text_message(
            self.transport.as_ref(),
            &self.base_url,
            &self.token,
            to,
            message,
        )
        .await
    }
}

impl std::fmt::Debug for WhapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhapiClient")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn validate_create_group(community_id: &str, subject: &str) -> Result<(), WhapiError> {
    if community_id.is_empty() {
        return Err(WhapiError::bad_request("communityId is required"));
    }
    if subject.is_empty() {
        return Err(WhapiError::bad_request("subject is required"));
    }
    Ok(())
}

/// Builder for [`WhapiClient`].
#[derive(Default)]
pub struct WhapiClientBuilder {
    token: Option<String>,
    base_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl WhapiClientBuilder {
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Fails with a 400 bad request when no token, or an empty one, was set.
    pub fn build(self) -> Result<WhapiClient, WhapiError> {
        let mut config = ClientConfig::new(self.token.unwrap_or_default());
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()),
        };
        WhapiClient::with_transport(config, transport)
    }
}
