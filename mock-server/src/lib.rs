use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

pub const SEED_COMMUNITY_ID: &str = "120363000000000001@g.us";
pub const SEED_GROUP_ID: &str = "120363000000000002@g.us";
pub const SEED_INVITE_CODE: &str = "SeedInviteCode000000001";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Community {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub participants: Vec<String>,
    #[serde(rename = "isHidden")]
    pub is_hidden: bool,
    #[serde(rename = "communityId", skip_serializing_if = "Option::is_none")]
    pub community_id: Option<String>,
    #[serde(rename = "inviteCode")]
    pub invite_code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub to: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct CreateGroup {
    pub subject: String,
    pub participants: Vec<String>,
    #[serde(rename = "isHidden", default)]
    pub is_hidden: bool,
}

#[derive(Deserialize)]
pub struct InviteCode {
    #[serde(rename = "inviteCode")]
    pub invite_code: String,
}

#[derive(Deserialize)]
pub struct TextMessage {
    pub to: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct CountQuery {
    pub count: Option<usize>,
}

/// In-memory backing store. Groups keep insertion order so `count` slices
/// are stable.
#[derive(Debug, Default)]
pub struct Store {
    pub communities: Vec<Community>,
    pub groups: Vec<Group>,
    pub messages: Vec<Message>,
}

impl Store {
    /// One community holding one group, reachable by `SEED_INVITE_CODE`.
    pub fn seeded() -> Self {
        Self {
            communities: vec![Community {
                id: SEED_COMMUNITY_ID.to_string(),
                name: "Neighbours".to_string(),
            }],
            groups: vec![Group {
                id: SEED_GROUP_ID.to_string(),
                name: "Announcements".to_string(),
                participants: Vec::new(),
                is_hidden: false,
                community_id: Some(SEED_COMMUNITY_ID.to_string()),
                invite_code: SEED_INVITE_CODE.to_string(),
            }],
            messages: Vec::new(),
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct AppState {
    pub token: Arc<str>,
    pub db: Db,
}

/// Router for the Whapi endpoints, accepting only `Bearer {token}`.
pub fn app(token: &str) -> Router {
    let state = AppState {
        token: Arc::from(token),
        db: Arc::new(RwLock::new(Store::seeded())),
    };
    Router::new()
        .route("/communities", get(list_communities))
        .route("/communities/{id}/subGroups", get(list_sub_groups))
        .route("/communities/{id}/createGroup", post(create_group))
        .route("/groups", get(list_groups).put(accept_invite))
        .route("/groups/link", post(send_invite))
        .route("/groups/{id}", get(get_group))
        .route("/messages/text", post(send_text))
        .layer(middleware::from_fn_with_state(state.clone(), require_bearer))
        .with_state(state)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let expected = format!("Bearer {}", state.token);
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected);
    if !authorized {
        debug!(uri = %request.uri(), "rejecting request without valid bearer token");
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

fn page<T: Clone>(items: &[T], count: Option<usize>) -> Vec<T> {
    let count = count.unwrap_or(items.len());
    items.iter().take(count).cloned().collect()
}

async fn list_communities(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> Json<Value> {
    let store = state.db.read().await;
    let communities = page(&store.communities, query.count);
    Json(json!({
        "communities": communities,
        "count": communities.len(),
        "total": store.communities.len(),
    }))
}

async fn list_sub_groups(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let store = state.db.read().await;
    if !store.communities.iter().any(|c| c.id == id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let groups: Vec<Group> = store
        .groups
        .iter()
        .filter(|g| g.community_id.as_deref() == Some(id.as_str()))
        .cloned()
        .collect();
    Ok(Json(json!({ "groups": groups })))
}

async fn create_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CreateGroup>,
) -> Result<Json<Group>, StatusCode> {
    if input.subject.trim().is_empty() || input.participants.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = state.db.write().await;
    if !store.communities.iter().any(|c| c.id == id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let group = Group {
        id: format!("{}@g.us", Uuid::new_v4().simple()),
        name: input.subject,
        participants: input.participants,
        is_hidden: input.is_hidden,
        community_id: Some(id),
        invite_code: Uuid::new_v4().simple().to_string(),
    };
    debug!(group_id = %group.id, "created group");
    store.groups.push(group.clone());
    Ok(Json(group))
}

async fn list_groups(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> Json<Value> {
    let store = state.db.read().await;
    let groups = page(&store.groups, query.count);
    Json(json!({
        "groups": groups,
        "count": groups.len(),
        "total": store.groups.len(),
    }))
}

async fn accept_invite(
    State(state): State<AppState>,
    Json(input): Json<InviteCode>,
) -> Result<Json<Value>, StatusCode> {
    let store = state.db.read().await;
    let group = store
        .groups
        .iter()
        .find(|g| g.invite_code == input.invite_code)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({ "group_id": group.id })))
}

async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Group>, StatusCode> {
    let store = state.db.read().await;
    store
        .groups
        .iter()
        .find(|g| g.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn send_invite(
    State(state): State<AppState>,
    Json(input): Json<InviteCode>,
) -> Result<Json<Value>, StatusCode> {
    let store = state.db.read().await;
    let group = store
        .groups
        .iter()
        .find(|g| g.invite_code == input.invite_code)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({ "success": true, "group_id": group.id })))
}

async fn send_text(
    State(state): State<AppState>,
    Json(input): Json<TextMessage>,
) -> Result<Json<Value>, StatusCode> {
    if input.to.trim().is_empty() || input.body.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let message = Message {
        id: Uuid::new_v4().simple().to_string(),
        to: input.to,
        body: input.body,
    };
    state.db.write().await.messages.push(message.clone());
    Ok(Json(json!({ "sent": true, "message": message })))
}
