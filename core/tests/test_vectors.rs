//! Verify every operation against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector names an operation and its arguments, the request the client
//! must produce, a simulated response, and the value the caller must get
//! back. A replaying transport records the request and returns the
//! simulated response, so no server is involved. Comparing parsed JSON (not
//! raw strings) avoids false negatives from field-ordering differences.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use whapi_core::{
    BoxError, ClientConfig, HttpMethod, HttpRequest, HttpResponse, Transport, WhapiClient,
    WhapiError,
};

const BASE_URL: &str = "http://localhost:3000";

/// Returns a canned response and keeps the requests it was given.
struct Replay {
    response: HttpResponse,
    requests: Mutex<Vec<HttpRequest>>,
}

impl Replay {
    fn new(simulated: &Value) -> Arc<Self> {
        Arc::new(Self {
            response: HttpResponse {
                status: simulated["status"].as_u64().unwrap() as u16,
                headers: Vec::new(),
                body: simulated["body"].as_str().unwrap().to_string(),
            },
            requests: Mutex::new(Vec::new()),
        })
    }

    fn only_request(&self) -> HttpRequest {
        let requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }
}

#[async_trait]
impl Transport for Replay {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        other => panic!("unknown method: {other}"),
    }
}

fn str_arg<'a>(args: &'a Value, key: &str) -> &'a str {
    args[key].as_str().unwrap()
}

async fn invoke(client: &WhapiClient, operation: &str, args: &Value) -> Result<Value, WhapiError> {
    match operation {
        "get_communities" => client.get_communities(args["count"].as_u64().unwrap() as u32).await,
        "get_sub_groups_of_community" => {
            client
                .get_sub_groups_of_community(str_arg(args, "community_id"))
                .await
        }
        "get_groups" => client.get_groups(args["count"].as_u64().unwrap() as u32).await,
        "create_group" => {
            let participants: Vec<String> =
                serde_json::from_value(args["participants"].clone()).unwrap();
            client
                .create_group(
                    str_arg(args, "community_id"),
                    str_arg(args, "subject"),
                    &participants,
                    args["is_hidden"].as_bool(),
                )
                .await
        }
        "accept_group_invite" => client.accept_group_invite(str_arg(args, "invite_code")).await,
        "get_group_details" => client.get_group_details(str_arg(args, "group_id")).await,
        "send_group_invite" => client.send_group_invite(str_arg(args, "invite_code")).await,
        "send_text_message" => {
            client
                .send_text_message(str_arg(args, "to"), str_arg(args, "message"))
                .await
        }
        other => panic!("unknown operation: {other}"),
    }
}

fn vectors() -> Value {
    let raw = include_str!("../../test-vectors/endpoints.json");
    serde_json::from_str(raw).unwrap()
}

#[tokio::test]
async fn endpoint_test_vectors() {
    let vectors = vectors();
    let token = vectors["token"].as_str().unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let replay = Replay::new(&case["simulated_response"]);
        let config = ClientConfig::new(token).with_base_url(BASE_URL);
        let client = WhapiClient::with_transport(config, replay.clone()).unwrap();

        let result = invoke(&client, case["operation"].as_str().unwrap(), &case["args"])
            .await
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(result, case["expected_result"], "{name}: result");

        let req = replay.only_request();
        let expected_req = &case["expected_request"];
        assert_eq!(
            req.method,
            parse_method(expected_req["method"].as_str().unwrap()),
            "{name}: method"
        );
        assert_eq!(
            req.url,
            format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()),
            "{name}: url"
        );
        assert_eq!(req.headers, whapi_core::auth_headers(token), "{name}: headers");

        match req.body.as_deref() {
            Some(body) => {
                let body: Value = serde_json::from_str(body).unwrap();
                assert_eq!(body, expected_req["body"], "{name}: body");
            }
            None => assert!(expected_req["body"].is_null(), "{name}: body"),
        }
    }
}

#[tokio::test]
async fn failure_test_vectors() {
    let vectors = vectors();
    let token = vectors["token"].as_str().unwrap();

    for case in vectors["failures"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let simulated = &case["simulated_response"];
        let replay = Replay::new(simulated);
        let config = ClientConfig::new(token).with_base_url(BASE_URL);
        let client = WhapiClient::with_transport(config, replay).unwrap();

        let err = client.get_groups(5).await.unwrap_err();
        match err {
            WhapiError::Http { status, body } => {
                assert_eq!(
                    u64::from(status),
                    case["expected_status"].as_u64().unwrap(),
                    "{name}: status"
                );
                assert_eq!(body, simulated["body"].as_str().unwrap(), "{name}: body");
            }
            other => panic!("{name}: unexpected error {other:?}"),
        }
    }
}
