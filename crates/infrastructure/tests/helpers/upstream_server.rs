use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub struct RecordedRequest {
    pub path: String,
    pub params: HashMap<String, String>,
    pub authorization: Option<String>,
}

#[derive(Default)]
struct Recorder {
    requests: Mutex<Vec<RecordedRequest>>,
    relay_reply: Mutex<String>,
}

/// Local stand-in for every third-party API, bound to an ephemeral port.
pub struct MockUpstream {
    pub base_url: String,
    recorder: Arc<Recorder>,
}

impl MockUpstream {
    pub async fn start() -> Self {
        let recorder = Arc::new(Recorder::default());
        *recorder.relay_reply.lock().unwrap() = "success\n".to_string();

        let app = Router::new()
            .route("/observations", get(observations))
            .route("/history", get(observations))
            .route("/astronomy", get(astronomy))
            .route("/astronomy-broken", get(astronomy_broken))
            .route("/sun", get(sun))
            .route("/feed.xml", get(feed))
            .route("/unavailable", get(unavailable))
            .route("/relay", post(relay))
            .with_state(recorder.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            recorder,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorder.requests.lock().unwrap().clone()
    }

    pub fn set_relay_reply(&self, reply: &str) {
        *self.recorder.relay_reply.lock().unwrap() = reply.to_string();
    }
}

fn record(recorder: &Recorder, uri: &Uri, headers: &HeaderMap, params: HashMap<String, String>) {
    recorder.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        params,
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });
}

async fn observations(
    State(recorder): State<Arc<Recorder>>,
    uri: Uri,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    record(&recorder, &uri, &headers, params);
    axum::Json(json!({
        "observations": [{ "epoch": 1718452800, "lat": 45.27, "lon": -66.06, "tz": "America/Moncton" }]
    }))
}

async fn astronomy(
    State(recorder): State<Arc<Recorder>>,
    uri: Uri,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    record(&recorder, &uri, &headers, params);
    axum::Json(json!({
        "data": { "table": { "rows": [
            { "entry": { "id": "sun" }, "cells": [{ "extraInfo": {} }] },
            { "entry": { "id": "moon" }, "cells": [{
                "extraInfo": { "phase": { "angel": "183.52", "string": "Full Moon" } }
            }] }
        ] } }
    }))
}

async fn astronomy_broken(
    State(recorder): State<Arc<Recorder>>,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    record(&recorder, &uri, &headers, HashMap::new());
    axum::Json(json!({ "data": { "table": { "rows": [] } } }))
}

async fn sun(
    State(recorder): State<Arc<Recorder>>,
    uri: Uri,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    record(&recorder, &uri, &headers, params);
    axum::Json(json!({ "results": { "sunrise": "2024-06-15T08:33:12+00:00" }, "status": "OK" }))
}

async fn feed(
    State(recorder): State<Arc<Recorder>>,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    record(&recorder, &uri, &headers, HashMap::new());
    (
        [("content-type", "application/xml")],
        "<rss><channel><title>Saint John</title></channel></rss>",
    )
}

async fn unavailable() -> impl IntoResponse {
    (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance")
}

async fn relay(
    State(recorder): State<Arc<Recorder>>,
    uri: Uri,
    headers: HeaderMap,
    Form(params): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    record(&recorder, &uri, &headers, params);
    recorder.relay_reply.lock().unwrap().clone()
}
