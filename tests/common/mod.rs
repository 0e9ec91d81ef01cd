use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use segserve::{
    model::{Artifacts, SegmentModel, StandardScaler},
    server,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

/// Centroids matching the four segments exercised in the tests. The canonical
/// female/25/50/80 record sits exactly on centroid 1.
pub fn test_centroids() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 20.0, 20.0, 20.0],
        vec![0.0, 25.0, 50.0, 80.0],
        vec![1.0, 40.0, 90.0, 10.0],
        vec![1.0, 60.0, 30.0, 50.0],
    ]
}

pub fn classifier_only() -> SegmentModel {
    SegmentModel::ClassifierOnly {
        centroids: test_centroids(),
    }
}

pub fn classifier_with_confidence() -> SegmentModel {
    SegmentModel::ClassifierWithConfidence {
        centroids: test_centroids(),
        temperature: 100.0,
    }
}

pub fn identity_scaler() -> StandardScaler {
    StandardScaler {
        mean: vec![0.0; 4],
        scale: vec![1.0; 4],
    }
}

pub fn app(model: Option<SegmentModel>, scaler: Option<StandardScaler>) -> Router {
    server::router(Arc::new(Artifacts { model, scaler }))
}

pub async fn send(app: Router, method: &str, uri: &str, body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
