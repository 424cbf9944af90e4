//! Liveness and store diagnostic handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Liveness response.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Liveness endpoint.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "synk.ai backend running".to_string(),
    })
}

/// Store diagnostic response.
#[derive(Serialize)]
pub struct StoreCheckResponse {
    pub backend: String,
    pub store: String,
    pub collections: Vec<CollectionStatus>,
}

#[derive(Serialize)]
pub struct CollectionStatus {
    pub name: String,
    pub documents: usize,
}

/// Store connectivity diagnostic. Not part of the core contract.
pub async fn store_check(State(state): State<AppState>) -> Json<StoreCheckResponse> {
    let mut collections = Vec::new();
    for name in state.store.list_collections().await {
        let documents = state.store.count(&name).await;
        collections.push(CollectionStatus { name, documents });
    }

    Json(StoreCheckResponse {
        backend: "running".to_string(),
        store: "connected".to_string(),
        collections,
    })
}
