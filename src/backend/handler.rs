//! 模拟后端处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::error::BackendError;
use super::model::{AmizadeCreate, ClienteCreate, CompraCreate, MessageResponse, Produto};
use super::service::StoreService;

#[derive(Clone)]
pub struct AppState {
    pub store: StoreService,
}

type Created = (StatusCode, Json<MessageResponse>);

pub async fn create_cliente(
    State(state): State<AppState>,
    Json(payload): Json<ClienteCreate>,
) -> Result<Created, BackendError> {
    let body = state.store.create_cliente(payload)?;
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn create_produto(
    State(state): State<AppState>,
    Json(payload): Json<Produto>,
) -> Result<Created, BackendError> {
    let body = state.store.create_produto(payload)?;
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn create_amizade(
    State(state): State<AppState>,
    Json(payload): Json<AmizadeCreate>,
) -> Result<Created, BackendError> {
    let body = state.store.create_amizade(payload)?;
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn register_compra(
    State(state): State<AppState>,
    Json(payload): Json<CompraCreate>,
) -> Result<Created, BackendError> {
    let body = state.store.register_compra(payload)?;
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn get_recomendacoes(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Json<Vec<Produto>> {
    Json(state.store.recommendations(&cpf))
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
