//! 商店 API 的内存替身，用于开发和测试

pub mod error;
pub mod handler;
pub mod middleware;
pub mod model;
pub mod service;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use handler::AppState;
pub use service::StoreService;

pub fn router(store: StoreService) -> Router {
    Router::new()
        .route("/clientes", post(handler::create_cliente))
        .route("/produtos", post(handler::create_produto))
        .route("/amizades", post(handler::create_amizade))
        .route("/compras", post(handler::register_compra))
        .route("/recomendacoes/:cpf", get(handler::get_recomendacoes))
        .route("/health", get(handler::health_check))
        .layer(from_fn(middleware::request_logging_middleware))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store })
}
