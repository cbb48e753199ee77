use axum::http::{header, Method};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::{handlers, AppState};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Неизвестные пути отдают index.html, роутинг делает фронтенд
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/mail/inquiry", post(handlers::mail::send_inquiry))
        .route("/api/mail/review", post(handlers::mail::send_review))
        .with_state(state)
        .fallback_service(spa)
        .layer(cors)
}
