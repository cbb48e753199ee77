pub mod handlers;
pub mod routes;
pub mod shared;

use std::sync::Arc;

use shared::mail::MailService;

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub mail: Arc<MailService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::middleware::Next;
    use axum::response::Response;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Статику не логируем построчно
                "info,tower_http=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let size = response
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_string();

        tracing::info!(
            "{:>5}ms | {:>8} | {} {:>6} {}",
            start.elapsed().as_millis(),
            size,
            response.status().as_u16(),
            method,
            uri.path()
        );

        response
    }

    let config = shared::config::load_config()?;
    let static_dir = shared::config::resolve_static_dir(&config);
    tracing::info!("Serving storefront from {}", static_dir.display());

    let transport = shared::mail::EmailJsTransport::new(config.mail.clone())?;
    let state = AppState {
        mail: Arc::new(MailService::new(
            Arc::new(transport),
            config.mail.recipients(),
        )),
    };

    let app = routes::configure_routes(state, &static_dir)
        .layer(axum::middleware::from_fn(request_logger));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
