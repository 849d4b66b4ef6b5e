use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use ygodeck::http::auth::FileSessions;
use ygodeck::http::state::AppState;
use ygodeck::{config, http, AsyncYgodeck};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let data_dir = std::env::var("YGODECK_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| config::default_data_dir());

    let service = AsyncYgodeck::builder()
        .data_dir(&data_dir)
        .build()
        .await
        .expect("failed to initialize deck service");

    let sessions = FileSessions::load(&data_dir.join(config::SESSIONS_FILE));
    let state = Arc::new(AppState {
        service,
        sessions: Box::new(sessions),
    });

    let app = http::router(state);

    let addr = "0.0.0.0:3000";
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
