use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use mentee_dashboard::config::load_config;
use mentee_dashboard::core::error::AppError;
use mentee_dashboard::features::mentees::{MenteeDataSource, MenteeService};
use mentee_dashboard::features::store::StoreClient;
use mentee_dashboard::server::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = load_config()?;

    let store: Arc<dyn MenteeDataSource> = Arc::new(StoreClient::new(&config.store)?);
    let mentee_service = Arc::new(MenteeService::new(store));
    let app_state = AppState::new(mentee_service, config.index_path.clone());

    let app = build_router(app_state, &config.static_dir);

    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!(%addr, store = %config.store.url, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
