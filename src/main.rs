//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use portfolio::{config::AppState, routes::app_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG controla o nível; padrão "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Se a configuração ou o catálogo falharem, a aplicação não deve iniciar.
    let app_state = AppState::new().await?;
    let addr = app_state.config.bind_addr.clone();

    let app = app_router(app_state);

    // Inicia o servidor
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
