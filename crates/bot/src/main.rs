use anyhow::Context;

use fintrack_bot::app::{AppState, build_app};
use fintrack_bot::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    fintrack_observability::init(config.log_format);

    let state = AppState::from_config(&config);
    let shutdown = state.shutdown.clone();
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!(
        window_days = config.window_days,
        font = ?config.report.font_path,
        "listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = shutdown.wait() => {}
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("interrupt received");
                }
            }
        })
        .await
        .context("server terminated with an error")?;

    tracing::info!("finance tracker bot stopped");
    Ok(())
}
