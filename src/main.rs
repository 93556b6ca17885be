mod app;
mod auth;
mod config;
mod error;
mod jobs;
mod offers;
mod rates;
mod rest;
mod seed;
mod state;
mod store;
#[cfg(test)]
mod test_util;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "frontier_loom=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = state::AppState::init()?;
    if state.config.seed_demo_data {
        seed::seed_demo_jobs(&state.store).await;
    }

    let config = state.config.clone();
    let app = app::build_app(state);
    app::serve(app, &config).await
}
