#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use time::OffsetDateTime;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let state = state::AppState::new(config.tap_online_window());

    if let Some(path) = config.taps_file.as_deref() {
        let seeds = config::load_tap_seeds(path).expect("taps file load failed");
        let count = services::taps::seed_taps(&state, &seeds, OffsetDateTime::now_utc())
            .await
            .expect("taps file seeding failed");
        tracing::info!(count, path = %path.display(), "seeded taps");
    }

    // Fall back to API-only serving when the Leptos site config is missing.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos app unavailable; serving API only");
            routes::api_routes(state)
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, window_secs = config.tap_online_window_secs, "tap dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
