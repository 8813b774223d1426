mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env()?;
    let priorities = services::priorities::PrioritiesService::from_config(&config.backend)?;
    tracing::info!(backend = %priorities.describe(), "priorities backend configured");

    let state = state::AppState::new(priorities);
    let app = routes::leptos_app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "surf dashboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
