mod config;
mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    if let Some(password) = config.admin_password.as_deref() {
        if let Err(e) = services::accounts::ensure_admin(&pool, password).await {
            tracing::error!(error = %e, "admin bootstrap failed");
        }
    }

    let state = state::AppState::new(pool, config.cookie_secure);
    let app = routes::app(state, &config.static_dir);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "evolute leads api listening");
    axum::serve(listener, app).await.expect("server failed");
}
