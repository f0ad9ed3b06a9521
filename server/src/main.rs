#![recursion_limit = "256"]

mod config;
mod db;
mod error;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");

    tokio::fs::create_dir_all(&config.uploads_dir)
        .await
        .expect("failed to create uploads directory");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    let port = config.port;
    let uploads_dir = config.uploads_dir.display().to_string();
    let state = state::AppState::new(pool, config);

    let app = routes::leptos_app(state).expect("leptos configuration failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, %uploads_dir, "wall of love listening");
    axum::serve(listener, app).await.expect("server failed");
}
