use std::error::Error;
use std::sync::Arc;

use dotenv::dotenv;
use tokio::net::TcpListener;
use user_registry_backend::routes::make_app;
use user_registry_backend::store::UserStore;
use user_registry_backend::{AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = Config::init();
    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState {
        store: UserStore::new(),
        config,
    });

    let app = make_app(state);
    let listener = TcpListener::bind(&addr).await?;
    println!("🚀 Server started successfully on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
