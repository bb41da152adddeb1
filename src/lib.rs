pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod store;

pub use app_state::AppState;
pub use config::Config;
