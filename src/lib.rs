pub mod aggregate;
pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod hours;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;
pub mod week;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
pub use storage::load_settings;
