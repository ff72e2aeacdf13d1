pub mod config;
pub mod logging;
pub mod state;

pub use config::Settings;
pub use state::AppState;
