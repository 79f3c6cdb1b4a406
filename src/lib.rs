pub mod app;
pub mod chart;
pub mod config;
pub mod controller;
pub mod delta;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod models;
pub mod state;
pub mod ui;
pub mod upstream;

pub use app::router;
pub use config::Config;
pub use controller::ChartController;
pub use delta::build_chart_data;
pub use state::AppState;
pub use upstream::HistoricalClient;
