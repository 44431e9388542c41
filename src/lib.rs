pub mod audit;
pub mod config;
pub mod error;
pub mod routes;
pub mod store;
pub mod telemetry;

use std::sync::Arc;

pub use config::Config;
use store::AuditStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AuditStore>,
    pub config: Config,
}
