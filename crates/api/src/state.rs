use std::sync::Arc;

use crate::config::ServerConfig;
use crate::fetch::IgcFetcher;
use crate::notifier::Notifier;

/// Shared application state available to all axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: paratick_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// IGC download client.
    pub fetcher: Arc<IgcFetcher>,
    /// Outbound webhook delivery.
    pub notifier: Arc<Notifier>,
}
