//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page-size parameter for ticker endpoints (`?limit=`).
///
/// Clamped via `paratick_core::query::clamp_limit`; zero means "timestamps
/// only, no identifier page".
#[derive(Debug, Deserialize)]
pub struct TickerParams {
    pub limit: Option<i64>,
}
