//! HTTP boundary for paratick: axum routes and handlers around the track
//! repository and the ticker windowing in `paratick-core`.

pub mod config;
pub mod error;
pub mod fetch;
pub mod handlers;
pub mod notifier;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
