//! Shared response envelope for API handlers.
//!
//! Every successful response wraps its payload in `{ "data": ... }`;
//! [`DataResponse`] gives that envelope compile-time type safety instead of
//! ad-hoc `serde_json::json!` literals.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
