//! Shared query helpers for paged endpoints.

/// Clamp a user-provided page size into `[0, max]`.
///
/// A limit of zero is meaningful for the ticker (timestamps only, no id
/// page), so the floor is zero rather than one.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> usize {
    limit.unwrap_or(default).clamp(0, max) as usize
}
