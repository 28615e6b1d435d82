/// All track identifiers are PostgreSQL BIGINT, issued from the shared counter.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
