/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Stable catalog key of an item (a string of decimal digits, e.g. `"12"`).
pub type ItemId = String;
