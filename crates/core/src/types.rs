/// Student primary keys are server-assigned auto-increment integers.
pub type StudentId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
