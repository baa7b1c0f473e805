use chrono::Utc;

/// Current wall clock time in epoch milliseconds, the unit of every timestamp in the domain.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
