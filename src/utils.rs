use uuid::Uuid;

/// Returns a fresh opaque identifier: a random UUID as 32 lowercase hex chars.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Renders a duration in seconds as `m:ss`.
pub fn format_duration(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let seconds = seconds.unsigned_abs();
    format!("{}{}:{:02}", sign, seconds / 60, seconds % 60)
}
