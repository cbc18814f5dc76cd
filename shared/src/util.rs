/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate an opaque plate id.
///
/// Plates never leave the session that created them, so a random v4 UUID is
/// enough to keep ids pairwise distinct across builder and cart.
pub fn new_plate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
