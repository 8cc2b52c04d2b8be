use std::str::FromStr;

use ulid::Ulid;

/// Extract the creation timestamp (Unix ms) embedded in a ULID
///
/// Falls back to zero for ids that do not parse.
pub fn timestamp_from_ulid(id: &str) -> i64 {
    Ulid::from_str(id)
        .map(|ulid| ulid.timestamp_ms() as i64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::timestamp_from_ulid;
    use ulid::Ulid;

    #[test]
    fn ulid_carries_creation_time() {
        let before = chrono::Utc::now().timestamp_millis();
        let id = Ulid::new().to_string();
        let after = chrono::Utc::now().timestamp_millis();

        let ts = timestamp_from_ulid(&id);
        assert!(ts >= before && ts <= after);
    }

    #[test]
    fn invalid_id_yields_zero() {
        assert_eq!(timestamp_from_ulid("not-a-ulid"), 0);
    }
}
