use jobboard_types::{JobRecord, Timestamp};

/// First record in `records` with the given timestamp.
///
/// Searches the loaded records as-is, before validity filtering, so a
/// shared link keeps working for a posting the listings now hide. With
/// duplicate timestamps the earliest in input order wins.
pub fn find_by_timestamp(records: &[JobRecord], timestamp: Timestamp) -> Option<&JobRecord> {
    records.iter().find(|job| job.timestamp == timestamp)
}

/// Parse a route parameter into a timestamp.
///
/// Reads an optional sign and the leading digits, ignoring anything after
/// them, so `1556817073-rust-developer` still resolves. A parameter with no
/// leading digits maps to 0, which no imported posting carries.
pub fn parse_route_timestamp(param: &str) -> Timestamp {
    let param = param.trim_start();
    let unsigned = param.strip_prefix(['-', '+']).unwrap_or(param);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return 0;
    }

    let sign_len = param.len() - unsigned.len();
    param[..sign_len + digits].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_testing::{JobBuilder, job};

    #[test]
    fn test_finds_present_record() {
        let records = vec![job(3), job(2), job(1)];
        assert_eq!(find_by_timestamp(&records, 2).map(|j| j.timestamp), Some(2));
    }

    #[test]
    fn test_not_found() {
        let records = vec![job(3), job(1)];
        assert!(find_by_timestamp(&records, 2).is_none());
        assert!(find_by_timestamp(&[], 2).is_none());
    }

    #[test]
    fn test_finds_records_hidden_from_listings() {
        let records = vec![job(3), JobBuilder::new(2).invalid().build()];
        let found = find_by_timestamp(&records, 2).expect("invalid record still reachable");
        assert!(!found.is_valid_for_display());
    }

    #[test]
    fn test_duplicate_timestamps_first_wins() {
        let records = vec![
            JobBuilder::new(5).title("older entry").build(),
            JobBuilder::new(5).title("newer entry").build(),
        ];
        assert_eq!(
            find_by_timestamp(&records, 5).map(|j| j.job_title.as_str()),
            Some("older entry")
        );
    }

    #[test]
    fn test_parse_route_timestamp() {
        assert_eq!(parse_route_timestamp("1556817073"), 1556817073);
        assert_eq!(parse_route_timestamp(" 42 "), 42);
        assert_eq!(parse_route_timestamp("-5"), -5);
        assert_eq!(parse_route_timestamp("abc"), 0);
        assert_eq!(parse_route_timestamp(""), 0);
    }

    #[test]
    fn test_parse_route_timestamp_reads_leading_digits() {
        assert_eq!(parse_route_timestamp("1556817073abc"), 1556817073);
        assert_eq!(parse_route_timestamp("1556817073-rust-developer"), 1556817073);
        assert_eq!(parse_route_timestamp("12.5"), 12);
        assert_eq!(parse_route_timestamp("+7x"), 7);
        assert_eq!(parse_route_timestamp("-"), 0);
        assert_eq!(parse_route_timestamp("x123"), 0);
        // Too large for a timestamp
        assert_eq!(parse_route_timestamp("99999999999999999999"), 0);
    }
}
