/// Display helpers shared by the game, listing and receipt views.
use chrono::{DateTime, NaiveDate, Utc};

/// Swiss date format, e.g. `15.1.2025`.
pub fn format_match_date(date: NaiveDate) -> String {
    date.format("%-d.%-m.%Y").to_string()
}

/// "15.1.2025 at 18:30"
pub fn format_kickoff(date: NaiveDate, kickoff: &str) -> String {
    format!("{} at {}", format_match_date(date), kickoff)
}

pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%-d.%-m.%Y, %H:%M:%S").to_string()
}

pub fn format_chf(amount: i32) -> String {
    format!("CHF {}", amount)
}

/// "1 game", "3 games"
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

const REFERENCE_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Nine character upper-case base-36 reference, zero padded on the left.
pub fn reference_id(seed: u64) -> String {
    let mut digits = [b'0'; REFERENCE_LEN];
    let mut value = seed;
    for slot in digits.iter_mut().rev() {
        *slot = BASE36[(value % 36) as usize];
        value /= 36;
    }
    digits.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_use_swiss_format() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(format_match_date(date), "15.1.2025");
        assert_eq!(format_kickoff(date, "18:30"), "15.1.2025 at 18:30");
    }

    #[test]
    fn timestamps_include_time_of_day() {
        let ts: DateTime<Utc> = "2025-01-09T14:30:00Z".parse().unwrap();
        assert_eq!(format_timestamp(ts), "9.1.2025, 14:30:00");
    }

    #[test]
    fn pluralize_handles_one() {
        assert_eq!(pluralize(1, "ticket"), "1 ticket");
        assert_eq!(pluralize(0, "ticket"), "0 tickets");
        assert_eq!(pluralize(3, "game"), "3 games");
    }

    #[test]
    fn reference_ids_are_nine_base36_chars() {
        assert_eq!(reference_id(0), "000000000");
        assert_eq!(reference_id(35), "00000000Z");
        assert_eq!(reference_id(36), "000000010");

        let id = reference_id(1_736_500_000_123);
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}
