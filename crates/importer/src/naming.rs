use std::collections::HashMap;
use std::time::SystemTime;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// `YYYYMMDDHHMMSS`, the prefix Steam uses for screenshot file names.
const BASE_NAME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Clock used to turn modification times into base names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZonePolicy {
    /// The machine's local time zone.
    #[default]
    Local,
    Utc,
}

/// Formats `time` as a base name at second resolution.
pub fn base_name(time: SystemTime, zone: TimeZonePolicy) -> String {
    match zone {
        TimeZonePolicy::Local => DateTime::<Local>::from(time)
            .format(BASE_NAME_FORMAT)
            .to_string(),
        TimeZonePolicy::Utc => DateTime::<Utc>::from(time)
            .format(BASE_NAME_FORMAT)
            .to_string(),
    }
}

/// Per-run collision counter for base names.
///
/// Every use of a base name increments its count, so the first file with a
/// given timestamp is suffixed `_1`.
#[derive(Debug, Default)]
pub struct NameCounter {
    counts: HashMap<String, u32>,
}

impl NameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next destination file name for `base`.
    pub fn next(&mut self, base: &str) -> String {
        let count = self.counts.entry(base.to_owned()).or_insert(0);
        *count += 1;
        format!("{base}_{count}.jpg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{JAN_1_2024_10AM, at};

    #[test]
    fn utc_base_name() {
        assert_eq!(
            base_name(at(JAN_1_2024_10AM), TimeZonePolicy::Utc),
            "20240101100000"
        );
        assert_eq!(
            base_name(at(JAN_1_2024_10AM + 59), TimeZonePolicy::Utc),
            "20240101100059"
        );
    }

    #[test]
    fn sub_second_precision_is_dropped() {
        let time = at(JAN_1_2024_10AM) + std::time::Duration::from_millis(999);
        assert_eq!(base_name(time, TimeZonePolicy::Utc), "20240101100000");
    }

    #[test]
    fn counter_starts_at_one() {
        let mut counter = NameCounter::new();
        assert_eq!(counter.next("20240101100000"), "20240101100000_1.jpg");
        assert_eq!(counter.next("20240101100000"), "20240101100000_2.jpg");
        assert_eq!(counter.next("20240101100001"), "20240101100001_1.jpg");
        assert_eq!(counter.next("20240101100000"), "20240101100000_3.jpg");
    }

    #[test]
    fn fresh_counter_per_run() {
        let mut first = NameCounter::new();
        first.next("x");
        first.next("x");
        let mut second = NameCounter::new();
        assert_eq!(second.next("x"), "x_1.jpg");
    }

    #[test]
    fn policy_serde_names() {
        let parsed: TimeZonePolicy = serde_json::from_str("\"utc\"").unwrap();
        assert_eq!(parsed, TimeZonePolicy::Utc);
        assert_eq!(
            serde_json::to_string(&TimeZonePolicy::Local).unwrap(),
            "\"local\""
        );
    }
}
