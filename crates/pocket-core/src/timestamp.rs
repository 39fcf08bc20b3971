//! Timestamp helpers: millisecond-precision ISO serde, Korean locale display,
//! and the month / file-stamp strings the dashboard derives from "now".
//!
//! Record timestamps are persisted as ISO-8601 strings with millisecond
//! precision. Use with `#[serde(with = "timestamp::iso_millis")]`.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

/// Current time truncated to whole milliseconds.
///
/// Truncation keeps a freshly created record equal to its own persisted form.
#[must_use]
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::<Utc>::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

/// Serialize `DateTime<Utc>` as an ISO-8601 string with millisecond precision.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
    }
}

/// Format a timestamp the way `toLocaleString("ko-KR")` does:
/// `2025. 1. 5. 오후 3:04:05`.
#[must_use]
pub fn korean_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    let (is_pm, hour12) = value.hour12();
    let meridiem = if is_pm { "오후" } else { "오전" };
    format!(
        "{}. {}. {}. {meridiem} {hour12}:{:02}:{:02}",
        value.year(),
        value.month(),
        value.day(),
        value.minute(),
        value.second(),
    )
}

/// `YYYY-MM` for the month containing `value`.
#[must_use]
pub fn year_month<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    format!("{}-{:02}", value.year(), value.month())
}

/// `yyMMdd_HHmmss` stamp used in export file names.
#[must_use]
pub fn file_stamp<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    format!(
        "{:02}{:02}{:02}_{:02}{:02}{:02}",
        value.year().rem_euclid(100),
        value.month(),
        value.day(),
        value.hour(),
        value.minute(),
        value.second(),
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamped {
        #[serde(with = "iso_millis")]
        at: DateTime<Utc>,
    }

    #[test]
    fn iso_millis_roundtrip_preserves_milliseconds() {
        let at = Utc.timestamp_millis_opt(1_736_000_000_123).unwrap();
        let json = serde_json::to_string(&Stamped { at }).unwrap();
        assert!(json.contains(".123Z"), "{json}");
        let back: Stamped = serde_json::from_str(&json).unwrap();
        assert_eq!(back.at, at);
    }

    #[test]
    fn iso_millis_accepts_offsets() {
        let back: Stamped =
            serde_json::from_str(r#"{"at":"2025-01-05T15:04:05.250+09:00"}"#).unwrap();
        let expected = Utc.with_ymd_and_hms(2025, 1, 5, 6, 4, 5).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(back.at, expected);
    }

    #[test]
    fn iso_millis_rejects_garbage() {
        assert!(serde_json::from_str::<Stamped>(r#"{"at":"yesterday"}"#).is_err());
    }

    #[test]
    fn now_has_no_sub_millisecond_part() {
        let now = now_millis();
        assert_eq!(now.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn korean_format_uses_meridiem() {
        let afternoon = Utc.with_ymd_and_hms(2025, 1, 5, 15, 4, 5).unwrap();
        assert_eq!(korean_datetime(&afternoon), "2025. 1. 5. 오후 3:04:05");
        let morning = Utc.with_ymd_and_hms(2025, 12, 25, 0, 30, 0).unwrap();
        assert_eq!(korean_datetime(&morning), "2025. 12. 25. 오전 12:30:00");
    }

    #[test]
    fn month_and_file_stamps() {
        let at = Utc.with_ymd_and_hms(2025, 3, 9, 8, 7, 6).unwrap();
        assert_eq!(year_month(&at), "2025-03");
        assert_eq!(file_stamp(&at), "250309_080706");
    }
}
