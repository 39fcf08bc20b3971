use anyhow::Context;
use chrono::Local;
use pocket_core::enums::{CategoryCode, RankRange};
use pocket_core::timestamp::year_month;
use serde::de::DeserializeOwned;

/// Resolve a category: explicit value, then the configured default, then
/// `all_beauty`.
pub fn category(raw: Option<&str>, configured: &str) -> anyhow::Result<CategoryCode> {
    let raw = raw.or_else(|| Some(configured).filter(|c| !c.is_empty()));
    match raw {
        Some(raw) => Ok(raw.replace('-', "_").parse()?),
        None => Ok(CategoryCode::AllBeauty),
    }
}

pub fn range(raw: Option<&str>) -> anyhow::Result<RankRange> {
    Ok(raw.unwrap_or("week").parse()?)
}

/// `YYYY-MM`, defaulting to the current local month.
pub fn month(raw: Option<&str>) -> anyhow::Result<String> {
    let Some(raw) = raw else {
        return Ok(year_month(&Local::now()));
    };
    let valid = raw.is_ascii()
        && raw.len() == 7
        && raw.as_bytes()[4] == b'-'
        && raw[..4].chars().all(|c| c.is_ascii_digit())
        && matches!(raw[5..].parse::<u8>(), Ok(1..=12));
    if !valid {
        anyhow::bail!("invalid month '{raw}': expected YYYY-MM");
    }
    Ok(raw.to_string())
}

/// Decode a `--data` snapshot payload.
pub fn data<T: DeserializeOwned>(raw: Option<&str>, widget: &str) -> anyhow::Result<T> {
    let raw = raw.with_context(|| {
        format!("{widget} is a snapshot widget: pass its payload with --data '<json>'")
    })?;
    serde_json::from_str(raw).with_context(|| format!("invalid --data for {widget}"))
}

#[cfg(test)]
mod tests {
    use pocket_core::payloads::StatSnapshot;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("lip_care"), "", CategoryCode::LipCare)]
    #[case(Some("lip-care"), "", CategoryCode::LipCare)]
    #[case(None, "skin_care", CategoryCode::SkinCare)]
    #[case(None, "", CategoryCode::AllBeauty)]
    fn category_fallbacks(
        #[case] raw: Option<&str>,
        #[case] configured: &str,
        #[case] expected: CategoryCode,
    ) {
        assert_eq!(category(raw, configured).unwrap(), expected);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(category(Some("hair"), "").is_err());
    }

    #[test]
    fn range_defaults_to_week() {
        assert_eq!(range(None).unwrap(), RankRange::Week);
        assert_eq!(range(Some("YEAR")).unwrap(), RankRange::Year);
    }

    #[rstest]
    #[case("2025-01", true)]
    #[case("2025-12", true)]
    #[case("2025-13", false)]
    #[case("2025/01", false)]
    #[case("25-01", false)]
    fn month_format(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(month(Some(raw)).is_ok(), ok);
    }

    #[test]
    fn missing_data_names_the_flag() {
        let err = data::<StatSnapshot>(None, "stat-sales").unwrap_err();
        assert!(err.to_string().contains("--data"));
    }

    #[test]
    fn data_decodes_snapshot() {
        let stat: StatSnapshot = data(Some(r#"{"value":"21,400개"}"#), "stat-sales").unwrap();
        assert_eq!(stat.value.as_deref(), Some("21,400개"));
    }
}
