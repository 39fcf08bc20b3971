//! Closed tag sets for insight records and backend parameters.
//!
//! Record-facing enums serialize the way the dashboard persists them
//! (`stat`, `dashboard`, `lip_care`, `WEEK`). Each enum has `as_str()` for the
//! wire form and, where the export or chat shows it, a Korean `label()`.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// RecordType
// ---------------------------------------------------------------------------

/// Shape family of a record's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    Stat,
    Chart,
    Table,
    Insight,
}

impl RecordType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stat => "stat",
            Self::Chart => "chart",
            Self::Table => "table",
            Self::Insight => "insight",
        }
    }

    /// Label shown in the export summary sheet.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stat => "지표",
            Self::Chart => "차트",
            Self::Table => "테이블",
            Self::Insight => "인사이트",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stat" => Ok(Self::Stat),
            "chart" => Ok(Self::Chart),
            "table" => Ok(Self::Table),
            "insight" => Ok(Self::Insight),
            other => Err(CoreError::unknown("record type", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// Dashboard view that produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Dashboard,
    Ranking,
    #[serde(alias = "review-analysis")]
    Review,
    Keywords,
    AiInsights,
}

impl Page {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Ranking => "ranking",
            Self::Review => "review",
            Self::Keywords => "keywords",
            Self::AiInsights => "ai-insights",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "요약 대시보드",
            Self::Ranking => "랭킹 히스토리",
            Self::Review => "리뷰 분석",
            Self::Keywords => "키워드 분석",
            Self::AiInsights => "AI 인사이트",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Self::Dashboard),
            "ranking" => Ok(Self::Ranking),
            "review" | "review-analysis" => Ok(Self::Review),
            "keywords" => Ok(Self::Keywords),
            "ai-insights" => Ok(Self::AiInsights),
            other => Err(CoreError::unknown("page", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// CategoryCode
// ---------------------------------------------------------------------------

/// Amazon bestseller category tracked by the ranking backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CategoryCode {
    AllBeauty,
    LipCare,
    SkinCare,
    LipMakeup,
    FacePowder,
}

impl CategoryCode {
    pub const ALL: [Self; 5] = [
        Self::AllBeauty,
        Self::LipCare,
        Self::SkinCare,
        Self::LipMakeup,
        Self::FacePowder,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllBeauty => "all_beauty",
            Self::LipCare => "lip_care",
            Self::SkinCare => "skin_care",
            Self::LipMakeup => "lip_makeup",
            Self::FacePowder => "face_powder",
        }
    }

    /// Backend category id (`?category=` parameter).
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::AllBeauty => 1,
            Self::LipCare => 2,
            Self::SkinCare => 3,
            Self::LipMakeup => 4,
            Self::FacePowder => 5,
        }
    }

    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AllBeauty => "전체",
            Self::LipCare => "립 케어",
            Self::SkinCare => "스킨 케어",
            Self::LipMakeup => "립 메이크업",
            Self::FacePowder => "페이스 파우더",
        }
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::unknown("category", s))
    }
}

// ---------------------------------------------------------------------------
// RankRange / Period
// ---------------------------------------------------------------------------

/// Window for the product rank-trend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RankRange {
    Week,
    Month,
    Year,
}

impl RankRange {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "WEEK",
            Self::Month => "MONTH",
            Self::Year => "YEAR",
        }
    }

    #[must_use]
    pub const fn period(self) -> Period {
        match self {
            Self::Week => Period::Weekly,
            Self::Month => Period::Monthly,
            Self::Year => Period::Yearly,
        }
    }
}

impl fmt::Display for RankRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "WEEK" => Ok(Self::Week),
            "MONTH" => Ok(Self::Month),
            "YEAR" => Ok(Self::Year),
            _ => Err(CoreError::unknown("rank range", s)),
        }
    }
}

/// Chart period selected on the ranking page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weekly => "이번 주",
            Self::Monthly => "이번 달",
            Self::Yearly => "올해",
        }
    }

    #[must_use]
    pub const fn range(self) -> RankRange {
        match self {
            Self::Weekly => RankRange::Week,
            Self::Monthly => RankRange::Month,
            Self::Yearly => RankRange::Year,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

/// Direction arrow on a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Trend {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(CoreError::unknown("trend", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_accepts_review_analysis_alias() {
        let page: Page = serde_json::from_str("\"review-analysis\"").unwrap();
        assert_eq!(page, Page::Review);
        assert_eq!(serde_json::to_string(&page).unwrap(), "\"review\"");
        assert_eq!("review-analysis".parse::<Page>().unwrap(), Page::Review);
    }

    #[test]
    fn category_ids_roundtrip() {
        for category in CategoryCode::ALL {
            assert_eq!(CategoryCode::from_id(category.id()), Some(category));
            assert_eq!(category.as_str().parse::<CategoryCode>().unwrap(), category);
        }
        assert_eq!(CategoryCode::from_id(9), None);
    }

    #[test]
    fn rank_range_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RankRange::Week).unwrap(), "\"WEEK\"");
        assert_eq!("month".parse::<RankRange>().unwrap(), RankRange::Month);
        assert_eq!(RankRange::Year.period(), Period::Yearly);
        assert_eq!(Period::Weekly.range(), RankRange::Week);
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let err = "graph".parse::<RecordType>().unwrap_err();
        assert!(err.to_string().contains("graph"));
        assert!("sideways".parse::<Trend>().is_err());
    }
}
