//! Insight domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Insight severity scale, separate from alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightSeverity {
    Info,
    Success,
    Warning,
    Critical,
}

impl InsightSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightSeverity::Info => "INFO",
            InsightSeverity::Success => "SUCCESS",
            InsightSeverity::Warning => "WARNING",
            InsightSeverity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for InsightSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightKind {
    Diversification,
    CryptoExposure,
    SectorConcentration,
    ExitAlert,
}

/// Kind-specific payload of an insight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightDetails {
    #[serde(rename_all = "camelCase")]
    Diversification { holding_count: usize },
    #[serde(rename_all = "camelCase")]
    CryptoExposure { crypto_percent: Decimal },
    #[serde(rename_all = "camelCase")]
    SectorConcentration { stock_percent: Decimal },
    #[serde(rename_all = "camelCase")]
    ExitAlert {
        holding_id: String,
        holding_name: String,
        loss_amount: Decimal,
        /// Share of the portfolio's total loss (0-100)
        contribution_percent: Decimal,
    },
}

impl InsightDetails {
    pub fn kind(&self) -> InsightKind {
        match self {
            InsightDetails::Diversification { .. } => InsightKind::Diversification,
            InsightDetails::CryptoExposure { .. } => InsightKind::CryptoExposure,
            InsightDetails::SectorConcentration { .. } => InsightKind::SectorConcentration,
            InsightDetails::ExitAlert { .. } => InsightKind::ExitAlert,
        }
    }
}

/// An advisory narrative entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: String,
    pub severity: InsightSeverity,
    pub title: String,
    pub message: String,
    #[serde(flatten)]
    pub details: InsightDetails,
}

impl Insight {
    pub fn kind(&self) -> InsightKind {
        self.details.kind()
    }
}
