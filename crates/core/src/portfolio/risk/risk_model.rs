//! Risk domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Categorical risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Returns a human-friendly label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Points contributed by each rule to the composite score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskComponents {
    pub crypto_exposure: u8,
    pub stock_concentration: u8,
    pub loss_count: u8,
}

/// Composite risk score (0-100) and its level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub components: RiskComponents,
}

/// The factor breakdown shown next to the risk score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub crypto_percent: Decimal,
    pub crypto_note: String,
    pub stock_percent: Decimal,
    pub stock_note: String,
    pub loss_making_count: usize,
    /// Sum of losses of loss-making holdings, positive
    pub total_loss: Decimal,
}

/// Which allocation limit an exposure warning is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExposureWarningKind {
    CryptoExposure,
    StockConcentration,
}

/// One entry of the over-exposure list on the risk view.
///
/// An empty list means no major over-exposure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExposureWarning {
    pub kind: ExposureWarningKind,
    pub level: RiskLevel,
    pub title: String,
    pub message: String,
    /// Allocation share that crossed the limit (0-100)
    pub percent: Decimal,
}
