//! The combined dashboard view over one holdings snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AnalyticsConfig;
use crate::holdings::{Holding, HoldingCategory};
use crate::portfolio::alerts::{Alert, AlertEngine, AlertSummary};
use crate::portfolio::allocation::{allocate, dominant_category, AllocationEntry};
use crate::portfolio::insights::{Insight, InsightEngine};
use crate::portfolio::risk::{
    ExposureWarning, RiskAssessment, RiskFactors, RiskLevel, RiskScorer,
};
use crate::portfolio::valuation::{
    loss_positions, profit_loss_by_category, summarize, CategoryProfitLoss, LossPosition,
    ValuationSummary,
};

/// Everything the dashboard shows for an owner, computed from one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub valuation: ValuationSummary,
    pub allocation: Vec<AllocationEntry>,
    /// `None` for an empty portfolio
    pub dominant_category: Option<HoldingCategory>,
    pub risk: RiskAssessment,
    /// Crypto-only indicator, independent of `risk.level`
    pub crypto_exposure_level: RiskLevel,
    pub risk_factors: RiskFactors,
    /// Empty when no allocation limit is crossed
    pub exposure_warnings: Vec<ExposureWarning>,
    pub profit_loss_by_category: Vec<CategoryProfitLoss>,
    pub loss_positions: Vec<LossPosition>,
    pub alerts: Vec<Alert>,
    pub alert_summary: AlertSummary,
    pub insights: Vec<Insight>,
    pub generated_at: DateTime<Utc>,
}

/// Builds the overview for `holdings`, stamping alerts with `now`.
pub fn build_overview(
    holdings: &[Holding],
    config: &AnalyticsConfig,
    now: DateTime<Utc>,
) -> PortfolioOverview {
    let valuation = summarize(holdings);
    let allocation = allocate(holdings, valuation.current_total);
    let dominant_category = dominant_category(&allocation);

    let scorer = RiskScorer::new(config.clone());
    let risk = scorer.score(holdings);
    let risk_factors = scorer.factors(holdings);
    let crypto_exposure_level = scorer.crypto_exposure_level(risk_factors.crypto_percent);
    let exposure_warnings = scorer
        .exposure_warnings_from_parts(risk_factors.crypto_percent, risk_factors.stock_percent);

    let alerts = AlertEngine::new(config.clone()).evaluate_at(holdings, now);
    let alert_summary = AlertSummary::from_alerts(&alerts);

    PortfolioOverview {
        valuation,
        allocation,
        dominant_category,
        risk,
        crypto_exposure_level,
        risk_factors,
        exposure_warnings,
        profit_loss_by_category: profit_loss_by_category(holdings),
        loss_positions: loss_positions(holdings),
        alerts,
        alert_summary,
        insights: InsightEngine::new(config.clone()).evaluate(holdings),
        generated_at: now,
    }
}
