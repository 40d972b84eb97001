use std::sync::Arc;

use chrono::Utc;
use log::debug;

use super::{build_overview, AnalyticsConfig, PortfolioAnalyticsServiceTrait, PortfolioOverview};
use crate::errors::Result;
use crate::holdings::HoldingServiceTrait;
use crate::portfolio::alerts::{Alert, AlertEngine};
use crate::portfolio::allocation::{allocate, AllocationEntry};
use crate::portfolio::insights::{Insight, InsightEngine};
use crate::portfolio::risk::{RiskAssessment, RiskScorer};
use crate::portfolio::valuation::{summarize, ValuationSummary};

/// Runs the analytics engine over an owner's holdings.
pub struct PortfolioAnalyticsService {
    holding_service: Arc<dyn HoldingServiceTrait>,
    config: AnalyticsConfig,
}

impl PortfolioAnalyticsService {
    /// Creates a service with the default thresholds.
    pub fn new(holding_service: Arc<dyn HoldingServiceTrait>) -> Self {
        Self {
            holding_service,
            config: AnalyticsConfig::default(),
        }
    }

    /// Creates a service with custom thresholds, rejecting inconsistent ones.
    pub fn with_config(
        holding_service: Arc<dyn HoldingServiceTrait>,
        config: AnalyticsConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            holding_service,
            config,
        })
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }
}

impl PortfolioAnalyticsServiceTrait for PortfolioAnalyticsService {
    fn valuation_summary(&self, owner_id: &str) -> Result<ValuationSummary> {
        let holdings = self.holding_service.list_holdings(owner_id)?;
        let summary = summarize(&holdings);
        debug!(
            "Valuation for owner {}: invested {}, current {}",
            owner_id, summary.invested_total, summary.current_total
        );
        Ok(summary)
    }

    fn allocation(&self, owner_id: &str) -> Result<Vec<AllocationEntry>> {
        let holdings = self.holding_service.list_holdings(owner_id)?;
        let total_value = summarize(&holdings).current_total;
        Ok(allocate(&holdings, total_value))
    }

    fn risk_assessment(&self, owner_id: &str) -> Result<RiskAssessment> {
        let holdings = self.holding_service.list_holdings(owner_id)?;
        Ok(RiskScorer::new(self.config.clone()).score(&holdings))
    }

    fn alerts(&self, owner_id: &str) -> Result<Vec<Alert>> {
        let holdings = self.holding_service.list_holdings(owner_id)?;
        let alerts = AlertEngine::new(self.config.clone()).evaluate(&holdings);
        debug!("Owner {} has {} active alerts", owner_id, alerts.len());
        Ok(alerts)
    }

    fn insights(&self, owner_id: &str) -> Result<Vec<Insight>> {
        let holdings = self.holding_service.list_holdings(owner_id)?;
        Ok(InsightEngine::new(self.config.clone()).evaluate(&holdings))
    }

    fn overview(&self, owner_id: &str) -> Result<PortfolioOverview> {
        let holdings = self.holding_service.list_holdings(owner_id)?;
        let overview = build_overview(&holdings, &self.config, Utc::now());
        debug!(
            "Overview for owner {}: {} holdings, risk {} ({}), {} alerts",
            owner_id,
            holdings.len(),
            overview.risk.score,
            overview.risk.level,
            overview.alerts.len()
        );
        Ok(overview)
    }
}
