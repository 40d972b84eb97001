//! Owner-scoped analytics service contract.

use crate::errors::Result;
use crate::portfolio::alerts::Alert;
use crate::portfolio::allocation::AllocationEntry;
use crate::portfolio::insights::Insight;
use crate::portfolio::risk::RiskAssessment;
use crate::portfolio::valuation::ValuationSummary;

use super::PortfolioOverview;

/// Trait defining the analytics queries over an owner's current holdings.
///
/// Each call loads a fresh snapshot; nothing is cached between calls.
pub trait PortfolioAnalyticsServiceTrait: Send + Sync {
    fn valuation_summary(&self, owner_id: &str) -> Result<ValuationSummary>;

    /// Category allocation, only categories with a positive value.
    fn allocation(&self, owner_id: &str) -> Result<Vec<AllocationEntry>>;

    fn risk_assessment(&self, owner_id: &str) -> Result<RiskAssessment>;

    /// Alerts in emission order. An empty list means all clear.
    fn alerts(&self, owner_id: &str) -> Result<Vec<Alert>>;

    fn insights(&self, owner_id: &str) -> Result<Vec<Insight>>;

    /// All of the above plus the dashboard breakdowns in one call.
    fn overview(&self, owner_id: &str) -> Result<PortfolioOverview>;
}
