//! Unit tests for the portfolio analytics service.

use super::*;
use crate::errors::{Error, RepositoryError, Result, ValidationError};
use crate::holdings::{Holding, HoldingCategory, HoldingServiceTrait, HoldingUpdate, NewHolding};
use crate::portfolio::alerts::AlertKind;
use crate::portfolio::insights::InsightKind;
use crate::portfolio::risk::RiskLevel;
use crate::portfolio::test_support::holding;
use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Mock Implementations
// ============================================================================

/// Read-only holding service over a fixed set of snapshots.
#[derive(Default)]
struct MockHoldingService {
    by_owner: HashMap<String, Vec<Holding>>,
}

impl MockHoldingService {
    fn with_owner(mut self, owner_id: &str, holdings: Vec<Holding>) -> Self {
        self.by_owner.insert(owner_id.to_string(), holdings);
        self
    }
}

#[async_trait]
impl HoldingServiceTrait for MockHoldingService {
    async fn create_holding(&self, _owner_id: &str, _new_holding: NewHolding) -> Result<Holding> {
        unimplemented!()
    }

    fn get_holding(&self, owner_id: &str, holding_id: &str) -> Result<Holding> {
        self.list_holdings(owner_id)?
            .into_iter()
            .find(|h| h.id == holding_id)
            .ok_or_else(|| RepositoryError::NotFound(holding_id.to_string()).into())
    }

    fn list_holdings(&self, owner_id: &str) -> Result<Vec<Holding>> {
        if owner_id.is_empty() {
            return Err(ValidationError::MissingField("ownerId".to_string()).into());
        }
        Ok(self.by_owner.get(owner_id).cloned().unwrap_or_default())
    }

    async fn update_holding(&self, _owner_id: &str, _update: HoldingUpdate) -> Result<Holding> {
        unimplemented!()
    }

    async fn delete_holding(&self, _owner_id: &str, _holding_id: &str) -> Result<()> {
        unimplemented!()
    }
}

fn service_for(holdings: Vec<Holding>) -> PortfolioAnalyticsService {
    let holding_service = MockHoldingService::default().with_owner("alice", holdings);
    PortfolioAnalyticsService::new(Arc::new(holding_service))
}

fn scenario_c() -> Vec<Holding> {
    vec![holding("g1", "Gold ETF", HoldingCategory::Gold, dec!(5), dec!(200), dec!(150))]
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_single_stock_at_cost() {
    let service = service_for(vec![holding(
        "s1",
        "Infosys",
        HoldingCategory::Stock,
        dec!(10),
        dec!(100),
        dec!(100),
    )]);

    let summary = service.valuation_summary("alice").unwrap();
    assert_eq!(summary.invested_total, dec!(1000));
    assert_eq!(summary.current_total, dec!(1000));
    assert_eq!(summary.profit_loss, dec!(0));

    let insights = service.insights("alice").unwrap();
    assert_eq!(insights.len(), 3);
    assert_eq!(insights[0].severity, crate::portfolio::insights::InsightSeverity::Warning);
}

#[test]
fn test_crypto_heavy_portfolio_scores_crypto_component() {
    let service = service_for(vec![
        holding("c1", "Bitcoin", HoldingCategory::Crypto, dec!(1), dec!(1000), dec!(1000)),
        holding("s1", "Infosys", HoldingCategory::Stock, dec!(1), dec!(100), dec!(100)),
    ]);

    let risk = service.risk_assessment("alice").unwrap();
    assert_eq!(risk.components.crypto_exposure, 40);
    assert_eq!(risk.level, RiskLevel::Medium);

    let alerts = service.alerts("alice").unwrap();
    assert_eq!(alerts[0].title, "High Cryptocurrency Risk");
}

#[test]
fn test_loss_alert_and_exit_insight_for_losing_gold() {
    let service = service_for(scenario_c());

    let alerts = service.alerts("alice").unwrap();
    let loss = alerts
        .iter()
        .find(|a| a.kind() == AlertKind::LossAlert)
        .unwrap();
    assert_eq!(loss.severity, crate::portfolio::alerts::AlertSeverity::High);

    let insights = service.insights("alice").unwrap();
    assert_eq!(insights.len(), 4);
    assert_eq!(insights[3].kind(), InsightKind::ExitAlert);
    assert!(insights[3].message.contains("100.0%"));
}

#[test]
fn test_equal_split_has_four_quarter_entries() {
    let service = service_for(vec![
        holding("s1", "Infosys", HoldingCategory::Stock, dec!(2), dec!(50), dec!(50)),
        holding("m1", "Index Fund", HoldingCategory::MutualFund, dec!(4), dec!(25), dec!(25)),
        holding("c1", "Bitcoin", HoldingCategory::Crypto, dec!(1), dec!(100), dec!(100)),
        holding("g1", "Gold ETF", HoldingCategory::Gold, dec!(10), dec!(10), dec!(10)),
    ]);

    let allocation = service.allocation("alice").unwrap();
    assert_eq!(allocation.len(), 4);
    assert!(allocation.iter().all(|e| e.percent_of_total == dec!(25)));

    let alerts = service.alerts("alice").unwrap();
    assert!(alerts.iter().all(|a| a.kind() != AlertKind::ImbalanceAlert));
}

#[test]
fn test_unknown_owner_sees_empty_portfolio() {
    let service = service_for(scenario_c());

    let overview = service.overview("bob").unwrap();
    assert!(overview.allocation.is_empty());
    assert!(overview.alerts.is_empty());
    assert_eq!(overview.valuation.current_total, dec!(0));
}

#[test]
fn test_errors_from_holding_service_propagate() {
    let service = service_for(scenario_c());

    let result = service.overview("");
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::MissingField(_)))
    ));
}

#[test]
fn test_with_config_rejects_inconsistent_thresholds() {
    let config = AnalyticsConfig {
        crypto_moderate_exposure_pct: dec!(40),
        ..AnalyticsConfig::default()
    };

    let result =
        PortfolioAnalyticsService::with_config(Arc::new(MockHoldingService::default()), config);
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_custom_thresholds_change_alerts() {
    let config = AnalyticsConfig {
        loss_alert_pct: dec!(5),
        ..AnalyticsConfig::default()
    };
    let holding_service = MockHoldingService::default().with_owner(
        "alice",
        vec![
            holding("m1", "Index Fund", HoldingCategory::MutualFund, dec!(1), dec!(100), dec!(92)),
            holding("g1", "Gold ETF", HoldingCategory::Gold, dec!(1), dec!(100), dec!(100)),
        ],
    );
    let service =
        PortfolioAnalyticsService::with_config(Arc::new(holding_service), config).unwrap();

    let alerts = service.alerts("alice").unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].id, "loss-m1");
    assert_eq!(service.config().loss_alert_pct, dec!(5));
}

#[test]
fn test_overview_is_consistent_with_single_queries() {
    let service = service_for(scenario_c());

    let overview = service.overview("alice").unwrap();
    assert_eq!(overview.valuation, service.valuation_summary("alice").unwrap());
    assert_eq!(overview.allocation, service.allocation("alice").unwrap());
    assert_eq!(overview.risk, service.risk_assessment("alice").unwrap());
    assert_eq!(overview.insights, service.insights("alice").unwrap());
    assert_eq!(overview.loss_positions.len(), 1);
    assert_eq!(overview.risk_factors.total_loss, dec!(250));
}
