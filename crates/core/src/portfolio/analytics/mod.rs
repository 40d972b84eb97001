//! Portfolio analytics: thresholds, the combined overview, and the
//! owner-scoped analytics service.

mod analytics_config;
mod analytics_model;
mod analytics_service;
mod analytics_traits;

pub use analytics_config::AnalyticsConfig;
pub use analytics_model::{build_overview, PortfolioOverview};
pub use analytics_service::PortfolioAnalyticsService;
pub use analytics_traits::PortfolioAnalyticsServiceTrait;

#[cfg(test)]
mod analytics_service_tests;
