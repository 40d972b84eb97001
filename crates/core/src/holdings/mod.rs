//! Holdings module - domain models, services, and traits.

mod holdings_model;
mod holdings_service;
mod holdings_traits;

// Re-export the public interface
pub use holdings_model::{Holding, HoldingCategory, HoldingUpdate, NewHolding};
pub use holdings_service::HoldingService;
pub use holdings_traits::{HoldingRepositoryTrait, HoldingServiceTrait};
