//! Holding repository and service traits.
//!
//! These traits define the contract for holding operations without any
//! storage-specific types, allowing for different storage implementations.
//! Every operation is scoped to the owning user.

use async_trait::async_trait;

use super::holdings_model::{Holding, HoldingUpdate, NewHolding};
use crate::errors::Result;

/// Trait defining the contract for Holding repository operations.
///
/// Implementations persist already-validated holdings. They must return an
/// owner's holdings in creation order, because alert and insight ordering
/// follows the order of the snapshot they are given.
#[async_trait]
pub trait HoldingRepositoryTrait: Send + Sync {
    /// Retrieves a holding by its ID.
    fn get_by_id(&self, owner_id: &str, holding_id: &str) -> Result<Holding>;

    /// Lists all holdings of an owner in creation order.
    fn list(&self, owner_id: &str) -> Result<Vec<Holding>>;

    /// Stores a new holding. Fails if the id is already taken for this owner.
    async fn insert(&self, owner_id: &str, holding: Holding) -> Result<Holding>;

    /// Replaces a stored holding, keeping its position in the listing.
    async fn update(&self, owner_id: &str, holding: Holding) -> Result<Holding>;

    /// Deletes a holding by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, owner_id: &str, holding_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Holding service operations.
///
/// The service layer is the validation boundary: nothing that violates the
/// holding invariants reaches the repository or the analytics engine.
#[async_trait]
pub trait HoldingServiceTrait: Send + Sync {
    /// Validates and creates a new holding with a generated id.
    async fn create_holding(&self, owner_id: &str, new_holding: NewHolding) -> Result<Holding>;

    /// Retrieves a holding by ID.
    fn get_holding(&self, owner_id: &str, holding_id: &str) -> Result<Holding>;

    /// Lists an owner's holdings in creation order.
    fn list_holdings(&self, owner_id: &str) -> Result<Vec<Holding>>;

    /// Merges a partial update onto a stored holding.
    async fn update_holding(&self, owner_id: &str, update: HoldingUpdate) -> Result<Holding>;

    /// Deletes a holding. Deleting an unknown id is not an error.
    async fn delete_holding(&self, owner_id: &str, holding_id: &str) -> Result<()>;
}
