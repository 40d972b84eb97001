use std::sync::Arc;

use chrono::Utc;
use log::{debug, warn};
use uuid::Uuid;

use super::holdings_model::{Holding, HoldingUpdate, NewHolding};
use super::holdings_traits::{HoldingRepositoryTrait, HoldingServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::Error;

/// Service for managing an owner's holdings.
pub struct HoldingService {
    repository: Arc<dyn HoldingRepositoryTrait>,
}

impl HoldingService {
    /// Creates a new HoldingService instance
    pub fn new(repository: Arc<dyn HoldingRepositoryTrait>) -> Self {
        Self { repository }
    }
}

fn require_owner(owner_id: &str) -> Result<()> {
    if owner_id.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "ownerId".to_string(),
        )));
    }
    Ok(())
}

#[async_trait::async_trait]
impl HoldingServiceTrait for HoldingService {
    async fn create_holding(&self, owner_id: &str, new_holding: NewHolding) -> Result<Holding> {
        require_owner(owner_id)?;
        if let Err(e) = new_holding.validate() {
            warn!("Rejected new holding '{}': {}", new_holding.name, e);
            return Err(e);
        }

        let id = new_holding
            .id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let holding = new_holding.into_holding(id, Utc::now().naive_utc())?;

        debug!(
            "Creating holding {} ({}) for owner {}",
            holding.id, holding.category, owner_id
        );
        self.repository.insert(owner_id, holding).await
    }

    fn get_holding(&self, owner_id: &str, holding_id: &str) -> Result<Holding> {
        require_owner(owner_id)?;
        self.repository.get_by_id(owner_id, holding_id)
    }

    fn list_holdings(&self, owner_id: &str) -> Result<Vec<Holding>> {
        require_owner(owner_id)?;
        self.repository.list(owner_id)
    }

    async fn update_holding(&self, owner_id: &str, update: HoldingUpdate) -> Result<Holding> {
        require_owner(owner_id)?;
        let existing = self.repository.get_by_id(owner_id, &update.id)?;

        let merged = match update.apply_to(&existing, Utc::now().naive_utc()) {
            Ok(merged) => merged,
            Err(e) => {
                warn!("Rejected update for holding {}: {}", update.id, e);
                return Err(e);
            }
        };

        debug!("Updating holding {} for owner {}", merged.id, owner_id);
        self.repository.update(owner_id, merged).await
    }

    async fn delete_holding(&self, owner_id: &str, holding_id: &str) -> Result<()> {
        require_owner(owner_id)?;
        let deleted = self.repository.delete(owner_id, holding_id).await?;
        if deleted == 0 {
            debug!(
                "Delete of holding {} for owner {} matched nothing",
                holding_id, owner_id
            );
        } else {
            debug!("Deleted holding {} for owner {}", holding_id, owner_id);
        }
        Ok(())
    }
}
