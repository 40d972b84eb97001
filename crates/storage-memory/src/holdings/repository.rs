use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;

use investizen_core::errors::RepositoryError;
use investizen_core::holdings::{Holding, HoldingRepositoryTrait};
use investizen_core::Result;

/// Holdings keyed by owner, each owner's list kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryHoldingRepository {
    holdings: DashMap<String, Vec<Holding>>,
}

impl InMemoryHoldingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of holdings stored for an owner.
    pub fn count(&self, owner_id: &str) -> usize {
        self.holdings.get(owner_id).map_or(0, |list| list.len())
    }
}

fn not_found(owner_id: &str, holding_id: &str) -> RepositoryError {
    RepositoryError::NotFound(format!(
        "Holding {} not found for owner {}",
        holding_id, owner_id
    ))
}

#[async_trait]
impl HoldingRepositoryTrait for InMemoryHoldingRepository {
    fn get_by_id(&self, owner_id: &str, holding_id: &str) -> Result<Holding> {
        self.holdings
            .get(owner_id)
            .and_then(|list| list.iter().find(|h| h.id == holding_id).cloned())
            .ok_or_else(|| not_found(owner_id, holding_id).into())
    }

    fn list(&self, owner_id: &str) -> Result<Vec<Holding>> {
        Ok(self
            .holdings
            .get(owner_id)
            .map(|list| list.value().clone())
            .unwrap_or_default())
    }

    async fn insert(&self, owner_id: &str, holding: Holding) -> Result<Holding> {
        let mut list = self.holdings.entry(owner_id.to_string()).or_default();
        if list.iter().any(|h| h.id == holding.id) {
            return Err(RepositoryError::UniqueViolation(format!(
                "Holding {} already exists for owner {}",
                holding.id, owner_id
            ))
            .into());
        }

        list.push(holding.clone());
        debug!(
            "Stored holding {} for owner {} ({} total)",
            holding.id,
            owner_id,
            list.len()
        );
        Ok(holding)
    }

    async fn update(&self, owner_id: &str, holding: Holding) -> Result<Holding> {
        let mut list = self
            .holdings
            .get_mut(owner_id)
            .ok_or_else(|| not_found(owner_id, &holding.id))?;
        let slot = list
            .iter_mut()
            .find(|h| h.id == holding.id)
            .ok_or_else(|| not_found(owner_id, &holding.id))?;

        *slot = holding.clone();
        Ok(holding)
    }

    async fn delete(&self, owner_id: &str, holding_id: &str) -> Result<usize> {
        let Some(mut list) = self.holdings.get_mut(owner_id) else {
            return Ok(0);
        };

        let before = list.len();
        list.retain(|h| h.id != holding_id);
        Ok(before - list.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use investizen_core::holdings::HoldingCategory;
    use investizen_core::Error;
    use rust_decimal_macros::dec;

    fn holding(id: &str, name: &str) -> Holding {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Holding {
            id: id.to_string(),
            name: name.to_string(),
            category: HoldingCategory::Stock,
            quantity: dec!(10),
            buy_price: dec!(100),
            current_price: dec!(110),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order_per_owner() {
        let repo = InMemoryHoldingRepository::new();
        repo.insert("alice", holding("b", "Second")).await.unwrap();
        repo.insert("alice", holding("a", "First")).await.unwrap();
        repo.insert("bob", holding("c", "Other")).await.unwrap();

        let ids: Vec<String> = repo
            .list("alice")
            .unwrap()
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(repo.count("bob"), 1);
        assert!(repo.list("carol").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id_for_same_owner() {
        let repo = InMemoryHoldingRepository::new();
        repo.insert("alice", holding("h1", "Infosys")).await.unwrap();

        let result = repo.insert("alice", holding("h1", "Again")).await;
        assert!(matches!(
            result,
            Err(Error::Repository(RepositoryError::UniqueViolation(_)))
        ));

        // same id under another owner is fine
        repo.insert("bob", holding("h1", "Infosys")).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_is_scoped_to_owner() {
        let repo = InMemoryHoldingRepository::new();
        repo.insert("alice", holding("h1", "Infosys")).await.unwrap();

        assert_eq!(repo.get_by_id("alice", "h1").unwrap().name, "Infosys");
        assert!(matches!(
            repo.get_by_id("bob", "h1"),
            Err(Error::Repository(RepositoryError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let repo = InMemoryHoldingRepository::new();
        repo.insert("alice", holding("h1", "Infosys")).await.unwrap();
        repo.insert("alice", holding("h2", "TCS")).await.unwrap();

        let mut changed = holding("h1", "Infosys Ltd");
        changed.current_price = dec!(90);
        repo.update("alice", changed).await.unwrap();

        let list = repo.list("alice").unwrap();
        assert_eq!(list[0].name, "Infosys Ltd");
        assert_eq!(list[0].current_price, dec!(90));
        assert_eq!(list[1].id, "h2");
    }

    #[tokio::test]
    async fn test_update_missing_holding_is_not_found() {
        let repo = InMemoryHoldingRepository::new();

        let result = repo.update("alice", holding("ghost", "Ghost")).await;
        assert!(matches!(
            result,
            Err(Error::Repository(RepositoryError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_delete_reports_removed_count() {
        let repo = InMemoryHoldingRepository::new();
        repo.insert("alice", holding("h1", "Infosys")).await.unwrap();

        assert_eq!(repo.delete("alice", "h1").await.unwrap(), 1);
        assert_eq!(repo.delete("alice", "h1").await.unwrap(), 0);
        assert_eq!(repo.delete("nobody", "h1").await.unwrap(), 0);
    }
}
