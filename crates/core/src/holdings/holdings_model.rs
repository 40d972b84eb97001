//! Holding domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_POSITION_VALUE;
use crate::{errors::ValidationError, Error, Result};

/// Asset category of a holding.
///
/// The set is closed: anything else is rejected when input is parsed, so the
/// analytics engine only ever sees these four. `ALL` is also the tie-break
/// order wherever a "first category" is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HoldingCategory {
    Stock,
    MutualFund,
    Crypto,
    Gold,
}

impl HoldingCategory {
    /// All categories in their fixed enumeration order.
    pub const ALL: [HoldingCategory; 4] = [
        HoldingCategory::Stock,
        HoldingCategory::MutualFund,
        HoldingCategory::Crypto,
        HoldingCategory::Gold,
    ];

    /// Returns the string representation of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            HoldingCategory::Stock => "STOCK",
            HoldingCategory::MutualFund => "MUTUAL_FUND",
            HoldingCategory::Crypto => "CRYPTO",
            HoldingCategory::Gold => "GOLD",
        }
    }

    /// Returns a human-friendly label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            HoldingCategory::Stock => "Stock",
            HoldingCategory::MutualFund => "Mutual Fund",
            HoldingCategory::Crypto => "Crypto",
            HoldingCategory::Gold => "Gold",
        }
    }
}

impl fmt::Display for HoldingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for HoldingCategory {
    type Err = ValidationError;

    /// Accepts labels ("Mutual Fund"), variant names ("MutualFund") and
    /// serialized names ("MUTUAL_FUND"), case-insensitively.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "stock" => Ok(HoldingCategory::Stock),
            "mutualfund" => Ok(HoldingCategory::MutualFund),
            "crypto" => Ok(HoldingCategory::Crypto),
            "gold" => Ok(HoldingCategory::Gold),
            _ => Err(ValidationError::UnknownCategory(s.to_string())),
        }
    }
}

/// Domain model representing one owned position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub name: String,
    pub category: HoldingCategory,
    pub quantity: Decimal,
    /// Price per unit at acquisition
    pub buy_price: Decimal,
    /// Latest known price per unit
    pub current_price: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Holding {
    /// Capital deployed: `quantity * buy_price`.
    pub fn invested(&self) -> Decimal {
        self.quantity.saturating_mul(self.buy_price)
    }

    /// Mark-to-market value: `quantity * current_price`.
    pub fn market_value(&self) -> Decimal {
        self.quantity.saturating_mul(self.current_price)
    }

    pub fn is_loss_making(&self) -> bool {
        self.current_price < self.buy_price
    }

    /// Monetary loss as a positive amount, `quantity * (buy_price - current_price)`.
    /// Negative for holdings in profit.
    pub fn unrealized_loss(&self) -> Decimal {
        self.quantity
            .saturating_mul(self.buy_price - self.current_price)
    }

    /// Checks the holding invariants.
    pub fn validate(&self) -> Result<()> {
        validate_fields(
            &self.name,
            self.quantity,
            self.buy_price,
            self.current_price,
        )
    }
}

/// Input model for creating a new holding.
///
/// `category` is raw user input and is parsed during validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub quantity: Decimal,
    pub buy_price: Decimal,
    /// Defaults to `buy_price` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,
}

impl NewHolding {
    /// Validates the new holding data.
    pub fn validate(&self) -> Result<()> {
        self.category.parse::<HoldingCategory>()?;
        validate_fields(
            &self.name,
            self.quantity,
            self.buy_price,
            self.current_price.unwrap_or(self.buy_price),
        )
    }

    /// Builds the domain holding under the given id and creation time.
    pub fn into_holding(self, id: String, now: NaiveDateTime) -> Result<Holding> {
        self.validate()?;
        let category = self.category.parse::<HoldingCategory>()?;
        Ok(Holding {
            id,
            name: self.name.trim().to_string(),
            category,
            quantity: self.quantity,
            buy_price: self.buy_price,
            current_price: self.current_price.unwrap_or(self.buy_price),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Input model for updating an existing holding.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HoldingUpdate {
    pub id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<Decimal>,
    pub buy_price: Option<Decimal>,
    pub current_price: Option<Decimal>,
}

impl HoldingUpdate {
    /// Merges this update onto `existing` and validates the result.
    pub fn apply_to(&self, existing: &Holding, now: NaiveDateTime) -> Result<Holding> {
        let category = match &self.category {
            Some(raw) => raw.parse::<HoldingCategory>()?,
            None => existing.category,
        };

        let merged = Holding {
            id: existing.id.clone(),
            name: self
                .name
                .as_deref()
                .map(|n| n.trim().to_string())
                .unwrap_or_else(|| existing.name.clone()),
            category,
            quantity: self.quantity.unwrap_or(existing.quantity),
            buy_price: self.buy_price.unwrap_or(existing.buy_price),
            current_price: self.current_price.unwrap_or(existing.current_price),
            created_at: existing.created_at,
            updated_at: now,
        };

        merged.validate()?;
        Ok(merged)
    }
}

fn validate_fields(
    name: &str,
    quantity: Decimal,
    buy_price: Decimal,
    current_price: Decimal,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Holding name cannot be empty".to_string(),
        )));
    }
    if quantity <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Quantity must be positive, got {}",
            quantity
        ))));
    }
    if buy_price <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Buy price must be positive, got {}",
            buy_price
        ))));
    }
    if current_price < Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Current price cannot be negative, got {}",
            current_price
        ))));
    }
    for (label, price) in [("buy", buy_price), ("current", current_price)] {
        match quantity.checked_mul(price) {
            Some(value) if value <= MAX_POSITION_VALUE => {}
            _ => {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Position value at {} price exceeds the maximum of {}",
                    label, MAX_POSITION_VALUE
                ))));
            }
        }
    }
    Ok(())
}
