//! Shared fixtures for analytics unit tests.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::holdings::{Holding, HoldingCategory};

fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

pub(crate) fn holding(
    id: &str,
    name: &str,
    category: HoldingCategory,
    quantity: Decimal,
    buy_price: Decimal,
    current_price: Decimal,
) -> Holding {
    Holding {
        id: id.to_string(),
        name: name.to_string(),
        category,
        quantity,
        buy_price,
        current_price,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}
