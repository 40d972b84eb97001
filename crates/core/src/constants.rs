use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for percentages shown in alert and insight messages
pub const DISPLAY_PERCENT_PRECISION: u32 = 1;

/// Currency symbol used in generated messages
pub const CURRENCY_SYMBOL: &str = "₹";

/// Upper bound on `quantity * price` for a single holding, at buy and at
/// current price. Keeps every aggregate the analytics engine computes well
/// inside `Decimal` range.
pub const MAX_POSITION_VALUE: Decimal = dec!(1000000000000000);

/// Alert id for the crypto exposure rule
pub const CRYPTO_RISK_ALERT_ID: &str = "crypto-risk";

/// Alert id for the stock concentration rule
pub const STOCK_CONCENTRATION_ALERT_ID: &str = "stock-concentration";

/// Prefix for per-holding loss alert ids, followed by the holding id
pub const LOSS_ALERT_ID_PREFIX: &str = "loss-";

/// Alert id for the allocation imbalance rule
pub const IMBALANCE_ALERT_ID: &str = "imbalance";

/// Insight ids, in emission order
pub const DIVERSIFICATION_INSIGHT_ID: &str = "diversification";
pub const CRYPTO_EXPOSURE_INSIGHT_ID: &str = "crypto-exposure";
pub const SECTOR_CONCENTRATION_INSIGHT_ID: &str = "sector-concentration";
pub const EXIT_ALERT_INSIGHT_ID: &str = "exit-alert";
