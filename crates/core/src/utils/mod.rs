pub mod formatting;

pub use formatting::{format_currency, format_percent};
