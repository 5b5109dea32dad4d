//! Multi-tier currency economy: balances, fixed-rate exchange, division costs.

pub mod ledger;
pub mod types;

pub use ledger::CurrencyLedger;
pub use types::{division_cost, exchange_rate, Currency};
