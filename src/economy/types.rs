use serde::{Deserialize, Serialize};

/// One tier of the five-currency economy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Gold,
    Tokens,
    Dng,
    Hero,
    Eth,
}

impl Currency {
    pub fn all() -> [Currency; 5] {
        [
            Currency::Gold,
            Currency::Tokens,
            Currency::Dng,
            Currency::Hero,
            Currency::Eth,
        ]
    }

    /// Short code used in snapshots and command arguments.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Gold => "gold",
            Currency::Tokens => "tokens",
            Currency::Dng => "dng",
            Currency::Hero => "hero",
            Currency::Eth => "eth",
        }
    }

    pub fn from_code(code: &str) -> Option<Currency> {
        Currency::all().into_iter().find(|c| c.code() == code)
    }
}

/// Units of `from` required per 1 unit of `to`. `None` means the pair
/// cannot be exchanged (the table is directed, upward-tier only).
pub fn exchange_rate(from: Currency, to: Currency) -> Option<u64> {
    use Currency::*;
    match (from, to) {
        (Gold, Tokens) => Some(1000),
        (Tokens, Dng) => Some(100),
        (Dng, Hero) => Some(50),
        (Hero, Eth) => Some(25),
        _ => None,
    }
}

/// Per-session entry cost for a division. Free tiers cost 0.
pub fn division_cost(currency: Currency) -> u64 {
    match currency {
        Currency::Gold | Currency::Tokens => 0,
        Currency::Dng => 5,
        Currency::Hero => 3,
        Currency::Eth => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_codes_round_trip() {
        for currency in Currency::all() {
            assert_eq!(Currency::from_code(currency.code()), Some(currency));
        }
        assert_eq!(Currency::from_code("gems"), None);
    }

    #[test]
    fn test_exchange_table_is_directed() {
        assert_eq!(exchange_rate(Currency::Gold, Currency::Tokens), Some(1000));
        // Downward conversions are not in the table.
        assert_eq!(exchange_rate(Currency::Tokens, Currency::Gold), None);
        // Tier skips are not in the table.
        assert_eq!(exchange_rate(Currency::Gold, Currency::Dng), None);
        // Self-exchange is not in the table.
        assert_eq!(exchange_rate(Currency::Gold, Currency::Gold), None);
    }

    #[test]
    fn test_division_costs() {
        assert_eq!(division_cost(Currency::Gold), 0);
        assert_eq!(division_cost(Currency::Tokens), 0);
        assert_eq!(division_cost(Currency::Dng), 5);
        assert_eq!(division_cost(Currency::Hero), 3);
        assert_eq!(division_cost(Currency::Eth), 1);
    }

    #[test]
    fn test_currency_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Currency::Dng).unwrap();
        assert_eq!(json, "\"dng\"");
        let parsed: Currency = serde_json::from_str("\"eth\"").unwrap();
        assert_eq!(parsed, Currency::Eth);
    }
}
