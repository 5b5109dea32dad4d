use serde::{Deserialize, Serialize};

use super::types::{division_cost, exchange_rate, Currency};

/// Multi-tier currency balances for one actor. Balances never go negative;
/// deductions clamp at zero, exchanges are all-or-nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyLedger {
    #[serde(default)]
    pub gold: u64,
    #[serde(default)]
    pub tokens: u64,
    #[serde(default)]
    pub dng: u64,
    #[serde(default)]
    pub hero: u64,
    #[serde(default)]
    pub eth: u64,
}

impl CurrencyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self, currency: Currency) -> u64 {
        match currency {
            Currency::Gold => self.gold,
            Currency::Tokens => self.tokens,
            Currency::Dng => self.dng,
            Currency::Hero => self.hero,
            Currency::Eth => self.eth,
        }
    }

    fn balance_mut(&mut self, currency: Currency) -> &mut u64 {
        match currency {
            Currency::Gold => &mut self.gold,
            Currency::Tokens => &mut self.tokens,
            Currency::Dng => &mut self.dng,
            Currency::Hero => &mut self.hero,
            Currency::Eth => &mut self.eth,
        }
    }

    /// Adds a signed amount; negative amounts deduct, clamped at zero.
    pub fn add(&mut self, currency: Currency, amount: i64) {
        let slot = self.balance_mut(currency);
        if amount >= 0 {
            *slot = slot.saturating_add(amount as u64);
        } else {
            *slot = slot.saturating_sub(amount.unsigned_abs());
        }
    }

    pub fn can_afford(&self, currency: Currency, cost: u64) -> bool {
        self.balance(currency) >= cost
    }

    /// Charges the static per-session division cost. Checks affordability
    /// before deducting: returns false and leaves the balance untouched when
    /// funds are short. Free tiers always succeed.
    pub fn charge_division_cost(&mut self, currency: Currency) -> bool {
        let cost = division_cost(currency);
        if cost == 0 {
            return true;
        }
        if !self.can_afford(currency, cost) {
            return false;
        }
        *self.balance_mut(currency) -= cost;
        true
    }

    /// Converts `amount` units of `to` by debiting `amount * rate(from, to)`
    /// units of `from`. Atomic: on any failure (no rate entry, overflow,
    /// insufficient funds) both balances are left untouched.
    pub fn exchange(&mut self, from: Currency, to: Currency, amount: u64) -> bool {
        let Some(rate) = exchange_rate(from, to) else {
            return false;
        };
        let Some(required) = amount.checked_mul(rate) else {
            return false;
        };
        if self.balance(from) < required {
            return false;
        }
        let credited = self.balance(to).saturating_add(amount);
        *self.balance_mut(from) -= required;
        *self.balance_mut(to) = credited;
        true
    }
}
