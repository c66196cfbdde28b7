//! Allocation Table
//!
//! Static mapping from risk tier to the fraction of budget placed in each
//! asset class. Exactly three tiers are defined; unknown risk strings
//! resolve to the medium mix upstream via `RiskTier::parse`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{AssetClass, RiskTier};

/// Fraction of budget per asset class for one risk tier.
///
/// Invariant: the five fractions sum to 1.0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllocationMix {
    pub stocks: Decimal,
    pub mutual_funds: Decimal,
    pub etfs: Decimal,
    pub crypto: Decimal,
    pub real_estate: Decimal,
}

impl AllocationMix {
    /// Capital preservation first: no crypto, mutual-fund heavy
    pub fn low() -> Self {
        Self {
            stocks: Decimal::new(25, 2),
            mutual_funds: Decimal::new(35, 2),
            etfs: Decimal::new(25, 2),
            crypto: Decimal::ZERO,
            real_estate: Decimal::new(15, 2),
        }
    }

    /// Balanced mix with a small speculative slice
    pub fn medium() -> Self {
        Self {
            stocks: Decimal::new(35, 2),
            mutual_funds: Decimal::new(30, 2),
            etfs: Decimal::new(20, 2),
            crypto: Decimal::new(5, 2),
            real_estate: Decimal::new(10, 2),
        }
    }

    /// Equity-heavy with the largest crypto slice
    pub fn high() -> Self {
        Self {
            stocks: Decimal::new(45, 2),
            mutual_funds: Decimal::new(20, 2),
            etfs: Decimal::new(15, 2),
            crypto: Decimal::new(15, 2),
            real_estate: Decimal::new(5, 2),
        }
    }

    /// Look up the mix for a tier
    pub fn for_tier(tier: RiskTier) -> Self {
        match tier {
            RiskTier::Low => Self::low(),
            RiskTier::Medium => Self::medium(),
            RiskTier::High => Self::high(),
        }
    }

    /// Fraction assigned to a single asset class
    pub fn fraction(&self, class: AssetClass) -> Decimal {
        match class {
            AssetClass::Stocks => self.stocks,
            AssetClass::MutualFunds => self.mutual_funds,
            AssetClass::Etfs => self.etfs,
            AssetClass::Crypto => self.crypto,
            AssetClass::RealEstate => self.real_estate,
        }
    }

    /// Sum of all fractions
    pub fn total(&self) -> Decimal {
        AssetClass::ALL
            .iter()
            .map(|class| self.fraction(*class))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fractions_sum_to_one_for_every_tier() {
        for tier in [RiskTier::Low, RiskTier::Medium, RiskTier::High] {
            let mix = AllocationMix::for_tier(tier);
            assert_eq!(mix.total(), Decimal::ONE, "tier {:?}", tier);
        }
    }

    #[test]
    fn test_low_tier_excludes_crypto() {
        assert_eq!(AllocationMix::low().crypto, Decimal::ZERO);
    }

    #[test]
    fn test_high_tier_mix() {
        let mix = AllocationMix::high();
        assert_eq!(mix.stocks, dec!(0.45));
        assert_eq!(mix.crypto, dec!(0.15));
    }
}
