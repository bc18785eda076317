//! Venue taker fees.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use super::money::Price;
use super::venue::Venue;

/// Kalshi's published taker fee coefficient.
pub const KALSHI_TAKER_RATE: Decimal = dec!(0.07);

const CENTS: Decimal = dec!(100);

/// Kalshi taker fee for buying `contracts` at `price`.
///
/// `fee = ceil_to_cent(rate × contracts × price × (1 − price))`. Never
/// negative; zero at the price bounds.
#[must_use]
pub fn kalshi_fee(price: Price, contracts: u32, rate: Decimal) -> Decimal {
    let raw = rate * Decimal::from(contracts) * price * (Decimal::ONE - price);
    ((raw * CENTS).ceil() / CENTS).max(Decimal::ZERO)
}

/// Fee coefficients per venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FeeSchedule {
    #[serde(default = "default_kalshi_taker_rate")]
    pub kalshi_taker_rate: Decimal,
}

fn default_kalshi_taker_rate() -> Decimal {
    KALSHI_TAKER_RATE
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            kalshi_taker_rate: default_kalshi_taker_rate(),
        }
    }
}

impl FeeSchedule {
    /// Total fee for an order of `contracts` on `venue`.
    ///
    /// Polymarket fees are not modelled and come back as `None`; callers treat
    /// them as zero and say so in the report.
    #[must_use]
    pub fn order_fee(&self, venue: Venue, price: Price, contracts: u32) -> Option<Decimal> {
        match venue {
            Venue::Kalshi => Some(kalshi_fee(price, contracts, self.kalshi_taker_rate)),
            Venue::Polymarket => None,
        }
    }

    /// The order fee spread over its contracts, comparable with a per-contract
    /// ask. Cent rounding happens on the whole order first.
    #[must_use]
    pub fn per_contract_fee(&self, venue: Venue, price: Price, contracts: u32) -> Option<Decimal> {
        let contracts = contracts.max(1);
        self.order_fee(venue, price, contracts)
            .map(|fee| fee / Decimal::from(contracts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_at_even_odds_rounds_up_to_two_cents() {
        // 0.07 * 0.25 = 0.0175 -> 0.02
        assert_eq!(kalshi_fee(dec!(0.5), 1, KALSHI_TAKER_RATE), dec!(0.02));
    }

    #[test]
    fn fee_is_zero_at_price_bounds() {
        assert_eq!(kalshi_fee(dec!(0), 1, KALSHI_TAKER_RATE), Decimal::ZERO);
        assert_eq!(kalshi_fee(dec!(1), 1, KALSHI_TAKER_RATE), Decimal::ZERO);
    }

    #[test]
    fn small_fees_still_cost_a_cent() {
        // 0.07 * 0.01 * 0.99 = 0.000693 -> 0.01
        assert_eq!(kalshi_fee(dec!(0.01), 1, KALSHI_TAKER_RATE), dec!(0.01));
    }

    #[test]
    fn fee_scales_with_contracts_before_rounding() {
        // 0.07 * 100 * 0.4 * 0.6 = 1.68
        assert_eq!(kalshi_fee(dec!(0.40), 100, KALSHI_TAKER_RATE), dec!(1.68));
        // 0.07 * 10 * 0.25 = 0.175 -> 0.18
        assert_eq!(kalshi_fee(dec!(0.5), 10, KALSHI_TAKER_RATE), dec!(0.18));
    }

    #[test]
    fn polymarket_fee_is_not_computed() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.order_fee(Venue::Polymarket, dec!(0.5), 1), None);
        assert_eq!(fees.order_fee(Venue::Kalshi, dec!(0.5), 1), Some(dec!(0.02)));
    }

    #[test]
    fn per_contract_fee_amortizes_rounding() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.per_contract_fee(Venue::Kalshi, dec!(0.5), 1), Some(dec!(0.02)));
        assert_eq!(fees.per_contract_fee(Venue::Kalshi, dec!(0.5), 10), Some(dec!(0.018)));
        assert_eq!(fees.per_contract_fee(Venue::Kalshi, dec!(0.5), 0), Some(dec!(0.02)));
    }

    #[test]
    fn custom_rate() {
        let fees = FeeSchedule {
            kalshi_taker_rate: dec!(0.035),
        };
        // 0.035 * 0.25 = 0.00875 -> 0.01
        assert_eq!(fees.order_fee(Venue::Kalshi, dec!(0.5), 1), Some(dec!(0.01)));
    }
}
