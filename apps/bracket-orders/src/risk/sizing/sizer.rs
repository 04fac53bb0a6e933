//! Core position sizing logic.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use super::error::SizingError;
use super::types::{PositionSizeResult, RiskParameters, SizingRounding, TRANCHE_COUNT};

/// Configuration for position sizing behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionSizerConfig {
    /// Rounding applied to the fractional share count.
    pub rounding: SizingRounding,
}

/// Position sizer implementing fixed-dollar-risk sizing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionSizer {
    config: PositionSizerConfig,
}

impl PositionSizer {
    /// Create a new position sizer with custom configuration.
    #[must_use]
    pub const fn with_config(config: PositionSizerConfig) -> Self {
        Self { config }
    }

    /// Rounding mode in use.
    #[must_use]
    pub const fn rounding(&self) -> SizingRounding {
        self.config.rounding
    }

    /// Size a long position so that a stop-out loses about `max_risk_amount`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Entry price is not above the stop price
    /// - The stop price is not positive
    /// - The risk budget is negative
    /// - The share count does not fit in a `u64`
    /// - The last profit target is out of `Decimal` range
    pub fn size(&self, params: &RiskParameters) -> Result<PositionSizeResult, SizingError> {
        Self::validate(params)?;

        let overflow = || SizingError::PriceOverflow {
            entry_price: params.entry_price,
            stop_price: params.stop_price,
        };

        let risk_per_share = params.risk_per_share().ok_or_else(overflow)?;
        let total_shares = self.round_shares(params.max_risk_amount, risk_per_share)?;

        let result = PositionSizeResult {
            total_shares,
            risk_per_share,
            tranches: split_tranches(total_shares),
        };

        result
            .target_price(params.entry_price, Decimal::from(TRANCHE_COUNT))
            .ok_or_else(overflow)?;

        Ok(result)
    }

    fn validate(params: &RiskParameters) -> Result<(), SizingError> {
        if params.entry_price <= params.stop_price {
            return Err(SizingError::InvalidRiskConfiguration {
                entry_price: params.entry_price,
                stop_price: params.stop_price,
            });
        }

        if params.stop_price <= Decimal::ZERO {
            return Err(SizingError::NonPositiveStop {
                stop_price: params.stop_price,
            });
        }

        if params.max_risk_amount < Decimal::ZERO {
            return Err(SizingError::NegativeRisk {
                max_risk_amount: params.max_risk_amount,
            });
        }

        Ok(())
    }

    fn round_shares(
        &self,
        max_risk_amount: Decimal,
        risk_per_share: Decimal,
    ) -> Result<u64, SizingError> {
        let overflow = || SizingError::ShareCountOverflow {
            max_risk_amount,
            risk_per_share,
        };

        max_risk_amount
            .checked_div(risk_per_share)
            .map(|raw| raw.round_dp_with_strategy(0, self.config.rounding.strategy()))
            .and_then(|rounded| rounded.to_u64())
            .ok_or_else(overflow)
    }
}

/// Split a share count into exit tranches.
///
/// Every tranche but the last gets `total / 3` shares; the last absorbs the
/// remainder, so it is at most two shares larger than the others.
#[must_use]
pub const fn split_tranches(total_shares: u64) -> [u64; TRANCHE_COUNT] {
    let base = total_shares / TRANCHE_COUNT as u64;
    [base, base, total_shares - 2 * base]
}
