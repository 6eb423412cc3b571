use cosmwasm_std::{Decimal, Uint128};
use tapir_types::{default_tiers, Position, RiskParams, StakeTier, TOKEN_DECIMALS};

/// Scale a whole-token amount to raw 18-decimal atomics, as the chain
/// reader reports balances.
pub fn atomics(tokens: u128) -> Uint128 {
    Uint128::new(tokens) * Uint128::new(10u128.pow(TOKEN_DECIMALS))
}

/// Build a position from whole-token amounts.
pub fn position(collateral: u128, borrowed: u128) -> Position {
    Position::new(
        Decimal::from_ratio(collateral, 1u128),
        Decimal::from_ratio(borrowed, 1u128),
    )
}

/// Default risk parameters for testing (75% threshold, 1.3 warning,
/// 2.0/1.5/1.2 bands).
pub fn default_risk_params() -> RiskParams {
    RiskParams::default()
}

/// Risk parameters with a custom liquidation threshold.
pub fn params_with_threshold(threshold_pct: u64) -> RiskParams {
    RiskParams {
        liquidation_threshold: Decimal::percent(threshold_pct),
        ..RiskParams::default()
    }
}

/// The default staking tier ladder.
pub fn default_stake_tiers() -> Vec<StakeTier> {
    default_tiers()
}

/// Reference health factor, computed independently of the evaluator.
/// Returns None when there is no debt.
pub fn reference_health_factor(
    collateral: u128,
    borrowed: u128,
    liquidation_threshold: Decimal,
) -> Option<Decimal> {
    if borrowed == 0 {
        return None;
    }

    let weighted = Decimal::from_ratio(collateral, 1u128) * liquidation_threshold;
    Some(Decimal::from_ratio(
        weighted.atomics(),
        Decimal::from_ratio(borrowed, 1u128).atomics(),
    ))
}
