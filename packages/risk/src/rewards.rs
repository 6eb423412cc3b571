use cosmwasm_std::Decimal;

use tapir_types::StakeTier;

/// Days per year used by the daily-compounding approximation.
const DAYS_PER_YEAR: u128 = 365;

/// Rewards earned by `principal` staked at `apy_percent` for `days`,
/// compounding daily: principal * ((1 + apy/100/365)^days - 1).
///
/// Display math only; actual reward accrual is the staking contract's.
/// Total: zero principal or zero days yield zero, overflow saturates.
pub fn projected_yield(principal: Decimal, apy_percent: Decimal, days: u32) -> Decimal {
    projected_balance(principal, apy_percent, days).saturating_sub(principal)
}

/// Projected balance after staking: principal plus compounded rewards.
pub fn projected_balance(principal: Decimal, apy_percent: Decimal, days: u32) -> Decimal {
    if principal.is_zero() || days == 0 {
        return principal;
    }

    // apy is a percentage, so the daily rate is apy / 100 / 365
    let daily_rate = apy_percent
        .checked_div(Decimal::from_ratio(100 * DAYS_PER_YEAR, 1u128))
        .unwrap_or_else(|_| Decimal::zero());

    let growth = Decimal::one()
        .saturating_add(daily_rate)
        .checked_pow(days)
        .unwrap_or(Decimal::MAX);

    principal.saturating_mul(growth)
}

/// Rewards for a stake held in the given tier for its full lock period,
/// at the tier's boosted APY.
pub fn projected_tier_yield(principal: Decimal, tier: &StakeTier, days: u32) -> Decimal {
    projected_yield(principal, tier.effective_apy(), days)
}
