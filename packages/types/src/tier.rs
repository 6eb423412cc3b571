use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;

use crate::error::RiskError;

/// A staking lock-period option with its APY boost.
/// Tiers are static deployment configuration, not chain state.
#[cw_serde]
pub struct StakeTier {
    /// Lock period in days (0 = flexible, no lock)
    pub lock_days: u64,
    /// Display label (e.g., "3 Months")
    pub label: String,
    /// Base APY as a percentage (e.g., 18.5 = 18.5%)
    pub base_apy: Decimal,
    /// Multiplier applied to the base APY for locking (>= 1.0)
    pub boost: Decimal,
}

impl StakeTier {
    /// Effective APY for this tier: base APY scaled by the lock boost.
    pub fn effective_apy(&self) -> Decimal {
        self.base_apy.saturating_mul(self.boost)
    }
}

/// The default lock-period ladder for the Tapir staking pool.
pub fn default_tiers() -> Vec<StakeTier> {
    vec![
        StakeTier {
            lock_days: 0,
            label: "Flexible".to_string(),
            base_apy: Decimal::from_ratio(125u128, 10u128),
            boost: Decimal::one(),
        },
        StakeTier {
            lock_days: 30,
            label: "1 Month".to_string(),
            base_apy: Decimal::from_ratio(15u128, 1u128),
            boost: Decimal::from_ratio(12u128, 10u128),
        },
        StakeTier {
            lock_days: 90,
            label: "3 Months".to_string(),
            base_apy: Decimal::from_ratio(185u128, 10u128),
            boost: Decimal::from_ratio(148u128, 100u128),
        },
        StakeTier {
            lock_days: 180,
            label: "6 Months".to_string(),
            base_apy: Decimal::from_ratio(25u128, 1u128),
            boost: Decimal::from_ratio(2u128, 1u128),
        },
    ]
}

/// Validate a tier table: non-empty, lock periods strictly ascending,
/// boosts at least 1.0.
pub fn validate_tiers(tiers: &[StakeTier]) -> Result<(), RiskError> {
    if tiers.is_empty() {
        return Err(RiskError::InvalidTierTable {
            reason: "tier table is empty".to_string(),
        });
    }

    for pair in tiers.windows(2) {
        if pair[1].lock_days <= pair[0].lock_days {
            return Err(RiskError::InvalidTierTable {
                reason: format!(
                    "lock periods must be strictly ascending: {} then {}",
                    pair[0].lock_days, pair[1].lock_days
                ),
            });
        }
    }

    for tier in tiers {
        if tier.boost < Decimal::one() {
            return Err(RiskError::InvalidTierTable {
                reason: format!("boost below 1.0 for {}-day tier", tier.lock_days),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_apy() {
        // 90-day tier: 18.5% * 1.48 = 27.38%
        let tier = &default_tiers()[2];
        assert_eq!(tier.lock_days, 90);
        assert_eq!(
            tier.effective_apy(),
            Decimal::from_ratio(2738u128, 100u128)
        );
    }

    #[test]
    fn test_flexible_tier_has_no_boost() {
        let tier = &default_tiers()[0];
        assert_eq!(tier.effective_apy(), tier.base_apy);
    }

    #[test]
    fn test_default_tiers_validate() {
        assert!(validate_tiers(&default_tiers()).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_table() {
        assert!(matches!(
            validate_tiers(&[]),
            Err(RiskError::InvalidTierTable { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unsorted_lock_periods() {
        let mut tiers = default_tiers();
        tiers.swap(1, 2);
        assert!(matches!(
            validate_tiers(&tiers),
            Err(RiskError::InvalidTierTable { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_sub_one_boost() {
        let mut tiers = default_tiers();
        tiers[1].boost = Decimal::percent(80);
        assert!(matches!(
            validate_tiers(&tiers),
            Err(RiskError::InvalidTierTable { .. })
        ));
    }
}
