use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};

use crate::error::RiskError;

/// Decimal places used by the protocol's token amounts on chain.
pub const TOKEN_DECIMALS: u32 = 18;

/// A confirmed position snapshot for one account.
///
/// Snapshots are fetched fresh on wallet connect, on explicit refresh,
/// and after each confirmed transaction; they are replaced wholesale,
/// never merged. Amounts are unsigned by construction, so negative
/// collateral or debt is unrepresentable.
#[cw_serde]
#[derive(Copy)]
pub struct Position {
    /// Collateral asset supplied
    pub collateral: Decimal,
    /// Debt asset owed (principal; interest accrual is a contract concern)
    pub borrowed: Decimal,
}

impl Position {
    pub fn new(collateral: Decimal, borrowed: Decimal) -> Self {
        Self {
            collateral,
            borrowed,
        }
    }

    /// Build a position from raw 18-decimal fixed-point amounts as the
    /// chain reader reports them.
    pub fn from_atomics(collateral: Uint128, borrowed: Uint128) -> Result<Self, RiskError> {
        Ok(Self {
            collateral: Decimal::from_atomics(collateral, TOKEN_DECIMALS)?,
            borrowed: Decimal::from_atomics(borrowed, TOKEN_DECIMALS)?,
        })
    }
}

/// A pending user action to be projected against a position.
#[cw_serde]
#[derive(Copy)]
pub enum Action {
    /// Supply collateral
    Deposit,
    /// Take on debt against collateral
    Borrow,
    /// Pay down debt
    Repay,
}

/// Account state as reported by the chain reader, in raw 18-decimal
/// fixed-point amounts. This is the interface the reader must implement;
/// fetching itself lives outside this repository.
#[cw_serde]
pub struct AccountInfoResponse {
    /// Collateral supplied by the account
    pub collateral: Uint128,
    /// Debt owed by the account
    pub borrowed: Uint128,
    /// Pool liquidity still available to borrow
    pub available: Uint128,
}

impl AccountInfoResponse {
    /// Convert the raw amounts into a position snapshot.
    pub fn to_position(&self) -> Result<Position, RiskError> {
        Position::from_atomics(self.collateral, self.borrowed)
    }
}
