use cosmwasm_std::{
    CheckedFromRatioError, DecimalRangeExceeded, DivideByZeroError, OverflowError, StdError,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RiskError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    CheckedFromRatio(#[from] CheckedFromRatioError),

    #[error("{0}")]
    DecimalRange(#[from] DecimalRangeExceeded),

    #[error("Invalid liquidation threshold: must be greater than 0 and at most 1.0")]
    InvalidLiquidationThreshold,

    #[error("Invalid risk bands: cut points must be strictly descending and positive")]
    InvalidRiskBands,

    #[error("Invalid warning threshold: must be positive")]
    InvalidWarningThreshold,

    #[error("Invalid stake tier table: {reason}")]
    InvalidTierTable { reason: String },

    #[error("Borrow would exceed safe limit: max {max_safe}, requested {requested}")]
    ExceedsSafeBorrow { max_safe: String, requested: String },
}

pub type RiskResult<T> = Result<T, RiskError>;
