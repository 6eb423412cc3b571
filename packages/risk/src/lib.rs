//! Position risk evaluator for the Tapir Finance front-end.
//!
//! Pure, total functions over confirmed position snapshots: health factor,
//! LTV, risk classification, liquidation price, safe borrow limits,
//! transaction projections, and staking yield projections. Safe to call
//! on every re-render; all enforcement lives in the smart contracts.

mod health;
mod math256;
mod project;
mod rewards;

pub use health::{PositionHealth, PositionSummary};
pub use rewards::{projected_balance, projected_tier_yield, projected_yield};
