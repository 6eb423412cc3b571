mod config;
mod error;
mod position;
mod tier;

pub use config::*;
pub use error::*;
pub use position::*;
pub use tier::*;
