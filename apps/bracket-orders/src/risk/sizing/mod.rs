//! Risk-based position sizing for bracket entries.
//!
//! The share count is the dollar risk budget divided by the per-share risk
//! (entry minus stop), rounded to a whole share. The position is then split
//! into three exit tranches; the last tranche absorbs the remainder.
//!
//! # Example
//!
//! ```rust
//! use bracket_orders::risk::sizing::{PositionSizer, RiskParameters};
//! use rust_decimal_macros::dec;
//!
//! let sizer = PositionSizer::default();
//! let params = RiskParameters::new(dec!(101.00), dec!(100.00), dec!(50));
//!
//! let result = sizer.size(&params).unwrap();
//! assert_eq!(result.total_shares, 50);
//! assert_eq!(result.tranches, [16, 16, 18]);
//! ```

mod error;
mod sizer;
mod types;

pub use error::SizingError;
pub use sizer::{PositionSizer, PositionSizerConfig, split_tranches};
pub use types::{PositionSizeResult, RiskParameters, SizingRounding, TRANCHE_COUNT};
