//! Trading session an order is eligible to work in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Session {
    /// Regular market hours only.
    #[default]
    Normal,
    /// Pre-market session.
    Am,
    /// After-hours session.
    Pm,
    /// Pre-market, regular and after-hours.
    Seamless,
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Am => write!(f, "AM"),
            Self::Pm => write!(f, "PM"),
            Self::Seamless => write!(f, "SEAMLESS"),
        }
    }
}
