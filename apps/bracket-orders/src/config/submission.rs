//! Submission guard.

use serde::{Deserialize, Serialize};

/// Submission configuration.
///
/// Orders are only sent when `enabled` is set; otherwise a run builds and
/// logs the order and stops.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Send the order to the broker.
    #[serde(default)]
    pub enabled: bool,
}
