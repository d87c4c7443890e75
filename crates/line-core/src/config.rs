//! Simulation configuration.

use chrono::Weekday;

/// What the arrival protocol does with a waiting rider whose identifier
/// carries no parseable age.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MalformedIdPolicy {
    /// Stop boarding and return the error from `advance`.  The offending
    /// rider stays at the stop; riders processed before it keep their state.
    #[default]
    Abort,
    /// Leave the rider waiting, report it, and carry on boarding.
    Skip,
}

/// Top-level line configuration.
///
/// Typically built by the driver and handed to `Line::new`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineConfig {
    /// The day the line is operating on.  Drives fare selection.
    pub service_day: Weekday,

    pub on_malformed_id: MalformedIdPolicy,
}

impl LineConfig {
    pub fn new(service_day: Weekday) -> Self {
        Self { service_day, on_malformed_id: MalformedIdPolicy::default() }
    }

    pub fn with_malformed_id_policy(mut self, policy: MalformedIdPolicy) -> Self {
        self.on_malformed_id = policy;
        self
    }
}

impl Default for LineConfig {
    fn default() -> Self {
        Self::new(Weekday::Mon)
    }
}
