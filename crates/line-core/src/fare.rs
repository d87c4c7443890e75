//! Day-of-week fare policy.
//!
//! Prices depend on two things only: whether the service day is a weekend,
//! and whether the rider is a senior.  The day is always passed in by the
//! caller; nothing here reads a clock.
//!
//! | Policy    | Regular | Senior |
//! |-----------|---------|--------|
//! | `Weekday` | 6.0     | 4.5    |
//! | `Weekend` | 5.0     | 3.5    |

use chrono::Weekday;

use crate::{CoreResult, Rider};

/// Age-based rider category.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiderCategory {
    #[default]
    Regular,
    Senior,
}

/// The pricing function in force for a given day.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FarePolicy {
    Weekday,
    Weekend,
}

impl FarePolicy {
    /// Weekend pricing on Saturday and Sunday, weekday pricing otherwise.
    pub fn select(today: Weekday) -> Self {
        match today {
            Weekday::Sat | Weekday::Sun => FarePolicy::Weekend,
            _ => FarePolicy::Weekday,
        }
    }

    pub fn price_for(self, category: RiderCategory) -> f64 {
        match (self, category) {
            (FarePolicy::Weekday, RiderCategory::Regular) => 6.0,
            (FarePolicy::Weekday, RiderCategory::Senior)  => 4.5,
            (FarePolicy::Weekend, RiderCategory::Regular) => 5.0,
            (FarePolicy::Weekend, RiderCategory::Senior)  => 3.5,
        }
    }

    /// Price for `rider`; fails if the rider's age cannot be derived.
    pub fn price_for_rider(self, rider: &Rider) -> CoreResult<f64> {
        Ok(self.price_for(rider.category()?))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FarePolicy::Weekday => "weekday",
            FarePolicy::Weekend => "weekend",
        }
    }
}

impl std::fmt::Display for FarePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a vehicle gets its fare policy from.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FareSource {
    /// Pick weekday or weekend pricing from the service day.
    #[default]
    ByDay,
    /// Always charge with the given policy.
    Fixed(FarePolicy),
}

impl FareSource {
    pub fn policy_for(self, today: Weekday) -> FarePolicy {
        match self {
            FareSource::ByDay => FarePolicy::select(today),
            FareSource::Fixed(policy) => policy,
        }
    }
}
