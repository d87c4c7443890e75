//! `line-core` — foundational types for the transit line simulation.
//!
//! This crate has no knowledge of stops or vehicles; it only describes who
//! rides and what they pay.
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `RiderId`, `StopName`, `VehicleName`                  |
//! | [`rider`]     | `Rider`, `WaitingRider`, `Charge`                     |
//! | [`rider_set`] | `RiderSet`                                            |
//! | [`fare`]      | `FarePolicy`, `FareSource`, `RiderCategory`           |
//! | [`config`]    | `LineConfig`, `MalformedIdPolicy`                     |
//! | [`error`]     | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod fare;
pub mod ids;
pub mod rider;
pub mod rider_set;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use chrono::Weekday;

pub use config::{LineConfig, MalformedIdPolicy};
pub use error::{CoreError, CoreResult};
pub use fare::{FarePolicy, FareSource, RiderCategory};
pub use ids::{RiderId, StopName, VehicleName};
pub use rider::{Charge, Rider, WaitingRider, SENIOR_AGE};
pub use rider_set::RiderSet;
