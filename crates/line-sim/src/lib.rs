//! `line-sim` — stops, vehicles and the boarding/alighting protocol.
//!
//! # One advance
//!
//! ```text
//! Vehicle::advance
//!   ① position += 1
//!   ② terminal?  → unboard everybody, Finished, EndOfLine
//!   ③ notify     → "started" on the first stop, "carrying N" afterwards
//!   ④ Stop::on_vehicle_arrival
//!        alight  — riders whose destination is this stop
//!        board   — waiting riders whose destination is on the route,
//!                  charged with the vehicle's fare policy
//!   ⑤ MoreStops
//! ```
//!
//! Everything runs synchronously inside the one call.  Stops and vehicles
//! only know each other by name; [`Line`] owns both registries.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use line_core::{LineConfig, WaitingRider, Weekday};
//! use line_sim::{Line, NoopObserver, Vehicle};
//!
//! let mut line = Line::new(LineConfig::new(Weekday::Mon));
//! line.add_stop("Downtown");
//! line.add_stop("University");
//! line.add_vehicle(Vehicle::new("Express"));
//! line.route_through("Express", "Downtown")?;
//! line.route_through("Express", "University")?;
//! line.register_waiting_rider("Downtown", WaitingRider::new("a-30", "University"))?;
//! line.run("Express", &mut NoopObserver)?;
//! ```

pub mod error;
pub mod line;
pub mod loader;
pub mod observer;
pub mod route;
pub mod stop;
pub mod vehicle;


pub use error::{LineError, LineResult};
pub use line::{Fleet, Line, StopDirectory};
pub use loader::{load_roster_csv, load_roster_reader, RosterEntry};
pub use observer::{EventLog, LineEvent, LineObserver, NoopObserver};
pub use route::{Advance, RouteState};
pub use stop::Stop;
pub use vehicle::Vehicle;
