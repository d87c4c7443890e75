//! The `Line` registry: every stop and vehicle, keyed by name.

use line_core::{LineConfig, StopName, VehicleName, WaitingRider};
use rustc_hash::FxHashMap;
use tracing::info;

use crate::{Advance, LineError, LineObserver, LineResult, RosterEntry, Stop, Vehicle};

/// Stops keyed by name.
pub type StopDirectory = FxHashMap<StopName, Stop>;

/// Vehicles keyed by name.
pub type Fleet = FxHashMap<VehicleName, Vehicle>;

/// Owns the stops and vehicles of one line.
///
/// Stops and vehicles refer to each other by name; the `Line` resolves those
/// names and hands each side a mutable borrow of the other's registry when a
/// protocol step needs it.
///
/// # Example
///
/// ```rust,ignore
/// let mut line = Line::new(LineConfig::new(Weekday::Mon));
/// for stop in ["Downtown", "University", "Village"] {
///     line.add_stop(stop);
/// }
/// line.add_vehicle(Vehicle::new("Express"));
/// for stop in ["Downtown", "University", "Village"] {
///     line.route_through("Express", stop)?;
/// }
/// line.register_waiting_rider("Downtown", WaitingRider::new("12345612-22", "University"))?;
/// line.run("Express", &mut NoopObserver)?;
/// ```
#[derive(Debug, Default)]
pub struct Line {
    config:  LineConfig,
    stops:   StopDirectory,
    fleet:   Fleet,
}

impl Line {
    pub fn new(config: LineConfig) -> Self {
        Self { config, stops: StopDirectory::default(), fleet: Fleet::default() }
    }

    pub fn config(&self) -> &LineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut LineConfig {
        &mut self.config
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Add an empty stop named `name`.  An existing stop of that name is kept.
    pub fn add_stop(&mut self, name: impl Into<StopName>) -> &mut Stop {
        let name = name.into();
        self.stops.entry(name.clone()).or_insert_with(|| Stop::new(name))
    }

    /// Add `vehicle`, replacing any vehicle with the same name.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.fleet.insert(vehicle.name().clone(), vehicle);
    }

    /// Append `stop` to `vehicle`'s route and register the vehicle at the
    /// stop.
    pub fn route_through(&mut self, vehicle: &str, stop: &str) -> LineResult<()> {
        let (vehicle, stop) = self.resolve(vehicle, stop)?;
        vehicle.add_stop(stop.name().clone());
        stop.serve(vehicle.name().clone());
        Ok(())
    }

    /// Make `stop` aware that `vehicle` passes it, without adding it to the
    /// route.  The stop is appended to the route later if a waiting rider
    /// there can be carried by the vehicle.
    pub fn pass_through(&mut self, vehicle: &str, stop: &str) -> LineResult<()> {
        let (vehicle, stop) = self.resolve(vehicle, stop)?;
        if vehicle.stops_at(stop.name()) {
            stop.serve(vehicle.name().clone());
        } else {
            stop.pass_by(vehicle.name().clone());
        }
        Ok(())
    }

    /// Register `rider` as waiting at stop `at`.
    pub fn register_waiting_rider(&mut self, at: &str, rider: WaitingRider) -> LineResult<()> {
        if !self.stops.contains_key(rider.destination.as_str()) {
            return Err(LineError::UnknownStop(rider.destination));
        }
        let stop = self
            .stops
            .get_mut(at)
            .ok_or_else(|| LineError::UnknownStop(at.into()))?;
        stop.register_waiting_rider(rider, &mut self.fleet);
        Ok(())
    }

    /// Register every roster entry at its origin stop, in order.
    pub fn register_roster(&mut self, roster: impl IntoIterator<Item = RosterEntry>) -> LineResult<()> {
        for entry in roster {
            self.register_waiting_rider(entry.origin.as_str(), entry.rider)?;
        }
        Ok(())
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Advance `vehicle` by one stop.
    pub fn advance<O: LineObserver>(&mut self, vehicle: &str, observer: &mut O) -> LineResult<Advance> {
        let vehicle = self
            .fleet
            .get_mut(vehicle)
            .ok_or_else(|| LineError::UnknownVehicle(vehicle.into()))?;
        vehicle.advance(&mut self.stops, &self.config, observer)
    }

    /// Re-run the arrival protocol of the stop `vehicle` is standing at.
    pub fn notify_arrival<O: LineObserver>(&mut self, vehicle: &str, observer: &mut O) -> LineResult<()> {
        let vehicle = self
            .fleet
            .get_mut(vehicle)
            .ok_or_else(|| LineError::UnknownVehicle(vehicle.into()))?;
        vehicle.notify_arrival(&mut self.stops, &self.config, observer)
    }

    /// Advance `vehicle` until the end of the line.  Returns the number of
    /// advances made.
    pub fn run<O: LineObserver>(&mut self, vehicle: &str, observer: &mut O) -> LineResult<usize> {
        let mut advances = 0;
        loop {
            advances += 1;
            if !self.advance(vehicle, observer)?.has_more_stops() {
                break;
            }
        }
        info!(vehicle, advances, "route complete");
        Ok(advances)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stops.get(name)
    }

    pub fn vehicle(&self, name: &str) -> Option<&Vehicle> {
        self.fleet.get(name)
    }

    pub fn vehicle_mut(&mut self, name: &str) -> Option<&mut Vehicle> {
        self.fleet.get_mut(name)
    }

    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.values()
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.fleet.values()
    }

    fn resolve(&mut self, vehicle: &str, stop: &str) -> LineResult<(&mut Vehicle, &mut Stop)> {
        let vehicle = self
            .fleet
            .get_mut(vehicle)
            .ok_or_else(|| LineError::UnknownVehicle(vehicle.into()))?;
        let stop = self
            .stops
            .get_mut(stop)
            .ok_or_else(|| LineError::UnknownStop(stop.into()))?;
        Ok((vehicle, stop))
    }
}
