//! Stops, waiting riders and the arrival protocol.

use line_core::{LineConfig, MalformedIdPolicy, StopName, VehicleName, WaitingRider};
use tracing::{debug, warn};

use crate::{Fleet, LineObserver, LineResult, Vehicle};

/// A named place where riders wait and vehicles call.
///
/// A stop knows vehicles by name only; it never holds a vehicle.  Every
/// name in `vehicles` has this stop on its route.  `passing` vehicles drive
/// by without stopping until a waiting rider gives them a reason to.
/// Equality is by name.
#[derive(Clone, Debug)]
pub struct Stop {
    name:     StopName,
    waiting:  Vec<WaitingRider>,
    vehicles: Vec<VehicleName>,
    passing:  Vec<VehicleName>,
}

impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Stop {}

impl Stop {
    pub fn new(name: impl Into<StopName>) -> Self {
        Self {
            name:     name.into(),
            waiting:  Vec::new(),
            vehicles: Vec::new(),
            passing:  Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &StopName {
        &self.name
    }

    pub fn waiting(&self) -> &[WaitingRider] {
        &self.waiting
    }

    /// Vehicles that stop here.
    pub fn vehicles(&self) -> &[VehicleName] {
        &self.vehicles
    }

    /// Vehicles that pass without stopping.
    pub fn passing(&self) -> &[VehicleName] {
        &self.passing
    }

    /// Record that `vehicle` stops here.  The caller must have put this stop
    /// on the vehicle's route.  Idempotent.
    pub fn serve(&mut self, vehicle: VehicleName) {
        self.passing.retain(|v| v != &vehicle);
        if !self.vehicles.contains(&vehicle) {
            self.vehicles.push(vehicle);
        }
    }

    /// Record that `vehicle` passes without stopping.  Ignored if it already
    /// stops here.
    pub fn pass_by(&mut self, vehicle: VehicleName) {
        if !self.vehicles.contains(&vehicle) && !self.passing.contains(&vehicle) {
            self.passing.push(vehicle);
        }
    }

    /// Add `rider` to the waiting list and ask every known vehicle that
    /// reaches the rider's destination to stop here.
    ///
    /// A passing vehicle that accepts the boarding intent gets this stop
    /// appended to its route and moves to `vehicles`.
    pub fn register_waiting_rider(&mut self, rider: WaitingRider, fleet: &mut Fleet) {
        debug!(stop = %self.name, rider = %rider.id, destination = %rider.destination, "rider waiting");
        for name in &self.vehicles {
            match fleet.get_mut(name) {
                Some(vehicle) if vehicle.stops_at(&rider.destination) => {
                    vehicle.boarding_intent(&self.name);
                }
                Some(_) => {}
                None => warn!(stop = %self.name, vehicle = %name, "known vehicle missing from fleet"),
            }
        }

        let mut still_passing = Vec::with_capacity(self.passing.len());
        for name in std::mem::take(&mut self.passing) {
            match fleet.get_mut(&name) {
                Some(vehicle) if vehicle.stops_at(&rider.destination) => {
                    vehicle.boarding_intent(&self.name);
                    self.vehicles.push(name);
                }
                Some(_) => still_passing.push(name),
                None => {
                    warn!(stop = %self.name, vehicle = %name, "passing vehicle missing from fleet");
                    still_passing.push(name);
                }
            }
        }
        self.passing = still_passing;

        self.waiting.push(rider);
    }

    /// Run the arrival protocol for `vehicle`.
    ///
    /// 1. Alight every rider whose destination is this stop.
    /// 2. Board every waiting rider whose destination is on the vehicle's
    ///    route, charging with the vehicle's fare policy for the service day.
    ///
    /// A rider whose fare cannot be computed is handled per
    /// [`LineConfig::on_malformed_id`].
    pub fn on_vehicle_arrival<O: LineObserver>(
        &mut self,
        vehicle:  &mut Vehicle,
        config:   &LineConfig,
        observer: &mut O,
    ) -> LineResult<()> {
        vehicle.alight_at(&self.name, observer);

        let policy = vehicle.fare_policy(config.service_day);
        let mut still_waiting = Vec::with_capacity(self.waiting.len());
        let mut pending = std::mem::take(&mut self.waiting).into_iter();

        while let Some(waiting) = pending.next() {
            if !vehicle.stops_at(&waiting.destination) {
                still_waiting.push(waiting);
                continue;
            }
            let Err(err) = vehicle.board(waiting.clone().into_rider(), policy, observer) else {
                continue;
            };
            match config.on_malformed_id {
                MalformedIdPolicy::Skip => {
                    warn!(stop = %self.name, rider = %waiting.id, error = %err, "rider left waiting");
                    observer.on_rider_skipped(&self.name, &waiting, &err);
                    still_waiting.push(waiting);
                }
                MalformedIdPolicy::Abort => {
                    still_waiting.push(waiting);
                    still_waiting.extend(pending);
                    self.waiting = still_waiting;
                    return Err(err.into());
                }
            }
        }

        self.waiting = still_waiting;
        Ok(())
    }
}
