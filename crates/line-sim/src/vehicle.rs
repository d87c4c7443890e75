//! The vehicle and its route state machine.

use line_core::{
    CoreResult, FarePolicy, FareSource, LineConfig, Rider, RiderId, RiderSet, StopName,
    VehicleName, Weekday,
};
use tracing::{debug, info};

use crate::{Advance, LineError, LineObserver, LineResult, RouteState, StopDirectory};

/// A vehicle carrying riders along an append-only route.
///
/// The route holds stop *names*; the stops themselves live in a
/// [`StopDirectory`] passed to [`Vehicle::advance`].
#[derive(Clone, Debug)]
pub struct Vehicle {
    name:   VehicleName,
    riders: RiderSet,
    route:  Vec<StopName>,
    state:  RouteState,
    fares:  FareSource,
}

impl Vehicle {
    pub fn new(name: impl Into<VehicleName>) -> Self {
        Self {
            name:   name.into(),
            riders: RiderSet::new(),
            route:  Vec::new(),
            state:  RouteState::NotStarted,
            fares:  FareSource::ByDay,
        }
    }

    pub fn with_fares(mut self, fares: FareSource) -> Self {
        self.fares = fares;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn name(&self) -> &VehicleName {
        &self.name
    }

    #[inline]
    pub fn riders(&self) -> &RiderSet {
        &self.riders
    }

    #[inline]
    pub fn rider_count(&self) -> usize {
        self.riders.len()
    }

    pub fn route(&self) -> &[StopName] {
        &self.route
    }

    #[inline]
    pub fn state(&self) -> RouteState {
        self.state
    }

    /// Index of the terminal stop; `None` for an empty route.
    pub fn last_index(&self) -> Option<usize> {
        self.route.len().checked_sub(1)
    }

    pub fn manifest(&self) -> Vec<RiderId> {
        self.riders.manifest()
    }

    pub fn find_rider(&self, id: &str) -> Option<&Rider> {
        self.riders.find(id)
    }

    /// Edit every rider aboard (see [`RiderSet::update`]).
    pub fn update_riders(&mut self, visitor: impl FnMut(&mut Rider)) {
        self.riders.update(visitor);
    }

    /// Fare policy in force on `today`.
    pub fn fare_policy(&self, today: Weekday) -> FarePolicy {
        self.fares.policy_for(today)
    }

    // ── Route ─────────────────────────────────────────────────────────────

    /// Append `stop` to the end of the route.
    ///
    /// Stops are never reordered.  A stop appended after the vehicle has
    /// already travelled part of the route is visited last, even if it lies
    /// geographically among the stops already passed.
    pub fn add_stop(&mut self, stop: impl Into<StopName>) {
        self.route.push(stop.into());
    }

    pub fn stops_at(&self, stop: &StopName) -> bool {
        self.route.iter().any(|s| s == stop)
    }

    /// Make sure the vehicle will stop at `stop`.  Returns `true` if the
    /// stop had to be appended.
    pub fn boarding_intent(&mut self, stop: &StopName) -> bool {
        if self.stops_at(stop) {
            return false;
        }
        debug!(vehicle = %self.name, %stop, "boarding intent appended to route");
        self.add_stop(stop.clone());
        true
    }

    /// The stop at the current position.
    ///
    /// Once finished this is the terminal stop.
    pub fn current_stop(&self) -> LineResult<&StopName> {
        let index = match self.state {
            RouteState::NotStarted => return Err(LineError::NotStarted(self.name.clone())),
            RouteState::EnRoute(i) => Some(i),
            RouteState::Finished => self.last_index(),
        };
        index
            .and_then(|i| self.route.get(i))
            .ok_or_else(|| LineError::EmptyRoute(self.name.clone()))
    }

    // ── Riders ────────────────────────────────────────────────────────────

    /// Put `rider` aboard, charging it with `policy` unless it already holds
    /// a valid ticket.
    ///
    /// On error the rider is not boarded.
    pub fn board<O: LineObserver>(
        &mut self,
        rider:    Rider,
        policy:   FarePolicy,
        observer: &mut O,
    ) -> CoreResult<()> {
        let rider = if rider.has_valid_ticket() {
            rider
        } else {
            let amount = policy.price_for_rider(&rider)?;
            let (rider, charge) = rider.charge(amount);
            if let Some(charge) = charge {
                info!(vehicle = %self.name, rider = %charge.rider, amount = charge.amount, %policy, "charged");
                observer.on_charged(&self.name, &charge);
            }
            rider
        };
        debug!(vehicle = %self.name, rider = %rider.id, "boarded");
        observer.on_boarded(&self.name, &rider);
        self.riders.insert(rider);
        Ok(())
    }

    /// Remove the rider with identifier `id`, if aboard.
    pub fn unboard<O: LineObserver>(&mut self, id: &str, observer: &mut O) -> Option<Rider> {
        let rider = self.riders.remove(id)?;
        debug!(vehicle = %self.name, rider = %rider.id, "unboarded");
        observer.on_alighted(&self.name, &rider, false);
        Some(rider)
    }

    /// Put off every rider whose destination is `stop`.
    pub fn alight_at<O: LineObserver>(&mut self, stop: &StopName, observer: &mut O) -> Vec<Rider> {
        let off = self.riders.remove_where(|r| &r.destination == stop);
        for rider in &off {
            debug!(vehicle = %self.name, rider = %rider.id, %stop, "alighted");
            observer.on_alighted(&self.name, rider, false);
        }
        off
    }

    // ── State machine ─────────────────────────────────────────────────────

    /// Move to the next stop on the route.
    ///
    /// Reaching the terminal stop unboards everybody, with no destination
    /// check, and reports [`Advance::EndOfLine`].  Any other stop runs that
    /// stop's arrival protocol before returning [`Advance::MoreStops`].
    pub fn advance<O: LineObserver>(
        &mut self,
        stops:    &mut StopDirectory,
        config:   &LineConfig,
        observer: &mut O,
    ) -> LineResult<Advance> {
        let Some(next) = self.state.next_index() else {
            return Err(LineError::RouteFinished(self.name.clone()));
        };

        let Some(last) = self.last_index() else {
            info!(vehicle = %self.name, "empty route, nothing to do");
            self.state = RouteState::Finished;
            observer.on_end_of_line(&self.name, None);
            return Ok(Advance::EndOfLine);
        };

        if next == last {
            self.finish(observer);
            return Ok(Advance::EndOfLine);
        }

        self.state = RouteState::EnRoute(next);
        if next == 0 {
            info!(vehicle = %self.name, "starting");
            observer.on_route_started(&self.name);
        } else {
            info!(vehicle = %self.name, carrying = self.riders.len(), "heading for next stop");
            observer.on_departure(&self.name, self.riders.len());
        }

        let stop_name = self.route[next].clone();
        let stop = stops
            .get_mut(&stop_name)
            .ok_or_else(|| LineError::UnknownStop(stop_name.clone()))?;
        info!(vehicle = %self.name, stop = %stop_name, "arriving");
        observer.on_arrival(&self.name, &stop_name);
        stop.on_vehicle_arrival(self, config, observer)?;

        Ok(if next < last { Advance::MoreStops } else { Advance::EndOfLine })
    }

    /// Run the current stop's arrival protocol again, e.g. after riders
    /// have registered there while the vehicle was standing at it.
    pub fn notify_arrival<O: LineObserver>(
        &mut self,
        stops:    &mut StopDirectory,
        config:   &LineConfig,
        observer: &mut O,
    ) -> LineResult<()> {
        if self.state.is_finished() {
            return Err(LineError::RouteFinished(self.name.clone()));
        }
        let stop_name = self.current_stop()?.clone();
        let stop = stops
            .get_mut(&stop_name)
            .ok_or_else(|| LineError::UnknownStop(stop_name.clone()))?;
        debug!(vehicle = %self.name, stop = %stop_name, "re-notifying arrival");
        observer.on_arrival(&self.name, &stop_name);
        stop.on_vehicle_arrival(self, config, observer)
    }

    fn finish<O: LineObserver>(&mut self, observer: &mut O) {
        self.state = RouteState::Finished;
        let terminal = self.route.last();
        info!(vehicle = %self.name, "reached the end of the line, everybody out");
        for rider in self.riders.take_all() {
            debug!(vehicle = %self.name, rider = %rider.id, "unboarded at terminal");
            observer.on_alighted(&self.name, &rider, true);
        }
        observer.on_end_of_line(&self.name, terminal);
    }
}
