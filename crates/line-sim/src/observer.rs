//! Observer trait for the boarding/alighting cascade.

use line_core::{Charge, CoreError, Rider, StopName, VehicleName, WaitingRider};

/// Callbacks invoked while a vehicle advances along its route.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Nothing in the protocol depends on what an
/// observer does.
///
/// # Example — ridership printer
///
/// ```rust,ignore
/// struct Ridership;
///
/// impl LineObserver for Ridership {
///     fn on_departure(&mut self, vehicle: &VehicleName, carrying: usize) {
///         println!("{vehicle}: carrying {carrying} riders");
///     }
/// }
/// ```
pub trait LineObserver {
    /// First advance: the vehicle is at the first stop of its route.
    fn on_route_started(&mut self, _vehicle: &VehicleName) {}

    /// Any later advance short of the terminal stop.  `carrying` is the
    /// ridership before the vehicle reaches the next stop.
    fn on_departure(&mut self, _vehicle: &VehicleName, _carrying: usize) {}

    fn on_arrival(&mut self, _vehicle: &VehicleName, _stop: &StopName) {}

    fn on_boarded(&mut self, _vehicle: &VehicleName, _rider: &Rider) {}

    /// `forced` is true for riders put off at the terminal stop.
    fn on_alighted(&mut self, _vehicle: &VehicleName, _rider: &Rider, _forced: bool) {}

    /// A newly ticketed rider was charged.
    fn on_charged(&mut self, _vehicle: &VehicleName, _charge: &Charge) {}

    /// `terminal` is `None` when the route was empty.
    fn on_end_of_line(&mut self, _vehicle: &VehicleName, _terminal: Option<&StopName>) {}

    /// A waiting rider was left at the stop because its fare could not be
    /// computed.
    fn on_rider_skipped(&mut self, _stop: &StopName, _rider: &WaitingRider, _error: &CoreError) {}
}

/// A [`LineObserver`] that does nothing.
pub struct NoopObserver;

impl LineObserver for NoopObserver {}

// ── EventLog ──────────────────────────────────────────────────────────────────

/// One observed event, as recorded by [`EventLog`].
#[derive(Clone, Debug, PartialEq)]
pub enum LineEvent {
    RouteStarted { vehicle: VehicleName },
    Departed     { vehicle: VehicleName, carrying: usize },
    Arrived      { vehicle: VehicleName, stop: StopName },
    Boarded      { vehicle: VehicleName, rider: Rider },
    Alighted     { vehicle: VehicleName, rider: Rider, forced: bool },
    Charged      { vehicle: VehicleName, charge: Charge },
    EndOfLine    { vehicle: VehicleName, terminal: Option<StopName> },
    Skipped      { stop: StopName, rider: WaitingRider, error: CoreError },
}

/// Records every callback as a [`LineEvent`], in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<LineEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charges(&self) -> impl Iterator<Item = &Charge> {
        self.events.iter().filter_map(|e| match e {
            LineEvent::Charged { charge, .. } => Some(charge),
            _ => None,
        })
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl LineObserver for EventLog {
    fn on_route_started(&mut self, vehicle: &VehicleName) {
        self.events.push(LineEvent::RouteStarted { vehicle: vehicle.clone() });
    }

    fn on_departure(&mut self, vehicle: &VehicleName, carrying: usize) {
        self.events.push(LineEvent::Departed { vehicle: vehicle.clone(), carrying });
    }

    fn on_arrival(&mut self, vehicle: &VehicleName, stop: &StopName) {
        self.events.push(LineEvent::Arrived { vehicle: vehicle.clone(), stop: stop.clone() });
    }

    fn on_boarded(&mut self, vehicle: &VehicleName, rider: &Rider) {
        self.events.push(LineEvent::Boarded { vehicle: vehicle.clone(), rider: rider.clone() });
    }

    fn on_alighted(&mut self, vehicle: &VehicleName, rider: &Rider, forced: bool) {
        self.events.push(LineEvent::Alighted {
            vehicle: vehicle.clone(),
            rider:   rider.clone(),
            forced,
        });
    }

    fn on_charged(&mut self, vehicle: &VehicleName, charge: &Charge) {
        self.events.push(LineEvent::Charged { vehicle: vehicle.clone(), charge: charge.clone() });
    }

    fn on_end_of_line(&mut self, vehicle: &VehicleName, terminal: Option<&StopName>) {
        self.events.push(LineEvent::EndOfLine {
            vehicle:  vehicle.clone(),
            terminal: terminal.cloned(),
        });
    }

    fn on_rider_skipped(&mut self, stop: &StopName, rider: &WaitingRider, error: &CoreError) {
        self.events.push(LineEvent::Skipped {
            stop:  stop.clone(),
            rider: rider.clone(),
            error: error.clone(),
        });
    }
}
