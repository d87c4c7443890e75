//! Route position state machine.

/// Where a vehicle is along its route.
///
/// ```text
///   NotStarted ──advance──▶ EnRoute(0) ──advance──▶ … EnRoute(last-1)
///        │                                               │
///        └──────── advance (route of 0 or 1 stops) ──────┴──advance──▶ Finished
/// ```
///
/// `EnRoute(i)` always satisfies `i < last_index`: reaching the last index
/// is the terminal transition, so a vehicle is never "en route" at its
/// terminal stop.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum RouteState {
    #[default]
    NotStarted,
    EnRoute(usize),
    /// At the terminal stop with every rider unboarded.
    Finished,
}

impl RouteState {
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, RouteState::Finished)
    }

    /// The route index the next `advance` will move to, or `None` once
    /// finished.
    pub fn next_index(self) -> Option<usize> {
        match self {
            RouteState::NotStarted => Some(0),
            RouteState::EnRoute(i) => Some(i + 1),
            RouteState::Finished => None,
        }
    }
}

/// Outcome of a single `advance`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Advance {
    /// The vehicle stopped somewhere and has further stops to visit.
    MoreStops,
    /// The vehicle reached its terminal stop; every rider has been put off.
    EndOfLine,
}

impl Advance {
    #[inline]
    pub fn has_more_stops(self) -> bool {
        matches!(self, Advance::MoreStops)
    }
}
