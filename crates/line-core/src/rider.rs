//! Boarded riders, waiting riders and charge records.

use crate::{CoreError, CoreResult, RiderCategory, RiderId, StopName};

/// Minimum age from which a rider pays the senior fare.
pub const SENIOR_AGE: u8 = 65;

// ── Rider ─────────────────────────────────────────────────────────────────────

/// A rider aboard (or about to board) a vehicle.
///
/// The ticket flag is private so that it can only move from `false` to
/// `true`, via [`Rider::charge`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rider {
    pub id:          RiderId,
    /// Seat assignment.  Riders converted from a [`WaitingRider`] have none.
    pub seat:        Option<u8>,
    pub destination: StopName,
    has_valid_ticket: bool,
}

impl Rider {
    /// A rider without a seat or a ticket.
    pub fn new(id: impl Into<RiderId>, destination: impl Into<StopName>) -> Self {
        Self {
            id:               id.into(),
            seat:             None,
            destination:      destination.into(),
            has_valid_ticket: false,
        }
    }

    pub fn with_seat(mut self, seat: u8) -> Self {
        self.seat = Some(seat);
        self
    }

    #[inline]
    pub fn has_valid_ticket(&self) -> bool {
        self.has_valid_ticket
    }

    /// Age encoded in the last two characters of the identifier.
    pub fn age(&self) -> CoreResult<u8> {
        let id = self.id.as_str();
        let start = id
            .char_indices()
            .rev()
            .nth(1)
            .map(|(i, _)| i)
            .ok_or_else(|| self.malformed("shorter than two characters"))?;
        let digits = &id[start..];
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.malformed("trailing age digits are not numeric"));
        }
        digits
            .parse::<u8>()
            .map_err(|_| self.malformed("trailing age digits are not numeric"))
    }

    pub fn is_senior(&self) -> CoreResult<bool> {
        Ok(self.age()? >= SENIOR_AGE)
    }

    pub fn category(&self) -> CoreResult<RiderCategory> {
        Ok(if self.is_senior()? {
            RiderCategory::Senior
        } else {
            RiderCategory::Regular
        })
    }

    /// Issue a ticket for `amount`.
    ///
    /// A rider that already holds a valid ticket is returned unchanged and no
    /// [`Charge`] is produced.
    pub fn charge(mut self, amount: f64) -> (Rider, Option<Charge>) {
        if self.has_valid_ticket {
            return (self, None);
        }
        self.has_valid_ticket = true;
        let charge = Charge { rider: self.id.clone(), amount };
        (self, Some(charge))
    }

    fn malformed(&self, reason: &'static str) -> CoreError {
        CoreError::MalformedId { id: self.id.clone(), reason }
    }
}

// ── Charge ────────────────────────────────────────────────────────────────────

/// Accounting record for one ticket sale.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Charge {
    pub rider:  RiderId,
    pub amount: f64,
}

// ── WaitingRider ──────────────────────────────────────────────────────────────

/// A rider-to-be waiting at a stop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitingRider {
    pub id:          RiderId,
    pub destination: StopName,
}

impl WaitingRider {
    pub fn new(id: impl Into<RiderId>, destination: impl Into<StopName>) -> Self {
        Self { id: id.into(), destination: destination.into() }
    }

    /// Convert into an unticketed, unseated [`Rider`].
    pub fn into_rider(self) -> Rider {
        Rider::new(self.id, self.destination)
    }
}
