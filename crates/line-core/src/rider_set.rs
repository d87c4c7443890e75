//! Identifier-keyed collection of riders.

use rustc_hash::FxHashMap;

use crate::{Rider, RiderId};

/// The riders aboard one vehicle, keyed by [`RiderId`].
///
/// Iteration order is unspecified.  Inserting a rider whose identifier is
/// already present replaces the stored rider, so re-boarding is idempotent.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RiderSet {
    riders: FxHashMap<RiderId, Rider>,
}

impl RiderSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.riders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }

    /// Insert `rider`, returning the rider it replaced, if any.
    pub fn insert(&mut self, rider: Rider) -> Option<Rider> {
        self.riders.insert(rider.id.clone(), rider)
    }

    pub fn remove(&mut self, id: &str) -> Option<Rider> {
        self.riders.remove(id)
    }

    /// `None` means "no such rider"; absence is not an error.
    pub fn find(&self, id: &str) -> Option<&Rider> {
        self.riders.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.riders.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rider> {
        self.riders.values()
    }

    pub fn for_each(&self, mut visitor: impl FnMut(&Rider)) {
        for rider in self.riders.values() {
            visitor(rider);
        }
    }

    /// Visit every rider with mutable access.
    ///
    /// The visitor works on copies taken from a snapshot of the set; the
    /// results are collected into a fresh map which then replaces the old one.
    /// Riders are re-keyed by their (possibly edited) identifier.
    pub fn update(&mut self, mut visitor: impl FnMut(&mut Rider)) {
        let mut next = FxHashMap::with_capacity_and_hasher(self.riders.len(), Default::default());
        for rider in self.riders.values() {
            let mut copy = rider.clone();
            visitor(&mut copy);
            next.insert(copy.id.clone(), copy);
        }
        self.riders = next;
    }

    /// Remove and return every rider for which `pred` holds.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&Rider) -> bool) -> Vec<Rider> {
        let ids: Vec<RiderId> = self
            .riders
            .values()
            .filter(|r| pred(r))
            .map(|r| r.id.clone())
            .collect();
        ids.iter().filter_map(|id| self.riders.remove(id)).collect()
    }

    /// Empty the set, returning everyone who was in it.
    pub fn take_all(&mut self) -> Vec<Rider> {
        std::mem::take(&mut self.riders).into_values().collect()
    }

    /// Identifiers of every rider in the set, in no particular order.
    pub fn manifest(&self) -> Vec<RiderId> {
        self.riders.keys().cloned().collect()
    }
}
