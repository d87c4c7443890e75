//! Strongly typed, string-backed identifier wrappers.
//!
//! Riders, stops and vehicles are all identified by name.  Wrapping the name
//! keeps a `StopName` from being passed where a `RiderId` is expected, while
//! `Borrow<str>` still allows map lookups with a plain `&str`.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed name wrapper around a `String`.
macro_rules! named_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }
    };
}

named_id! {
    /// Rider identifier.  The last two characters encode the rider's age.
    pub struct RiderId;
}

named_id! {
    /// Name of a stop.  Two stops are the same stop iff their names match.
    pub struct StopName;
}

named_id! {
    /// Name of a vehicle.
    pub struct VehicleName;
}
