//! Per-call time budget.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

/// The time budget for one transport call, covering the wait for an
/// in-flight slot and the call itself.
///
/// Configs carry this as a bare integer of whole milliseconds, which keeps
/// the serialized form portable and sub-millisecond precision out of the
/// wire contract; in-process it is a [`Duration`] ready to hand to the
/// runtime's timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallTimeout(Duration);

impl CallTimeout {
    /// A zero budget. Stands in when a timeout fired somewhere the
    /// configured value is not recoverable.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Budget of `ms` milliseconds.
    pub const fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    /// Budget of `secs` seconds.
    pub const fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    /// The budget in whole milliseconds, as serialized.
    pub fn as_millis(&self) -> u64 {
        self.0.as_millis() as u64
    }

    /// The budget as a [`Duration`] for the runtime's timer.
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl Serialize for CallTimeout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.as_millis())
    }
}

impl<'de> Deserialize<'de> for CallTimeout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::from_millis)
    }
}

impl std::fmt::Display for CallTimeout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.as_millis())
    }
}
