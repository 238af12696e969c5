//! Wall-clock time model.
//!
//! # Design
//!
//! Position is a pure function of stored timestamps, so time arithmetic must
//! be exact under cancellation, resumption, and out-of-order queries.  Both
//! types are plain integer second counts:
//!
//! - [`Timestamp`] — an absolute Unix instant (`i64` seconds).
//! - [`TravelDuration`] — a non-negative span (`u64` whole seconds).
//!
//! Using whole seconds as the canonical unit keeps all path-cost arithmetic
//! integer-exact (no floating-point drift) and comparisons O(1).  Travel
//! costs in this game are hours to days, so sub-second resolution buys
//! nothing.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

// ── Timestamp ────────────────────────────────────────────────────────────────

/// An absolute wall-clock instant, stored as Unix seconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The current wall-clock time.
    ///
    /// The engine itself never calls this — "now" is always supplied by the
    /// caller so reads stay deterministic and testable.  Provided for
    /// collaborators at the request boundary.
    pub fn now() -> Timestamp {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        Timestamp(secs)
    }

    /// Duration elapsed from `earlier` to `self`, clamped to zero if
    /// `earlier` is in the future (defends against clock skew).
    #[inline]
    pub fn saturating_since(self, earlier: Timestamp) -> TravelDuration {
        TravelDuration((self.0 - earlier.0).max(0) as u64)
    }
}

impl std::ops::Add<TravelDuration> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: TravelDuration) -> Timestamp {
        Timestamp(self.0 + rhs.0 as i64)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

// ── TravelDuration ───────────────────────────────────────────────────────────

/// A non-negative span of whole seconds.
///
/// Path-element costs, elapsed travel, and remaining travel are all
/// `TravelDuration`s; the arithmetic identities in the movement clock
/// (`moved + remaining == total`) hold exactly because this is integer math.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelDuration(pub u64);

impl TravelDuration {
    pub const ZERO: TravelDuration = TravelDuration(0);

    #[inline]
    pub fn from_secs(secs: u64) -> TravelDuration {
        TravelDuration(secs)
    }

    #[inline]
    pub fn from_minutes(minutes: u64) -> TravelDuration {
        TravelDuration(minutes * 60)
    }

    #[inline]
    pub fn from_hours(hours: u64) -> TravelDuration {
        TravelDuration(hours * 3_600)
    }

    #[inline]
    pub fn as_secs(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `self - rhs`, clamped at zero.
    #[inline]
    pub fn saturating_sub(self, rhs: TravelDuration) -> TravelDuration {
        TravelDuration(self.0.saturating_sub(rhs.0))
    }

    /// Break into (days, hours, minutes) for human-readable logging without
    /// a datetime library.
    pub fn dhm(self) -> (u64, u32, u32) {
        let days = self.0 / 86_400;
        let hours = ((self.0 % 86_400) / 3_600) as u32;
        let minutes = ((self.0 % 3_600) / 60) as u32;
        (days, hours, minutes)
    }
}

impl std::ops::Add for TravelDuration {
    type Output = TravelDuration;
    #[inline]
    fn add(self, rhs: TravelDuration) -> TravelDuration {
        TravelDuration(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for TravelDuration {
    #[inline]
    fn add_assign(&mut self, rhs: TravelDuration) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for TravelDuration {
    fn sum<I: Iterator<Item = TravelDuration>>(iter: I) -> TravelDuration {
        iter.fold(TravelDuration::ZERO, |acc, d| acc + d)
    }
}

impl fmt::Display for TravelDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.dhm();
        write!(f, "{d}d {h:02}h {m:02}m")
    }
}
