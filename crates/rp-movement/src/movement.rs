//! The `Movement` record — a single travel plan for exactly one mover.

use rp_core::{MovementId, Mover, RegionId, Timestamp, TravelDuration};
use rp_world::Path;

// ── MovementPhase ─────────────────────────────────────────────────────────────

/// Lifecycle phase of a movement.
///
/// ```text
/// Pending ──► Active ──► Completed
///                 └─────► Cancelled
/// ```
///
/// `Completed` and `Cancelled` are terminal; a movement is never
/// reactivated — further travel means a new movement.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementPhase {
    /// Created but not yet started (awaiting approval for army movements).
    Pending,
    /// Under way: position is derived from `start_time` and the path.
    Active,
    /// Arrived at the path's destination.
    Completed,
    /// Halted by the mover; resting region frozen in the halt record.
    Cancelled,
}

impl MovementPhase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, MovementPhase::Completed | MovementPhase::Cancelled)
    }
}

// ── HaltRecord ────────────────────────────────────────────────────────────────

/// Frozen progress written when a movement is cancelled.
///
/// The clock stops mattering for a cancelled movement, so the resting region
/// and the travel already performed are captured once, here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HaltRecord {
    /// When the cancellation happened.
    pub at: Timestamp,
    /// The last region the mover had fully entered — never a mid-edge point.
    pub resting_region: RegionId,
    /// Travel performed up to `at`.
    pub moved: TravelDuration,
}

// ── Movement ──────────────────────────────────────────────────────────────────

/// A single travel plan for one mover.
///
/// Append-only apart from the phase transitions applied by the ledger: the
/// path and origin never change after creation, `start_time`/`end_time` are
/// stamped once at activation, and `halt` once at cancellation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movement {
    pub id: MovementId,
    pub mover: Mover,

    /// Region the mover was in when the movement was created.  Needed for
    /// the cancellation snap-back before any segment has completed.
    pub origin: RegionId,

    /// Ordered regions entered with their traversal costs; never empty,
    /// first region ≠ `origin`.
    pub path: Path,

    pub phase: MovementPhase,

    /// Stamped at activation; `None` while pending.
    pub start_time: Option<Timestamp>,

    /// Cache of `start_time + path.total_duration()`, stamped at activation.
    /// Derivable — kept so stored records answer "when does it end" without
    /// re-summing the path.
    pub end_time: Option<Timestamp>,

    /// Frozen progress; `Some` only for cancelled movements.
    pub halt: Option<HaltRecord>,
}

impl Movement {
    /// The final region of the travel plan.
    #[inline]
    pub fn destination(&self) -> RegionId {
        self.path.destination()
    }

    /// Total planned travel time.
    #[inline]
    pub fn total_duration(&self) -> TravelDuration {
        self.path.total_duration()
    }

    /// `true` for character movements, `false` for army movements.
    #[inline]
    pub fn is_char_movement(&self) -> bool {
        self.mover.is_character()
    }

    /// `true` while the movement is under way.
    #[inline]
    pub fn is_currently_active(&self) -> bool {
        self.phase == MovementPhase::Active
    }

    /// `true` once the movement has been approved and started.  A cancelled
    /// movement counts as accepted if it was ever activated.
    pub fn is_accepted(&self) -> bool {
        match self.phase {
            MovementPhase::Pending => false,
            MovementPhase::Active | MovementPhase::Completed => true,
            MovementPhase::Cancelled => self.start_time.is_some(),
        }
    }
}
