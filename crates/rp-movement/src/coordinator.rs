//! High-level coordination: the only surface external collaborators call.
//!
//! Authorization, faction/region-ownership checks, and binding/stationing
//! conflicts are resolved by the army/player services *before* calling in —
//! the coordinator assumes the request is already authorized and enforces
//! motion invariants only.

use tracing::info;

use rp_core::{MovementId, Mover, MoverKind, RegionId, Timestamp, TravelDuration};
use rp_world::{PathFinder, RegionGraph, SpeedProfile};

use crate::clock::{Progress, last_completed_region};
use crate::error::{MovementError, MovementResult};
use crate::ledger::MovementLedger;
use crate::movement::{Movement, MovementPhase};

// ── Report ────────────────────────────────────────────────────────────────────

/// Where a mover is, as derived by the clock.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// Resting in a region (arrived, or snapped back by a cancellation).
    Resting(RegionId),
    /// On the road: past `last`, heading into `next`.
    Between { last: RegionId, next: RegionId },
}

/// Read-only progress snapshot of a movement at a given instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementReport {
    pub movement: MovementId,
    pub position: Position,
    pub total: TravelDuration,
    pub moved: TravelDuration,
    pub remaining: TravelDuration,
    pub reaches_next_region_at: Timestamp,
    pub until_next_region: TravelDuration,
    pub complete: bool,
}

// ── MovementCoordinator ───────────────────────────────────────────────────────

/// Orchestrates the pathfinder and the ledger to service movement requests.
///
/// # Type parameter
///
/// `P` must implement [`PathFinder`] (e.g. [`rp_world::DijkstraPathFinder`]).
/// Swap it at compile time for a different routing algorithm with no runtime
/// overhead.
///
/// # Time
///
/// "Now" is always supplied by the caller; the coordinator never reads the
/// system clock, so behaviour is a pure function of its inputs.
pub struct MovementCoordinator<P: PathFinder> {
    /// The routing algorithm.
    pub pathfinder: P,

    /// All movement records and per-mover state.
    pub ledger: MovementLedger,

    character_profile: SpeedProfile,
    army_profile: SpeedProfile,
}

impl<P: PathFinder> MovementCoordinator<P> {
    /// Create a coordinator with the stock speed profiles.
    pub fn new(pathfinder: P) -> Self {
        Self::with_profiles(pathfinder, SpeedProfile::character(), SpeedProfile::army())
    }

    /// Create a coordinator with custom per-kind speed profiles.
    pub fn with_profiles(
        pathfinder: P,
        character_profile: SpeedProfile,
        army_profile: SpeedProfile,
    ) -> Self {
        Self {
            pathfinder,
            ledger: MovementLedger::new(),
            character_profile,
            army_profile,
        }
    }

    fn profile(&self, kind: MoverKind) -> &SpeedProfile {
        match kind {
            MoverKind::Character => &self.character_profile,
            MoverKind::Army => &self.army_profile,
        }
    }

    // ── Placement & reads ─────────────────────────────────────────────────

    /// Record a mover's position (initial placement).
    pub fn place(&mut self, mover: Mover, region: RegionId) -> MovementResult<()> {
        self.ledger.place(mover, region)
    }

    /// The region the mover rests in (origin while travelling).
    pub fn current_region(&self, mover: Mover) -> MovementResult<RegionId> {
        self.ledger.current_region(mover)
    }

    /// The mover's pending or active movement, if any.
    pub fn active_movement(&self, mover: Mover) -> Option<MovementId> {
        self.ledger.active_movement(mover)
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Start a movement for `mover` towards `destination`.
    ///
    /// Routes with the mover-kind's speed profile and records the travel
    /// plan.  Character movements activate immediately; army movements stay
    /// `Pending` until [`accept_movement`](Self::accept_movement) (approval
    /// itself is an upstream decision).
    ///
    /// # Errors
    ///
    /// `AlreadyMoving`, `NotPlaced`, or a routing failure (`SameRegion`,
    /// `Unreachable`, `RegionNotFound`) wrapped in `MovementError::World`.
    pub fn start_movement(
        &mut self,
        graph: &RegionGraph,
        mover: Mover,
        destination: RegionId,
        now: Timestamp,
    ) -> MovementResult<&Movement> {
        if self.ledger.active_movement(mover).is_some() {
            return Err(MovementError::AlreadyMoving(mover));
        }
        let from = self.ledger.current_region(mover)?;

        let profile = self.profile(mover.kind());
        let path = self.pathfinder.find_path(graph, from, destination, profile)?;

        let id = self.ledger.create(mover, path)?;
        if mover.is_character() {
            self.ledger.activate(id, now)?;
        }

        let movement = self.ledger.get(id)?;
        info!(
            %mover,
            movement = id.0,
            from = from.0,
            to = destination.0,
            total = %movement.total_duration(),
            pending = !movement.is_currently_active(),
            "movement started"
        );
        Ok(movement)
    }

    /// Activate `mover`'s pending movement (army approval granted upstream).
    pub fn accept_movement(&mut self, mover: Mover, now: Timestamp) -> MovementResult<&Movement> {
        let id = self
            .ledger
            .active_movement(mover)
            .ok_or(MovementError::NoActiveMovement(mover))?;
        let movement = self.ledger.activate(id, now)?;
        info!(%mover, movement = id.0, "movement accepted");
        Ok(movement)
    }

    /// Cancel `mover`'s active movement, snapping it back to the last region
    /// it fully entered.
    pub fn cancel_movement(&mut self, mover: Mover, now: Timestamp) -> MovementResult<&Movement> {
        let id = self
            .ledger
            .active_movement(mover)
            .ok_or(MovementError::NoActiveMovement(mover))?;
        let movement = self.ledger.cancel(id, now)?;
        info!(%mover, movement = id.0, "movement cancelled");
        Ok(movement)
    }

    /// Opportunistic completion hook: collaborators call this whenever a
    /// read shows `complete == true`, to materialize the mover's new region.
    pub fn complete_movement(&mut self, mover: Mover, now: Timestamp) -> MovementResult<&Movement> {
        let id = self
            .ledger
            .active_movement(mover)
            .ok_or(MovementError::NoActiveMovement(mover))?;
        let movement = self.ledger.complete(id, now)?;
        info!(%mover, movement = id.0, "movement completed");
        Ok(movement)
    }

    /// Read-only progress snapshot of a movement at `now`.
    ///
    /// Valid for active, completed, and cancelled movements (cancelled
    /// movements report their frozen halt state).  A pending movement has no
    /// `start_time` yet and fails with `NotActive`.
    pub fn describe(&self, id: MovementId, now: Timestamp) -> MovementResult<MovementReport> {
        let movement = self.ledger.get(id)?;
        let Some(start) = movement.start_time else {
            return Err(MovementError::NotActive(id));
        };

        // Cancelled movements are frozen at the moment of the halt.
        let as_of = match (movement.phase, movement.halt) {
            (MovementPhase::Cancelled, Some(halt)) => halt.at,
            _ => now,
        };

        let progress = Progress::at(&movement.path, start, as_of);
        let position = match (movement.phase, movement.halt, progress.segment) {
            (MovementPhase::Cancelled, Some(halt), _) => Position::Resting(halt.resting_region),
            (_, _, None) => Position::Resting(movement.destination()),
            (_, _, Some(i)) => Position::Between {
                last: last_completed_region(&movement.path, movement.origin, start, as_of),
                next: movement.path.elements()[i].region,
            },
        };

        Ok(MovementReport {
            movement: id,
            position,
            total: progress.total,
            moved: progress.moved,
            remaining: progress.remaining,
            reaches_next_region_at: progress.reaches_next_region_at,
            until_next_region: progress.until_next_region,
            complete: progress.complete,
        })
    }
}
