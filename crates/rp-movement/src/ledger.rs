//! The `MovementLedger` — movement records, per-mover state, and the
//! lifecycle state machine.
//!
//! # Consistency unit
//!
//! Every transition touches exactly one [`Movement`] and the one
//! [`MoverState`] belonging to its mover — nothing else.  Callers serialize
//! operations *per mover* (row-level or optimistic locking at the
//! persistence layer); operations on different movers never share mutable
//! state beyond the containers themselves.
//!
//! # Invariant
//!
//! A mover has at most one non-terminal movement at any time, tracked by the
//! `MoverState::active` back-reference.  [`create`](MovementLedger::create)
//! is the only way in; [`cancel`](MovementLedger::cancel) and
//! [`complete`](MovementLedger::complete) are the only ways out.

use rustc_hash::FxHashMap;
use tracing::debug;

use rp_core::{MovementId, Mover, RegionId, Timestamp};
use rp_world::Path;

use crate::clock::{Progress, last_completed_region};
use crate::error::{MovementError, MovementResult};
use crate::movement::{HaltRecord, Movement, MovementPhase};

// ── MoverState ────────────────────────────────────────────────────────────────

/// Engine-side view of one mover: where it rests and whether it has a
/// non-terminal movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoverState {
    /// The region the mover occupies when not travelling (and the origin of
    /// its next movement).
    pub current_region: RegionId,

    /// Back-reference to the mover's pending or active movement, if any.
    pub active: Option<MovementId>,
}

// ── MovementLedger ────────────────────────────────────────────────────────────

/// Owns all movement records plus per-mover state.
///
/// Movement IDs are sequential indexes into the record vector; records are
/// append-only apart from the phase transitions below.
pub struct MovementLedger {
    movements: Vec<Movement>,
    movers: FxHashMap<Mover, MoverState>,
}

impl MovementLedger {
    pub fn new() -> Self {
        Self {
            movements: Vec::new(),
            movers: FxHashMap::default(),
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub fn get(&self, id: MovementId) -> MovementResult<&Movement> {
        self.movements
            .get(id.index())
            .ok_or(MovementError::MovementNotFound(id))
    }

    /// The region the mover rests in.  For a mover with an active movement
    /// this is still the origin — position during travel is a clock query,
    /// not stored state.
    pub fn current_region(&self, mover: Mover) -> MovementResult<RegionId> {
        self.movers
            .get(&mover)
            .map(|s| s.current_region)
            .ok_or(MovementError::NotPlaced(mover))
    }

    /// The mover's pending or active movement, if any.
    pub fn active_movement(&self, mover: Mover) -> Option<MovementId> {
        self.movers.get(&mover).and_then(|s| s.active)
    }

    pub fn movement_count(&self) -> usize {
        self.movements.len()
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Record the mover's position (initial placement from the collaborator
    /// that owns mover identity).
    ///
    /// Fails with `AlreadyMoving` if the mover has a non-terminal movement —
    /// repositioning mid-journey would corrupt the snap-back invariant.
    pub fn place(&mut self, mover: Mover, region: RegionId) -> MovementResult<()> {
        let state = self.movers.entry(mover).or_insert(MoverState {
            current_region: region,
            active: None,
        });
        if state.active.is_some() {
            return Err(MovementError::AlreadyMoving(mover));
        }
        state.current_region = region;
        debug!(%mover, region = region.0, "mover placed");
        Ok(())
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Create a movement in `Pending` for `mover` along `path`.
    ///
    /// The origin is the mover's current region.  Fails with `NotPlaced` if
    /// the mover is unknown and `AlreadyMoving` if it already has a
    /// non-terminal movement.
    pub fn create(&mut self, mover: Mover, path: Path) -> MovementResult<MovementId> {
        let state = self
            .movers
            .get_mut(&mover)
            .ok_or(MovementError::NotPlaced(mover))?;
        if state.active.is_some() {
            return Err(MovementError::AlreadyMoving(mover));
        }

        let origin = state.current_region;
        debug_assert_ne!(path.elements()[0].region, origin);

        let id = MovementId::from_index(self.movements.len());
        state.active = Some(id);
        self.movements.push(Movement {
            id,
            mover,
            origin,
            path,
            phase: MovementPhase::Pending,
            start_time: None,
            end_time: None,
            halt: None,
        });
        debug!(%mover, movement = id.0, "movement created");
        Ok(id)
    }

    /// `Pending → Active`: stamp `start_time = now` and cache the end time.
    pub fn activate(&mut self, id: MovementId, now: Timestamp) -> MovementResult<&Movement> {
        let movement = self
            .movements
            .get_mut(id.index())
            .ok_or(MovementError::MovementNotFound(id))?;
        if movement.phase != MovementPhase::Pending {
            return Err(MovementError::NotPending(id));
        }

        movement.phase = MovementPhase::Active;
        movement.start_time = Some(now);
        movement.end_time = Some(now + movement.path.total_duration());
        debug!(movement = id.0, start = now.0, "movement activated");
        Ok(&self.movements[id.index()])
    }

    /// `Active → Cancelled`: freeze progress and snap the mover back to the
    /// last fully-entered region.
    pub fn cancel(&mut self, id: MovementId, now: Timestamp) -> MovementResult<&Movement> {
        let (mover, resting, moved) = {
            let movement = self.get(id)?;
            let Some(start) = movement.start_time else {
                return Err(MovementError::NotActive(id));
            };
            if movement.phase != MovementPhase::Active {
                return Err(MovementError::NotActive(id));
            }
            let resting = last_completed_region(&movement.path, movement.origin, start, now);
            let progress = Progress::at(&movement.path, start, now);
            (movement.mover, resting, progress.moved)
        };

        let movement = &mut self.movements[id.index()];
        movement.phase = MovementPhase::Cancelled;
        movement.halt = Some(HaltRecord {
            at: now,
            resting_region: resting,
            moved,
        });

        let state = self
            .movers
            .get_mut(&mover)
            .ok_or(MovementError::NotPlaced(mover))?;
        state.current_region = resting;
        state.active = None;

        debug!(%mover, movement = id.0, resting = resting.0, "movement cancelled");
        Ok(&self.movements[id.index()])
    }

    /// `Active → Completed`: requires the clock to confirm arrival; sets the
    /// mover's region to the path destination.
    pub fn complete(&mut self, id: MovementId, now: Timestamp) -> MovementResult<&Movement> {
        let (mover, destination) = {
            let movement = self.get(id)?;
            let Some(start) = movement.start_time else {
                return Err(MovementError::NotActive(id));
            };
            if movement.phase != MovementPhase::Active {
                return Err(MovementError::NotActive(id));
            }
            if !Progress::at(&movement.path, start, now).complete {
                return Err(MovementError::NotYetArrived(id));
            }
            (movement.mover, movement.destination())
        };

        let movement = &mut self.movements[id.index()];
        movement.phase = MovementPhase::Completed;

        let state = self
            .movers
            .get_mut(&mover)
            .ok_or(MovementError::NotPlaced(mover))?;
        state.current_region = destination;
        state.active = None;

        debug!(%mover, movement = id.0, destination = destination.0, "movement completed");
        Ok(&self.movements[id.index()])
    }
}

impl Default for MovementLedger {
    fn default() -> Self {
        Self::new()
    }
}
