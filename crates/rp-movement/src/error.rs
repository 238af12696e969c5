//! Movement-subsystem error type.
//!
//! Every variant is a recoverable, caller-facing error carrying enough
//! context (mover, movement, region IDs) for the presentation layer to
//! render a message.  Nothing here represents corrupted internal state, and
//! the engine never retries internally — all reads are idempotent-safe to
//! re-check.

use thiserror::Error;

use rp_core::{MovementId, Mover};
use rp_world::WorldError;

/// Errors produced by `rp-movement`.
#[derive(Debug, Error)]
pub enum MovementError {
    #[error("{0} is already moving")]
    AlreadyMoving(Mover),

    #[error("{0} has not been placed in any region")]
    NotPlaced(Mover),

    #[error("{0} has no active movement")]
    NoActiveMovement(Mover),

    #[error("movement {0} not found")]
    MovementNotFound(MovementId),

    #[error("movement {0} is not pending")]
    NotPending(MovementId),

    #[error("movement {0} is not active")]
    NotActive(MovementId),

    #[error("movement {0} has not arrived yet")]
    NotYetArrived(MovementId),

    #[error("pathfinding failed: {0}")]
    World(#[from] WorldError),
}

pub type MovementResult<T> = Result<T, MovementError>;
