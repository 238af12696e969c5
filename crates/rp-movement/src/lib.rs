//! `rp-movement` — movement lifecycle, lazy time-simulation, and coordination.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`movement`]    | `Movement` record, `MovementPhase`, `HaltRecord`              |
//! | [`clock`]       | pure progress math over stored timestamps (`Progress`)        |
//! | [`ledger`]      | `MovementLedger` — lifecycle state machine + per-mover state  |
//! | [`coordinator`] | `MovementCoordinator<P>` — the external surface               |
//! | [`error`]       | `MovementError`, `MovementResult<T>`                          |
//!
//! # Movement model (lazy time-simulation)
//!
//! No background job advances movers.  A movement stores its path and
//! `start_time` once, at activation; everything else is derived on demand:
//!
//! 1. [`MovementCoordinator::start_movement`] routes via a pluggable
//!    [`PathFinder`][rp_world::PathFinder] and records the travel plan.
//! 2. Any later read evaluates [`clock::Progress`] against a caller-supplied
//!    "now" — current segment, time already moved, ETA — without mutating
//!    anything, so concurrent reads are safe.
//! 3. Collaborators that observe `complete == true` call
//!    [`MovementCoordinator::complete_movement`] to materialize the mover's
//!    new region; cancellation snaps the mover back to the last region it
//!    fully entered, never a mid-edge point.

pub mod clock;
pub mod coordinator;
pub mod error;
pub mod ledger;
pub mod movement;


pub use clock::Progress;
pub use coordinator::{MovementCoordinator, MovementReport, Position};
pub use error::{MovementError, MovementResult};
pub use ledger::{MovementLedger, MoverState};
pub use movement::{HaltRecord, Movement, MovementPhase};
