//! `rp-core` — foundational types for the roleplay movement engine.
//!
//! This crate is a dependency of every other `rp-*` crate.  It intentionally
//! has no `rp-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`ids`]      | `RegionId`, `MovementId`, `CharacterId`, `ArmyId`    |
//! | [`mover`]    | `Mover`, `MoverKind`                                 |
//! | [`terrain`]  | `RegionType`, `TerrainClass`                         |
//! | [`time`]     | `Timestamp`, `TravelDuration`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod ids;
pub mod mover;
pub mod terrain;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{ArmyId, CharacterId, MovementId, RegionId};
pub use mover::{Mover, MoverKind};
pub use terrain::{RegionType, TerrainClass};
pub use time::{Timestamp, TravelDuration};
