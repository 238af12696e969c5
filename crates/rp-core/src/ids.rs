//! Newtype identifiers for the entities the engine tracks.
//!
//! Every ID is `Copy + Ord + Hash`, so maps, sorted lists, and dense `Vec`
//! indexing all work without ceremony.  `RegionId` and `MovementId` are
//! *dense* indices handed out sequentially by the graph and the ledger;
//! `CharacterId` and `ArmyId` are opaque identities owned by external
//! services.  Human-readable region keys live in the graph's intern table,
//! not here.

use std::fmt;

/// Define a typed ID over `u32` with the small helper set the engine needs:
/// a sentinel, dense-index conversions, and a plain-number `Display`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Sentinel for "no ID"; never a real entity.
            pub const INVALID: $name = $name(u32::MAX);

            /// ID for position `n` of a dense store.
            ///
            /// Callers allocate IDs by pushing onto a `Vec` and wrapping its
            /// prior length, which stays far below the sentinel in practice.
            #[inline]
            pub fn from_index(n: usize) -> $name {
                debug_assert!(n < u32::MAX as usize);
                $name(n as u32)
            }

            /// Position in a dense store, for slice indexing.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// `INVALID`, so an uninitialized ID cannot alias entity 0.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

typed_id! {
    /// Dense index of a region in the region graph.
    pub struct RegionId;
}

typed_id! {
    /// Index of a movement record in the ledger, assigned sequentially at
    /// creation and never reused.
    pub struct MovementId;
}

typed_id! {
    /// Identity of a roleplay character, assigned by the player service.
    pub struct CharacterId;
}

typed_id! {
    /// Identity of an army, assigned by the army service.
    pub struct ArmyId;
}
