//! The two kinds of mobile entity.
//!
//! A mover is either a roleplay character or an army — never both.  The
//! original record model expressed this as an `is_char_movement` flag next
//! to two nullable references; the tagged enum makes the mutual exclusion a
//! type-level fact.

use std::fmt;

use crate::ids::{ArmyId, CharacterId};

/// A mobile entity: a roleplay character or an army.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mover {
    Character(CharacterId),
    Army(ArmyId),
}

impl Mover {
    #[inline]
    pub fn kind(self) -> MoverKind {
        match self {
            Mover::Character(_) => MoverKind::Character,
            Mover::Army(_) => MoverKind::Army,
        }
    }

    #[inline]
    pub fn is_character(self) -> bool {
        matches!(self, Mover::Character(_))
    }
}

impl fmt::Display for Mover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mover::Character(id) => write!(f, "character {}", id.0),
            Mover::Army(id) => write!(f, "army {}", id.0),
        }
    }
}

/// Mover classification, used to pick a speed profile and activation rules.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoverKind {
    Character,
    Army,
}
