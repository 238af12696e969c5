//! Region terrain types and their traversal costs.
//!
//! Every region is classified by terrain, and terrain determines the base
//! time cost of *entering* that region.  The pathfinder divides the base
//! cost by the mover's speed factor at path-creation time; the base values
//! here are calibrated for a lone character at factor 1.0.

use std::str::FromStr;

use crate::time::TravelDuration;

// ── RegionType ───────────────────────────────────────────────────────────────

/// Terrain classification of a map region.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RegionType {
    Land,
    Hill,
    Forest,
    Desert,
    Swamp,
    Water,
    Mountain,
    Ice,
}

impl RegionType {
    /// Base cost of entering a region of this terrain, for a mover with
    /// speed factor 1.0.
    pub fn base_cost(self) -> TravelDuration {
        let hours = match self {
            RegionType::Land => 6,
            RegionType::Hill => 9,
            RegionType::Forest => 8,
            RegionType::Desert => 10,
            RegionType::Swamp => 12,
            RegionType::Water => 12,
            RegionType::Mountain => 14,
            RegionType::Ice => 18,
        };
        TravelDuration::from_hours(hours)
    }

    /// Coarse grouping used by speed profiles: movers have one factor per
    /// class, not per terrain.
    pub fn class(self) -> TerrainClass {
        match self {
            RegionType::Land | RegionType::Hill | RegionType::Forest | RegionType::Desert => {
                TerrainClass::Land
            }
            RegionType::Swamp | RegionType::Mountain | RegionType::Ice => TerrainClass::Mountain,
            RegionType::Water => TerrainClass::Water,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RegionType::Land => "land",
            RegionType::Hill => "hill",
            RegionType::Forest => "forest",
            RegionType::Desert => "desert",
            RegionType::Swamp => "swamp",
            RegionType::Water => "water",
            RegionType::Mountain => "mountain",
            RegionType::Ice => "ice",
        }
    }
}

impl FromStr for RegionType {
    type Err = String;

    fn from_str(s: &str) -> Result<RegionType, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "land" => Ok(RegionType::Land),
            "hill" => Ok(RegionType::Hill),
            "forest" => Ok(RegionType::Forest),
            "desert" => Ok(RegionType::Desert),
            "swamp" => Ok(RegionType::Swamp),
            "water" => Ok(RegionType::Water),
            "mountain" => Ok(RegionType::Mountain),
            "ice" => Ok(RegionType::Ice),
            other => Err(format!("unknown region type {other:?}")),
        }
    }
}

impl std::fmt::Display for RegionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TerrainClass ─────────────────────────────────────────────────────────────

/// Coarse terrain grouping for per-mover speed factors.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainClass {
    Land,
    Mountain,
    Water,
}
