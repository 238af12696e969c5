//! Pathfinding trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The movement coordinator calls routing through the [`PathFinder`] trait,
//! so the default [`DijkstraPathFinder`] can be swapped for A*, contraction
//! hierarchies, or rule-driven variants without touching the lifecycle code.
//!
//! # Cost model
//!
//! The weight of traversing the edge U → V is the cost of *entering* V:
//!
//! ```text
//! cost(V) = round(base_cost(terrain(V)) / profile.factor(class(V)))
//! ```
//!
//! rounded to whole seconds and clamped to ≥ 1 s, so every weight is
//! strictly positive and Dijkstra's optimality guarantee holds.  Ties are
//! broken by smallest `RegionId`, which makes repeated queries over the same
//! graph return the identical path.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rp_core::{MoverKind, RegionId, TerrainClass, TravelDuration};

use crate::error::{WorldError, WorldResult};
use crate::graph::RegionGraph;

// ── SpeedProfile ──────────────────────────────────────────────────────────────

/// Per-mover-type speed multipliers, one per coarse terrain class.
///
/// A factor of 1.0 travels at the terrain's base cost; smaller factors are
/// slower (the base cost is divided by the factor).  Armies march slower
/// than a lone rider everywhere and are especially poor in the mountains.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedProfile {
    pub land_factor: f64,
    pub mountain_factor: f64,
    pub water_factor: f64,
}

impl SpeedProfile {
    /// Stock profile for a lone roleplay character.
    pub fn character() -> SpeedProfile {
        SpeedProfile {
            land_factor: 1.0,
            mountain_factor: 1.0,
            water_factor: 1.0,
        }
    }

    /// Stock profile for an army column.
    pub fn army() -> SpeedProfile {
        SpeedProfile {
            land_factor: 0.5,
            mountain_factor: 0.4,
            water_factor: 0.5,
        }
    }

    /// Stock profile for the given mover kind.
    pub fn for_kind(kind: MoverKind) -> SpeedProfile {
        match kind {
            MoverKind::Character => SpeedProfile::character(),
            MoverKind::Army => SpeedProfile::army(),
        }
    }

    #[inline]
    pub fn factor(&self, class: TerrainClass) -> f64 {
        match class {
            TerrainClass::Land => self.land_factor,
            TerrainClass::Mountain => self.mountain_factor,
            TerrainClass::Water => self.water_factor,
        }
    }
}

// ── Path ──────────────────────────────────────────────────────────────────────

/// One traversed edge in a computed path: the region entered and the time it
/// takes to enter it.  Immutable once attached to a movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathElement {
    pub region: RegionId,
    pub cost: TravelDuration,
}

/// An ordered, non-empty sequence of [`PathElement`]s.
///
/// The start region is *not* included — the path lists only regions entered.
/// Construction goes through the pathfinder, which guarantees length ≥ 1 and
/// strictly positive per-element costs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Build a path from pre-computed elements.
    ///
    /// # Panics
    /// Panics if `elements` is empty — an empty travel plan is not a path.
    pub fn new(elements: Vec<PathElement>) -> Path {
        assert!(!elements.is_empty(), "a path must enter at least one region");
        Path { elements }
    }

    #[inline]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false // length ≥ 1 by construction
    }

    /// The final region of the journey.
    #[inline]
    pub fn destination(&self) -> RegionId {
        self.elements[self.elements.len() - 1].region
    }

    /// Total travel time: the sum of all element costs.
    pub fn total_duration(&self) -> TravelDuration {
        self.elements.iter().map(|e| e.cost).sum()
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; the graph itself is immutable and
/// shared by reference, so concurrent route queries never contend.
pub trait PathFinder: Send + Sync {
    /// Compute the minimum-duration path from `from` to `to` for a mover
    /// with the given speed profile.
    ///
    /// # Errors
    ///
    /// - [`WorldError::SameRegion`] if `from == to` — no movement needed.
    /// - [`WorldError::Unreachable`] if no path exists.
    /// - [`WorldError::RegionNotFound`] if either endpoint is unknown.
    fn find_path(
        &self,
        graph: &RegionGraph,
        from: RegionId,
        to: RegionId,
        profile: &SpeedProfile,
    ) -> WorldResult<Path>;
}

// ── DijkstraPathFinder ────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR region graph.
///
/// Complexity O(V log V + E); region counts in this game are a few hundred,
/// so a plain binary heap is plenty.
pub struct DijkstraPathFinder;

impl PathFinder for DijkstraPathFinder {
    fn find_path(
        &self,
        graph: &RegionGraph,
        from: RegionId,
        to: RegionId,
        profile: &SpeedProfile,
    ) -> WorldResult<Path> {
        dijkstra(graph, from, to, profile)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Cost in whole seconds of entering `region`, always ≥ 1.
fn entry_cost_secs(
    graph: &RegionGraph,
    region: RegionId,
    profile: &SpeedProfile,
) -> WorldResult<u64> {
    let terrain = graph.region_type(region)?;
    let base = terrain.base_cost().as_secs() as f64;
    let factor = profile.factor(terrain.class());
    if factor <= 0.0 {
        return Err(WorldError::InvalidProfile(format!(
            "factor for {:?} must be positive, got {factor}",
            terrain.class()
        )));
    }
    Ok(((base / factor).round() as u64).max(1))
}

fn dijkstra(
    graph: &RegionGraph,
    from: RegionId,
    to: RegionId,
    profile: &SpeedProfile,
) -> WorldResult<Path> {
    if !graph.contains(from) {
        return Err(WorldError::RegionNotFound(from));
    }
    if !graph.contains(to) {
        return Err(WorldError::RegionNotFound(to));
    }
    if from == to {
        return Err(WorldError::SameRegion(from));
    }

    let n = graph.region_count();
    // dist[v] = best known cost (secs) to reach v.
    let mut dist = vec![u64::MAX; n];
    // prev[v] = region we came from; INVALID for unreached nodes and `from`.
    let mut prev = vec![RegionId::INVALID; n];

    dist[from.index()] = 0;

    // Min-heap: (cost, region). Reverse makes BinaryHeap (max) behave as a
    // min-heap; the secondary RegionId key gives deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u64, RegionId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, region))) = heap.pop() {
        if region == to {
            return Ok(reconstruct(&prev, &dist, from, to));
        }

        // Skip stale heap entries.
        if cost > dist[region.index()] {
            continue;
        }

        for &neighbor in graph.adjacent(region) {
            let new_cost = cost.saturating_add(entry_cost_secs(graph, neighbor, profile)?);

            // Strict `<` keeps the first-found predecessor on cost ties, so
            // results stay reproducible across runs.
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev[neighbor.index()] = region;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Err(WorldError::Unreachable { from, to })
}

fn reconstruct(prev: &[RegionId], dist: &[u64], from: RegionId, to: RegionId) -> Path {
    let mut elements = Vec::new();
    let mut cur = to;
    while cur != from {
        // Per-element cost is the settled-distance delta; identical to
        // entry_cost_secs(cur) but avoids re-dividing.
        let before = prev[cur.index()];
        let cost = dist[cur.index()] - dist[before.index()];
        elements.push(PathElement {
            region: cur,
            cost: TravelDuration::from_secs(cost),
        });
        cur = before;
    }
    elements.reverse();

    debug_assert!(elements.iter().all(|e| !e.cost.is_zero()));
    Path::new(elements)
}
