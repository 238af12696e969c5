//! Region graph representation and builder.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  Given a
//! `RegionId r`, its neighbors occupy the slice:
//!
//! ```text
//! adj[ adj_start[r] .. adj_start[r+1] ]
//! ```
//!
//! Neighbor lists are sorted by `RegionId` and deduplicated at build time,
//! so iteration order is deterministic — a requirement for reproducible
//! pathfinding results.
//!
//! # Key interning
//!
//! Regions are configured with human-readable string keys ("91", "dale",
//! …).  The builder interns each key to a dense `RegionId` and the graph
//! keeps both directions of the mapping: `key(id)` for display and
//! `resolve(key)` for request handling.
//!
//! Topology is configuration — there are no mutation operations after
//! [`RegionGraphBuilder::build`], and the graph is freely shared by
//! reference across concurrent operations.

use rustc_hash::FxHashMap;

use rp_core::{RegionId, RegionType};

use crate::error::{WorldError, WorldResult};

// ── RegionGraph ───────────────────────────────────────────────────────────────

/// Undirected region graph in CSR format plus a key intern table.
///
/// Do not construct directly; use [`RegionGraphBuilder`].
#[derive(Debug)]
pub struct RegionGraph {
    /// Region key of each region, indexed by `RegionId`.
    keys: Vec<String>,

    /// Terrain of each region, indexed by `RegionId`.
    types: Vec<RegionType>,

    /// CSR row pointer.  Neighbors of region `r` are at
    /// `adj[adj_start[r] .. adj_start[r+1]]`.  Length = `region_count + 1`.
    adj_start: Vec<u32>,

    /// Flattened neighbor lists, sorted by `RegionId` within each row.
    adj: Vec<RegionId>,

    /// Reverse lookup: region key → dense ID.
    key_to_id: FxHashMap<String, RegionId>,
}

impl RegionGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn region_count(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn contains(&self, region: RegionId) -> bool {
        region.index() < self.keys.len()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Neighbors of `region`, sorted by ID.
    pub fn neighbors(&self, region: RegionId) -> WorldResult<&[RegionId]> {
        if !self.contains(region) {
            return Err(WorldError::RegionNotFound(region));
        }
        Ok(self.adjacent(region))
    }

    /// Terrain type of `region`.
    pub fn region_type(&self, region: RegionId) -> WorldResult<RegionType> {
        self.types
            .get(region.index())
            .copied()
            .ok_or(WorldError::RegionNotFound(region))
    }

    /// Configured key of `region`.
    pub fn key(&self, region: RegionId) -> WorldResult<&str> {
        self.keys
            .get(region.index())
            .map(String::as_str)
            .ok_or(WorldError::RegionNotFound(region))
    }

    /// Resolve a configured region key to its dense ID.
    pub fn resolve(&self, key: &str) -> WorldResult<RegionId> {
        self.key_to_id
            .get(key)
            .copied()
            .ok_or_else(|| WorldError::UnknownRegionKey(key.to_owned()))
    }

    /// Unchecked neighbor slice — `region` must be a valid ID from this
    /// graph (the pathfinder only visits IDs it obtained here).
    #[inline]
    pub(crate) fn adjacent(&self, region: RegionId) -> &[RegionId] {
        let start = self.adj_start[region.index()] as usize;
        let end = self.adj_start[region.index() + 1] as usize;
        &self.adj[start..end]
    }
}

// ── RegionGraphBuilder ────────────────────────────────────────────────────────

/// Construct a [`RegionGraph`] incrementally, then call [`build`](Self::build).
///
/// Regions and connections may be added in any order.  `build()` sorts and
/// deduplicates each neighbor list and assembles the CSR arrays.
///
/// # Example
///
/// ```
/// use rp_core::RegionType;
/// use rp_world::RegionGraphBuilder;
///
/// let mut b = RegionGraphBuilder::new();
/// let bree = b.add_region("bree", RegionType::Land);
/// let weather = b.add_region("weathertop", RegionType::Hill);
/// b.connect(bree, weather);
/// let graph = b.build();
/// assert_eq!(graph.neighbors(bree).unwrap(), &[weather]);
/// ```
pub struct RegionGraphBuilder {
    keys: Vec<String>,
    types: Vec<RegionType>,
    raw_edges: Vec<(RegionId, RegionId)>,
    key_to_id: FxHashMap<String, RegionId>,
}

impl RegionGraphBuilder {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            types: Vec::new(),
            raw_edges: Vec::new(),
            key_to_id: FxHashMap::default(),
        }
    }

    /// Pre-allocate for the expected number of regions.
    pub fn with_capacity(regions: usize) -> Self {
        Self {
            keys: Vec::with_capacity(regions),
            types: Vec::with_capacity(regions),
            raw_edges: Vec::new(),
            key_to_id: FxHashMap::default(),
        }
    }

    /// Add a region and return its dense ID (sequential from 0).
    ///
    /// Keys must be unique; a duplicate key returns the existing ID without
    /// changing its terrain (the loader reports duplicates as parse errors
    /// before getting here).
    pub fn add_region(&mut self, key: &str, terrain: RegionType) -> RegionId {
        if let Some(&id) = self.key_to_id.get(key) {
            debug_assert_eq!(self.types[id.index()], terrain, "duplicate key {key:?}");
            return id;
        }
        let id = RegionId::from_index(self.keys.len());
        self.keys.push(key.to_owned());
        self.types.push(terrain);
        self.key_to_id.insert(key.to_owned(), id);
        id
    }

    /// Look up a previously added key.
    pub fn lookup(&self, key: &str) -> Option<RegionId> {
        self.key_to_id.get(key).copied()
    }

    /// Connect `a` and `b` as neighbors — adjacency is symmetric.
    ///
    /// Self-loops are not part of the model and are silently ignored (the
    /// loader rejects them earlier with a parse error).
    pub fn connect(&mut self, a: RegionId, b: RegionId) {
        if a == b {
            return;
        }
        self.raw_edges.push((a, b));
        self.raw_edges.push((b, a));
    }

    pub fn region_count(&self) -> usize {
        self.keys.len()
    }

    /// Consume the builder and produce a [`RegionGraph`].
    ///
    /// Time complexity: O(E log E) for the edge sort, E = 2 × connections.
    pub fn build(self) -> RegionGraph {
        let region_count = self.keys.len();

        // Sort by (source, target) and dedupe so each neighbor list is a
        // sorted, unique run — CSR rows come out deterministic.
        let mut raw = self.raw_edges;
        raw.sort_unstable();
        raw.dedup();

        let mut adj_start = vec![0u32; region_count + 1];
        for &(from, _) in &raw {
            adj_start[from.index() + 1] += 1;
        }
        for i in 1..=region_count {
            adj_start[i] += adj_start[i - 1];
        }
        let adj: Vec<RegionId> = raw.iter().map(|&(_, to)| to).collect();
        debug_assert_eq!(adj_start[region_count] as usize, adj.len());

        RegionGraph {
            keys: self.keys,
            types: self.types,
            adj_start,
            adj,
            key_to_id: self.key_to_id,
        }
    }
}

impl Default for RegionGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
