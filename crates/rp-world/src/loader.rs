//! CSV topology loader.
//!
//! # CSV format
//!
//! One row per region.  `neighbors` is a `;`-separated list of region keys;
//! an empty list is allowed for isolated regions (they are simply
//! unreachable).
//!
//! ```csv
//! region,terrain,neighbors
//! shire,land,bree
//! bree,land,shire;weathertop
//! weathertop,hill,bree;rivendell
//! rivendell,land,weathertop
//! ```
//!
//! Adjacency is symmetric by definition, so rows normally list each other.
//! A one-sided listing is accepted — the union of both directions is used —
//! but logged as a warning since it usually means a hand-edited file missed
//! a row.
//!
//! All neighbor keys must themselves appear as a `region` row; an unknown
//! key is a hard error rather than an implicitly created region.

use std::io::Read;
use std::path::Path as FsPath;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::warn;

use rp_core::RegionType;

use crate::error::{WorldError, WorldResult};
use crate::graph::{RegionGraph, RegionGraphBuilder};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RegionRecord {
    region: String,
    terrain: String,
    neighbors: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`RegionGraph`] from a CSV file.
pub fn load_graph_csv(path: &FsPath) -> WorldResult<RegionGraph> {
    let file = std::fs::File::open(path).map_err(WorldError::Io)?;
    load_graph_reader(file)
}

/// Like [`load_graph_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from an embedded
/// string at startup.
pub fn load_graph_reader<R: Read>(reader: R) -> WorldResult<RegionGraph> {
    // ── Parse CSV rows ────────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows: Vec<RegionRecord> = Vec::new();

    for result in csv_reader.deserialize::<RegionRecord>() {
        let row = result.map_err(|e| WorldError::Parse(e.to_string()))?;
        rows.push(row);
    }

    // ── First pass: intern all regions ────────────────────────────────────
    let mut builder = RegionGraphBuilder::with_capacity(rows.len());
    for row in &rows {
        let key = row.region.trim();
        if key.is_empty() {
            return Err(WorldError::Parse("empty region key".to_owned()));
        }
        if builder.lookup(key).is_some() {
            return Err(WorldError::Parse(format!("duplicate region key {key:?}")));
        }
        let terrain = RegionType::from_str(&row.terrain).map_err(WorldError::Parse)?;
        builder.add_region(key, terrain);
    }

    // ── Second pass: connect neighbors ────────────────────────────────────
    let mut edges: Vec<(rp_core::RegionId, rp_core::RegionId)> = Vec::new();
    for row in &rows {
        let from = builder
            .lookup(row.region.trim())
            .expect("interned in first pass");
        for key in row.neighbors.split(';') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let to = builder
                .lookup(key)
                .ok_or_else(|| WorldError::UnknownRegionKey(key.to_owned()))?;
            if to == from {
                return Err(WorldError::Parse(format!(
                    "region {key:?} lists itself as a neighbor"
                )));
            }
            edges.push((from, to));
        }
    }

    // Warn about one-sided listings before the symmetric union erases them.
    let listed: FxHashSet<(rp_core::RegionId, rp_core::RegionId)> = edges.iter().copied().collect();
    for &(from, to) in &edges {
        if !listed.contains(&(to, from)) {
            warn!(from = from.0, to = to.0, "one-sided neighbor listing; adjacency unioned");
        }
    }

    for (from, to) in edges {
        builder.connect(from, to);
    }

    Ok(builder.build())
}
