//! `rp-world` — region graph, topology loading, and pathfinding.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`graph`]      | `RegionGraph` (CSR adjacency), `RegionGraphBuilder`       |
//! | [`loader`]     | CSV topology loading (`load_graph_csv`)                   |
//! | [`pathfinder`] | `PathFinder` trait, `Path`, `SpeedProfile`, Dijkstra      |
//! | [`error`]      | `WorldError`, `WorldResult<T>`                            |
//!
//! The graph is configuration: loaded once at startup, immutable afterwards,
//! and freely shared by reference across concurrent operations.

pub mod error;
pub mod graph;
pub mod loader;
pub mod pathfinder;

#[cfg(test)]
mod tests;

pub use error::{WorldError, WorldResult};
pub use graph::{RegionGraph, RegionGraphBuilder};
pub use loader::{load_graph_csv, load_graph_reader};
pub use pathfinder::{DijkstraPathFinder, Path, PathElement, PathFinder, SpeedProfile};
