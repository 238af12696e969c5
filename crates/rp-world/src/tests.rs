//! Unit tests for rp-world.
//!
//! All tests use hand-built graphs; no topology file is required.

#[cfg(test)]
mod helpers {
    use rp_core::{RegionId, RegionType};

    use crate::{RegionGraph, RegionGraphBuilder};

    /// Linear map `a – b – c`, all land.
    pub fn line_graph() -> (RegionGraph, [RegionId; 3]) {
        let mut b = RegionGraphBuilder::new();
        let a = b.add_region("a", RegionType::Land);
        let m = b.add_region("b", RegionType::Land);
        let c = b.add_region("c", RegionType::Land);
        b.connect(a, m);
        b.connect(m, c);
        (b.build(), [a, m, c])
    }

    /// Diamond with a mountain shortcut:
    ///
    /// ```text
    ///        gap (mountain)
    ///       /              \
    /// vale               dale
    ///       \              /
    ///        ford (land) – mead (land)
    /// ```
    ///
    /// vale→dale via gap: one mountain entry + one land entry.
    /// vale→dale via ford,mead: three land entries.
    /// For a character (factor 1.0 everywhere): gap route = 14h + 6h = 20h,
    /// low route = 6h × 3 = 18h → low route wins.
    pub fn diamond_graph() -> (RegionGraph, [RegionId; 5]) {
        let mut b = RegionGraphBuilder::new();
        let vale = b.add_region("vale", RegionType::Land);
        let gap = b.add_region("gap", RegionType::Mountain);
        let ford = b.add_region("ford", RegionType::Land);
        let mead = b.add_region("mead", RegionType::Land);
        let dale = b.add_region("dale", RegionType::Land);
        b.connect(vale, gap);
        b.connect(gap, dale);
        b.connect(vale, ford);
        b.connect(ford, mead);
        b.connect(mead, dale);
        (b.build(), [vale, gap, ford, mead, dale])
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use rp_core::{RegionId, RegionType};

    use crate::{RegionGraphBuilder, WorldError};

    #[test]
    fn empty_build() {
        let g = RegionGraphBuilder::new().build();
        assert_eq!(g.region_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn neighbors_sorted_and_symmetric() {
        let (g, [a, b, c]) = super::helpers::line_graph();
        assert_eq!(g.neighbors(a).unwrap(), &[b]);
        assert_eq!(g.neighbors(b).unwrap(), &[a, c]);
        assert_eq!(g.neighbors(c).unwrap(), &[b]);
    }

    #[test]
    fn duplicate_connect_deduplicated() {
        let mut b = RegionGraphBuilder::new();
        let x = b.add_region("x", RegionType::Land);
        let y = b.add_region("y", RegionType::Land);
        b.connect(x, y);
        b.connect(y, x); // same undirected edge again
        let g = b.build();
        assert_eq!(g.neighbors(x).unwrap(), &[y]);
        assert_eq!(g.neighbors(y).unwrap(), &[x]);
    }

    #[test]
    fn self_loop_connect_ignored() {
        let mut b = RegionGraphBuilder::new();
        let x = b.add_region("x", RegionType::Land);
        let y = b.add_region("y", RegionType::Land);
        b.connect(x, x); // dropped, not an edge
        b.connect(x, y);
        let g = b.build();
        assert_eq!(g.neighbors(x).unwrap(), &[y]);
    }

    #[test]
    fn key_interning_roundtrip() {
        let (g, [a, ..]) = super::helpers::line_graph();
        assert_eq!(g.resolve("a").unwrap(), a);
        assert_eq!(g.key(a).unwrap(), "a");
        assert!(matches!(
            g.resolve("nowhere"),
            Err(WorldError::UnknownRegionKey(_))
        ));
    }

    #[test]
    fn unknown_region_errors() {
        let (g, _) = super::helpers::line_graph();
        let bogus = RegionId(99);
        assert!(matches!(g.neighbors(bogus), Err(WorldError::RegionNotFound(_))));
        assert!(matches!(g.region_type(bogus), Err(WorldError::RegionNotFound(_))));
        assert!(matches!(g.key(bogus), Err(WorldError::RegionNotFound(_))));
    }

    #[test]
    fn region_type_lookup() {
        let (g, [_, gap, ..]) = super::helpers::diamond_graph();
        assert_eq!(g.region_type(gap).unwrap(), RegionType::Mountain);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use rp_core::RegionType;

    use crate::{WorldError, load_graph_reader};

    const TOPOLOGY_CSV: &str = "\
region,terrain,neighbors
shire,land,bree
bree,land,shire;weathertop
weathertop,hill,bree;rivendell
rivendell,land,weathertop
";

    #[test]
    fn load_small_map() {
        let g = load_graph_reader(Cursor::new(TOPOLOGY_CSV)).unwrap();
        assert_eq!(g.region_count(), 4);

        let bree = g.resolve("bree").unwrap();
        let shire = g.resolve("shire").unwrap();
        let weather = g.resolve("weathertop").unwrap();
        assert_eq!(g.region_type(weather).unwrap(), RegionType::Hill);

        let mut n = g.neighbors(bree).unwrap().to_vec();
        n.sort();
        assert_eq!(n, vec![shire, weather]);
    }

    #[test]
    fn one_sided_listing_unioned() {
        // "east" forgets to list "west" back; adjacency must still be symmetric.
        let csv = "\
region,terrain,neighbors
west,land,east
east,land,
";
        let g = load_graph_reader(Cursor::new(csv)).unwrap();
        let west = g.resolve("west").unwrap();
        let east = g.resolve("east").unwrap();
        assert_eq!(g.neighbors(east).unwrap(), &[west]);
        assert_eq!(g.neighbors(west).unwrap(), &[east]);
    }

    #[test]
    fn unknown_neighbor_is_error() {
        let csv = "\
region,terrain,neighbors
lonely,land,atlantis
";
        let err = load_graph_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, WorldError::UnknownRegionKey(k) if k == "atlantis"));
    }

    #[test]
    fn self_loop_is_error() {
        let csv = "\
region,terrain,neighbors
narcissus,land,narcissus
";
        assert!(matches!(
            load_graph_reader(Cursor::new(csv)),
            Err(WorldError::Parse(_))
        ));
    }

    #[test]
    fn bad_terrain_is_error() {
        let csv = "\
region,terrain,neighbors
x,lava,
";
        assert!(matches!(
            load_graph_reader(Cursor::new(csv)),
            Err(WorldError::Parse(_))
        ));
    }

    #[test]
    fn duplicate_region_is_error() {
        let csv = "\
region,terrain,neighbors
x,land,
x,land,
";
        assert!(matches!(
            load_graph_reader(Cursor::new(csv)),
            Err(WorldError::Parse(_))
        ));
    }
}

// ── Dijkstra pathfinding ──────────────────────────────────────────────────────

#[cfg(test)]
mod pathfinding {
    use rp_core::{RegionId, RegionType};

    use crate::{
        DijkstraPathFinder, PathFinder, RegionGraphBuilder, SpeedProfile, WorldError,
    };

    #[test]
    fn same_region_rejected() {
        let (g, [a, ..]) = super::helpers::line_graph();
        let err = DijkstraPathFinder
            .find_path(&g, a, a, &SpeedProfile::character())
            .unwrap_err();
        assert!(matches!(err, WorldError::SameRegion(r) if r == a));
    }

    #[test]
    fn adjacent_hop() {
        let (g, [a, b, _]) = super::helpers::line_graph();
        let path = DijkstraPathFinder
            .find_path(&g, a, b, &SpeedProfile::character())
            .unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.destination(), b);
        assert_eq!(path.elements()[0].cost, RegionType::Land.base_cost());
    }

    #[test]
    fn path_excludes_start_region() {
        let (g, [a, b, c]) = super::helpers::line_graph();
        let path = DijkstraPathFinder
            .find_path(&g, a, c, &SpeedProfile::character())
            .unwrap();
        let regions: Vec<RegionId> = path.elements().iter().map(|e| e.region).collect();
        assert_eq!(regions, vec![b, c]);
    }

    #[test]
    fn terrain_cost_steers_route() {
        let (g, [vale, _gap, ford, mead, dale]) = super::helpers::diamond_graph();
        let path = DijkstraPathFinder
            .find_path(&g, vale, dale, &SpeedProfile::character())
            .unwrap();
        // Three land entries (18h) beat mountain + land (20h).
        let regions: Vec<RegionId> = path.elements().iter().map(|e| e.region).collect();
        assert_eq!(regions, vec![ford, mead, dale]);
        assert_eq!(
            path.total_duration(),
            rp_core::TravelDuration::from_hours(18)
        );
    }

    #[test]
    fn speed_profile_changes_costs_not_algorithm() {
        let (g, [a, _, c]) = super::helpers::line_graph();
        let walker = DijkstraPathFinder
            .find_path(&g, a, c, &SpeedProfile::character())
            .unwrap();
        let column = DijkstraPathFinder
            .find_path(&g, a, c, &SpeedProfile::army())
            .unwrap();
        // Same route, slower march: army land factor 0.5 doubles every cost.
        assert_eq!(walker.len(), column.len());
        assert_eq!(
            column.total_duration().as_secs(),
            walker.total_duration().as_secs() * 2
        );
    }

    #[test]
    fn deterministic_on_cost_ties() {
        // Two equal-cost routes around a square; repeated queries must pick
        // the same one every time.
        let mut b = RegionGraphBuilder::new();
        let s = b.add_region("s", RegionType::Land);
        let p = b.add_region("p", RegionType::Land);
        let q = b.add_region("q", RegionType::Land);
        let t = b.add_region("t", RegionType::Land);
        b.connect(s, p);
        b.connect(s, q);
        b.connect(p, t);
        b.connect(q, t);
        let g = b.build();

        let first = DijkstraPathFinder
            .find_path(&g, s, t, &SpeedProfile::character())
            .unwrap();
        for _ in 0..10 {
            let again = DijkstraPathFinder
                .find_path(&g, s, t, &SpeedProfile::character())
                .unwrap();
            assert_eq!(again, first);
        }
        // Smallest-ID tie-break goes through p.
        assert_eq!(first.elements()[0].region, p);
    }

    #[test]
    fn unreachable_disconnected_component() {
        let mut b = RegionGraphBuilder::new();
        let here = b.add_region("here", RegionType::Land);
        let there = b.add_region("there", RegionType::Land);
        // No connection at all.
        let g = b.build();
        let err = DijkstraPathFinder
            .find_path(&g, here, there, &SpeedProfile::character())
            .unwrap_err();
        assert!(matches!(err, WorldError::Unreachable { from, to } if from == here && to == there));
    }

    #[test]
    fn unknown_endpoint_errors() {
        let (g, [a, ..]) = super::helpers::line_graph();
        let bogus = RegionId(42);
        assert!(matches!(
            DijkstraPathFinder.find_path(&g, a, bogus, &SpeedProfile::character()),
            Err(WorldError::RegionNotFound(_))
        ));
        assert!(matches!(
            DijkstraPathFinder.find_path(&g, bogus, a, &SpeedProfile::character()),
            Err(WorldError::RegionNotFound(_))
        ));
    }

    #[test]
    fn all_costs_strictly_positive() {
        let (g, [vale, .., dale]) = super::helpers::diamond_graph();
        // Absurdly fast profile still yields ≥ 1 s per element.
        let blur = SpeedProfile {
            land_factor: 1e9,
            mountain_factor: 1e9,
            water_factor: 1e9,
        };
        let path = DijkstraPathFinder.find_path(&g, vale, dale, &blur).unwrap();
        assert!(path.elements().iter().all(|e| e.cost.as_secs() >= 1));
    }
}
