//! campaign — smallest end-to-end walkthrough of the movement engine.
//!
//! Loads a seven-region map from an embedded CSV, sends a character and an
//! army on journeys, and prints derived positions at a few instants.  There
//! is no tick loop anywhere: every "where are they now?" answer below is
//! computed from the stored path and timestamps alone.

use std::io::Cursor;

use anyhow::Result;

use rp_core::{ArmyId, CharacterId, Mover, Timestamp, TravelDuration};
use rp_movement::{MovementCoordinator, MovementReport, Position};
use rp_world::{DijkstraPathFinder, RegionGraph, load_graph_reader};

// ── Map ───────────────────────────────────────────────────────────────────────

// A thin slice of a campaign map: lowlands route and a mountain shortcut.
const TOPOLOGY_CSV: &str = "\
region,terrain,neighbors
shire,land,bree
bree,land,shire;weathertop;caradhras
weathertop,hill,bree;rivendell
rivendell,land,weathertop;caradhras
caradhras,mountain,bree;rivendell
anduin,water,rivendell;dale
dale,land,anduin
";

// ── Reporting ─────────────────────────────────────────────────────────────────

fn print_report(graph: &RegionGraph, label: &str, report: &MovementReport) -> Result<()> {
    let where_now = match report.position {
        Position::Resting(r) => format!("resting in {}", graph.key(r)?),
        Position::Between { last, next } => {
            format!("on the road, past {} heading {}", graph.key(last)?, graph.key(next)?)
        }
    };
    println!(
        "  {label}: {where_now} — moved {}, {} to go{}",
        report.moved,
        report.remaining,
        if report.complete { " (arrived)" } else { "" },
    );
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let graph = load_graph_reader(Cursor::new(TOPOLOGY_CSV))?;
    println!("loaded {} regions", graph.region_count());

    let shire = graph.resolve("shire")?;
    let rivendell = graph.resolve("rivendell")?;
    let dale = graph.resolve("dale")?;

    let strider = Mover::Character(CharacterId(1));
    let host = Mover::Army(ArmyId(1));

    let mut coord = MovementCoordinator::new(DijkstraPathFinder);
    coord.place(strider, shire)?;
    coord.place(host, shire)?;

    let departure = Timestamp::now();

    // ── A character rides for Rivendell ───────────────────────────────────
    let ride = coord.start_movement(&graph, strider, rivendell, departure)?;
    let ride_id = ride.id;
    println!(
        "\nstrider rides shire → rivendell, {} total",
        ride.total_duration()
    );
    for hours in [0u64, 5, 11, 24] {
        let now = departure + TravelDuration::from_hours(hours);
        let report = coord.describe(ride_id, now)?;
        print_report(&graph, &format!("after {hours:2} h"), &report)?;
        if report.complete && coord.active_movement(strider).is_some() {
            coord.complete_movement(strider, now)?;
        }
    }

    // ── An army marches for Dale, is approved, then turns back ────────────
    let march = coord.start_movement(&graph, host, dale, departure)?;
    let march_id = march.id;
    println!(
        "\nthe host marches shire → dale, {} once accepted",
        march.total_duration()
    );

    let accepted = departure + TravelDuration::from_hours(2);
    coord.accept_movement(host, accepted)?;

    let recall = accepted + TravelDuration::from_hours(40);
    let report = coord.describe(march_id, recall)?;
    print_report(&graph, "at the recall", &report)?;

    coord.cancel_movement(host, recall)?;
    let resting = coord.current_region(host)?;
    println!("  recalled: the host halts in {}", graph.key(resting)?);

    Ok(())
}
