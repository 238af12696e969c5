//! Lazy time-simulation: progress as a pure function of stored data.
//!
//! Nothing here mutates a movement.  Every value is derived from the stored
//! path, the stored `start_time`, and a caller-supplied "now", so reads are
//! deterministic, repeatable, and safe under concurrency.  Because elapsed
//! time is clamped at both ends (never negative, never past the total),
//! `moved + remaining == total` holds exactly at any query time and
//! `complete` is monotonic in `now`.

use rp_core::{RegionId, Timestamp, TravelDuration};
use rp_world::Path;

// ── Progress ──────────────────────────────────────────────────────────────────

/// Derived progress metrics for an activated movement at a given instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// Wall-clock time since activation, clamped ≥ 0 (clock skew defence).
    pub elapsed: TravelDuration,

    /// Sum of all path-element costs.
    pub total: TravelDuration,

    /// `min(elapsed, total)` — travel actually performed.
    pub moved: TravelDuration,

    /// `total - moved`.
    pub remaining: TravelDuration,

    /// Index of the path element currently being traversed; `None` once the
    /// mover has arrived.
    pub segment: Option<usize>,

    /// When the mover reaches the end of the current segment (or reached the
    /// destination, once complete).
    pub reaches_next_region_at: Timestamp,

    /// `reaches_next_region_at - now`, zero once arrived.
    pub until_next_region: TravelDuration,

    /// `elapsed >= total`.
    pub complete: bool,
}

impl Progress {
    /// Evaluate progress for a path activated at `start`, as of `now`.
    ///
    /// O(path length): walks the elements accumulating cost until the
    /// cumulative sum strictly exceeds `elapsed`; that element is the one in
    /// flight.  Landing exactly on a boundary means the region was entered
    /// and the next segment begins.
    pub fn at(path: &Path, start: Timestamp, now: Timestamp) -> Progress {
        let elapsed = now.saturating_since(start);
        let total = path.total_duration();

        if elapsed >= total {
            return Progress {
                elapsed,
                total,
                moved: total,
                remaining: TravelDuration::ZERO,
                segment: None,
                reaches_next_region_at: start + total,
                until_next_region: TravelDuration::ZERO,
                complete: true,
            };
        }

        let mut cumulative = TravelDuration::ZERO;
        let mut segment = 0usize;
        for (i, element) in path.elements().iter().enumerate() {
            cumulative += element.cost;
            if cumulative > elapsed {
                segment = i;
                break;
            }
        }

        Progress {
            elapsed,
            total,
            moved: elapsed,
            remaining: total.saturating_sub(elapsed),
            segment: Some(segment),
            reaches_next_region_at: start + cumulative,
            until_next_region: cumulative.saturating_sub(elapsed),
            complete: false,
        }
    }
}

// ── Snap-back ─────────────────────────────────────────────────────────────────

/// The last region the mover had *fully entered* as of `now`.
///
/// This is what cancellation snaps to: the region before the segment in
/// flight, `origin` if the first segment is still under way, or the
/// destination once the whole path has been covered.  The result is always a
/// region of the original plan — never an invented mid-edge point.
pub fn last_completed_region(
    path: &Path,
    origin: RegionId,
    start: Timestamp,
    now: Timestamp,
) -> RegionId {
    match Progress::at(path, start, now).segment {
        None => path.destination(),
        Some(0) => origin,
        Some(i) => path.elements()[i - 1].region,
    }
}
