//! Unit tests for rp-core.

use crate::{ArmyId, CharacterId, Mover, MoverKind, RegionId, RegionType, TerrainClass};
use crate::{Timestamp, TravelDuration};

// ── IDs ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ids {
    use super::*;

    #[test]
    fn default_is_invalid() {
        assert_eq!(RegionId::default(), RegionId::INVALID);
        assert_eq!(RegionId::INVALID.0, u32::MAX);
    }

    #[test]
    fn index_roundtrip() {
        let id = RegionId::from_index(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id, RegionId(7));
    }

    #[test]
    fn ordering_follows_inner() {
        assert!(RegionId(1) < RegionId(2));
    }
}

// ── Time arithmetic ───────────────────────────────────────────────────────────

#[cfg(test)]
mod time {
    use super::*;

    #[test]
    fn add_duration_to_timestamp() {
        let t = Timestamp(1_000);
        assert_eq!(t + TravelDuration::from_secs(500), Timestamp(1_500));
    }

    #[test]
    fn saturating_since_clamps_clock_skew() {
        let earlier = Timestamp(2_000);
        let later = Timestamp(3_000);
        assert_eq!(later.saturating_since(earlier), TravelDuration(1_000));
        // now < start → elapsed is 0, never negative.
        assert_eq!(earlier.saturating_since(later), TravelDuration::ZERO);
    }

    #[test]
    fn duration_sum_and_sub() {
        let total: TravelDuration = [TravelDuration::from_hours(2), TravelDuration::from_hours(3)]
            .into_iter()
            .sum();
        assert_eq!(total, TravelDuration::from_hours(5));
        assert_eq!(
            total.saturating_sub(TravelDuration::from_hours(7)),
            TravelDuration::ZERO
        );
    }

    #[test]
    fn dhm_breakdown() {
        let d = TravelDuration::from_secs(86_400 + 2 * 3_600 + 5 * 60);
        assert_eq!(d.dhm(), (1, 2, 5));
        assert_eq!(format!("{d}"), "1d 02h 05m");
    }
}

// ── Terrain ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod terrain {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn base_costs_positive() {
        for ty in [
            RegionType::Land,
            RegionType::Hill,
            RegionType::Forest,
            RegionType::Desert,
            RegionType::Swamp,
            RegionType::Water,
            RegionType::Mountain,
            RegionType::Ice,
        ] {
            assert!(!ty.base_cost().is_zero(), "{ty} must have a positive cost");
        }
    }

    #[test]
    fn mountains_slower_than_plains() {
        assert!(RegionType::Mountain.base_cost() > RegionType::Land.base_cost());
    }

    #[test]
    fn class_grouping() {
        assert_eq!(RegionType::Land.class(), TerrainClass::Land);
        assert_eq!(RegionType::Mountain.class(), TerrainClass::Mountain);
        assert_eq!(RegionType::Water.class(), TerrainClass::Water);
    }

    #[test]
    fn parse_roundtrip() {
        for ty in [RegionType::Land, RegionType::Water, RegionType::Ice] {
            assert_eq!(RegionType::from_str(ty.as_str()).unwrap(), ty);
        }
        assert_eq!(RegionType::from_str(" Mountain ").unwrap(), RegionType::Mountain);
        assert!(RegionType::from_str("lava").is_err());
    }
}

// ── Mover ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mover {
    use super::*;

    #[test]
    fn kind_and_discriminator() {
        let c = Mover::Character(CharacterId(1));
        let a = Mover::Army(ArmyId(1));
        assert_eq!(c.kind(), MoverKind::Character);
        assert_eq!(a.kind(), MoverKind::Army);
        assert!(c.is_character());
        assert!(!a.is_character());
        // Same inner id, different kind → different movers.
        assert_ne!(c, a);
    }
}
