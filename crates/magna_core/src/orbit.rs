//! Orbit layout
//!
//! Angular placement for items evenly spaced around concentric rings, used
//! by the hero avatar orbit. Ring 2 carries a fixed 30 degree offset so its
//! items interleave with ring 1 instead of lining up radially.

use serde::{Deserialize, Serialize};

/// Angular offset of the inner ring
pub const RING_ONE_OFFSET_DEG: f32 = 0.0;

/// Angular offset of the outer ring, interleaving it with ring 1
pub const RING_TWO_OFFSET_DEG: f32 = 30.0;

/// Placement for one orbiting item.
///
/// The caller rotates the item's anchor by `angle_deg`, translates it out to
/// `radius`, then applies `counter_rotation_deg` to the item itself so its
/// content (initials, an avatar) stays upright.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitPlacement {
    pub angle_deg: f32,
    pub counter_rotation_deg: f32,
    pub radius: f32,
}

/// Angle in degrees for item `index` of `count` items on a ring.
///
/// `count == 0` has nothing to place; the offset comes back unchanged so the
/// result is still finite.
pub fn angle_for(index: usize, count: usize, ring_offset_deg: f32) -> f32 {
    if count == 0 {
        return ring_offset_deg;
    }
    (index as f32 / count as f32) * 360.0 + ring_offset_deg
}

/// Placements for `count` items evenly spaced on one ring.
///
/// An empty ring short-circuits to an empty layout.
pub fn ring_placements(count: usize, radius: f32, ring_offset_deg: f32) -> Vec<OrbitPlacement> {
    (0..count)
        .map(|i| {
            let angle_deg = angle_for(i, count, ring_offset_deg);
            OrbitPlacement {
                angle_deg,
                counter_rotation_deg: -angle_deg,
                radius,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_spacing() {
        for count in 1..=12 {
            let expected_gap = 360.0 / count as f32;
            let placements = ring_placements(count, 100.0, 0.0);
            assert_eq!(placements.len(), count);
            for pair in placements.windows(2) {
                let gap = pair[1].angle_deg - pair[0].angle_deg;
                assert!((gap - expected_gap).abs() < 1e-3, "count {count}");
            }
        }
    }

    #[test]
    fn test_angles_strictly_increase_within_turn() {
        let placements = ring_placements(6, 100.0, 0.0);
        for pair in placements.windows(2) {
            assert!(pair[0].angle_deg < pair[1].angle_deg);
        }
        assert!(placements.last().unwrap().angle_deg < 360.0);
    }

    #[test]
    fn test_ring_two_is_ring_one_plus_offset() {
        let inner = ring_placements(6, 96.0, RING_ONE_OFFSET_DEG);
        let outer = ring_placements(6, 148.0, RING_TWO_OFFSET_DEG);
        for (a, b) in inner.iter().zip(&outer) {
            assert!((b.angle_deg - a.angle_deg - RING_TWO_OFFSET_DEG).abs() < 1e-3);
        }
    }

    #[test]
    fn test_counter_rotation_keeps_content_upright() {
        for p in ring_placements(5, 100.0, RING_TWO_OFFSET_DEG) {
            assert_eq!(p.angle_deg + p.counter_rotation_deg, 0.0);
        }
    }

    #[test]
    fn test_empty_ring() {
        assert!(ring_placements(0, 100.0, 0.0).is_empty());
        assert!(angle_for(0, 0, 30.0).is_finite());
    }
}
