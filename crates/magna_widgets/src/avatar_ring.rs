//! Hero avatar ring
//!
//! Member avatars orbit the hero badge on two concentric rings. The inner
//! ring fills first; overflow spills to the outer ring, whose 30 degree
//! offset interleaves it with the inner one. Each avatar is counter-rotated
//! so its initials stay upright.

use magna_core::{angle_for, OrbitPlacement, RING_ONE_OFFSET_DEG, RING_TWO_OFFSET_DEG};
use smallvec::SmallVec;

/// Members on the inner ring before spilling to the outer one
pub const INNER_RING_CAPACITY: usize = 6;

/// Inner ring radius in px
pub const INNER_RING_RADIUS: f32 = 96.0;

/// Outer ring radius in px
pub const OUTER_RING_RADIUS: f32 = 148.0;

/// One avatar's place on the ring
#[derive(Clone, Debug, PartialEq)]
pub struct AvatarSlot {
    pub initials: String,
    pub placement: OrbitPlacement,
    /// 1 for the inner ring, 2 for the outer
    pub ring: u8,
}

/// Static orbit layout for a fixed member list.
///
/// The assignment is immutable once the member list is fixed; a changed
/// list means a new layout.
pub struct AvatarRing {
    slots: Vec<AvatarSlot>,
}

impl AvatarRing {
    /// Lay out `members` across the two rings. An empty list short-circuits
    /// to an empty layout.
    pub fn layout(members: &[&str]) -> Self {
        let inner_count = members.len().min(INNER_RING_CAPACITY);
        let outer_count = members.len() - inner_count;

        let mut slots = Vec::with_capacity(members.len());
        for (i, name) in members.iter().enumerate() {
            let (ring, index, count, radius, offset) = if i < inner_count {
                (1, i, inner_count, INNER_RING_RADIUS, RING_ONE_OFFSET_DEG)
            } else {
                (
                    2,
                    i - inner_count,
                    outer_count,
                    OUTER_RING_RADIUS,
                    RING_TWO_OFFSET_DEG,
                )
            };
            let angle_deg = angle_for(index, count, offset);
            slots.push(AvatarSlot {
                initials: initials_for(name),
                placement: OrbitPlacement {
                    angle_deg,
                    counter_rotation_deg: -angle_deg,
                    radius,
                },
                ring,
            });
        }
        Self { slots }
    }

    pub fn slots(&self) -> &[AvatarSlot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn inner_ring(&self) -> impl Iterator<Item = &AvatarSlot> {
        self.slots.iter().filter(|s| s.ring == 1)
    }

    pub fn outer_ring(&self) -> impl Iterator<Item = &AvatarSlot> {
        self.slots.iter().filter(|s| s.ring == 2)
    }
}

/// Uppercased first letters of the first two words of a display name
fn initials_for(name: &str) -> String {
    let letters: SmallVec<[char; 2]> = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect();
    letters.iter().flat_map(|c| c.to_uppercase()).collect()
}
