//! Perimeter tracing
//!
//! Maps a normalized progress value to a point on a rectangle's border and
//! computes the partial border-segment lengths behind the draw/erase outline
//! effect. Edges are walked in a fixed rotational order: top (left to
//! right), right (top to bottom), bottom (right to left), left (bottom to
//! top).
//!
//! Exact-boundary ties are assigned by `<=` comparisons, so the earlier edge
//! in the walk order owns its far corner (top wins the top-right corner over
//! right, and so on). This matches the shipped animation frame-for-frame;
//! do not re-derive a different split.

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// Which half of a draw/erase cycle a trace is in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TracePhase {
    /// The outline grows edge by edge until fully drawn
    Draw,
    /// The outline shrinks in the same edge order until fully erased
    Erase,
}

/// Revealed length of each border edge, bounded by the edge's full length
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderLengths {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl BorderLengths {
    /// Total revealed length across all four edges
    pub fn total(&self) -> f32 {
        self.top + self.right + self.bottom + self.left
    }
}

/// Point on the rectangle border at `progress` in `[0, 1)` of one traversal.
///
/// Degenerate rectangles (zero perimeter) return the origin rather than
/// dividing by zero.
pub fn position_at(progress: f32, width: f32, height: f32) -> Point {
    let perimeter = 2.0 * (width + height);
    if perimeter <= 0.0 {
        return Point::ZERO;
    }

    let distance = progress * perimeter;
    if distance <= width {
        // Top edge, left to right
        Point::new(distance, 0.0)
    } else if distance <= width + height {
        // Right edge, top to bottom
        Point::new(width, distance - width)
    } else if distance <= 2.0 * width + height {
        // Bottom edge, right to left
        Point::new(2.0 * width + height - distance, height)
    } else {
        // Left edge, bottom to top
        Point::new(0.0, 2.0 * (width + height) - distance)
    }
}

/// Border-segment lengths at `step_in_cycle` of a draw or erase phase.
///
/// In [`TracePhase::Draw`] each edge's revealed length grows from 0 to its
/// full length in sequence (top fully drawn before right starts, and so on).
/// In [`TracePhase::Erase`] the same sequence shrinks each edge from full to
/// 0, so the outline appears to erase itself clockwise from where drawing
/// began.
pub fn border_lengths(
    step_in_cycle: u32,
    steps_per_phase: u32,
    width: f32,
    height: f32,
    phase: TracePhase,
) -> BorderLengths {
    let perimeter = 2.0 * (width + height);
    if perimeter <= 0.0 {
        return BorderLengths::default();
    }

    let fraction = if steps_per_phase == 0 {
        1.0
    } else {
        (step_in_cycle as f32 / steps_per_phase as f32).clamp(0.0, 1.0)
    };
    let swept = sequential_fill(fraction * perimeter, width, height);

    match phase {
        TracePhase::Draw => swept,
        TracePhase::Erase => BorderLengths {
            top: width - swept.top,
            right: height - swept.right,
            bottom: width - swept.bottom,
            left: height - swept.left,
        },
    }
}

/// Distributes `amount` of outline across the edges in walk order
fn sequential_fill(amount: f32, width: f32, height: f32) -> BorderLengths {
    let mut remaining = amount;
    let mut take = |edge: f32| {
        let taken = remaining.min(edge).max(0.0);
        remaining -= taken;
        taken
    };
    BorderLengths {
        top: take(width),
        right: take(height),
        bottom: take(width),
        left: take(height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 300.0;
    const H: f32 = 100.0;

    fn on_boundary(p: Point, w: f32, h: f32) -> bool {
        let eps = 1e-3;
        let on_x = p.x >= -eps && p.x <= w + eps;
        let on_y = p.y >= -eps && p.y <= h + eps;
        on_x && on_y && (p.x.abs() < eps || (p.x - w).abs() < eps || p.y.abs() < eps || (p.y - h).abs() < eps)
    }

    #[test]
    fn test_starts_at_origin() {
        assert_eq!(position_at(0.0, W, H), Point::ZERO);
    }

    #[test]
    fn test_approaches_origin_from_left_edge() {
        let p = position_at(0.9999, W, H);
        assert!(p.x.abs() < 1e-3);
        assert!(p.y < 0.2);
    }

    #[test]
    fn test_boundary_tie_is_left_biased() {
        // 300x100 at progress 0.5: distance is exactly width + height, which
        // the right edge owns. The traced point is the bottom-right corner.
        let p = position_at(0.5, W, H);
        assert_eq!(p, Point::new(300.0, 100.0));

        // Top edge owns the top-right corner
        let p = position_at(W / (2.0 * (W + H)), W, H);
        assert_eq!(p, Point::new(300.0, 0.0));
    }

    #[test]
    fn test_each_edge() {
        // perimeter = 800; quarter points land mid-edge
        assert_eq!(position_at(150.0 / 800.0, W, H), Point::new(150.0, 0.0));
        assert_eq!(position_at(350.0 / 800.0, W, H), Point::new(300.0, 50.0));
        assert_eq!(position_at(550.0 / 800.0, W, H), Point::new(150.0, 100.0));
        assert_eq!(position_at(750.0 / 800.0, W, H), Point::new(0.0, 50.0));
    }

    #[test]
    fn test_continuity_sweep() {
        // Consecutive samples stay on the boundary and move by at most a
        // little more than one step's worth of arc length.
        let steps = 4000;
        let max_gap = 800.0 / steps as f32 * 1.5;
        let mut prev = position_at(0.0, W, H);
        for i in 1..steps {
            let p = position_at(i as f32 / steps as f32, W, H);
            assert!(on_boundary(p, W, H), "left boundary at step {i}: {p:?}");
            assert!(prev.distance(&p) <= max_gap, "jump at step {i}");
            prev = p;
        }
    }

    #[test]
    fn test_degenerate_sizes() {
        assert_eq!(position_at(0.5, 0.0, 0.0), Point::ZERO);
        let p = position_at(0.25, 0.0, 100.0);
        assert!(p.x.is_finite() && p.y.is_finite());
        let b = border_lengths(5, 10, 0.0, 0.0, TracePhase::Draw);
        assert_eq!(b, BorderLengths::default());
    }

    #[test]
    fn test_draw_is_sequential() {
        // Half the perimeter drawn: top (300) fully, right (100) fully, then
        // nothing of bottom or left.
        let b = border_lengths(5, 10, W, H, TracePhase::Draw);
        assert_eq!(b.top, 300.0);
        assert_eq!(b.right, 100.0);
        assert_eq!(b.bottom, 0.0);
        assert_eq!(b.left, 0.0);

        // A quarter drawn only reaches partway down... along the top
        let b = border_lengths(1, 4, W, H, TracePhase::Draw);
        assert_eq!(b.top, 200.0);
        assert_eq!(b.right, 0.0);
    }

    #[test]
    fn test_erase_shrinks_in_same_order() {
        // A quarter erased: 200 of the top gone, everything else still full
        let b = border_lengths(1, 4, W, H, TracePhase::Erase);
        assert_eq!(b.top, 100.0);
        assert_eq!(b.right, 100.0);
        assert_eq!(b.bottom, 300.0);
        assert_eq!(b.left, 100.0);
    }

    #[test]
    fn test_length_conservation() {
        let perimeter = 2.0 * (W + H);
        for step in 0..=20 {
            let frac = step as f32 / 20.0;
            let draw = border_lengths(step, 20, W, H, TracePhase::Draw);
            assert!((draw.total() - frac * perimeter).abs() < 1e-2, "draw step {step}");
            let erase = border_lengths(step, 20, W, H, TracePhase::Erase);
            assert!(
                (erase.total() - (1.0 - frac) * perimeter).abs() < 1e-2,
                "erase step {step}"
            );
        }
    }

    #[test]
    fn test_zero_steps_per_phase() {
        let b = border_lengths(0, 0, W, H, TracePhase::Draw);
        assert_eq!(b.total(), 2.0 * (W + H));
    }
}
