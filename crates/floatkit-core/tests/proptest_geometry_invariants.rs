//! Property-based invariant tests for geometry primitives (Rect, Size).
//!
//! 1. Right/bottom edges are consistent with x+width, y+height.
//! 2. `from_edges` inverts the edge accessors.
//! 3. Centers lie between the edges.
//! 4. Horizontal mirroring is an involution and preserves size.
//! 5. Contains agrees with the edges.
//! 6. Offset preserves size.

use floatkit_core::geometry::Rect;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn px() -> impl Strategy<Value = f64> {
    (-4000i32..=4000).prop_map(f64::from)
}

fn extent() -> impl Strategy<Value = f64> {
    (0u32..=4000).prop_map(f64::from)
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (px(), px(), extent(), extent()).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Edges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edges_consistent(r in rect_strategy()) {
        prop_assert_eq!(r.right(), r.x + r.width);
        prop_assert_eq!(r.bottom(), r.y + r.height);
        prop_assert_eq!(r.left(), r.x);
        prop_assert_eq!(r.top(), r.y);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. from_edges round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn from_edges_inverts_accessors(r in rect_strategy()) {
        let rebuilt = Rect::from_edges(r.left(), r.top(), r.right(), r.bottom());
        prop_assert_eq!(rebuilt, r);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Centers
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn centers_between_edges(r in rect_strategy()) {
        prop_assert!(r.left() <= r.center_x() && r.center_x() <= r.right());
        prop_assert!(r.top() <= r.center_y() && r.center_y() <= r.bottom());
        prop_assert_eq!(r.center_x() - r.left(), r.right() - r.center_x());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Mirroring
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mirror_is_involution(r in rect_strategy(), w in extent()) {
        let m = r.mirror_x(w);
        prop_assert_eq!(m.size(), r.size());
        prop_assert_eq!(m.mirror_x(w), r);
        prop_assert_eq!(m.left(), w - r.right());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Contains
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contains_matches_edges(r in rect_strategy(), x in px(), y in px()) {
        let inside = x >= r.left() && x < r.right() && y >= r.top() && y < r.bottom();
        prop_assert_eq!(r.contains(x, y), inside);
        if r.is_empty() {
            prop_assert!(!r.contains(x, y));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Offset
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offset_preserves_size(r in rect_strategy(), dx in px(), dy in px()) {
        let moved = r.offset(dx, dy);
        prop_assert_eq!(moved.size(), r.size());
        prop_assert_eq!(moved.left(), r.left() + dx);
    }
}
