use crate::*;

/// Turn direction of the ordered point triple `(p, q, r)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Colinear,
}

/// Orientation predicate: sign of the cross product of `(p, q, r)`.
pub fn orientation(p: Point2, q: Point2, r: Point2) -> Orientation {
    let [px, py] = p;
    let [qx, qy] = q;
    let [rx, ry] = r;
    let v = (qy - py) * (rx - qx) - (qx - px) * (ry - qy);
    if v > 0.0 {
        Orientation::Clockwise
    } else if v < 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Colinear
    }
}

/// Given `m` colinear with segment `(a, b)`, does `m` lie on the segment?
///
/// A bounding box containment test, only meaningful once colinearity has
/// been established.
pub fn on_segment(a: Point2, m: Point2, b: Point2) -> bool {
    let [lox, loy] = a.min_all(b);
    let [hix, hiy] = a.max_all(b);
    let [mx, my] = m;
    mx >= lox && mx <= hix && my >= loy && my <= hiy
}

/// Do segments `(a1, a2)` and `(b1, b2)` intersect?
///
/// Covers both the general crossing case and colinear overlap/touch.
pub fn segments_intersect(a1: Point2, a2: Point2, b1: Point2, b2: Point2) -> bool {
    use Orientation::Colinear;

    let o1 = orientation(a1, a2, b1);
    let o2 = orientation(a1, a2, b2);
    let o3 = orientation(b1, b2, a1);
    let o4 = orientation(b1, b2, a2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    o1 == Colinear && on_segment(a1, b1, a2)
        || o2 == Colinear && on_segment(a1, b2, a2)
        || o3 == Colinear && on_segment(b1, a1, b2)
        || o4 == Colinear && on_segment(b1, a2, b2)
}

/// Windowed boundary self-intersection check.
///
/// Slides a window of 4 consecutive vertices along the boundary and tests the
/// window's outer edges (two steps apart in traversal order) against each
/// other. A general crossing marks the polygon and scanning continues; a
/// colinear overlap returns immediately.
///
/// This is a heuristic, not a full simple-polygon test: only edge pairs two
/// steps apart are compared and the closing edge is never paired, so crossings
/// between distant edges go unnoticed. Kept for compatibility; use
/// [`self_intersects_all_pairs`] for the exhaustive check.
pub fn self_intersects(polygon: &Polygon2) -> bool {
    use Orientation::Colinear;

    let pts = polygon.pts();
    // in-order traversal of 3 or fewer vertices cannot cross itself
    if pts.len() <= 3 {
        return false;
    }

    let mut crossed = false;
    for w in pts.windows(4) {
        let (a1, a2, b1, b2) = (w[0], w[1], w[2], w[3]);

        let o1 = orientation(a1, a2, b1);
        let o2 = orientation(a1, a2, b2);
        let o3 = orientation(b1, b2, a1);
        let o4 = orientation(b1, b2, a2);

        if o1 != o2 && o3 != o4 {
            crossed = true;
        }

        if o1 == Colinear && on_segment(a1, b1, a2)
            || o2 == Colinear && on_segment(a1, b2, a2)
            || o3 == Colinear && on_segment(b1, a1, b2)
            || o4 == Colinear && on_segment(b1, a2, b2)
        {
            return true;
        }
    }

    crossed
}

/// Exhaustive boundary self-intersection check.
///
/// Tests every pair of non-adjacent edges, closing edge included. O(n²) over
/// the edge count.
pub fn self_intersects_all_pairs(polygon: &Polygon2) -> bool {
    let pts = polygon.pts();
    let n = pts.len();
    if n <= 3 {
        return false;
    }

    let edge = |i: usize| (pts[i], pts[(i + 1) % n]);

    for i in 0..n {
        for j in i + 1..n {
            // edges sharing a vertex always touch, skip them
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            let (a1, a2) = edge(i);
            let (b1, b2) = edge(j);
            if segments_intersect(a1, a2, b1, b2) {
                return true;
            }
        }
    }

    false
}
