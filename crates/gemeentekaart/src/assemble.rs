//! Ring assembly - join loose ways into closed rings.
//!
//! Boundary relations arrive as a bag of ways with no guaranteed order or
//! direction. This module stitches them together where endpoints match
//! exactly, reversing ways as needed, until each ring closes.

use crate::geometry::{is_closed, Point, Ring, Segment};

/// Statistics about one assembly run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyStats {
    /// Number of input segments (empty ones excluded)
    pub input_segments: usize,
    /// Number of rings produced
    pub output_rings: usize,
    /// Rings that ran out of matches and were closed by repeating their first point
    pub forced_closures: usize,
}

/// Join segments into closed rings.
///
/// # Algorithm
///
/// 1. Take the first unconsumed segment as the seed of a new ring
/// 2. While the ring is open, scan the remaining segments in order and
///    splice in the first one sharing an endpoint with the ring
/// 3. When nothing matches, close the ring by repeating its first point
/// 4. Repeat until every segment is consumed
///
/// Per candidate the connections are tried in a fixed order: tail-to-head,
/// head-to-tail, tail-to-tail (reversed), head-to-head (reversed). The
/// first hit wins, so output depends on input order.
///
/// # Performance
///
/// O(n²) per ring in the number of segments. Fine for municipality
/// boundaries (tens of ways); any faster index must keep the tie-break order.
pub fn assemble(segments: &[Segment]) -> Vec<Ring> {
    assemble_with_stats(segments).0
}

/// Same as [`assemble`], also reporting what happened.
pub fn assemble_with_stats(segments: &[Segment]) -> (Vec<Ring>, AssemblyStats) {
    let mut pool: Vec<Segment> = segments
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect();

    let mut stats = AssemblyStats {
        input_segments: pool.len(),
        ..AssemblyStats::default()
    };
    let mut rings = Vec::new();

    while !pool.is_empty() {
        let mut ring = pool.remove(0);

        while !is_closed(&ring) {
            let Some((idx, joined)) = find_connection(&ring, &pool) else {
                break;
            };
            pool.remove(idx);
            ring = joined;
        }

        if !is_closed(&ring) {
            let first = ring[0];
            tracing::debug!(
                points = ring.len(),
                x = first.x,
                y = first.y,
                "ring did not close, forcing closure"
            );
            ring.push(first);
            stats.forced_closures += 1;
        }

        rings.push(ring);
    }

    stats.output_rings = rings.len();
    (rings, stats)
}

/// Find the first pool segment that connects to `ring` and return its
/// index together with the extended ring.
fn find_connection(ring: &[Point], pool: &[Segment]) -> Option<(usize, Ring)> {
    let head = *ring.first()?;
    let tail = *ring.last()?;

    for (idx, candidate) in pool.iter().enumerate() {
        let (Some(&c_head), Some(&c_tail)) = (candidate.first(), candidate.last()) else {
            continue;
        };

        let joined = if tail == c_head {
            // ring ... tail | head ... candidate
            join(ring, &candidate[1..])
        } else if head == c_tail {
            // candidate ... tail | head ... ring
            join(&candidate[..candidate.len() - 1], ring)
        } else if tail == c_tail {
            // ring ... tail | tail ... candidate (walked backwards)
            let reversed: Vec<Point> = candidate.iter().rev().copied().collect();
            join(ring, &reversed[1..])
        } else if head == c_head {
            // candidate (walked backwards) ... head | head ... ring
            let reversed: Vec<Point> = candidate.iter().rev().copied().collect();
            join(&reversed[..reversed.len() - 1], ring)
        } else {
            continue;
        };

        return Some((idx, joined));
    }

    None
}

#[inline]
fn join(front: &[Point], back: &[Point]) -> Ring {
    let mut out = Vec::with_capacity(front.len() + back.len());
    out.extend_from_slice(front);
    out.extend_from_slice(back);
    out
}

// ============================================================================
// TESTS
// ============================================================================
