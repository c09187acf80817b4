//! Detect overlapping events on a single day.
//!
//! Performs pairwise comparison of every event against every other and records
//! the resulting collision graph in the layout state.
//! Adjacent events (where one ends exactly when another starts) do NOT collide.

use tracing::{debug, trace};

use crate::event::{LayoutState, TimeSpan};

/// Whether two spans share at least one instant.
///
/// With `a` as the earlier-starting span, they collide when `a` runs into `b`'s
/// start, when `a` ends strictly inside `b`, or when both are the same interval.
/// Touching endpoints (`a.end == b.start`) are not a collision.
pub fn collides(a: &TimeSpan, b: &TimeSpan) -> bool {
    if a.start <= b.start {
        collides_from(a, b)
    } else {
        collides_from(b, a)
    }
}

/// The collision rule evaluated with `a` as given, without reordering the pair.
///
/// Agrees with [`collides`] whenever `a` starts no later than `b`. When `a`
/// starts later, only an `a` that ends strictly inside `b` counts.
pub fn collides_from(a: &TimeSpan, b: &TimeSpan) -> bool {
    let runs_into = a.start <= b.start && a.end > b.start;
    let ends_inside = a.end > b.start && a.end < b.end;
    let identical = a.start == b.start && a.end == b.end;

    runs_into || ends_inside || identical
}

/// Build the collision graph for `spans` into `states` (indexed identically).
///
/// Every unordered pair is compared once. Each colliding pair is added to both
/// adjacency lists and bumps both collision counts, so the relation is symmetric
/// and adjacency lists come out in ascending index order.
pub fn detect_collisions(spans: &[TimeSpan], states: &mut [LayoutState]) {
    debug_assert_eq!(spans.len(), states.len());

    let mut pairs = 0usize;
    for i in 0..spans.len() {
        for j in (i + 1)..spans.len() {
            if collides(&spans[i], &spans[j]) {
                trace!(a = i, b = j, "collision");
                states[i].collided_with.push(j);
                states[i].collision_count += 1;
                states[j].collided_with.push(i);
                states[j].collision_count += 1;
                pairs += 1;
            }
        }
    }

    debug!(events = spans.len(), pairs, "collision detection complete");
}

