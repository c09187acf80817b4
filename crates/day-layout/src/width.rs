//! Width resolution: how many columns a collision group needs, and one shared
//! column width for every event in the group.
//!
//! The column count is a two-hop clique estimate taken from each event's
//! immediate neighbourhood. It is deliberately not an exact maximum-clique
//! search: chains of pairwise-but-not-mutual overlaps keep the smaller ratio.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::collision::collides_from;
use crate::event::{LayoutState, TimeSpan};

/// Estimate the largest group of mutually-overlapping events touching `index`.
///
/// For every neighbour `e`, count the *other* neighbours that `e` collides with
/// under [`collides_from`], with `e` as the first argument; the best count plus 2
/// (for `e` and the event itself) is the estimate. An isolated event needs a
/// single column, so the floor is 1.
///
/// The directed rule skips a later-starting `e` that outlasts its partner, so
/// this can come out below the count of symmetric overlaps.
pub fn longest_adjacent_events(
    spans: &[TimeSpan],
    states: &[LayoutState],
    index: usize,
) -> usize {
    let neighbours = &states[index].collided_with;

    neighbours
        .iter()
        .map(|&e| {
            neighbours
                .iter()
                .filter(|&&other| other != e && collides_from(&spans[e], &spans[other]))
                .count()
                + 2
        })
        .fold(1, usize::max)
}

/// Assign every event `track_width / ratio`, then make each collision group
/// share the narrowest width computed for any of its members.
///
/// Events are visited in slice order; after each visit the event's whole
/// connected component holds a single width.
pub fn resolve_widths(spans: &[TimeSpan], states: &mut [LayoutState], track_width: f64) {
    for index in 0..states.len() {
        let ratio = longest_adjacent_events(spans, states, index);
        let candidate = track_width / ratio as f64;
        let width = equalize_widths(states, index, candidate);
        trace!(index, ratio, candidate, width, "width resolved");
    }

    debug!(events = states.len(), track_width, "width resolution complete");
}

/// Converge the connected component containing `origin` to one width.
///
/// The surviving width is the minimum of `width` and every width already set in
/// the component; unset members take it too. Traversal is an explicit
/// breadth-first worklist over the adjacency lists, so depth is bounded by the
/// heap rather than the call stack. Returns the width the component settled on.
pub fn equalize_widths(states: &mut [LayoutState], origin: usize, width: f64) -> f64 {
    let mut visited = vec![false; states.len()];
    let mut component = Vec::new();
    let mut queue = VecDeque::from([origin]);
    visited[origin] = true;

    let mut target = width;
    while let Some(index) = queue.pop_front() {
        component.push(index);
        if let Some(existing) = states[index].width {
            target = target.min(existing);
        }
        for &next in &states[index].collided_with {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    for index in component {
        states[index].width = Some(target);
    }

    target
}
