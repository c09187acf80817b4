//! The layout pipeline: normalize, detect collisions, resolve widths, assign slots.

use tracing::debug;

use crate::collision::detect_collisions;
use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::event::{DayEvent, LayoutState, PlacedEvent, Placement, TimeSpan, Timed};
use crate::slot::assign_slots;
use crate::width::{longest_adjacent_events, resolve_widths};

/// Validate, sort by start and hand back fresh layout state for `events`.
///
/// The sort is stable, so events sharing a start keep their input order. The
/// returned spans and states are indexed identically to the sorted slice.
///
/// # Errors
/// Returns `LayoutError::InvalidInterval` for the first event (by input index)
/// whose bounds are non-finite or whose `end` is not after its `start`.
pub fn normalize<E: Timed>(events: &mut [E]) -> Result<(Vec<TimeSpan>, Vec<LayoutState>)> {
    if let Some((index, span)) = events
        .iter()
        .map(Timed::span)
        .enumerate()
        .find(|(_, span)| !span.is_well_formed())
    {
        return Err(LayoutError::InvalidInterval {
            index,
            start: span.start,
            end: span.end,
        });
    }

    events.sort_by(|a, b| a.span().start.total_cmp(&b.span().start));

    let spans: Vec<TimeSpan> = events.iter().map(Timed::span).collect();
    let states = vec![LayoutState::default(); events.len()];
    Ok((spans, states))
}

/// Run the full pipeline and return the raw per-event layout state.
///
/// `events` is sorted in place; the result is indexed identically to it.
pub fn compute_layout_state<E: Timed>(
    events: &mut [E],
    config: &LayoutConfig,
) -> Result<Vec<LayoutState>> {
    if events.is_empty() {
        return Ok(Vec::new());
    }
    config.validate()?;

    let (spans, mut states) = normalize(events)?;
    detect_collisions(&spans, &mut states);
    resolve_widths(&spans, &mut states, config.track_width);
    assign_slots(&mut states)?;

    debug!(events = states.len(), track_width = config.track_width, "layout complete");
    Ok(states)
}

/// Lay out one day's events.
///
/// Sorts `events` in place by start and returns one [`Placement`] per event,
/// indexed identically to the sorted slice. Repeated calls over the same events
/// always rebuild layout state from scratch and give the same answer.
///
/// # Errors
/// - `LayoutError::InvalidTrackWidth` if `config.track_width` is unusable.
/// - `LayoutError::InvalidInterval` if some event has `end <= start`.
/// - `LayoutError::SlotExhaustion` if the collision graph is inconsistent.
pub fn lay_out<E: Timed>(events: &mut [E], config: &LayoutConfig) -> Result<Vec<Placement>> {
    let states = compute_layout_state(events, config)?;

    states
        .iter()
        .enumerate()
        .map(|(index, state)| -> Result<Placement> {
            let slot = state.slot.ok_or(LayoutError::SlotExhaustion {
                index,
                collision_count: state.collision_count,
            })?;
            // Every event is visited by width resolution.
            let width = state.width.unwrap_or(config.track_width);
            Ok(Placement { width, slot })
        })
        .collect()
}

/// Owned variant of [`lay_out`]: consumes the events and returns them, sorted by
/// start, each paired with its placement. Payloads pass through untouched.
pub fn lay_out_day<P>(
    mut events: Vec<DayEvent<P>>,
    config: &LayoutConfig,
) -> Result<Vec<PlacedEvent<P>>> {
    let placements = lay_out(&mut events, config)?;

    Ok(events
        .into_iter()
        .zip(placements)
        .map(|(event, placement)| PlacedEvent {
            event,
            width: placement.width,
            slot: placement.slot,
            geometry: None,
        })
        .collect())
}

/// The largest width ratio any event on the day would ask for.
///
/// Runs normalization and collision detection only. Returns 1 for an empty or
/// collision-free day.
pub fn max_width_ratio<E: Timed>(events: &mut [E]) -> Result<usize> {
    if events.is_empty() {
        return Ok(1);
    }

    let (spans, mut states) = normalize(events)?;
    detect_collisions(&spans, &mut states);

    Ok((0..states.len())
        .map(|index| longest_adjacent_events(&spans, &states, index))
        .fold(1, usize::max))
}
