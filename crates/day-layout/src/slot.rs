//! Slot assignment: pack each event into the leftmost column not already taken
//! by an overlapping event placed before it.

use tracing::{debug, trace};

use crate::error::{LayoutError, Result};
use crate::event::LayoutState;

/// First index in `0..=collision_count` not present in `taken`.
///
/// At most `collision_count` neighbours can hold a slot, so one of the
/// `collision_count + 1` candidates is always free when the collision graph is
/// consistent. `None` means it is not.
pub fn find_open_slot(taken: &[usize], collision_count: usize) -> Option<usize> {
    (0..=collision_count).find(|candidate| !taken.contains(candidate))
}

/// Assign slots in slice order (ascending start after normalization).
///
/// Each event sees only neighbours that were placed before it, and is marked
/// placed as soon as its slot is chosen.
///
/// # Errors
/// Returns `LayoutError::SlotExhaustion` if an event has no open slot.
pub fn assign_slots(states: &mut [LayoutState]) -> Result<()> {
    for index in 0..states.len() {
        let taken: Vec<usize> = states[index]
            .collided_with
            .iter()
            .filter(|&&other| states[other].placed)
            .filter_map(|&other| states[other].slot)
            .collect();

        let collision_count = states[index].collision_count;
        let slot = find_open_slot(&taken, collision_count).ok_or(LayoutError::SlotExhaustion {
            index,
            collision_count,
        })?;

        trace!(index, slot, taken = ?taken, "slot assigned");
        let state = &mut states[index];
        state.slot = Some(slot);
        state.placed = true;
    }

    debug!(events = states.len(), "slot assignment complete");
    Ok(())
}
