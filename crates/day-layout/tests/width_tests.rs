//! Tests for the column-count estimate and group width equalization.

use day_layout::collision::detect_collisions;
use day_layout::width::{equalize_widths, longest_adjacent_events, resolve_widths};
use day_layout::{max_width_ratio, LayoutState, TimeSpan};

/// Helper: collision graph for `(start, end)` pairs, assumed already sorted by start.
fn graph(spans: &[(f64, f64)]) -> (Vec<TimeSpan>, Vec<LayoutState>) {
    let spans: Vec<TimeSpan> = spans.iter().copied().map(TimeSpan::from).collect();
    let mut states = vec![LayoutState::default(); spans.len()];
    detect_collisions(&spans, &mut states);
    (spans, states)
}

fn ratio(spans: &[(f64, f64)]) -> usize {
    let mut spans = spans.to_vec();
    max_width_ratio(&mut spans).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Column-count estimate
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn isolated_event_needs_one_column() {
    let (spans, states) = graph(&[(30.0, 150.0)]);
    assert_eq!(longest_adjacent_events(&spans, &states, 0), 1);
}

#[test]
fn chain_is_not_a_three_clique() {
    // 540-600 and 610-670 both touch 560-620 but not each other.
    assert_eq!(
        ratio(&[(30.0, 150.0), (540.0, 600.0), (560.0, 620.0), (610.0, 670.0)]),
        2
    );
}

#[test]
fn no_overlaps_gives_ratio_one() {
    assert_eq!(ratio(&[(30.0, 150.0), (540.0, 600.0), (610.0, 670.0)]), 1);
}

#[test]
fn one_extra_collision_gives_ratio_three() {
    assert_eq!(
        ratio(&[
            (30.0, 150.0),
            (520.0, 580.0),
            (540.0, 600.0),
            (560.0, 620.0),
            (610.0, 670.0),
        ]),
        3
    );
}

#[test]
fn identical_events_need_one_column_each() {
    assert_eq!(ratio(&[(30.0, 150.0); 4]), 4);
    assert_eq!(ratio(&[(30.0, 150.0); 3]), 3);
    assert_eq!(ratio(&[(30.0, 150.0); 2]), 2);
}

#[test]
fn first_three_of_chain_gives_ratio_two() {
    assert_eq!(ratio(&[(30.0, 150.0), (540.0, 600.0), (560.0, 620.0)]), 2);
}

#[test]
fn long_event_over_identical_block_gives_ratio_four() {
    assert_eq!(
        ratio(&[
            (30.0, 700.0),
            (50.0, 100.0),
            (50.0, 100.0),
            (50.0, 100.0),
            (100.0, 160.0),
        ]),
        4
    );
}

#[test]
fn estimate_counts_chained_neighbours_not_exact_clique() {
    // The deepest point holds only 3 events (0-100 with either 0-10/5-20 or
    // 5-20/15-30), but seen from 5-20 the neighbour 0-100 runs into both 0-10
    // and 15-30, so the estimate is 4.
    let (spans, states) = graph(&[(0.0, 100.0), (0.0, 10.0), (5.0, 20.0), (15.0, 30.0)]);
    assert_eq!(longest_adjacent_events(&spans, &states, 2), 4);
    assert_eq!(longest_adjacent_events(&spans, &states, 3), 3);
}

#[test]
fn later_neighbour_outlasting_its_partner_is_not_counted() {
    // Seen from 0-100, the neighbour 15-30 starts after 5-20 and ends after
    // it too, so the pair only counts when 5-20 is the neighbour under test.
    let (spans, states) = graph(&[(0.0, 100.0), (0.0, 10.0), (5.0, 20.0), (15.0, 30.0)]);
    assert_eq!(longest_adjacent_events(&spans, &states, 0), 3);
}

#[test]
fn staggered_overlaps_keep_four_columns() {
    // Counting every overlap in 10-18's neighbourhood symmetrically would give
    // 5 columns; the directed count gives 4.
    let day = [
        (0.0, 6.0),
        (1.0, 11.0),
        (10.0, 18.0),
        (10.0, 14.0),
        (12.0, 16.0),
        (13.0, 20.0),
    ];
    let (spans, mut states) = graph(&day);

    let ratios: Vec<usize> = (0..spans.len())
        .map(|index| longest_adjacent_events(&spans, &states, index))
        .collect();
    assert_eq!(ratios, vec![2, 3, 4, 4, 4, 4]);
    assert_eq!(ratio(&day), 4);

    resolve_widths(&spans, &mut states, 600.0);
    assert!(states.iter().all(|s| s.width == Some(150.0)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Width resolution
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn resolve_widths_divides_track_by_ratio() {
    let (spans, mut states) = graph(&[(30.0, 150.0); 4]);
    resolve_widths(&spans, &mut states, 600.0);
    for state in &states {
        assert_eq!(state.width, Some(150.0));
    }
}

#[test]
fn group_takes_narrowest_member_width() {
    // 100-160 alone would ask for 2 columns, but its group needs 4.
    let (spans, mut states) = graph(&[
        (30.0, 700.0),
        (50.0, 100.0),
        (50.0, 100.0),
        (50.0, 100.0),
        (100.0, 160.0),
    ]);
    assert_eq!(longest_adjacent_events(&spans, &states, 4), 2);

    resolve_widths(&spans, &mut states, 600.0);
    for state in &states {
        assert_eq!(state.width, Some(150.0));
    }
}

#[test]
fn narrower_width_late_in_chain_propagates_backwards() {
    // 0-10 alone asks for 2 columns and resolves first; 5-20 then finds a
    // three-way overlap and narrows the whole group, including 0-10.
    let (spans, mut states) = graph(&[(0.0, 10.0), (5.0, 20.0), (15.0, 30.0), (16.0, 25.0)]);
    assert_eq!(longest_adjacent_events(&spans, &states, 0), 2);
    assert_eq!(longest_adjacent_events(&spans, &states, 1), 3);

    resolve_widths(&spans, &mut states, 600.0);
    for state in &states {
        assert_eq!(state.width, Some(200.0));
    }
}

#[test]
fn separate_groups_keep_separate_widths() {
    let (spans, mut states) = graph(&[
        (30.0, 150.0),
        (30.0, 150.0),
        (30.0, 150.0),
        (300.0, 400.0),
        (350.0, 450.0),
        (500.0, 560.0),
    ]);
    resolve_widths(&spans, &mut states, 600.0);

    let widths: Vec<Option<f64>> = states.iter().map(|s| s.width).collect();
    assert_eq!(
        widths,
        vec![
            Some(200.0),
            Some(200.0),
            Some(200.0),
            Some(300.0),
            Some(300.0),
            Some(600.0),
        ]
    );
}

#[test]
fn equalize_keeps_existing_smaller_width() {
    let (_, mut states) = graph(&[(0.0, 10.0), (5.0, 20.0), (15.0, 30.0)]);
    states[2].width = Some(100.0);

    let settled = equalize_widths(&mut states, 0, 300.0);

    assert_eq!(settled, 100.0);
    for state in &states {
        assert_eq!(state.width, Some(100.0));
    }
}

#[test]
fn equalize_lowers_larger_widths() {
    let (_, mut states) = graph(&[(0.0, 10.0), (5.0, 20.0)]);
    states[1].width = Some(600.0);

    let settled = equalize_widths(&mut states, 0, 300.0);

    assert_eq!(settled, 300.0);
    assert_eq!(states[0].width, Some(300.0));
    assert_eq!(states[1].width, Some(300.0));
}

#[test]
fn equalize_handles_long_chains_without_recursion() {
    // 5000 events each overlapping only the next.
    let spans: Vec<(f64, f64)> = (0..5000)
        .map(|i| (i as f64 * 10.0, i as f64 * 10.0 + 15.0))
        .collect();
    let (_, mut states) = graph(&spans);

    let settled = equalize_widths(&mut states, 0, 300.0);

    assert_eq!(settled, 300.0);
    assert!(states.iter().all(|s| s.width == Some(300.0)));
}
