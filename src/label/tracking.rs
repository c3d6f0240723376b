// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Keeping external labels attached to a reshaped connection.
//!
//! When the user drags a bendpoint or a segment, the host hands us the route
//! before and after the change plus a `ReshapeHints` value saying what kind
//! of change it was. We find the segment the label was closest to, work out
//! which segment of the new route that one became, and return how far the
//! label has to move to keep the same perpendicular relation to it.
//!
//! Nothing here mutates the model. The result is a delta the caller applies
//! through its modeling facade. When the new segment cannot be determined
//! the delta is zero: a label that stays put is better than one that jumps
//! to an unrelated part of the diagram.

use crate::geometry::{distance_point_to_line, is_degenerate, perpendicular_foot};
use crate::model::{Label, ReshapeHints, Waypoint, Waypoints};
use kurbo::{Point, Vec2};

// ============================================================================
// SEGMENT LOOKUP
// ============================================================================

/// Index of the segment closest to `point`.
///
/// Distances are measured to the infinite line through each segment. On a
/// tie the lowest index wins. Zero-length segments are never closer than a
/// proper one.
pub fn nearest_segment_index(point: Point, waypoints: &Waypoints) -> usize {
    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;

    for (index, segment) in waypoints.segments().enumerate() {
        let distance = if is_degenerate(segment) {
            f64::INFINITY
        } else {
            distance_point_to_line(point, segment)
        };

        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }

    best_index
}

/// Indices of waypoints in `a` whose reference point appears nowhere in `b`
fn unmatched_indices(a: &[Waypoint], b: &[Waypoint]) -> Vec<usize> {
    a.iter()
        .enumerate()
        .filter(|(_, wp)| {
            let p = wp.reference_point();
            !b.iter().any(|other| other.reference_point() == p)
        })
        .map(|(index, _)| index)
        .collect()
}

/// Last index of the run of consecutive indices starting at `indices[0]`
fn run_end(indices: &[usize]) -> Option<usize> {
    let first = *indices.first()?;
    let len = indices
        .iter()
        .enumerate()
        .take_while(|(i, index)| **index == first + i)
        .count();
    Some(first + len - 1)
}

// ============================================================================
// SEGMENT RESOLUTION
// ============================================================================

/// Work out which segment of `new` the segment `old_index` of `old` became.
///
/// Returns `None` when the reshape does not allow an unambiguous answer; the
/// caller should then leave the label alone.
pub fn resolve_tracked_segment(
    old: &Waypoints,
    new: &Waypoints,
    old_index: usize,
    hints: ReshapeHints,
) -> Option<usize> {
    let offset = new.len() as isize - old.len() as isize;
    let valid = |index: usize| (index < new.segment_count()).then_some(index);
    let shifted = |index: usize| index.checked_add_signed(offset).and_then(valid);

    if let ReshapeHints::SegmentMove {
        segment_start_index,
        new_segment_start_index,
    } = hints
    {
        if old_index == segment_start_index {
            return valid(new_segment_start_index);
        }
        if segment_start_index < old_index {
            return shifted(old_index);
        }
    }

    // label segment unchanged
    if offset == 0 {
        return Some(old_index);
    }

    match hints {
        ReshapeHints::StartChanged if offset.abs() == 1 => {
            return (old_index == 0).then_some(0);
        }
        ReshapeHints::EndChanged if offset.abs() == 1 => {
            return (old_index == old.segment_count() - 1).then(|| new.segment_count() - 1);
        }
        ReshapeHints::StartChanged | ReshapeHints::EndChanged => return None,
        ReshapeHints::None | ReshapeHints::SegmentMove { .. } => {}
    }

    if offset < 0 {
        // Waypoints removed: the segments touching the removed point join
        // into one. Several removals collapse their whole run, a single one
        // only its two neighbouring segments.
        let removed = unmatched_indices(old, new);
        let first = *removed.first()?;
        let joined = first.checked_sub(1)?;
        let last = if offset < -1 { run_end(&removed)? } else { first };

        if (joined..=last).contains(&old_index) {
            return valid(joined);
        }
    } else {
        // Waypoints inserted: the split segment keeps its start index
        let inserted = unmatched_indices(new, old);
        let first = *inserted.first()?;
        let split = first.checked_sub(1)?;

        if old_index == split {
            return valid(split);
        }
    }

    None
}

// ============================================================================
// LABEL DELTAS
// ============================================================================

/// Translation that keeps `label` in the same relation to its segment after
/// the route changed from `old` to `new`.
///
/// The label's segment is the one nearest to its mid. The returned vector
/// moves the perpendicular foot of the label mid on the old segment to its
/// foot on the tracked new segment. Zero when the segment cannot be tracked.
pub fn label_reanchor_delta(
    label: &Label,
    new: &Waypoints,
    old: &Waypoints,
    hints: ReshapeHints,
) -> Vec2 {
    let anchor = label.mid();
    let old_index = nearest_segment_index(anchor, old);

    let Some(new_index) = resolve_tracked_segment(old, new, old_index, hints) else {
        tracing::debug!(
            "label {}: segment {} not trackable, keeping position",
            label.id.get(),
            old_index
        );
        return Vec2::ZERO;
    };

    tracing::debug!(
        "label {}: tracking segment {} -> {}",
        label.id.get(),
        old_index,
        new_index
    );

    let (Some(old_line), Some(new_line)) = (
        old.reference_segment(old_index),
        new.reference_segment(new_index),
    ) else {
        return Vec2::ZERO;
    };

    if is_degenerate(old_line) || is_degenerate(new_line) {
        return Vec2::ZERO;
    }

    let old_foot = perpendicular_foot(anchor, old_line);
    let new_foot = perpendicular_foot(anchor, new_line);
    new_foot - old_foot
}

/// Translation for a label whose segment was dragged as a whole.
///
/// Only applies to `ReshapeHints::SegmentMove`: if the label sits on the
/// moved segment it follows the segment's start point. Any other label, or
/// any other kind of reshape, yields zero.
pub fn segment_move_delta(
    label: &Label,
    new: &Waypoints,
    old: &Waypoints,
    hints: ReshapeHints,
) -> Vec2 {
    let ReshapeHints::SegmentMove {
        segment_start_index,
        new_segment_start_index,
    } = hints
    else {
        return Vec2::ZERO;
    };

    let old_index = nearest_segment_index(label.mid(), old);
    if old_index != segment_start_index {
        return Vec2::ZERO;
    }

    match (old.get(segment_start_index), new.get(new_segment_start_index)) {
        (Some(old_start), Some(new_start)) => {
            new_start.reference_point() - old_start.reference_point()
        }
        _ => Vec2::ZERO,
    }
}
