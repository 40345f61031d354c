//! Sequential reference results for concurrent runs.
//!
//! A concurrent run is correct when its final state equals the result of
//! applying the same events one at a time in *some* order.

use std::collections::HashSet;

use repo_status::{ProjectEvent, ProjectState, next};

/// Apply `events` in order, starting from `initial`.
pub fn apply_all(initial: ProjectState, events: &[ProjectEvent]) -> ProjectState {
    events.iter().fold(initial, |state, &event| next(state, event))
}

/// Final states reachable by applying every event once, in any order.
///
/// Enumerates all permutations, so keep `events` short (at most 8 or so).
pub fn reachable_finals(initial: ProjectState, events: &[ProjectEvent]) -> HashSet<ProjectState> {
    let mut finals = HashSet::new();
    let mut order = events.to_vec();
    permute(&mut order, 0, &mut |perm| {
        finals.insert(apply_all(initial, perm));
    });
    finals
}

/// Final states reachable when each producer's events keep their relative
/// order but producers interleave arbitrarily.
pub fn interleaved_finals(initial: ProjectState, producers: &[Vec<ProjectEvent>]) -> HashSet<ProjectState> {
    let mut finals = HashSet::new();
    let mut cursors = vec![0; producers.len()];
    interleave(initial, producers, &mut cursors, &mut finals);
    finals
}

fn interleave(
    state: ProjectState,
    producers: &[Vec<ProjectEvent>],
    cursors: &mut [usize],
    finals: &mut HashSet<ProjectState>,
) {
    let mut advanced = false;
    for i in 0..producers.len() {
        if let Some(&event) = producers[i].get(cursors[i]) {
            advanced = true;
            cursors[i] += 1;
            interleave(next(state, event), producers, cursors, finals);
            cursors[i] -= 1;
        }
    }
    if !advanced {
        finals.insert(state);
    }
}

fn permute(items: &mut [ProjectEvent], k: usize, visit: &mut dyn FnMut(&[ProjectEvent])) {
    if k == items.len() {
        visit(items);
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, visit);
        items.swap(k, i);
    }
}
