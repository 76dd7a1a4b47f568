//! Palette curation over a copy of the stored hex sequence: perceptual
//! ordering and near-duplicate pruning.
//!
//! Both passes assume exact duplicates were already rejected when colors
//! were added.

use std::collections::HashSet;

use crate::color::{HexColor, Lab, PaletteColor};
use crate::distance::delta_e;

/// Result of [`prune_similar`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneOutcome {
    /// Surviving colors in their original order.
    pub kept: Vec<HexColor>,
    /// Colors the caller should drop from storage.
    pub removed: HashSet<HexColor>,
}

/// Reorder `colors` by greedy nearest-neighbor chaining on delta-E.
///
/// The chain always starts at `colors[0]`. Each step appends the unvisited
/// color closest to the last appended one; ties go to the earlier input
/// position. This is a heuristic and does not minimize total path length.
pub fn sort_by_perceptual_chain(colors: &[HexColor]) -> Vec<HexColor> {
    if colors.len() < 2 {
        return colors.to_vec();
    }

    let entries: Vec<PaletteColor> = colors.iter().cloned().map(PaletteColor::new).collect();
    let labs: Vec<Lab> = entries.iter().map(|entry| entry.lab).collect();
    let order = chain_order(&labs);

    tracing::debug!(message = "🔀 Sorted palette by delta-E chain", len = order.len());

    order.into_iter().map(|i| entries[i].hex.clone()).collect()
}

/// Visit order of the nearest-neighbor chain over `labs`, starting at 0.
fn chain_order(labs: &[Lab]) -> Vec<usize> {
    let mut visited = vec![false; labs.len()];
    let mut order = Vec::with_capacity(labs.len());
    if labs.is_empty() {
        return order;
    }

    let mut current = 0;
    visited[current] = true;
    order.push(current);

    while order.len() < labs.len() {
        let mut best: Option<(usize, f64)> = None;
        for (i, candidate) in labs.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let dist = delta_e(labs[current], *candidate);
            if best.is_none_or(|(_, min)| dist < min) {
                best = Some((i, dist));
            }
        }
        // Only `None` when every entry is visited, which the loop condition excludes.
        let Some((next, _)) = best else { break };
        visited[next] = true;
        order.push(next);
        current = next;
    }

    order
}

/// Drop later colors within `threshold` delta-E of an earlier survivor.
///
/// Pairs `(i, j)` with `i < j` are compared in input order; when both are
/// still present and `delta_e < threshold`, `j` is removed. Earlier colors
/// always win, so the result depends on input order. Threshold validation is
/// the caller's job (see [`crate::PaletteConfig::effective_threshold`]).
pub fn prune_similar(colors: &[HexColor], threshold: f64) -> PruneOutcome {
    if colors.len() < 2 {
        return PruneOutcome {
            kept: colors.to_vec(),
            removed: HashSet::new(),
        };
    }

    let entries: Vec<PaletteColor> = colors.iter().cloned().map(PaletteColor::new).collect();
    let mut removed_at = vec![false; entries.len()];

    for i in 0..entries.len() {
        if removed_at[i] {
            continue;
        }
        for j in (i + 1)..entries.len() {
            if removed_at[j] {
                continue;
            }
            if delta_e(entries[i].lab, entries[j].lab) < threshold {
                removed_at[j] = true;
            }
        }
    }

    let mut outcome = PruneOutcome::default();
    for (entry, removed) in entries.into_iter().zip(removed_at) {
        if removed {
            outcome.removed.insert(entry.hex);
        } else {
            outcome.kept.push(entry.hex);
        }
    }

    tracing::debug!(
        message = "✂️ Pruned similar colors",
        threshold,
        kept = outcome.kept.len(),
        removed = ?outcome.removed
    );

    outcome
}
