//! Text form of the step-by-step visualization.
//!
//! One column per reference: the status on top, one row per frame slot
//! (`-` when empty), and the referenced page at the bottom.

use crate::{replace::Policy, sim::SimulationResult};

const EMPTY_SLOT: &str = "-";

pub fn render(policy: Policy, outcome: &SimulationResult) -> String {
    let n_frames = outcome.result.first().map_or(0, |s| s.frames.len());

    // rows[0] is the status, rows[1..=n_frames] the slots, the last the page
    let mut rows: Vec<Vec<String>> = vec![Vec::with_capacity(outcome.result.len()); n_frames + 2];
    for step in &outcome.result {
        rows[0].push(step.status.to_string());
        for (slot, frame) in step.frames.iter().enumerate() {
            rows[slot + 1].push(frame.map_or_else(|| EMPTY_SLOT.to_string(), |p| p.to_string()));
        }
        rows[n_frames + 1].push(step.current_page.to_string());
    }
    let width = rows.iter().flatten().map(String::len).max().unwrap_or(0);

    let mut lines = vec![format!("{policy} Algorithm Results:")];
    if !outcome.result.is_empty() {
        lines.extend(rows.iter().map(|row| {
            row.iter()
                .map(|cell| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join(" ")
        }));
    }
    lines.push(format!("Total Page Faults = {}", outcome.page_faults));
    lines.join("\n") + "\n"
}

/// One-line comparison summary of a run.
pub fn summary(policy: Policy, outcome: &SimulationResult) -> String {
    let stats = outcome.stats();
    format!(
        "{policy}: {} page faults, {} hits over {} references (hit rate {:.2}%)",
        stats.misses,
        stats.hits,
        stats.references,
        stats.hit_rate * 100.0
    )
}
