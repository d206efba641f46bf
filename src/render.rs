//! Text presentation of a simulation snapshot.
//!
//! A frame is a header line with the generation counter, the grid itself
//! (`X` for live cells, space for dead ones) and a status line.

use crate::compute::GridStats;
use crate::engine::{RunState, Snapshot};

pub const LIVE_CELL: char = 'X';
pub const DEAD_CELL: char = ' ';

/// Label in front of the generation counter.
pub const COUNTER_LABEL: &str = "Loop count: ";

/// Lines making up one rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub header: String,
    pub rows: Vec<String>,
    pub status: String,
}

impl Frame {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let rows = snapshot
            .grid
            .iter_rows()
            .map(|row| {
                row.iter()
                    .map(|&alive| if alive { LIVE_CELL } else { DEAD_CELL })
                    .collect()
            })
            .collect();

        Self {
            header: snapshot.generation.to_string(),
            rows,
            status: status_line(snapshot),
        }
    }

    /// Whole frame as newline-separated text, label included.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(
            COUNTER_LABEL.len() + self.header.len() + self.status.len() + self.rows.len() * 2,
        );
        out.push_str(COUNTER_LABEL);
        out.push_str(&self.header);
        out.push('\n');
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out.push_str(&self.status);
        out
    }
}

/// One-line summary of the run state and population.
pub fn status_line(snapshot: &Snapshot) -> String {
    let stats = GridStats::from_grid(&snapshot.grid);
    let population = format!("{}/{} alive", stats.live_cells, stats.total_cells);
    match snapshot.state {
        RunState::Stabilized => format!(
            "Stabilized after {} generations ({population})",
            snapshot.generation
        ),
        RunState::Stopped => format!(
            "Stopped at generation {} ({population})",
            snapshot.generation
        ),
        state => format!("{} ({population})", capitalize(state.label())),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a snapshot as plain text.
pub fn render_text(snapshot: &Snapshot) -> String {
    Frame::from_snapshot(snapshot).to_text()
}
