//! Named timing checkpoints.
//!
//! Each checkpoint records a label, the source line that recorded it and an
//! instant. The time charged to a checkpoint is the time elapsed since the
//! previous one.

use std::io::{self, Write};
use std::time::{Duration, Instant};

struct Point {
    label: String,
    line: u32,
    at: Instant,
}

/// Time between a checkpoint and the one before it
#[derive(Clone, Debug, PartialEq)]
pub struct Interval {
    pub label: String,
    pub line: u32,
    pub elapsed: Duration,
}

/// Ordered list of checkpoints.
#[derive(Default)]
pub struct CheckPoint {
    points: Vec<Point>,
}

impl CheckPoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a checkpoint. Pass `line!()` as `line`.
    pub fn checkpoint(&mut self, label: impl Into<String>, line: u32) {
        self.points.push(Point {
            label: label.into(),
            line,
            at: Instant::now(),
        });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Intervals in recording order. The first checkpoint has zero elapsed
    /// time.
    pub fn intervals(&self) -> Vec<Interval> {
        let mut prev: Option<Instant> = None;
        self.points
            .iter()
            .map(|p| {
                let elapsed = prev.map(|t| p.at.duration_since(t)).unwrap_or_default();
                prev = Some(p.at);
                Interval {
                    label: p.label.clone(),
                    line: p.line,
                    elapsed,
                }
            })
            .collect()
    }

    /// Elapsed time of the most recent checkpoint.
    pub fn last_elapsed(&self) -> Duration {
        match self.points.as_slice() {
            [.., a, b] => b.at.duration_since(a.at),
            _ => Duration::ZERO,
        }
    }

    /// Time from the first to the last checkpoint.
    pub fn total(&self) -> Duration {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => last.at.duration_since(first.at),
            _ => Duration::ZERO,
        }
    }

    /// Write the checkpoint summary table.
    pub fn checkpoint_print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        crate::utils::tui::write_checkpoint_table(out, &self.intervals(), self.total())
    }
}
