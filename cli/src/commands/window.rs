use std::io::{BufRead, Write};

use kitbag_core::queue::FloatQueue;

use crate::error::CliError;

/// Stream numbers from `input`, one per line, writing
/// `value<TAB>window_sum<TAB>window_len` for each. Blank lines are skipped.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W, capacity: usize) -> Result<(), CliError> {
    let mut q = FloatQueue::additive(capacity, 0.0, Vec::new())?;
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let value: f64 = text.parse().map_err(|e| CliError::Input {
            line: idx + 1,
            message: format!("{text:?}: {e}"),
        })?;
        q.enqueue(value);
        writeln!(out, "{}\t{}\t{}", value, q.sum(), q.len())?;
    }
    tracing::debug!(
        target: "kitbag.cli",
        stage = "window.done",
        capacity = capacity,
        len = q.len(),
        sum = *q.sum()
    );
    out.flush()?;
    Ok(())
}
