use std::io::{self, Write};

use wordfreq_core::RankedEntry;

/// Consumes a ranked list and renders it; purely presentational.
pub trait ChartSink: Send + Sync {
    fn render(&self, entries: &[RankedEntry], out: &mut dyn Write) -> io::Result<()>;
}

/// Horizontal bar chart of word frequencies written to a terminal.
///
/// Rows follow the ranked list's ascending order, so the most frequent
/// word ends up on the bottom row. Bar lengths are scaled to
/// `max_bar_width` with a one-cell floor so small counts stay visible.
#[derive(Debug, Clone, Copy)]
pub struct TextBarChart {
    pub max_bar_width: usize,
}

impl Default for TextBarChart {
    fn default() -> Self {
        Self { max_bar_width: 50 }
    }
}

impl TextBarChart {
    fn bar_cells(&self, count: u64, max_count: u64) -> usize {
        if max_count == 0 {
            return 0;
        }
        let scaled = (count as u128 * self.max_bar_width as u128 / max_count as u128) as usize;
        scaled.max(1)
    }
}

impl ChartSink for TextBarChart {
    fn render(&self, entries: &[RankedEntry], out: &mut dyn Write) -> io::Result<()> {
        if entries.is_empty() {
            writeln!(out, "(no words to display)")?;
            return Ok(());
        }

        writeln!(out, "Top {} most frequent words", entries.len())?;

        let max_count = entries.iter().map(|entry| entry.count).max().unwrap_or(0);
        let label_width = entries
            .iter()
            .map(|entry| entry.word.chars().count())
            .max()
            .unwrap_or(0);

        for entry in entries {
            let bar = "█".repeat(self.bar_cells(entry.count, max_count));
            writeln!(
                out,
                "{word:>label_width$} | {bar} {count}",
                word = entry.word,
                count = entry.count,
            )?;
        }
        Ok(())
    }
}
