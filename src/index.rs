use std::io::{self, Write};

/// Format one index line for `ch`: lowercase hex code point with a `0x`
/// prefix and a trailing comma, ready to sit inside a C array initializer.
pub fn format_entry(ch: char) -> String {
    format!("{:#x},", ch as u32)
}

/// Streams index lines, one per packed atlas cell.
pub struct IndexWriter<W: Write> {
    out: W,
    entries: usize,
}

impl<W: Write> IndexWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, entries: 0 }
    }

    pub fn write_entry(&mut self, ch: char) -> io::Result<()> {
        writeln!(self.out, "{}", format_entry(ch))?;
        self.entries += 1;
        Ok(())
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Parse index text back into code points; lines that are not a `0x` hex
/// numeral are skipped.
pub fn parse_index(text: &str) -> Vec<u32> {
    text.lines()
        .filter_map(|line| {
            let hex = line.trim().trim_end_matches(',').strip_prefix("0x")?;
            u32::from_str_radix(hex, 16).ok()
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
