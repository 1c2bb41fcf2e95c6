//! Line maps: byte offset <-> 1-based line lookups.

/// Line start offsets of one source text.
#[derive(Debug, Clone, Default)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map. `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0u32];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i as u32 + 1),
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line_starts.push(i as u32 + 1);
                }
                _ => {}
            }
            i += 1;
        }
        LineMap { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 1-based line containing `offset`.
    pub fn line_of(&self, offset: u32) -> u32 {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line as u32 + 1,
            Err(next) => next as u32,
        }
    }

    /// Text of the 1-based `line`, without its terminator.
    pub fn line_text<'a>(&self, source: &'a str, line: u32) -> Option<&'a str> {
        let index = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(index)? as usize;
        let end = self
            .line_starts
            .get(index + 1)
            .map(|&next| next as usize)
            .unwrap_or(source.len());
        let text = source.get(start..end)?;
        Some(text.trim_end_matches(['\r', '\n']))
    }
}

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod position_tests;
