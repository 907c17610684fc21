//! Byte offset to line number resolution.

/// Precomputed line starts for one source text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            line_starts,
            len: source.len(),
        }
    }

    /// 1-based line containing `offset`, or `None` past the end of the text.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> Option<u32> {
        if offset > self.len {
            return None;
        }
        let line = self.line_starts.partition_point(|&start| start <= offset);
        u32::try_from(line).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_is_one() {
        let lines = LineIndex::new("int a;\nint b;\n");
        assert_eq!(lines.line_of(0), Some(1));
        assert_eq!(lines.line_of(5), Some(1));
    }

    #[test]
    fn offsets_after_newline_move_to_next_line() {
        let lines = LineIndex::new("int a;\nint b;\n");
        assert_eq!(lines.line_of(6), Some(1));
        assert_eq!(lines.line_of(7), Some(2));
        assert_eq!(lines.line_of(14), Some(3));
    }

    #[test]
    fn out_of_range_is_unknown() {
        let lines = LineIndex::new("x");
        assert_eq!(lines.line_of(1), Some(1));
        assert_eq!(lines.line_of(2), None);
    }
}
