//! Line splicing: joins backslash-continued physical lines into logical
//! lines while preserving a map back to originating physical line numbers.

/// One physical-line contribution to a [`LogicalLine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSegment {
    /// 0-based index of the physical line this segment came from.
    pub physical_line: usize,
    /// The segment's text, with any trailing continuation backslash
    /// stripped.
    pub text: String,
}

/// An ordered sequence of physical-line segments joined by backslash
/// continuation, indexable by logical offset.
///
/// Invariant: every segment except the last of a logical line originates
/// from a physical line that ended with a backslash.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LogicalLine {
    pub segments: Vec<LineSegment>,
}

impl LogicalLine {
    /// Total length in bytes, summed across all segment texts.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.text.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The concatenated text of all segments, in order.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Maps a byte offset into [`LogicalLine::text`] back to the
    /// originating physical line index.
    pub fn physical_line_at(&self, logical_offset: usize) -> Option<usize> {
        let mut consumed = 0;
        for segment in &self.segments {
            let end = consumed + segment.text.len();
            if logical_offset < end {
                return Some(segment.physical_line);
            }
            consumed = end;
        }
        self.segments.last().map(|s| s.physical_line)
    }

    /// Number of physical lines this logical line spans.
    pub fn physical_line_count(&self) -> usize {
        self.segments.len()
    }
}

/// Splits `source` into logical lines, joining any physical line ending in
/// a single backslash with the line that follows it.
///
/// For input with `N` physical lines, the sum of `segments.len()` across
/// all emitted logical lines equals `N`. A trailing unterminated
/// continuation (backslash then EOF) emits the in-progress line as-is.
pub fn splice(source: &str) -> Vec<LogicalLine> {
    let mut lines = Vec::new();
    let mut current = LogicalLine::default();

    for (idx, raw_line) in source.lines().enumerate() {
        let (text, continues) = match raw_line.strip_suffix('\\') {
            Some(stripped) => (stripped.to_string(), true),
            None => (raw_line.to_string(), false),
        };

        current.segments.push(LineSegment {
            physical_line: idx,
            text,
        });

        if !continues {
            lines.push(std::mem::take(&mut current));
        }
    }

    if !current.segments.is_empty() {
        lines.push(current);
    }

    lines
}
