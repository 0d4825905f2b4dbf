//! # Line Preprocessing
//!
//! Turns raw input lines into a rectangular block: tabs become spaces, and
//! every line is right-padded to the width of the widest one.
//!
//! Width is counted in Unicode code points. Wide glyphs and combining marks
//! count as one column each, so a balloon around CJK text or emoji will look
//! ragged in a terminal even though every row has the same length.

/// What a single tab expands to
pub const TAB_EXPANSION: &str = "    ";

/// Replace every tab with four spaces
pub fn expand_tabs<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref().replace('\t', TAB_EXPANSION))
        .collect()
}

/// Code-point length of the longest line (0 when there are no lines)
pub fn measure_max_width<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| line.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}

/// Right-pad each line with spaces up to `width` code points.
///
/// Lines that already reach `width` are returned unchanged, never truncated.
pub fn normalize_width<S: AsRef<str>>(lines: &[S], width: usize) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            let len = line.chars().count();
            let mut padded = String::with_capacity(line.len() + width.saturating_sub(len));
            padded.push_str(line);
            padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
            padded
        })
        .collect()
}

/// A block of equal-width lines ready to be framed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageBlock {
    lines: Vec<String>,
    width: usize,
}

impl MessageBlock {
    /// Expand tabs, measure, and pad raw input lines
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let expanded = expand_tabs(lines);
        let width = measure_max_width(&expanded);
        let lines = normalize_width(&expanded, width);
        tracing::debug!(lines = lines.len(), width, "Normalized message block");
        Self { lines, width }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Code-point width shared by every line
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
