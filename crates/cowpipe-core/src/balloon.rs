//! # Speech Balloon
//!
//! Frames a block of equal-width lines in a classic cowsay balloon:
//!
//! ```text
//!  _______
//! / one   \
//! | two   |
//! \ three /
//!  -------
//! ```
//!
//! A one-line message uses `<` and `>` instead.
//!
//! The borders are one column shorter than the body rows: their fill runs
//! from the column after the opening delimiter to the column before the
//! closing one.

use crate::lines::MessageBlock;

/// Where a body line sits inside the balloon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePosition {
    /// The only line of a one-line message
    Sole,
    /// First of two or more lines
    First,
    /// Neither first nor last
    Interior,
    /// Last of two or more lines
    Last,
}

impl LinePosition {
    /// Classify line `index` of a `count`-line message
    pub fn classify(index: usize, count: usize) -> Self {
        if count == 1 {
            LinePosition::Sole
        } else if index == 0 {
            LinePosition::First
        } else if index + 1 == count {
            LinePosition::Last
        } else {
            LinePosition::Interior
        }
    }

    /// Opening and closing delimiter for this position
    pub fn delimiters(&self) -> (char, char) {
        match self {
            LinePosition::Sole => ('<', '>'),
            LinePosition::First => ('/', '\\'),
            LinePosition::Interior => ('|', '|'),
            LinePosition::Last => ('\\', '/'),
        }
    }

    /// Frame one padded line
    pub fn frame(&self, content: &str) -> String {
        let (open, close) = self.delimiters();
        format!("{open} {content} {close}")
    }
}

fn border(fill: char, width: usize) -> String {
    let mut line = String::with_capacity(width + 3);
    line.push(' ');
    line.extend(std::iter::repeat(fill).take(width + 2));
    line
}

/// Top edge: a space and `width + 2` underscores
pub fn top_border(width: usize) -> String {
    border('_', width)
}

/// Bottom edge: a space and `width + 2` hyphens
pub fn bottom_border(width: usize) -> String {
    border('-', width)
}

/// Render already-normalized lines into a balloon.
///
/// Lines are joined with `\n` and the result has no trailing newline. An
/// empty slice yields just the two borders.
pub fn render<S: AsRef<str>>(lines: &[S], width: usize) -> String {
    let count = lines.len();
    let mut rows = Vec::with_capacity(count + 2);

    rows.push(top_border(width));
    for (index, line) in lines.iter().enumerate() {
        rows.push(LinePosition::classify(index, count).frame(line.as_ref()));
    }
    rows.push(bottom_border(width));

    rows.join("\n")
}

/// Render a normalized [`MessageBlock`]
pub fn render_block(block: &MessageBlock) -> String {
    render(block.lines(), block.width())
}
