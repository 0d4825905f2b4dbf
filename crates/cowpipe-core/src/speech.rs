//! # Speech
//!
//! Puts the pieces together: message block, balloon, and figure, laid out
//! the way the program prints them.

use crate::balloon;
use crate::figures::lookup_figure;
use crate::lines::MessageBlock;

/// Full program output for `lines` spoken by the figure called `figure`.
///
/// The balloon's last row ends with a newline and the figure starts right
/// under it, so the figure's tail touches the balloon. A blank line closes
/// the output.
pub fn say<S: AsRef<str>>(lines: &[S], figure: &str) -> String {
    let block = MessageBlock::from_lines(lines);
    let balloon = balloon::render_block(&block);
    let art = lookup_figure(figure);

    let mut out = String::with_capacity(balloon.len() + art.len() + 3);
    out.push_str(&balloon);
    out.push('\n');
    out.push_str(art);
    out.push('\n');
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figures::{Figure, UNKNOWN_FIGURE};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_say_hi() {
        let expected = format!(" ____\n< hi >\n ----\n{}\n\n", Figure::COW);
        assert_eq!(say(&["hi"], "cow"), expected);
    }

    #[test]
    fn test_say_golden_cow() {
        let out = say(&["Hello,", "\tworld!"], "cow");
        let expected = concat!(
            " ____________\n",
            "/ Hello,     \\\n",
            "\\     world! /\n",
            " ------------\n",
            "         \\  ^__^\n",
            "          \\ (oo)\\_______\n",
            "\t    (__)\\       )\\/\\\n",
            "\t        ||----w |\n",
            "\t        ||     ||\n",
            "\t\t\n",
            "\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_say_unknown_figure() {
        let out = say(&["moo"], "dragon");
        assert_eq!(out, format!(" _____\n< moo >\n -----\n{UNKNOWN_FIGURE}\n\n"));
    }

    #[test]
    fn test_say_nothing() {
        let lines: Vec<String> = Vec::new();
        let out = say(&lines, "stegosaurus");
        assert!(out.starts_with(" __\n --\n"));
        assert!(out.ends_with(&format!("{}\n\n", Figure::STEGOSAURUS)));
    }
}
