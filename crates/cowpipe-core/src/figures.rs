//! # Figure Catalog
//!
//! The ASCII-art characters that can speak the balloon. The art is baked in
//! at compile time, tab indentation included, so it lines up in an 8-column
//! tab terminal exactly as it always has.
//!
//! ```text
//!          \  ^__^
//!           \ (oo)\_______
//!             (__)\       )\/\
//!                 ||----w |
//!                 ||     ||
//! ```

/// Printed in place of art when the requested figure does not exist
pub const UNKNOWN_FIGURE: &str = "Unknown Figure";

/// Figure drawn when none is requested
pub const DEFAULT_FIGURE: &str = "cow";

/// Built-in figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Figure {
    Cow,
    Stegosaurus,
}

impl Figure {
    /// Get all figures
    pub fn all() -> &'static [Figure] {
        &[Figure::Cow, Figure::Stegosaurus]
    }

    /// Exact, case-sensitive name lookup
    pub fn from_name(name: &str) -> Option<Figure> {
        Self::all().iter().copied().find(|figure| figure.name() == name)
    }

    /// Name accepted by `-f`
    pub fn name(&self) -> &'static str {
        match self {
            Figure::Cow => "cow",
            Figure::Stegosaurus => "stegosaurus",
        }
    }

    pub fn art(&self) -> &'static str {
        match self {
            Figure::Cow => Self::COW,
            Figure::Stegosaurus => Self::STEGOSAURUS,
        }
    }

    pub const COW: &'static str = concat!(
        "         \\  ^__^\n",
        "          \\ (oo)\\_______\n",
        "\t    (__)\\       )\\/\\\n",
        "\t        ||----w |\n",
        "\t        ||     ||\n",
        "\t\t",
    );

    pub const STEGOSAURUS: &'static str = concat!(
        "         \t\\                      .       .\n",
        "\t\t\\                    / `.   .' \"\n",
        "\t\t \\           .---.  <    > <    >  .---.\n",
        "\t\t  \\          |    \\  \\ - ~ ~ - /  /    |\n",
        "\t\t_____           ..-~             ~-..-~\n",
        "\t   |     |   \\~~~\\\\.'                    `./~~~/\n",
        "\t  ---------   \\__/                         \\__/\n",
        "\t .'  O    \\     /               /       \\  \"\n",
        "\t(_____,    `._.'               |         }  \\/~~~/\n",
        "\t `----.          /       }     |        /    \\__/\n",
        "\t\t   `-.      |       /      |       /      `. ,~~|\n",
        "\t\t\t   ~-.__|      /_ - ~ ^|      /- _      `..-'\n",
        "\t\t\t\t\t|     /        |     /     ~-.     `-. _  _  _\n",
        "\t\t\t\t\t|_____|        |_____|         ~ - . _ _ _ _ _>\n",
        "\n",
        "  ",
    );
}

impl std::fmt::Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Art for `name`, or [`UNKNOWN_FIGURE`] when the catalog has no such figure
pub fn lookup_figure(name: &str) -> &'static str {
    match Figure::from_name(name) {
        Some(figure) => figure.art(),
        None => {
            tracing::warn!("Unknown figure requested: {}", name);
            UNKNOWN_FIGURE
        }
    }
}
