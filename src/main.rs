//! cowpipe - pipe any text into a talking cow
//!
//! ```text
//!  ___________________
//! < fortune | cowpipe >
//!  -------------------
//!          \  ^__^
//!           \ (oo)\_______
//!             (__)\       )\/\
//!                 ||----w |
//!                 ||     ||
//! ```

use anyhow::Context;
use clap::Parser;
use cowpipe_config::Config;
use cowpipe_core::Figure;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PIPE_HINT: &str = "The command is intended to work with pipes.\nUsage: fortune | cowpipe";

/// cowpipe - wrap piped text in a speech balloon
#[derive(Parser, Debug)]
#[command(name = "cowpipe")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The figure name. Valid values are `cow` and `stegosaurus`
    #[arg(short = 'f', long)]
    figure: Option<String>,

    /// List the available figures and exit
    #[arg(short = 'l', long)]
    list: bool,

    /// Config file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Args {
    /// `-f` wins over whatever the config says
    fn resolve_figure(&self, config: &Config) -> String {
        self.figure.clone().unwrap_or_else(|| config.figure.clone())
    }
}

fn load_config(path: Option<&PathBuf>) -> Config {
    match path {
        Some(path) => Config::load_or_fallback(path),
        None => Config::load_or_fallback(&cowpipe_config::default_config_path()),
    }
}

/// Write `text` and flush. A reader that hung up early is not an error.
fn emit<W: Write>(out: &mut W, text: &str) -> anyhow::Result<()> {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("Output closed early: {}", e);
            Ok(())
        }
        result => result.context("Failed to write to standard output"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout belongs to the balloon
    let log_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("cowpipe={}", log_level)),
        ))
        .init();

    tracing::debug!("Starting cowpipe v{}", cowpipe_core::VERSION);

    let mut stdout = io::stdout().lock();

    if args.list {
        let names: String = Figure::all().iter().map(|f| format!("{}\n", f)).collect();
        return emit(&mut stdout, &names);
    }

    let config = load_config(args.config.as_ref());

    if args.print_config {
        return emit(&mut stdout, &config.to_toml()?);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return emit(&mut stdout, &format!("{}\n", PIPE_HINT));
    }

    let figure = args.resolve_figure(&config);
    tracing::debug!("Using figure: {}", figure);

    let lines = cowpipe_core::read_lines(stdin.lock()).context("Failed to read standard input")?;
    let speech = cowpipe_core::say(&lines, &figure);

    emit(&mut stdout, &speech)
}
