use std::io;
use std::num::NonZeroUsize;

use clap::Parser;
use miette::{MietteHandlerOpts, Result};

use spanmark::{Source, annotate, utils::logging};

/// The file every offset refers to, relative to the working directory.
const SOURCE_PATH: &str = "example/ex.lll";

#[derive(Parser)]
#[command(
    name = "spanmark",
    version = "0.1.0",
    about = "Show the line containing a character offset of example/ex.lll, with carets under it"
)]
struct Cli {
    /// Zero-based character offset into the source file
    offset: usize,
    /// Number of carets to draw
    #[arg(default_value = "1")]
    length: NonZeroUsize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init();

    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .color(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let source = Source::load(SOURCE_PATH)?;
    annotate(&source, cli.offset, cli.length.get(), &mut io::stdout().lock())
}
