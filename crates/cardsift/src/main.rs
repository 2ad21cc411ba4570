//! cardsift CLI
//!
//! Filters JSON card collections with the cardsift criteria language.

use clap::Parser;

use cardsift::args::Cli;
use cardsift::{logging, run};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so stdout only carries cards
    logging::init_logging(args.log_level)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run::execute(args, &mut out)
}
