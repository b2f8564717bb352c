//! CLI entry point for the constructivist composition generator

use clap::Parser;
use constructivist::io::cli::{Cli, RenderBatch};

fn main() -> constructivist::Result<()> {
    let cli = Cli::parse();
    cli.init_tracing();
    let mut batch = RenderBatch::new(cli);
    batch.process()?;
    Ok(())
}
