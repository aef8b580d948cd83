//! CLI entry point for the quilt grid generation tool

use clap::Parser;
use quiltgrid::io::cli::{Cli, QuiltProcessor};

fn main() -> quiltgrid::Result<()> {
    let cli = Cli::parse();
    let mut processor = QuiltProcessor::new(cli);
    processor.process()
}
