//! Command-line interface for generating and inspecting quilt sections

use crate::algorithm::builder::QuiltBuilder;
use crate::analysis::counts::tile_counts;
use crate::io::configuration::{
    DEFAULT_FABRIC, DEFAULT_SECTION_HEIGHT, DEFAULT_SECTION_WIDTH, DEFAULT_STORE_DIR,
};
use crate::io::error::Result;
use crate::io::fabric::FabricCatalog;
use crate::io::store::{FileStore, GridStore};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quiltgrid")]
#[command(
    author,
    version,
    about = "Generate quilt tile grids with persistent layouts"
)]
/// Command-line arguments for the quilt grid tool
pub struct Cli {
    /// Fabric to draw tiles from
    #[arg(value_name = "FABRIC", default_value = DEFAULT_FABRIC)]
    pub fabric: String,

    /// Quilt section width in tiles
    #[arg(short, long, default_value_t = DEFAULT_SECTION_WIDTH)]
    pub width: usize,

    /// Quilt section height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_SECTION_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible layouts (OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Discard the persisted layout and build a fresh one
    #[arg(short, long)]
    pub regenerate: bool,

    /// Print tile occurrence counts after the grid
    #[arg(short, long)]
    pub counts: bool,

    /// Directory backing the persistent store
    #[arg(long, default_value = DEFAULT_STORE_DIR)]
    pub store_dir: PathBuf,

    /// Suppress grid output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if the grid should be printed
    pub const fn should_render(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates catalog lookup, persistence, and section rendering
pub struct QuiltProcessor {
    cli: Cli,
    catalog: FabricCatalog,
}

impl QuiltProcessor {
    /// Create a processor over the built-in fabric catalog
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            catalog: FabricCatalog::builtin(),
        }
    }

    /// Build or regenerate the section and render the requested output
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown fabric, invalid fabric parameters,
    /// exhausted selection, or backing store failures.
    pub fn process(&mut self) -> Result<()> {
        let fabric = self.catalog.get(&self.cli.fabric)?.clone();
        let store = GridStore::new(FileStore::new(&self.cli.store_dir));

        let seed = self.cli.seed.unwrap_or_else(rand::random);
        let mut builder = QuiltBuilder::new(store, seed);

        let cells = if self.cli.regenerate {
            builder.regenerate(&fabric, self.cli.width, self.cli.height)?
        } else {
            builder.build(&fabric, self.cli.width, self.cli.height)?
        };

        if self.cli.should_render() {
            Self::render_grid(&cells, self.cli.width);
        }

        if self.cli.counts {
            let counts = tile_counts(builder.store())?;
            Self::render_counts(&counts);
        }

        Ok(())
    }

    // Allow print for the tool's primary output
    #[allow(clippy::print_stdout)]
    fn render_grid(cells: &[u32], width: usize) {
        if width == 0 {
            return;
        }

        for row in cells.chunks(width) {
            let line = row
                .iter()
                .map(|id| format!("{id:>3}"))
                .collect::<Vec<_>>()
                .join(" ");
            println!("{line}");
        }
    }

    // Allow print for the tool's primary output
    #[allow(clippy::print_stdout)]
    fn render_counts(counts: &HashMap<u32, usize>) {
        let mut entries: Vec<_> = counts.iter().collect();
        entries.sort_unstable_by_key(|(id, _)| **id);

        for (id, count) in entries {
            println!("{id}: {count}");
        }
    }
}
