//! CLI entry point for the procedural city growth tool

use clap::Parser;
use gridtown::io::cli::{Cli, CityBuilder};

fn main() -> gridtown::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut builder = CityBuilder::new(cli);
    builder.process()
}
