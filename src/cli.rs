use crate::catalog::CatalogFormat;
use crate::generator::CollisionPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fakegen")]
#[command(about = "Generates recording, stubbable Swift fakes from a class catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Show files read and written
    /// -vv: Show per-class generation and skipped methods
    /// -vvv: Show everything
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate fakes for every class in a catalog
    Generate {
        /// Catalog describing the classes to fake
        catalog: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Catalog format (defaults to a manifest chosen by file extension)
        #[arg(long, value_enum)]
        format: Option<CatalogFormat>,

        /// Module brought in with `@testable import`
        #[arg(short, long)]
        module: Option<String>,

        /// Extra modules to import (can be repeated)
        #[arg(short, long = "import")]
        imports: Vec<String>,

        /// Configuration file (defaults to the nearest .fakegen.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Omit the regeneration command header
        #[arg(long)]
        no_hint: bool,

        /// How to handle methods that share an identity
        #[arg(long, value_enum)]
        collision_policy: Option<CollisionPolicy>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Log level selected by the repeated `-v` flag.
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
