use anyhow::Result;
use clap::Parser;
use fakegen::cli::{log_level, Cli, Commands};
use fakegen::commands::GenerateConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Generate {
            catalog,
            output,
            format,
            module,
            imports,
            config,
            no_hint,
            collision_policy,
        } => {
            let generate_config = GenerateConfig {
                catalog,
                output,
                format,
                module,
                imports,
                config,
                no_hint,
                collision_policy,
                invocation: std::env::args().skip(1).collect(),
            };
            fakegen::commands::generate_fakes(generate_config)
        }
        Commands::Init { force } => fakegen::commands::init_config(force),
    }
}

// RUST_LOG takes precedence over -v
fn init_logging(verbosity: u8) {
    let default_level = log_level(verbosity).to_string().to_lowercase();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
