/// Hook generator entry point
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

use hookgen_react::codegen::cli::{build_generate_command, handle_generate_command};

fn build_cli() -> Command {
    Command::new("hookgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate react hooks for contract ABIs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_generate_command())
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    // RUST_LOG takes precedence over --verbose
    let default_level = if matches.get_flag("verbose") { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match matches.subcommand() {
        Some(("generate", sub_matches)) => handle_generate_command(sub_matches)
            .await
            .context("Failed to generate hooks")?,
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}
