//! CLI interface for hook generation

use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches, Command};
use hookgen_common::{Error, Result};
use tracing::info;

use super::config::ProjectConfig;
use super::plugin::{Plugin, PluginOutput, ReactPlugin, RunContext};

/// Build the CLI command for hook generation
pub fn build_generate_command() -> Command {
    Command::new("generate")
        .about("Generate react hooks for the contracts declared in a project file")
        .arg(
            Arg::new("config")
                .help("Path to the project file (.toml or .json)")
                .default_value("hookgen.toml")
                .index(1),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .help("Output file, overrides `out` from the project file")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("typescript")
                .long("typescript")
                .help("Emit TypeScript")
                .action(ArgAction::SetTrue)
                .conflicts_with("javascript"),
        )
        .arg(
            Arg::new("javascript")
                .long("javascript")
                .help("Emit JavaScript without type annotations")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print the generated module instead of writing it")
                .action(ArgAction::SetTrue),
        )
}

/// Handle the generate command
pub async fn handle_generate_command(matches: &ArgMatches) -> Result<()> {
    let config_path = matches
        .get_one::<String>("config")
        .ok_or_else(|| Error::config("Project file path is required"))?;

    let mut project = ProjectConfig::load_from_file(config_path)?;
    if matches.get_flag("typescript") {
        project.typescript = true;
    }
    if matches.get_flag("javascript") {
        project.typescript = false;
    }

    let base_dir = Path::new(config_path).parent().unwrap_or_else(|| Path::new("."));
    let output = generate(&project, base_dir)?;
    let module = output.to_module();

    if matches.get_flag("dry-run") {
        println!("{}", module);
        return Ok(());
    }

    let path = match matches.get_one::<String>("out") {
        Some(out) => PathBuf::from(out),
        None => project.output_path(base_dir),
    };
    write_module(&path, &module).await?;

    info!(path = %path.display(), hooks = output.hooks.len(), "Wrote generated hooks");
    Ok(())
}

/// Load the project's contracts and run the react plugin over them
pub fn generate(project: &ProjectConfig, base_dir: &Path) -> Result<PluginOutput> {
    let contracts = project.load_contracts(base_dir)?;
    let plugin = ReactPlugin::new(project.react.clone())?;
    plugin.run(&RunContext {
        contracts: &contracts,
        is_typescript: project.typescript,
        outputs: &[],
    })
}

async fn write_module(path: &Path, module: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, module).await?;
    Ok(())
}
