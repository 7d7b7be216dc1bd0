use clap::Parser;
use colored::Colorize;
use pr_core::parser::yaml_parser::YamlParser;
use pr_core::registry::RegistryModel;
use std::path::PathBuf;

/// Inspect a plugin repository index file.
#[derive(Parser)]
#[command(name = "plugin-repo", version, about)]
struct Cli {
    /// Path to the registry index file (e.g. repo-index.yml)
    file: PathBuf,

    /// Emit the plugin collection as JSON instead of a listing
    #[arg(long)]
    json: bool,
}

fn main() -> color_eyre::Result<()> {
    let cli = Cli::parse();

    let mut parser = YamlParser::new(&cli.file, std::io::stderr(), RegistryModel::default());
    let plugins = parser.parse()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plugins)?);
        return Ok(());
    }

    for plugin in &plugins.plugins {
        println!("{} {}", plugin.name.bold(), plugin.version.green());
        if !plugin.description.is_empty() {
            println!("    {}", plugin.description);
        }
    }
    println!("{} plugins", plugins.plugins.len());

    Ok(())
}
