//! gofake CLI
//!
//! # Usage
//!
//! ```bash
//! # Fakes for two interfaces of the package in the current directory
//! gofake -i Store -i Clock
//!
//! # Explicit files, custom output and package clause
//! gofake -i Store -o store_fake_test.go -p store_test store.go types.go
//!
//! # Inspect the resolved interfaces
//! gofake -i Store --emit-model ./store
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use gofake::{GenerateError, Generator, GeneratorConfig, LoadedPackage};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_OUTPUT: &str = "gofake.go";

#[derive(Parser, Debug)]
#[command(name = "gofake")]
#[command(about = "Generate call-recording fakes for Go interfaces", long_about = None)]
struct Cli {
    /// Interface to fake (repeatable)
    #[arg(short, long = "interface", value_name = "NAME")]
    interfaces: Vec<String>,

    /// Output file [default: <dir>/gofake.go]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Package clause of the generated file
    #[arg(short, long)]
    package: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip the gofmt pass
    #[arg(long)]
    no_format: bool,

    /// Print the resolved interfaces as JSON instead of generating
    #[arg(long)]
    emit_model: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// A package directory, or the files of one package
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::from(2);
        }
    };
    if missing_interfaces(&cli, &config) {
        error!("no interface names given (use --interface or the config file)");
        return ExitCode::from(2);
    }

    match run(&cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Generation needs at least one interface name; `--emit-model` does not
fn missing_interfaces(cli: &Cli, config: &GeneratorConfig) -> bool {
    config.interfaces.is_empty() && !cli.emit_model
}

/// Config file, then command-line overrides
fn build_config(cli: &Cli) -> Result<GeneratorConfig, GenerateError> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_yaml(path)?,
        None => GeneratorConfig::default(),
    };
    if !cli.interfaces.is_empty() {
        config.interfaces = cli.interfaces.clone();
    }
    if let Some(output) = &cli.output {
        config.output = Some(output.clone());
    }
    if let Some(package) = &cli.package {
        config.package = Some(package.clone());
    }
    if cli.no_format {
        config.format.enabled = false;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli, config: GeneratorConfig) -> Result<(), GenerateError> {
    let generator = Generator::from_config(config)?;
    let package = load(&generator, &cli.paths)?;

    if cli.emit_model {
        println!("{}", generator.model_json(&package)?);
        return Ok(());
    }

    let names = generator.config().interfaces.as_slice();
    let file = generator.generate(&package, names, &header())?;
    let output = generator
        .config()
        .output
        .clone()
        .unwrap_or_else(|| package.dir.join(DEFAULT_OUTPUT));
    file.write_to(&output)?;

    for skipped in &file.skipped {
        debug!(interface = %skipped.name, reason = %skipped.reason, "skipped");
    }
    info!(
        output = %output.display(),
        interfaces = ?file.interfaces,
        formatted = file.formatted,
        "wrote fakes"
    );
    Ok(())
}

fn load(generator: &Generator, paths: &[PathBuf]) -> Result<LoadedPackage, GenerateError> {
    match paths {
        [dir] if dir.is_dir() => generator.load_dir(dir),
        files => generator.load_files(files),
    }
}

fn header() -> String {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = std::iter::once(program_name())
        .chain(args)
        .collect::<Vec<_>>()
        .join(" ");
    format!("// generated by \"{}\"; DO NOT EDIT.", invocation)
}

fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("gofake")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "gofake", "-i", "Store", "-i", "Clock", "-p", "store_test", "--no-format", "./store",
        ])
        .unwrap();
        let config = build_config(&cli).unwrap();

        assert_eq!(config.interfaces, vec!["Store", "Clock"]);
        assert_eq!(config.package.as_deref(), Some("store_test"));
        assert!(!config.format.enabled);
        assert_eq!(cli.paths, vec![PathBuf::from("./store")]);
    }

    #[test]
    fn test_paths_default_to_current_dir() {
        let cli = Cli::try_parse_from(["gofake", "-i", "Store"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from(".")]);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_interfaces_required_unless_emitting_model() {
        let cli = Cli::try_parse_from(["gofake"]).unwrap();
        assert!(missing_interfaces(&cli, &build_config(&cli).unwrap()));

        let cli = Cli::try_parse_from(["gofake", "--emit-model"]).unwrap();
        assert!(!missing_interfaces(&cli, &build_config(&cli).unwrap()));
    }

    #[test]
    fn test_invalid_package_is_a_config_error() {
        let cli = Cli::try_parse_from(["gofake", "-i", "Store", "-p", "bad-name"]).unwrap();
        assert!(matches!(build_config(&cli), Err(GenerateError::Config(_))));
    }
}
