use clap::{Parser, Subcommand};
use formstate::demo::loader::{self, LoaderDelays};
use formstate::demo::logging::init_tracing;
use formstate::demo::person;
use formstate::FormSettings;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "formstate", version, about = "Form state manager demos")]
struct Cli {
    /// Settings file (defaults to ~/.config/formstate/config.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run validators from the first update instead of after a grace update
    #[arg(long)]
    validate_from_start: bool,

    /// Report input constraint violations as field errors
    #[arg(long)]
    native_validation: bool,

    #[command(subcommand)]
    demo: Demo,
}

#[derive(Debug, Subcommand)]
enum Demo {
    /// Interactive person form: `set <field> <value>`, `bob`, `toggle`, `reset`, `show`, `quit`
    Person,
    /// Two fields populated after one and three seconds
    Loader,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    tracing::debug!(?settings, demo = ?cli.demo, "Starting demo");

    match cli.demo {
        Demo::Person => {
            let stdin = io::stdin();
            person::run(stdin.lock(), io::stdout().lock(), &settings)
        }
        Demo::Loader => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(loader::run(io::stdout().lock(), LoaderDelays::default()))
        }
    }
}

fn load_settings(cli: &Cli) -> anyhow::Result<FormSettings> {
    let mut settings = match &cli.config {
        Some(path) => FormSettings::load_from(path)?,
        None => FormSettings::load()?,
    };
    if cli.validate_from_start {
        settings.validate_from_start = true;
    }
    if cli.native_validation {
        settings.native_input_validation = true;
    }
    Ok(settings)
}
