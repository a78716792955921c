//! tsetup CLI - TypeScript environment bootstrapper
//!
//! Provides `tsetup fetch` (download and run the setup bundle) and
//! `tsetup setup` (configure the current workspace).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tsetup_core::defaults::BUNDLE_URL;
use tsetup_core::fetch::{fetch, run_entry_script};
use tsetup_core::{Runtime, Setup};

#[derive(Parser)]
#[command(name = "tsetup")]
#[command(about = "tsetup - TypeScript environment bootstrapper")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the setup bundle and run its entry script
    Fetch {
        /// Bundle URL
        #[arg(long, default_value = BUNDLE_URL)]
        url: String,

        /// Working directory for the bundle (defaults to the OS temp dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Configure the workspace: extensions, dependencies, config files
    Setup {
        /// Project directory (defaults to current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Runtime whose package manager installs dependencies
        #[arg(short, long, value_enum)]
        runtime: Option<RuntimeArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RuntimeArg {
    Node,
    Bun,
    Deno,
}

impl From<RuntimeArg> for Runtime {
    fn from(arg: RuntimeArg) -> Self {
        match arg {
            RuntimeArg::Node => Runtime::Node,
            RuntimeArg::Bun => Runtime::Bun,
            RuntimeArg::Deno => Runtime::Deno,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch { url, dir } => run_fetch(&url, dir).await,
        Commands::Setup { dir, runtime } => run_setup(dir, runtime.map(Runtime::from)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_fetch(url: &str, dir: Option<PathBuf>) -> anyhow::Result<()> {
    let dest = dir.unwrap_or_else(|| std::env::temp_dir().join("tsetup"));

    println!("Downloading bundle...");
    let script = fetch(url, &dest).await?;

    println!("Running setup script...");
    run_entry_script(&script)?;

    Ok(())
}

fn run_setup(dir: Option<PathBuf>, runtime: Option<Runtime>) -> anyhow::Result<()> {
    let root = match dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut setup = Setup::new(root);
    if let Some(runtime) = runtime {
        setup = setup.with_runtime(runtime);
    }
    setup.run()?;

    Ok(())
}
