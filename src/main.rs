use clap::{Parser, Subcommand};
use gopher_catalog::pipeline::{self, PipelineError, Stages};
use gopher_catalog::{catalog, output, root};
use std::io::IsTerminal;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gopher-catalog")]
#[command(about = "Catalog the bundled gopher artwork and render the README")]
#[command(long_about = "\
Catalog the bundled gopher artwork and render the README

Run from anywhere inside the repository. Output paths are relative to the
nearest ancestor directory that contains a .git directory.

Outputs:

  <root>/
  ├── README.md                    # readme, build
  └── thumbnails/                  # thumbnails, build
      ├── gophers/
      ├── dukes/
      ├── misc/
      └── uncolored/

With no command, renders README.md.")]
#[command(version)]
struct Cli {
    /// Log per-file progress
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Render README.md at the repository root
    Readme,
    /// Write 128x128 PNG thumbnails for every bundled image
    Thumbnails,
    /// Write thumbnails, then render README.md
    Build,
    /// Print the bundled folders and their files
    List {
        /// Print the catalog as JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli.command.unwrap_or(Command::Readme)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), PipelineError> {
    let root = root::locate_root()?;

    let stages = match command {
        Command::Readme => Stages::readme(),
        Command::Thumbnails => Stages::thumbnails(),
        Command::Build => Stages::build(),
        Command::List { .. } => Stages::list(),
    };
    let report = pipeline::run(&root, catalog::bundled(), &stages)?;

    match command {
        Command::List { json: true } => println!("{}", output::format_catalog_json(&report.catalog)?),
        Command::List { json: false } => output::print_catalog(&report.catalog),
        _ => output::print_run_report(&report),
    }
    Ok(())
}
