//! apidocs CLI
//!
//! Renders spec documents and documentation pages from a schema file.
//!
//! ## Usage
//!
//! ```bash
//! apidocs spec openapi.yaml --format json --pretty
//! apidocs spec openapi.json --format yaml --validators structure -o openapi.yaml
//! apidocs ui openapi.json --viewer redoc --settings apidocs.toml -o docs.html
//! ```

mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apidocs")]
#[command(about = "Render OpenAPI documents and documentation pages", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Validate a schema and render it as a spec document
	Spec(commands::spec::SpecArgs),

	/// Render a Swagger UI or ReDoc page for a schema
	Ui(commands::ui::UiArgs),
}

fn init_tracing(verbosity: u8) {
	let default_level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	// Already installed when embedded in a test harness
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	let result = match cli.command {
		Commands::Spec(args) => commands::spec::execute(args).await,
		Commands::Ui(args) => commands::ui::execute(args).await,
	};

	if let Err(e) = result {
		output::error(&format!("{e:#}"));
		process::exit(1);
	}
}
