#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "valtree", about = "Convert captured typed values into JSON trees")]
struct Cli {
	/// Raise log verbosity (-v debug, -vv trace).
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Convert {
		path: PathBuf,
		#[arg(long)]
		value: Option<String>,
		#[arg(long)]
		compact: bool,
	},
	Types {
		path: PathBuf,
		#[arg(long = "type")]
		type_name: Option<String>,
	},
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> valtree::tree::Result<()> {
	match command {
		Commands::Convert { path, value, compact } => cmd::convert::run(path, value, compact),
		Commands::Types { path, type_name } => cmd::types::run(path, type_name),
	}
}

fn init_logging(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "debug",
		_ => "trace",
	};
	// Fails only when a logger is already installed; keep that one.
	let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
		.format_timestamp_millis()
		.try_init();
}
