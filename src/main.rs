use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ocp_scaffold::config::{PROJECT_FILE, parse_project_file, write_project_file};
use ocp_scaffold::scaffold::InitSubcommand;
use ocp_scaffold::substitutions::openshift_table;
use ocp_scaffold::vfs::OsFilesystem;

#[derive(Parser)]
#[command(name = "ocp-scaffold")]
#[command(
	author,
	version,
	about = "Point freshly scaffolded operator projects at OpenShift downstream images"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Enable debug logging
	#[arg(long, global = true)]
	debug: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Rewrite a freshly initialized project and record the plugin marker
	Init {
		/// Root of the generated project
		#[arg(long, value_name = "DIR", default_value = ".")]
		project_dir: PathBuf,
	},
	/// List the built-in image and version substitutions
	Substitutions,
}

/// Log level comes from `--debug`, then `RUST_LOG`, then defaults to info.
fn init_tracing(debug: bool) {
	let filter = if debug {
		EnvFilter::new("ocp_scaffold=debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ocp_scaffold=info"))
	};

	tracing_subscriber::registry()
		.with(fmt::layer().with_target(false).with_writer(std::io::stderr))
		.with(filter)
		.init();
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.debug);

	match run(cli.command) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run(command: Commands) -> Result<ExitCode> {
	match command {
		Commands::Init { project_dir } => handle_init(&project_dir),
		Commands::Substitutions => handle_substitutions(),
	}
}

fn handle_init(project_dir: &Path) -> Result<ExitCode> {
	let project_file = project_dir.join(PROJECT_FILE);
	let mut config = parse_project_file(&project_file).context("Failed to load project config")?;

	let mut fs = OsFilesystem::new(project_dir);
	InitSubcommand::new(&mut config)
		.scaffold(&mut fs)
		.with_context(|| format!("Failed to scaffold {}", project_dir.display()))?;

	write_project_file(&project_file, &config).context("Failed to save project config")?;

	println!(
		"Updated {} for OpenShift ({} files checked)",
		project_dir.display(),
		openshift_table().len()
	);
	Ok(ExitCode::SUCCESS)
}

fn handle_substitutions() -> Result<ExitCode> {
	for (path, rules) in openshift_table().iter() {
		println!("{}:", path);
		for rule in rules {
			println!("  {} -> {}", rule.pattern, rule.replacement);
		}
		println!();
	}
	Ok(ExitCode::SUCCESS)
}
