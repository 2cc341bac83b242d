use std::io::{self, BufWriter, IsTerminal};
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;
use visitgen::codegen_go::generate_family;
use visitgen::{read_identifiers, validate_identifiers, Config, Family, Result};

#[derive(Debug, StructOpt)]
#[structopt(name = "visitgen", about = "Go visitor boilerplate generator")]
struct Opt {
	/// File with one node type name per line, or `-` for stdin
	#[structopt(default_value = "node.txt", parse(from_os_str))]
	input: PathBuf,
	/// YAML config file
	#[structopt(long, parse(from_os_str))]
	config: Option<PathBuf>,
	/// Template family to emit
	#[structopt(long, possible_values = Family::NAMES)]
	family: Option<Family>,
	/// Receiver type of the generated Visit methods
	#[structopt(long)]
	receiver: Option<String>,
	/// Go package holding the AST node types
	#[structopt(long)]
	package: Option<String>,
	/// Reject names that are not Go identifiers
	#[structopt(long)]
	validate: bool,
}

impl Opt {
	fn resolve_config(&self) -> Result<Config> {
		let mut config = match &self.config {
			Some(path) => Config::load(path)?,
			None => Config::default(),
		};
		if let Some(family) = self.family {
			config.family = family;
		}
		if let Some(receiver) = &self.receiver {
			config.receiver = receiver.clone();
		}
		if let Some(package) = &self.package {
			config.ast_package = package.clone();
		}
		config.validate |= self.validate;
		Ok(config)
	}
}

fn run(opt: &Opt) -> Result<()> {
	let config = opt.resolve_config()?;
	let identifiers = read_identifiers(&opt.input)?;
	if config.validate {
		validate_identifiers(&identifiers)?;
	}

	let stdout = io::stdout();
	let mut out_writer = BufWriter::new(stdout.lock());
	generate_family(&config, &identifiers, &mut out_writer)
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(io::stderr)
		.with_ansi(io::stderr().is_terminal())
		.without_time()
		.init();

	let opt = Opt::from_args();
	if let Err(err) = run(&opt) {
		tracing::error!("{}", err);
		process::exit(1);
	}
}
