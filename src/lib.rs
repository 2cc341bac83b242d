pub mod codegen;
pub mod config;
pub mod input;
pub use codegen::*;
pub use config::*;
pub use input::*;

pub mod codegen_go;

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("cannot read input {}: {source}", path.display())]
	InputUnavailable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid identifier {identifier:?} on line {line}")]
	InvalidIdentifier { line: usize, identifier: String },
	#[error("cannot read config {}: {source}", path.display())]
	Config {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("yaml error: {0}")]
	Yaml(#[from] serde_yaml::Error),
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
