use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

/// Which template family to emit, one family per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
	/// `Visit<I>` methods on the checker that forward to `visit<I>`.
	#[default]
	Dispatch,
	/// Empty `visit<I>` helpers for the dispatch methods to forward to.
	HelperStub,
}

impl Family {
	pub const NAMES: &'static [&'static str] = &["dispatch", "helper-stub"];
}

impl FromStr for Family {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"dispatch" => Ok(Family::Dispatch),
			"helper-stub" => Ok(Family::HelperStub),
			other => Err(format!(
				"unknown template family {:?} (expected one of: {})",
				other,
				Family::NAMES.join(", ")
			)),
		}
	}
}

impl fmt::Display for Family {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Family::Dispatch => f.write_str("dispatch"),
			Family::HelperStub => f.write_str("helper-stub"),
		}
	}
}

fn default_receiver() -> String {
	"SoqlChecker".into()
}

fn default_ast_package() -> String {
	"ast".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	#[serde(default)]
	pub family: Family,
	#[serde(default = "default_receiver")]
	pub receiver: String,
	#[serde(default = "default_ast_package")]
	pub ast_package: String,
	#[serde(default)]
	pub validate: bool,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			family: Family::default(),
			receiver: default_receiver(),
			ast_package: default_ast_package(),
			validate: false,
		}
	}
}

impl Config {
	pub fn load(path: &Path) -> Result<Config> {
		let file = File::open(path).map_err(|source| Error::Config {
			path: path.to_path_buf(),
			source,
		})?;
		let config = serde_yaml::from_reader(file)?;
		tracing::debug!(path = %path.display(), ?config, "loaded config");
		Ok(config)
	}
}
