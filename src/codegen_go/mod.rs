//! Go visitor boilerplate for a SOQL checker's AST.

pub mod dispatch;
pub mod helper_stub;

use crate::codegen::{generate, CodeGenerator};
use crate::{Config, Family, Result};
use std::io::Write;

pub use dispatch::GoDispatch;
pub use helper_stub::GoHelperStub;

/// Runs the generator for the family selected in `config`.
pub fn generate_family(config: &Config, identifiers: &[String], w: &mut impl Write) -> Result<()> {
	match config.family {
		Family::Dispatch => generate(&GoDispatch::new(config), identifiers, w),
		Family::HelperStub => generate(&GoHelperStub::new(config), identifiers, w),
	}
}
