use crate::codegen::CodeGenerator;
use crate::{Config, Result};
use std::io::Write;

/// Empty `visit<I>` helpers that return `nil`.
pub struct GoHelperStub<'a> {
	package: &'a str,
}

impl<'a> GoHelperStub<'a> {
	pub fn new(config: &'a Config) -> Self {
		GoHelperStub {
			package: &config.ast_package,
		}
	}
}

impl CodeGenerator for GoHelperStub<'_> {
	fn name(&self) -> &str {
		"go_helper_stub"
	}

	fn block(&self, ident: &str, w: &mut impl Write) -> Result<()> {
		write!(
			w,
			include_str!("templates/helper_stub.go.tmpl"),
			package = self.package,
			ident = ident,
		)?;
		Ok(())
	}
}
