use crate::codegen::CodeGenerator;
use crate::{Config, Result};
use std::io::Write;

/// `Visit<I>` methods on the checker, each forwarding to its `visit<I>` helper.
pub struct GoDispatch<'a> {
	receiver: &'a str,
	package: &'a str,
}

impl<'a> GoDispatch<'a> {
	pub fn new(config: &'a Config) -> Self {
		GoDispatch {
			receiver: &config.receiver,
			package: &config.ast_package,
		}
	}
}

impl CodeGenerator for GoDispatch<'_> {
	fn name(&self) -> &str {
		"go_dispatch"
	}

	fn block(&self, ident: &str, w: &mut impl Write) -> Result<()> {
		write!(
			w,
			include_str!("templates/dispatch.go.tmpl"),
			receiver = self.receiver,
			package = self.package,
			ident = ident,
		)?;
		Ok(())
	}
}
