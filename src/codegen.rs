use crate::Result;
use std::io::Write;

pub trait CodeGenerator {
	fn name(&self) -> &str;

	/// Writes the block for a single identifier, trailing blank line included.
	fn block(&self, ident: &str, w: &mut impl Write) -> Result<()>;
}

/// Emits one block per identifier, in input order.
pub fn generate<G: CodeGenerator>(
	codegen: &G,
	identifiers: &[String],
	w: &mut impl Write,
) -> Result<()> {
	for ident in identifiers {
		if ident.is_empty() {
			tracing::warn!(generator = codegen.name(), "emitting block for blank identifier");
		}
		codegen.block(ident, w)?;
	}
	w.flush()?;

	tracing::debug!(
		generator = codegen.name(),
		blocks = identifiers.len(),
		"generated blocks"
	);
	Ok(())
}
