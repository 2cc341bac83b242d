use crate::{Error, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Input path that selects standard input instead of a file.
pub const STDIN: &str = "-";

// ASCII whitespace (vertical tab included) and NUL.
fn is_padding(b: &u8) -> bool {
	b.is_ascii_whitespace() || *b == 0x0b || *b == 0
}

fn trim_padding(mut line: &[u8]) -> &[u8] {
	while let [first, rest @ ..] = line {
		if !is_padding(first) {
			break;
		}
		line = rest;
	}
	while let [rest @ .., last] = line {
		if !is_padding(last) {
			break;
		}
		line = rest;
	}
	line
}

/// Splits `input` on `\n` into trimmed identifiers, one per line.
///
/// Blank lines are kept as empty identifiers and duplicates are kept as-is.
/// Bytes that are not UTF-8 become U+FFFD rather than failing the run.
pub fn parse_identifiers(input: &[u8]) -> Vec<String> {
	let mut lines: Vec<&[u8]> = input.split(|&b| b == b'\n').collect();
	if lines.last().map_or(false, |l| l.is_empty()) {
		lines.pop();
	}

	lines
		.into_iter()
		.enumerate()
		.map(|(idx, line)| {
			let line = trim_padding(line);
			if std::str::from_utf8(line).is_err() {
				tracing::warn!(line = idx + 1, "replacing invalid UTF-8 in identifier");
			}
			String::from_utf8_lossy(line).into_owned()
		})
		.collect()
}

/// Reads the whole identifier list from `source`, or from stdin for `-`.
pub fn read_identifiers(source: &Path) -> Result<Vec<String>> {
	let read = if source == Path::new(STDIN) {
		let mut input = Vec::new();
		io::stdin().lock().read_to_end(&mut input).map(|_| input)
	} else {
		fs::read(source)
	};

	let input = read.map_err(|source_err| Error::InputUnavailable {
		path: source.to_path_buf(),
		source: source_err,
	})?;

	let identifiers = parse_identifiers(&input);
	tracing::debug!(
		input = %source.display(),
		count = identifiers.len(),
		"read identifiers"
	);
	Ok(identifiers)
}

fn is_identifier(s: &str) -> bool {
	let mut chars = s.chars();
	match chars.next() {
		Some(c) if c.is_alphabetic() || c == '_' => {}
		_ => return false,
	}
	chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Rejects the first identifier that could not name a Go type.
pub fn validate_identifiers(identifiers: &[String]) -> Result<()> {
	match identifiers.iter().position(|i| !is_identifier(i)) {
		Some(idx) => Err(Error::InvalidIdentifier {
			line: idx + 1,
			identifier: identifiers[idx].clone(),
		}),
		None => Ok(()),
	}
}
