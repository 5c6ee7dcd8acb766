//! Output helpers
//!
//! Status lines go to stderr; stdout is reserved for rendered documents.

use anyhow::Context;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Print a success message
pub(crate) fn success(msg: &str) {
	eprintln!("{} {}", "✓".green().bold(), msg);
}

/// Print an error message
pub(crate) fn error(msg: &str) {
	eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Print an info message
pub(crate) fn info(msg: &str) {
	eprintln!("{} {}", "ℹ".blue().bold(), msg);
}

/// Write a rendered body to `path`, or to stdout when no path is given
pub(crate) fn emit(body: &[u8], path: Option<&Path>) -> anyhow::Result<()> {
	match path {
		Some(path) => {
			std::fs::write(path, body)
				.with_context(|| format!("Cannot write {}", path.display()))?;
			success(&format!("Wrote {} bytes to {}", body.len(), path.display()));
		}
		None => {
			let mut stdout = std::io::stdout().lock();
			stdout.write_all(body)?;
			if !body.ends_with(b"\n") {
				stdout.write_all(b"\n")?;
			}
			stdout.flush()?;
		}
	}
	Ok(())
}
