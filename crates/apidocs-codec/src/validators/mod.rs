//! Spec validators
//!
//! Validators are selected by name from a fixed set. Unknown names are
//! rejected when the set is built, never at encode time.

mod semantics;
mod structure;

use crate::error::{CodecError, SpecValidationError};
use percent_encoding::percent_decode_str;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The known validators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
	/// Required fields, field types and allowed keys
	Structure,
	/// Cross-references: operation ids, path parameters, local `$ref`s
	Semantics,
}

impl ValidatorKind {
	/// Every known validator, in default run order
	pub const ALL: [ValidatorKind; 2] = [ValidatorKind::Structure, ValidatorKind::Semantics];

	/// Name used in settings and on the command line
	pub fn as_str(&self) -> &'static str {
		match self {
			ValidatorKind::Structure => "structure",
			ValidatorKind::Semantics => "semantics",
		}
	}

	/// Comma-separated list of the allowed names
	///
	/// # Examples
	///
	/// ```
	/// use apidocs_codec::ValidatorKind;
	///
	/// assert_eq!(ValidatorKind::allowed_names(), "structure, semantics");
	/// ```
	pub fn allowed_names() -> String {
		Self::ALL
			.iter()
			.map(ValidatorKind::as_str)
			.collect::<Vec<_>>()
			.join(", ")
	}

	/// Check a spec document
	pub fn validate(&self, spec: &Value) -> Result<(), SpecValidationError> {
		let errors = match self {
			ValidatorKind::Structure => structure::check(spec),
			ValidatorKind::Semantics => semantics::check(spec),
		};

		if errors.is_empty() {
			Ok(())
		} else {
			Err(SpecValidationError {
				validator: *self,
				errors,
			})
		}
	}
}

impl fmt::Display for ValidatorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ValidatorKind {
	type Err = CodecError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str() == name)
			.ok_or_else(|| CodecError::UnknownValidator {
				name: name.to_string(),
				allowed: Self::allowed_names(),
			})
	}
}

/// Ordered list of validators applied by a codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorSet {
	kinds: Vec<ValidatorKind>,
}

impl ValidatorSet {
	/// Build a set from validator kinds; repeated kinds keep their first
	/// position
	pub fn new(kinds: impl IntoIterator<Item = ValidatorKind>) -> Self {
		let mut unique = Vec::new();
		for kind in kinds {
			if !unique.contains(&kind) {
				unique.push(kind);
			}
		}
		Self { kinds: unique }
	}

	/// Build a set from validator names, failing on the first unknown name
	///
	/// # Examples
	///
	/// ```
	/// use apidocs_codec::{CodecError, ValidatorKind, ValidatorSet};
	///
	/// let set = ValidatorSet::from_names(["semantics"]).unwrap();
	/// assert_eq!(set.kinds(), &[ValidatorKind::Semantics]);
	///
	/// let err = ValidatorSet::from_names(["structure", "bogus"]).unwrap_err();
	/// assert!(matches!(err, CodecError::UnknownValidator { ref name, .. } if name == "bogus"));
	/// ```
	pub fn from_names<I, S>(names: I) -> Result<Self, CodecError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let kinds = names
			.into_iter()
			.map(|name| name.as_ref().parse::<ValidatorKind>())
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self::new(kinds))
	}

	/// A set that validates nothing
	pub fn none() -> Self {
		Self { kinds: Vec::new() }
	}

	/// Validators in run order
	pub fn kinds(&self) -> &[ValidatorKind] {
		&self.kinds
	}

	/// Validator names in run order
	pub fn names(&self) -> Vec<&'static str> {
		self.kinds.iter().map(ValidatorKind::as_str).collect()
	}

	pub fn is_empty(&self) -> bool {
		self.kinds.is_empty()
	}

	/// Run every validator in order, stopping at the first rejection
	pub fn run(&self, spec: &Value) -> Result<(), SpecValidationError> {
		for kind in &self.kinds {
			tracing::debug!(validator = %kind, "validating spec document");
			kind.validate(spec)?;
		}
		Ok(())
	}
}

impl Default for ValidatorSet {
	fn default() -> Self {
		Self::new(ValidatorKind::ALL)
	}
}

/// Document flavor, as declared by its version marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpecVersion {
	Swagger2,
	OpenApi3 { minor: u32 },
}

impl SpecVersion {
	pub(crate) fn detect(spec: &Value) -> Option<Self> {
		if spec.get("swagger").and_then(Value::as_str) == Some("2.0") {
			return Some(SpecVersion::Swagger2);
		}

		let openapi = spec.get("openapi").and_then(Value::as_str)?;
		let rest = openapi.strip_prefix("3.")?;
		let minor = rest.split('.').next()?.parse().ok()?;
		Some(SpecVersion::OpenApi3 { minor })
	}

	pub(crate) fn http_methods(&self) -> &'static [&'static str] {
		match self {
			SpecVersion::Swagger2 => &["get", "put", "post", "delete", "options", "head", "patch"],
			SpecVersion::OpenApi3 { .. } => &[
				"get", "put", "post", "delete", "options", "head", "patch", "trace",
			],
		}
	}

	pub(crate) fn parameter_locations(&self) -> &'static [&'static str] {
		match self {
			SpecVersion::Swagger2 => &["query", "header", "path", "formData", "body"],
			SpecVersion::OpenApi3 { .. } => &["query", "header", "path", "cookie"],
		}
	}

	pub(crate) fn requires_paths(&self) -> bool {
		!matches!(self, SpecVersion::OpenApi3 { minor } if *minor >= 1)
	}
}

/// Escape a key for use inside a JSON pointer
pub(crate) fn pointer_segment(key: &str) -> String {
	key.replace('~', "~0").replace('/', "~1")
}

/// Look up a local `#/...` reference. The fragment is a URI fragment, so it
/// is percent-decoded before being used as a JSON pointer.
///
/// Returns `None` for non-local references as well as unresolvable ones.
pub(crate) fn lookup_local<'a>(spec: &'a Value, reference: &str) -> Option<&'a Value> {
	let fragment = reference.strip_prefix('#')?;
	let pointer = percent_decode_str(fragment).decode_utf8().ok()?;
	spec.pointer(&pointer)
}

/// Follow a local `$ref` on a parameter, returning the parameter itself
/// when it is inline
pub(crate) fn resolve_local<'a>(spec: &'a Value, node: &'a Value) -> Option<&'a Value> {
	match node.get("$ref").and_then(Value::as_str) {
		Some(reference) => lookup_local(spec, reference),
		None => Some(node),
	}
}
