use crate::validators::ValidatorKind;
use thiserror::Error;

/// A spec document rejected by one validator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("spec failed `{validator}` validation: {}", .errors.join("; "))]
pub struct SpecValidationError {
	/// Validator that rejected the document
	pub validator: ValidatorKind,
	/// Every problem the validator found, in document order
	pub errors: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CodecError {
	#[error("unknown validator `{name}`; allowed validators are {allowed}")]
	UnknownValidator { name: String, allowed: String },

	#[error(transparent)]
	Validation(#[from] SpecValidationError),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("YAML error: {0}")]
	Yaml(#[from] serde_yaml::Error),
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;
