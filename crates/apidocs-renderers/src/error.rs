use apidocs_codec::CodecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
	#[error(transparent)]
	Codec(#[from] CodecError),

	#[error("Template error: {0}")]
	Template(#[from] tera::Error),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("Reverse for `{0}` not found; it is not a registered route name or a URL")]
	NoReverseMatch(String),

	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),

	#[error("Could not satisfy the request Accept header: {0}")]
	NotAcceptable(String),

	#[error("No renderers registered")]
	NoRenderers,
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;
