//! Schema objects handed to the renderers
//!
//! Renderers only read the title and version; everything else goes through
//! [`ApiSchema::to_value`] into a codec.

use crate::error::CodecResult;
use serde_json::Value;

/// An API description that can be rendered
pub trait ApiSchema: Send + Sync {
	/// API title, shown by the documentation viewers
	fn title(&self) -> &str;

	/// API version string
	fn version(&self) -> &str;

	/// Convert the schema into a JSON value tree for encoding
	fn to_value(&self) -> Result<Value, serde_json::Error>;
}

#[cfg(feature = "utoipa")]
impl ApiSchema for utoipa::openapi::OpenApi {
	fn title(&self) -> &str {
		&self.info.title
	}

	fn version(&self) -> &str {
		&self.info.version
	}

	fn to_value(&self) -> Result<Value, serde_json::Error> {
		serde_json::to_value(self)
	}
}

/// A spec document already held as a JSON value tree
///
/// Used when the schema was produced elsewhere, e.g. read from a file.
/// Missing `info.title` / `info.version` read as empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
	value: Value,
	title: String,
	version: String,
}

impl SchemaDocument {
	/// Wrap a value tree
	///
	/// # Examples
	///
	/// ```
	/// use apidocs_codec::{ApiSchema, SchemaDocument};
	/// use serde_json::json;
	///
	/// let doc = SchemaDocument::from_value(json!({
	///     "swagger": "2.0",
	///     "info": {"title": "Snippets API", "version": "v1"}
	/// }));
	/// assert_eq!(doc.title(), "Snippets API");
	/// assert_eq!(doc.version(), "v1");
	/// ```
	pub fn from_value(value: Value) -> Self {
		let read = |pointer: &str| {
			value
				.pointer(pointer)
				.and_then(Value::as_str)
				.unwrap_or_default()
				.to_string()
		};
		let title = read("/info/title");
		let version = read("/info/version");

		Self {
			value,
			title,
			version,
		}
	}

	/// Parse a JSON document
	pub fn from_json_str(source: &str) -> CodecResult<Self> {
		Ok(Self::from_value(serde_json::from_str(source)?))
	}

	/// Parse a YAML document
	pub fn from_yaml_str(source: &str) -> CodecResult<Self> {
		Ok(Self::from_value(serde_yaml::from_str(source)?))
	}

	/// The wrapped value tree
	pub fn as_value(&self) -> &Value {
		&self.value
	}

	/// Unwrap into the value tree
	pub fn into_value(self) -> Value {
		self.value
	}
}

impl ApiSchema for SchemaDocument {
	fn title(&self) -> &str {
		&self.title
	}

	fn version(&self) -> &str {
		&self.version
	}

	fn to_value(&self) -> Result<Value, serde_json::Error> {
		Ok(self.value.clone())
	}
}
