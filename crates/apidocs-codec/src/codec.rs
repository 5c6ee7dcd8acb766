//! JSON and YAML spec codecs

use crate::error::CodecResult;
use crate::schema::ApiSchema;
use crate::validators::ValidatorSet;
use bytes::Bytes;
use serde_json::Value;

/// Converts a schema into spec document bytes
///
/// `encode` validates the value tree with every configured validator before
/// dumping it; a rejected document produces no output.
pub trait Codec: Send + Sync {
	/// Media type of the produced bytes
	fn media_type(&self) -> &'static str;

	/// Validators run before dumping
	fn validators(&self) -> &ValidatorSet;

	/// Serialize an already validated value tree
	fn dump(&self, spec: &Value) -> CodecResult<Vec<u8>>;

	/// Validate and serialize a schema
	fn encode(&self, schema: &dyn ApiSchema) -> CodecResult<Bytes> {
		let spec = schema.to_value()?;
		self.validators().run(&spec)?;

		let output = self.dump(&spec)?;
		tracing::debug!(
			media_type = self.media_type(),
			validators = ?self.validators().names(),
			bytes = output.len(),
			"encoded spec document"
		);
		Ok(Bytes::from(output))
	}
}

/// JSON codec
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
	validators: ValidatorSet,
	pretty: bool,
}

impl JsonCodec {
	/// Creates a compact JSON codec
	pub fn new(validators: ValidatorSet) -> Self {
		Self {
			validators,
			pretty: false,
		}
	}

	/// Sets whether to pretty print the output
	///
	/// # Examples
	///
	/// ```
	/// use apidocs_codec::{Codec, JsonCodec, SchemaDocument, ValidatorSet};
	/// use serde_json::json;
	///
	/// let codec = JsonCodec::new(ValidatorSet::none()).pretty(true);
	/// let doc = SchemaDocument::from_value(json!({"openapi": "3.1.0"}));
	/// let output = codec.encode(&doc).unwrap();
	/// assert_eq!(&output[..], b"{\n  \"openapi\": \"3.1.0\"\n}");
	/// ```
	pub fn pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}
}

impl Codec for JsonCodec {
	fn media_type(&self) -> &'static str {
		"application/json"
	}

	fn validators(&self) -> &ValidatorSet {
		&self.validators
	}

	fn dump(&self, spec: &Value) -> CodecResult<Vec<u8>> {
		Ok(if self.pretty {
			serde_json::to_vec_pretty(spec)?
		} else {
			serde_json::to_vec(spec)?
		})
	}
}

/// YAML codec
///
/// Emits block-style YAML; key order follows the value tree.
#[derive(Debug, Clone, Default)]
pub struct YamlCodec {
	validators: ValidatorSet,
}

impl YamlCodec {
	pub fn new(validators: ValidatorSet) -> Self {
		Self { validators }
	}
}

impl Codec for YamlCodec {
	fn media_type(&self) -> &'static str {
		"application/yaml"
	}

	fn validators(&self) -> &ValidatorSet {
		&self.validators
	}

	fn dump(&self, spec: &Value) -> CodecResult<Vec<u8>> {
		Ok(serde_yaml::to_string(spec)?.into_bytes())
	}
}

/// Codec selector used by renderers that build a fresh codec per render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecKind {
	Json,
	Yaml,
}

impl CodecKind {
	/// Build a codec bound to `validators`
	///
	/// # Examples
	///
	/// ```
	/// use apidocs_codec::{Codec, CodecKind, ValidatorSet};
	///
	/// let codec = CodecKind::Yaml.build(ValidatorSet::default());
	/// assert_eq!(codec.media_type(), "application/yaml");
	/// ```
	pub fn build(self, validators: ValidatorSet) -> Box<dyn Codec> {
		match self {
			CodecKind::Json => Box::new(JsonCodec::new(validators)),
			CodecKind::Yaml => Box::new(YamlCodec::new(validators)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::CodecError;
	use crate::schema::SchemaDocument;
	use crate::validators::ValidatorKind;
	use serde_json::json;

	fn document() -> SchemaDocument {
		SchemaDocument::from_value(json!({
			"swagger": "2.0",
			"info": {"title": "Snippets API", "version": "v1"},
			"paths": {
				"/snippets/": {
					"get": {"operationId": "snippets_list", "responses": {"200": {"description": ""}}}
				}
			}
		}))
	}

	#[test]
	fn test_json_codec_is_compact_by_default() {
		let output = JsonCodec::new(ValidatorSet::default())
			.encode(&document())
			.unwrap();
		let text = std::str::from_utf8(&output).unwrap();
		assert!(text.starts_with(r#"{"swagger":"2.0","info":{"title":"Snippets API""#));
		assert!(!text.contains('\n'));
	}

	#[test]
	fn test_yaml_codec_keeps_key_order() {
		let output = YamlCodec::new(ValidatorSet::default())
			.encode(&document())
			.unwrap();
		let text = std::str::from_utf8(&output).unwrap();

		let swagger = text.find("swagger:").unwrap();
		let info = text.find("info:").unwrap();
		let paths = text.find("paths:").unwrap();
		assert!(swagger < info && info < paths, "{text}");
		assert!(text.contains("operationId: snippets_list"));
	}

	#[test]
	fn test_invalid_document_is_rejected_before_dumping() {
		let doc = SchemaDocument::from_value(json!({"swagger": "2.0", "paths": {}}));
		let err = JsonCodec::new(ValidatorSet::default()).encode(&doc).unwrap_err();

		match err {
			CodecError::Validation(e) => {
				assert_eq!(e.validator, ValidatorKind::Structure);
				assert_eq!(e.errors, vec!["/info must be an object"]);
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn test_no_validators_encodes_anything() {
		let doc = SchemaDocument::from_value(json!({"anything": [1, 2]}));
		let output = YamlCodec::new(ValidatorSet::none()).encode(&doc).unwrap();
		assert_eq!(std::str::from_utf8(&output).unwrap(), "anything:\n- 1\n- 2\n");
	}

	#[test]
	fn test_codec_kind_builds_matching_codec() {
		assert_eq!(
			CodecKind::Json.build(ValidatorSet::none()).media_type(),
			"application/json"
		);
		let codec = CodecKind::Yaml.build(ValidatorSet::from_names(["semantics"]).unwrap());
		assert_eq!(codec.validators().names(), vec!["semantics"]);
	}
}
