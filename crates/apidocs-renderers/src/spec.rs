//! Spec document renderers

use crate::error::RenderResult;
use crate::renderer::{Renderer, RendererContext};
use apidocs_codec::{ApiSchema, Codec, CodecKind, JsonCodec, ValidatorSet};
use async_trait::async_trait;
use bytes::Bytes;

/// Output flavor of a [`SpecRenderer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
	/// `application/openapi+json`
	OpenApi,
	/// `application/json`
	Json,
	/// `application/yaml`
	Yaml,
}

impl SpecFormat {
	pub fn media_type(&self) -> &'static str {
		match self {
			SpecFormat::OpenApi => "application/openapi+json",
			SpecFormat::Json => "application/json",
			SpecFormat::Yaml => "application/yaml",
		}
	}

	pub fn format(&self) -> &'static str {
		match self {
			SpecFormat::OpenApi => "openapi",
			SpecFormat::Json => "json",
			SpecFormat::Yaml => "yaml",
		}
	}

	pub fn codec_kind(&self) -> CodecKind {
		match self {
			SpecFormat::OpenApi | SpecFormat::Json => CodecKind::Json,
			SpecFormat::Yaml => CodecKind::Yaml,
		}
	}
}

/// Renders a schema as a spec document through a codec
///
/// Every render validates the document with the renderer's validators, so a
/// broken schema fails with [`RenderError::Codec`](crate::RenderError::Codec)
/// instead of producing output.
///
/// # Examples
///
/// ```
/// use apidocs_renderers::{Renderer, SpecRenderer};
///
/// let renderer = SpecRenderer::swagger_yaml().with_validators(["structure"]).unwrap();
/// assert_eq!(renderer.media_type(), "application/yaml");
/// assert_eq!(renderer.format(), Some("yaml"));
///
/// assert!(SpecRenderer::openapi().with_validators(["flex"]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SpecRenderer {
	format: SpecFormat,
	validators: ValidatorSet,
	pretty: bool,
}

impl SpecRenderer {
	/// Renderer for a spec format with the default validators
	pub fn new(format: SpecFormat) -> Self {
		Self {
			format,
			validators: ValidatorSet::default(),
			pretty: false,
		}
	}

	/// `application/openapi+json`
	pub fn openapi() -> Self {
		Self::new(SpecFormat::OpenApi)
	}

	/// `application/json`
	pub fn swagger_json() -> Self {
		Self::new(SpecFormat::Json)
	}

	/// `application/yaml`
	pub fn swagger_yaml() -> Self {
		Self::new(SpecFormat::Yaml)
	}

	/// New renderer of the same format bound to the named validators
	///
	/// Fails if any name is not a known validator.
	pub fn with_validators<I, S>(&self, names: I) -> RenderResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Ok(Self {
			validators: ValidatorSet::from_names(names)?,
			..self.clone()
		})
	}

	/// Bind an already built validator set
	pub fn validators(mut self, validators: ValidatorSet) -> Self {
		self.validators = validators;
		self
	}

	/// Pretty print JSON output; no effect on YAML
	pub fn pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}

	pub fn spec_format(&self) -> SpecFormat {
		self.format
	}

	pub fn validator_set(&self) -> &ValidatorSet {
		&self.validators
	}

	fn codec(&self) -> Box<dyn Codec> {
		match self.format.codec_kind() {
			CodecKind::Json => Box::new(JsonCodec::new(self.validators.clone()).pretty(self.pretty)),
			kind => kind.build(self.validators.clone()),
		}
	}
}

#[async_trait]
impl Renderer for SpecRenderer {
	fn media_types(&self) -> Vec<String> {
		vec![self.format.media_type().to_string()]
	}

	fn format(&self) -> Option<&str> {
		Some(self.format.format())
	}

	async fn render(
		&self,
		schema: &dyn ApiSchema,
		_context: &mut RendererContext,
	) -> RenderResult<Bytes> {
		Ok(self.codec().encode(schema)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::RenderError;
	use apidocs_codec::{CodecError, SchemaDocument, ValidatorKind};
	use rstest::rstest;
	use serde_json::{Value, json};

	fn petstore() -> SchemaDocument {
		SchemaDocument::from_value(json!({
			"openapi": "3.0.3",
			"info": {"title": "Petstore", "version": "1.0.0"},
			"paths": {
				"/pets": {
					"get": {"operationId": "listPets", "responses": {"200": {"description": "ok"}}}
				}
			}
		}))
	}

	#[rstest]
	#[case(SpecRenderer::openapi(), "application/openapi+json", "openapi")]
	#[case(SpecRenderer::swagger_json(), "application/json", "json")]
	#[case(SpecRenderer::swagger_yaml(), "application/yaml", "yaml")]
	fn test_media_type_and_format(
		#[case] renderer: SpecRenderer,
		#[case] media_type: &str,
		#[case] format: &str,
	) {
		assert_eq!(renderer.media_type(), media_type);
		assert_eq!(renderer.format(), Some(format));
		assert_eq!(renderer.charset(), None);
		assert_eq!(renderer.content_type(), media_type);
	}

	#[test]
	fn test_with_validators_rejects_unknown_name() {
		let err = SpecRenderer::swagger_json()
			.with_validators(["structure", "ssv"])
			.unwrap_err();
		match err {
			RenderError::Codec(CodecError::UnknownValidator { name, allowed }) => {
				assert_eq!(name, "ssv");
				assert_eq!(allowed, "structure, semantics");
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn test_with_validators_keeps_format_and_source() {
		let base = SpecRenderer::swagger_yaml();
		let bound = base.with_validators(["semantics"]).unwrap();

		assert_eq!(bound.spec_format(), SpecFormat::Yaml);
		assert_eq!(bound.validator_set().kinds(), &[ValidatorKind::Semantics]);
		assert_eq!(base.validator_set(), &ValidatorSet::default());
	}

	#[tokio::test]
	async fn test_render_json() {
		let renderer = SpecRenderer::openapi();
		let mut context = RendererContext::new();

		let output = renderer.render(&petstore(), &mut context).await.unwrap();
		let parsed: Value = serde_json::from_slice(&output).unwrap();

		assert_eq!(parsed["info"]["title"], json!("Petstore"));
		assert!(!output.contains(&b'\n'));
	}

	#[tokio::test]
	async fn test_render_pretty_json() {
		let renderer = SpecRenderer::swagger_json().pretty(true);
		let output = renderer
			.render(&petstore(), &mut RendererContext::new())
			.await
			.unwrap();
		assert!(output.starts_with(b"{\n  \"openapi\""));
	}

	#[tokio::test]
	async fn test_render_yaml() {
		let renderer = SpecRenderer::swagger_yaml();
		let output = renderer
			.render(&petstore(), &mut RendererContext::new())
			.await
			.unwrap();
		let text = String::from_utf8(output.to_vec()).unwrap();

		assert!(text.starts_with("openapi:"));
		assert!(text.contains("operationId: listPets"));
	}

	#[tokio::test]
	async fn test_render_rejects_invalid_document() {
		let renderer = SpecRenderer::openapi();
		let broken = SchemaDocument::from_value(json!({"info": {}}));

		let err = renderer
			.render(&broken, &mut RendererContext::new())
			.await
			.unwrap_err();
		assert!(matches!(err, RenderError::Codec(CodecError::Validation(_))));
	}

	#[tokio::test]
	async fn test_render_without_validators() {
		let renderer = SpecRenderer::openapi().validators(ValidatorSet::none());
		let loose = SchemaDocument::from_value(json!({"info": {}}));

		let output = renderer
			.render(&loose, &mut RendererContext::new())
			.await
			.unwrap();
		assert_eq!(&output[..], b"{\"info\":{}}");
	}
}
