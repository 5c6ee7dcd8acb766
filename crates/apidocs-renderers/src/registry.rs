//! Renderer registry and per-request selection
//!
//! # Selection Priority
//!
//! 1. Format query parameter (e.g., `?format=openapi`)
//! 2. URL format suffix (e.g., `/swagger.json`)
//! 3. `Accept` header content negotiation
//! 4. Default renderer (first registered)

use crate::error::{RenderError, RenderResult};
use crate::format_suffix::extract_format_suffix;
use crate::negotiation::parse_accept;
use crate::renderer::{Renderer, RendererContext};
use crate::spec::SpecRenderer;
use crate::ui::UIRenderer;
use apidocs_codec::ApiSchema;
use bytes::Bytes;
use std::sync::Arc;

/// Ordered set of renderers
///
/// # Examples
///
/// ```
/// use apidocs_renderers::{RendererContext, RendererRegistry, SpecRenderer, UIRenderer};
///
/// let registry = RendererRegistry::new()
///     .register(UIRenderer::swagger_ui())
///     .register(SpecRenderer::openapi());
///
/// let context = RendererContext::new().with_accept_header("application/openapi+json");
/// let renderer = registry.select(&context).unwrap();
/// assert_eq!(renderer.format(), Some("openapi"));
///
/// let context = RendererContext::new().with_request("GET", "/swagger/");
/// assert_eq!(registry.select(&context).unwrap().format(), Some("swagger"));
/// ```
#[derive(Clone, Default)]
pub struct RendererRegistry {
	renderers: Vec<Arc<dyn Renderer>>,
}

impl RendererRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// The three spec document renderers: JSON, YAML, then OpenAPI JSON
	pub fn spec_renderers() -> Self {
		Self::new()
			.register(SpecRenderer::swagger_json())
			.register(SpecRenderer::swagger_yaml())
			.register(SpecRenderer::openapi())
	}

	/// Both viewers followed by the spec renderers; Swagger UI is the default
	pub fn documentation() -> Self {
		let mut registry = Self::new()
			.register(UIRenderer::swagger_ui())
			.register(UIRenderer::redoc());
		registry
			.renderers
			.extend(Self::spec_renderers().renderers);
		registry
	}

	/// Append a renderer; earlier registrations win ties
	pub fn register(mut self, renderer: impl Renderer + 'static) -> Self {
		self.renderers.push(Arc::new(renderer));
		self
	}

	pub fn renderers(&self) -> &[Arc<dyn Renderer>] {
		&self.renderers
	}

	pub fn len(&self) -> usize {
		self.renderers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.renderers.is_empty()
	}

	/// Renderer for a format name; `None` returns the default renderer
	pub fn get_renderer(&self, format: Option<&str>) -> Option<&dyn Renderer> {
		match format {
			Some(format) => self
				.renderers
				.iter()
				.find(|renderer| renderer.format() == Some(format))
				.map(|renderer| renderer.as_ref()),
			None => self.renderers.first().map(|renderer| renderer.as_ref()),
		}
	}

	/// Renderer producing exactly `media_type` (parameters ignored)
	pub fn get_renderer_by_media_type(&self, media_type: &str) -> Option<&dyn Renderer> {
		let essence = media_type.split(';').next().unwrap_or_default().trim();
		self.renderers
			.iter()
			.find(|renderer| {
				renderer
					.media_types()
					.iter()
					.any(|candidate| candidate.eq_ignore_ascii_case(essence))
			})
			.map(|renderer| renderer.as_ref())
	}

	/// Pick the renderer for a request
	pub fn select(&self, context: &RendererContext) -> RenderResult<&dyn Renderer> {
		if self.renderers.is_empty() {
			return Err(RenderError::NoRenderers);
		}

		if let Some(format) = context.format_param.as_deref() {
			return self
				.get_renderer(Some(format))
				.ok_or_else(|| RenderError::UnsupportedFormat(format.to_string()));
		}

		if let Some(request) = &context.request
			&& let (_, Some(format)) = extract_format_suffix(&request.path)
		{
			return self
				.get_renderer(Some(format))
				.ok_or_else(|| RenderError::UnsupportedFormat(format.to_string()));
		}

		if let Some(accept) = context.accept_header.as_deref()
			&& !accept.trim().is_empty()
		{
			return self.negotiate(accept);
		}

		self.get_renderer(None).ok_or(RenderError::NoRenderers)
	}

	fn negotiate(&self, accept: &str) -> RenderResult<&dyn Renderer> {
		for range in parse_accept(accept) {
			let matched = self.renderers.iter().find(|renderer| {
				renderer
					.media_types()
					.iter()
					.any(|media_type| range.matches(media_type))
			});
			if let Some(renderer) = matched {
				return Ok(renderer.as_ref());
			}
		}

		Err(RenderError::NotAcceptable(accept.to_string()))
	}

	/// Select a renderer and render `schema`
	///
	/// Returns the body and its `Content-Type`.
	pub async fn render(
		&self,
		schema: &dyn ApiSchema,
		context: &mut RendererContext,
	) -> RenderResult<(Bytes, String)> {
		let renderer = self.select(context)?;
		tracing::debug!(
			format = renderer.format().unwrap_or_default(),
			media_type = %renderer.media_type(),
			"selected renderer"
		);

		let body = renderer.render(schema, context).await?;
		Ok((body, renderer.content_type()))
	}
}
