//! Documentation viewer renderers (Swagger UI, ReDoc)

use crate::error::RenderResult;
use crate::renderer::{Renderer, RendererContext};
use crate::templates::{self, REDOC_TEMPLATE, SWAGGER_UI_TEMPLATE};
use crate::urls::{NoRoutes, UrlResolver, resolve_url};
use apidocs_codec::ApiSchema;
use apidocs_conf::{DocsSettings, RedocSettings, SwaggerSettings, settings};
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{Map, Value};
use std::sync::Arc;
use tera::Tera;

/// Which documentation viewer a [`UIRenderer`] produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
	SwaggerUi,
	Redoc,
}

impl Viewer {
	pub fn template(&self) -> &'static str {
		match self {
			Viewer::SwaggerUi => SWAGGER_UI_TEMPLATE,
			Viewer::Redoc => REDOC_TEMPLATE,
		}
	}

	pub fn format(&self) -> &'static str {
		match self {
			Viewer::SwaggerUi => "swagger",
			Viewer::Redoc => "redoc",
		}
	}
}

/// Renders an HTML page hosting a documentation viewer
///
/// The page loads the spec document from `spec_url`. When the context does
/// not already carry one, it points at the current path with
/// `?format=openapi`.
///
/// # Examples
///
/// ```
/// use apidocs_renderers::{Renderer, RendererContext, UIRenderer};
/// use apidocs_codec::SchemaDocument;
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let schema = SchemaDocument::from_value(json!({
///     "openapi": "3.0.3",
///     "info": {"title": "Pets", "version": "1.0.0"},
///     "paths": {}
/// }));
///
/// let renderer = UIRenderer::redoc();
/// let mut context = RendererContext::new().with_request("GET", "/redoc/");
/// let html = renderer.render(&schema, &mut context).await.unwrap();
///
/// assert_eq!(context.get("title").unwrap(), "Pets");
/// assert_eq!(context.get("spec_url").unwrap(), "/redoc/?format=openapi");
/// assert!(String::from_utf8_lossy(&html).contains("Redoc.init"));
/// # }
/// ```
#[derive(Clone)]
pub struct UIRenderer {
	viewer: Viewer,
	settings: Option<Arc<DocsSettings>>,
	resolver: Arc<dyn UrlResolver>,
	templates: Option<Arc<Tera>>,
}

impl UIRenderer {
	pub fn new(viewer: Viewer) -> Self {
		Self {
			viewer,
			settings: None,
			resolver: Arc::new(NoRoutes),
			templates: None,
		}
	}

	/// Swagger UI page
	pub fn swagger_ui() -> Self {
		Self::new(Viewer::SwaggerUi)
	}

	/// ReDoc page
	pub fn redoc() -> Self {
		Self::new(Viewer::Redoc)
	}

	/// Use these settings instead of the process-wide ones
	pub fn with_settings(mut self, settings: DocsSettings) -> Self {
		self.settings = Some(Arc::new(settings));
		self
	}

	/// Route table used to resolve login/logout route names
	pub fn with_resolver(mut self, resolver: impl UrlResolver + 'static) -> Self {
		self.resolver = Arc::new(resolver);
		self
	}

	/// Render with a host-provided Tera instance
	///
	/// It must hold a template under [`Viewer::template`]'s name.
	pub fn with_templates(mut self, tera: Tera) -> Self {
		self.templates = Some(Arc::new(tera));
		self
	}

	pub fn viewer(&self) -> Viewer {
		self.viewer
	}

	fn settings(&self) -> Arc<DocsSettings> {
		self.settings.clone().unwrap_or_else(settings::get)
	}

	/// Write the viewer variables into `context`
	///
	/// Sets `title`, `version`, `swagger_settings`, `redoc_settings`,
	/// `USE_SESSION_AUTH` and, when configured, `LOGIN_URL` / `LOGOUT_URL`.
	/// An existing `spec_url` is kept.
	pub fn set_context(
		&self,
		context: &mut RendererContext,
		schema: &dyn ApiSchema,
	) -> RenderResult<()> {
		let docs = self.settings();

		context.insert("title", schema.title());
		context.insert("version", schema.version());
		context.insert(
			"swagger_settings",
			settings_json(swagger_ui_settings(&docs.swagger))?,
		);
		context.insert("redoc_settings", settings_json(redoc_settings(&docs.redoc))?);
		context.insert("USE_SESSION_AUTH", docs.swagger.use_session_auth);
		for (key, url) in auth_urls(&docs.swagger, self.resolver.as_ref())? {
			context.insert(key, url);
		}

		if !context.contains_key("spec_url") {
			let path = context
				.request
				.as_ref()
				.map(|request| request.path.as_str())
				.unwrap_or_default();
			context.insert("spec_url", format!("{path}?format=openapi"));
		}

		Ok(())
	}
}

#[async_trait]
impl Renderer for UIRenderer {
	fn media_types(&self) -> Vec<String> {
		vec!["text/html".to_string()]
	}

	fn format(&self) -> Option<&str> {
		Some(self.viewer.format())
	}

	fn charset(&self) -> Option<&str> {
		Some("utf-8")
	}

	async fn render(
		&self,
		schema: &dyn ApiSchema,
		context: &mut RendererContext,
	) -> RenderResult<Bytes> {
		self.set_context(context, schema)?;

		let tera = match &self.templates {
			Some(tera) => tera.as_ref(),
			None => templates::builtin()?,
		};
		let html = tera.render(self.viewer.template(), &context.to_tera_context())?;

		tracing::debug!(
			template = self.viewer.template(),
			bytes = html.len(),
			"rendered documentation page"
		);
		Ok(Bytes::from(html))
	}
}

/// Swagger UI configuration object
///
/// Unset options are left out so Swagger UI applies its own defaults.
/// `validatorUrl` is added only when it is not the viewer default.
///
/// # Examples
///
/// ```
/// use apidocs_conf::{SwaggerSettings, ValidatorUrl};
/// use apidocs_renderers::ui::swagger_ui_settings;
/// use serde_json::Value;
///
/// let mut settings = SwaggerSettings::default();
/// settings.deep_linking = None;
/// settings.validator_url = ValidatorUrl::Disabled;
///
/// let ui = swagger_ui_settings(&settings);
/// assert!(!ui.contains_key("deepLinking"));
/// assert_eq!(ui["validatorUrl"], Value::Null);
/// ```
pub fn swagger_ui_settings(settings: &SwaggerSettings) -> Map<String, Value> {
	let mut data = Map::new();
	insert_set(&mut data, "operationsSorter", &settings.operations_sorter);
	insert_set(&mut data, "tagsSorter", &settings.tags_sorter);
	insert_set(&mut data, "docExpansion", &settings.doc_expansion);
	insert_set(&mut data, "deepLinking", &settings.deep_linking);
	insert_set(&mut data, "showExtensions", &settings.show_extensions);
	insert_set(
		&mut data,
		"defaultModelRendering",
		&settings.default_model_rendering,
	);
	insert_set(
		&mut data,
		"defaultModelExpandDepth",
		&settings.default_model_depth,
	);
	if let Some(validator_url) = settings.validator_url.to_ui_value() {
		data.insert("validatorUrl".to_string(), validator_url);
	}
	data
}

/// ReDoc configuration object, unset options left out
pub fn redoc_settings(settings: &RedocSettings) -> Map<String, Value> {
	let mut data = Map::new();
	insert_set(&mut data, "lazyRendering", &settings.lazy_rendering);
	insert_set(&mut data, "hideHostname", &settings.hide_hostname);
	insert_set(&mut data, "expandResponses", &settings.expand_responses);
	insert_set(&mut data, "pathInMiddle", &settings.path_in_middle);
	data
}

/// `LOGIN_URL` / `LOGOUT_URL` for whichever of the two is configured
pub fn auth_urls(
	settings: &SwaggerSettings,
	resolver: &dyn UrlResolver,
) -> RenderResult<Vec<(&'static str, String)>> {
	let mut urls = Vec::new();
	if let Some(login_url) = &settings.login_url {
		urls.push(("LOGIN_URL", resolve_url(login_url, resolver)?));
	}
	if let Some(logout_url) = &settings.logout_url {
		urls.push(("LOGOUT_URL", resolve_url(logout_url, resolver)?));
	}
	Ok(urls)
}

fn insert_set<T: Clone + Into<Value>>(data: &mut Map<String, Value>, key: &str, value: &Option<T>) {
	if let Some(value) = value {
		data.insert(key.to_string(), value.clone().into());
	}
}

// The string is embedded in a <script> element.
fn settings_json(data: Map<String, Value>) -> RenderResult<String> {
	Ok(serde_json::to_string(&Value::Object(data))?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::RenderError;
	use crate::urls::NamedRoutes;
	use apidocs_codec::SchemaDocument;
	use apidocs_conf::ValidatorUrl;
	use serde_json::json;

	fn schema() -> SchemaDocument {
		SchemaDocument::from_value(json!({
			"swagger": "2.0",
			"info": {"title": "Snippets API", "version": "v1"},
			"paths": {}
		}))
	}

	#[test]
	fn test_default_swagger_ui_settings() {
		let ui = swagger_ui_settings(&SwaggerSettings::default());
		assert_eq!(
			Value::Object(ui),
			json!({
				"docExpansion": "list",
				"deepLinking": false,
				"showExtensions": true,
				"defaultModelRendering": "model",
				"defaultModelExpandDepth": 2
			})
		);
	}

	#[test]
	fn test_validator_url_only_when_configured() {
		let mut settings = SwaggerSettings::default();
		assert!(!swagger_ui_settings(&settings).contains_key("validatorUrl"));

		settings.validator_url = ValidatorUrl::Url("https://online.swagger.io/validator".into());
		assert_eq!(
			swagger_ui_settings(&settings)["validatorUrl"],
			json!("https://online.swagger.io/validator")
		);
	}

	#[test]
	fn test_redoc_settings_drop_unset() {
		let settings = RedocSettings {
			hide_hostname: None,
			..RedocSettings::default()
		};
		assert_eq!(
			Value::Object(redoc_settings(&settings)),
			json!({"lazyRendering": true, "expandResponses": "all", "pathInMiddle": false})
		);
	}

	#[test]
	fn test_auth_urls_only_when_configured() {
		let routes = NamedRoutes::new().route("login", "/accounts/login/");
		assert!(auth_urls(&SwaggerSettings::default(), &routes).unwrap().is_empty());

		let settings = SwaggerSettings {
			login_url: Some("login".into()),
			..SwaggerSettings::default()
		};
		assert_eq!(
			auth_urls(&settings, &routes).unwrap(),
			vec![("LOGIN_URL", "/accounts/login/".to_string())]
		);
	}

	#[test]
	fn test_set_context() {
		let docs = DocsSettings {
			swagger: SwaggerSettings {
				use_session_auth: false,
				logout_url: Some("/logout/".into()),
				..SwaggerSettings::default()
			},
			..DocsSettings::default()
		};
		let renderer = UIRenderer::swagger_ui().with_settings(docs);
		let mut context = RendererContext::new().with_request("GET", "/swagger/");

		renderer.set_context(&mut context, &schema()).unwrap();

		assert_eq!(context.get("title"), Some(&json!("Snippets API")));
		assert_eq!(context.get("version"), Some(&json!("v1")));
		assert_eq!(context.get("USE_SESSION_AUTH"), Some(&json!(false)));
		assert_eq!(context.get("LOGOUT_URL"), Some(&json!("/logout/")));
		assert!(!context.contains_key("LOGIN_URL"));
		assert_eq!(
			context.get("spec_url"),
			Some(&json!("/swagger/?format=openapi"))
		);

		let redoc: Value =
			serde_json::from_str(context.get("redoc_settings").unwrap().as_str().unwrap()).unwrap();
		assert_eq!(redoc["expandResponses"], json!("all"));
	}

	#[test]
	fn test_set_context_keeps_spec_url() {
		let renderer = UIRenderer::redoc().with_settings(DocsSettings::default());
		let mut context = RendererContext::new().with_extra("spec_url", "/schema.json");

		renderer.set_context(&mut context, &schema()).unwrap();
		assert_eq!(context.get("spec_url"), Some(&json!("/schema.json")));
	}

	#[test]
	fn test_settings_json_escapes_script_close() {
		let mut settings = SwaggerSettings::default();
		settings.validator_url = ValidatorUrl::Url("</script><script>alert(1)".into());

		let text = settings_json(swagger_ui_settings(&settings)).unwrap();
		assert!(!text.contains("</script>"));
		let parsed: Value = serde_json::from_str(&text).unwrap();
		assert_eq!(parsed["validatorUrl"], json!("</script><script>alert(1)"));
	}

	#[test]
	fn test_unresolvable_login_name_fails() {
		let docs = DocsSettings {
			swagger: SwaggerSettings {
				login_url: Some("login".into()),
				..SwaggerSettings::default()
			},
			..DocsSettings::default()
		};
		let renderer = UIRenderer::swagger_ui().with_settings(docs);

		let err = renderer
			.set_context(&mut RendererContext::new(), &schema())
			.unwrap_err();
		assert!(matches!(err, RenderError::NoReverseMatch(_)));
	}

	#[tokio::test]
	async fn test_render_swagger_ui_page() {
		let docs = DocsSettings {
			swagger: SwaggerSettings {
				login_url: Some("login".into()),
				..SwaggerSettings::default()
			},
			..DocsSettings::default()
		};
		let renderer = UIRenderer::swagger_ui()
			.with_settings(docs)
			.with_resolver(NamedRoutes::new().route("login", "/accounts/login/"));
		let mut context = RendererContext::new().with_request("GET", "/swagger/");

		let html = renderer.render(&schema(), &mut context).await.unwrap();
		let html = String::from_utf8(html.to_vec()).unwrap();

		assert!(html.contains("<title>Snippets API - v1</title>"));
		// URLs come out HTML-escaped
		assert!(html.contains("session-login"));
		assert!(html.contains("accounts&#x2F;login&#x2F;?next="));
		assert!(!html.contains("session-logout"));
		assert!(html.contains("?format=openapi"));
		assert!(html.contains(r#""docExpansion":"list""#));
		assert_eq!(renderer.content_type(), "text/html; charset=utf-8");
	}

	#[tokio::test]
	async fn test_render_with_custom_templates() {
		let mut tera = Tera::default();
		tera.add_raw_template(REDOC_TEMPLATE, "{{ title }}|{{ redoc_settings | safe }}")
			.unwrap();
		let renderer = UIRenderer::redoc()
			.with_settings(DocsSettings::default())
			.with_templates(tera);

		let html = renderer
			.render(&schema(), &mut RendererContext::new())
			.await
			.unwrap();
		assert_eq!(
			&html[..],
			br#"Snippets API|{"lazyRendering":true,"hideHostname":false,"expandResponses":"all","pathInMiddle":false}"#
		);
	}
}
