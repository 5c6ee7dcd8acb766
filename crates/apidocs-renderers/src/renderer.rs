//! Renderer trait and per-request context

use crate::error::RenderResult;
use apidocs_codec::ApiSchema;
use async_trait::async_trait;
use bytes::Bytes;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Request line of the request being rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestInfo {
	pub method: String,
	pub path: String,
}

/// Per-request rendering context
///
/// Carries what content negotiation needs (`Accept` header, explicit format)
/// and the template variables UI renderers read and write.
#[derive(Debug, Clone, Default)]
pub struct RendererContext {
	pub request: Option<RequestInfo>,
	pub accept_header: Option<String>,
	pub format_param: Option<String>,
	values: IndexMap<String, Value>,
}

impl RendererContext {
	/// Creates an empty context
	///
	/// # Examples
	///
	/// ```
	/// use apidocs_renderers::RendererContext;
	///
	/// let context = RendererContext::new()
	///     .with_request("GET", "/swagger/")
	///     .with_accept_header("text/html")
	///     .with_extra("api_version", "v1");
	/// assert_eq!(context.get("api_version").unwrap(), "v1");
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_request(mut self, method: impl Into<String>, path: impl Into<String>) -> Self {
		self.request = Some(RequestInfo {
			method: method.into(),
			path: path.into(),
		});
		self
	}

	pub fn with_accept_header(mut self, accept: impl Into<String>) -> Self {
		self.accept_header = Some(accept.into());
		self
	}

	/// Explicit format, e.g. from a `?format=` query parameter
	pub fn with_format_param(mut self, format: impl Into<String>) -> Self {
		self.format_param = Some(format.into());
		self
	}

	/// Adds a template variable
	pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key, value);
		self
	}

	/// Sets a template variable, replacing any previous value
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.values.insert(key.into(), value.into());
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.values.shift_remove(key)
	}

	/// Template variables in insertion order
	pub fn values(&self) -> &IndexMap<String, Value> {
		&self.values
	}

	/// Build the template context: every variable plus `request`
	pub fn to_tera_context(&self) -> tera::Context {
		let mut context = tera::Context::new();
		for (key, value) in &self.values {
			context.insert(key.as_str(), value);
		}
		if let Some(request) = &self.request {
			context.insert("request", request);
		}
		context
	}
}

/// Turns a schema into a response body
#[async_trait]
pub trait Renderer: Send + Sync {
	/// Media types this renderer produces, preferred first
	fn media_types(&self) -> Vec<String>;

	/// Preferred media type
	fn media_type(&self) -> String {
		self.media_types().into_iter().next().unwrap_or_default()
	}

	/// Short format name selectable with `?format=` or a URL suffix
	fn format(&self) -> Option<&str>;

	/// Charset appended to the content type, if any
	fn charset(&self) -> Option<&str> {
		None
	}

	/// Value for the `Content-Type` header
	fn content_type(&self) -> String {
		match self.charset() {
			Some(charset) => format!("{}; charset={}", self.media_type(), charset),
			None => self.media_type(),
		}
	}

	/// Render `schema`; renderers may add variables to `context`
	async fn render(&self, schema: &dyn ApiSchema, context: &mut RendererContext)
	-> RenderResult<Bytes>;
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_insert_replaces_and_keeps_order() {
		let mut context = RendererContext::new()
			.with_extra("b", 1)
			.with_extra("a", 2);
		context.insert("b", 3);

		let keys: Vec<_> = context.values().keys().cloned().collect();
		assert_eq!(keys, vec!["b", "a"]);
		assert_eq!(context.get("b"), Some(&json!(3)));
	}

	#[test]
	fn test_tera_context_includes_request() {
		let context = RendererContext::new()
			.with_request("GET", "/docs/")
			.with_extra("title", "Pets");

		let tera_context = context.to_tera_context();
		assert_eq!(tera_context.get("title"), Some(&json!("Pets")));
		assert_eq!(
			tera_context.get("request"),
			Some(&json!({"method": "GET", "path": "/docs/"}))
		);
	}

	#[test]
	fn test_remove() {
		let mut context = RendererContext::new().with_extra("k", true);
		assert_eq!(context.remove("k"), Some(json!(true)));
		assert!(!context.contains_key("k"));
	}
}
