//! Login/logout URL resolution
//!
//! Settings may name a route instead of spelling out a URL. [`resolve_url`]
//! turns either form into a URL using a host-supplied [`UrlResolver`].

use crate::error::{RenderError, RenderResult};
use indexmap::IndexMap;

/// Reverses route names into paths
pub trait UrlResolver: Send + Sync {
	/// Path for the route called `name`, or `None` if no such route exists
	fn reverse(&self, name: &str) -> Option<String>;
}

/// Resolver that knows no routes; every value must already be a URL
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRoutes;

impl UrlResolver for NoRoutes {
	fn reverse(&self, _name: &str) -> Option<String> {
		None
	}
}

/// Fixed table of route names
///
/// # Examples
///
/// ```
/// use apidocs_renderers::urls::{NamedRoutes, UrlResolver};
///
/// let routes = NamedRoutes::new().route("login", "/accounts/login/");
/// assert_eq!(routes.reverse("login").as_deref(), Some("/accounts/login/"));
/// assert_eq!(routes.reverse("logout"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NamedRoutes {
	routes: IndexMap<String, String>,
}

impl NamedRoutes {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `name` as reversing to `path`
	pub fn route(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
		self.routes.insert(name.into(), path.into());
		self
	}

	pub fn has_route(&self, name: &str) -> bool {
		self.routes.contains_key(name)
	}
}

impl UrlResolver for NamedRoutes {
	fn reverse(&self, name: &str) -> Option<String> {
		self.routes.get(name).cloned()
	}
}

/// Resolve a configured login/logout value into a URL
///
/// - `./` and `../` relative URLs are returned unchanged
/// - a registered route name is reversed
/// - anything else containing `/` or `.` is taken as a literal URL
/// - a bare name with no matching route is [`RenderError::NoReverseMatch`]
///
/// # Examples
///
/// ```
/// use apidocs_renderers::urls::{NamedRoutes, resolve_url};
///
/// let routes = NamedRoutes::new().route("login", "/accounts/login/");
/// assert_eq!(resolve_url("login", &routes).unwrap(), "/accounts/login/");
/// assert_eq!(resolve_url("/auth/login/", &routes).unwrap(), "/auth/login/");
/// assert_eq!(resolve_url("../login/", &routes).unwrap(), "../login/");
/// assert!(resolve_url("signin", &routes).is_err());
/// ```
pub fn resolve_url(value: &str, resolver: &dyn UrlResolver) -> RenderResult<String> {
	if value.starts_with("./") || value.starts_with("../") {
		return Ok(value.to_string());
	}

	if let Some(path) = resolver.reverse(value) {
		return Ok(path);
	}

	if value.contains('/') || value.contains('.') {
		return Ok(value.to_string());
	}

	Err(RenderError::NoReverseMatch(value.to_string()))
}
