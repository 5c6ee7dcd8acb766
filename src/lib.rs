//! # apidocs
//!
//! OpenAPI spec documents and documentation pages for Rust web APIs.
//!
//! apidocs takes an API schema (a `utoipa` [`OpenApi`](utoipa::openapi::OpenApi)
//! or a spec document loaded from a file) and renders it either as a
//! validated spec document (`application/openapi+json`, `application/json`,
//! `application/yaml`) or as an HTML page hosting Swagger UI or ReDoc.
//!
//! ## Feature Flags
//!
//! - `minimal` - settings and codecs only
//! - `renderers` - spec and viewer renderers with content negotiation
//! - `utoipa` - render `utoipa::openapi::OpenApi` directly
//! - `full` (default) - all of the above
//!
//! ## Quick Example
//!
//! ```rust
//! use apidocs::prelude::*;
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), RenderError> {
//! let schema = SchemaDocument::from_value(json!({
//!     "openapi": "3.0.3",
//!     "info": {"title": "Pets", "version": "1.0.0"},
//!     "paths": {
//!         "/pets": {"get": {"responses": {"200": {"description": "A list of pets"}}}}
//!     }
//! }));
//!
//! let registry = RendererRegistry::documentation();
//! let mut context = RendererContext::new()
//!     .with_request("GET", "/docs/")
//!     .with_accept_header("text/html");
//!
//! let (_page, content_type) = registry.render(&schema, &mut context).await?;
//! assert_eq!(content_type, "text/html; charset=utf-8");
//! assert_eq!(context.get("spec_url").unwrap(), "/docs/?format=openapi");
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "conf")]
pub use apidocs_conf as conf;

#[cfg(feature = "codec")]
pub use apidocs_codec as codec;

#[cfg(feature = "renderers")]
pub use apidocs_renderers as renderers;

#[cfg(feature = "conf")]
pub use apidocs_conf::{DocsSettings, RedocSettings, SettingsBuilder, SwaggerSettings, ValidatorUrl};

#[cfg(feature = "codec")]
pub use apidocs_codec::{ApiSchema, CodecError, SchemaDocument, ValidatorKind, ValidatorSet};

#[cfg(feature = "renderers")]
pub use apidocs_renderers::{
	RenderError, Renderer, RendererContext, RendererRegistry, SpecRenderer, UIRenderer,
};

#[cfg(feature = "utoipa")]
pub use apidocs_codec::utoipa;

/// Common imports
pub mod prelude {
	#[cfg(feature = "conf")]
	pub use crate::conf::settings;
	#[cfg(feature = "conf")]
	pub use crate::{DocsSettings, RedocSettings, SettingsBuilder, SwaggerSettings, ValidatorUrl};

	#[cfg(feature = "codec")]
	pub use crate::codec::{Codec, JsonCodec, YamlCodec};
	#[cfg(feature = "codec")]
	pub use crate::{ApiSchema, CodecError, SchemaDocument, ValidatorKind, ValidatorSet};

	#[cfg(feature = "renderers")]
	pub use crate::renderers::{NamedRoutes, UrlResolver};
	#[cfg(feature = "renderers")]
	pub use crate::{
		RenderError, Renderer, RendererContext, RendererRegistry, SpecRenderer, UIRenderer,
	};
}
