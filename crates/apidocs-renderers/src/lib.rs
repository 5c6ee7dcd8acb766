//! # apidocs-renderers
//!
//! Renderers turning an API schema into HTTP response bodies.
//!
//! ## Spec documents
//!
//! [`SpecRenderer`] encodes the schema through a codec after validating it:
//!
//! | constructor | media type | format |
//! |---|---|---|
//! | [`SpecRenderer::openapi`] | `application/openapi+json` | `openapi` |
//! | [`SpecRenderer::swagger_json`] | `application/json` | `json` |
//! | [`SpecRenderer::swagger_yaml`] | `application/yaml` | `yaml` |
//!
//! ## Documentation viewers
//!
//! [`UIRenderer`] renders an HTML page hosting Swagger UI (`swagger`) or
//! ReDoc (`redoc`), configured from [`apidocs_conf`] settings.
//!
//! ## Selection
//!
//! [`RendererRegistry`] picks a renderer from the request's format
//! parameter, URL suffix or `Accept` header.
//!
//! ```rust
//! use apidocs_codec::SchemaDocument;
//! use apidocs_renderers::{RendererContext, RendererRegistry};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), apidocs_renderers::RenderError> {
//! let schema = SchemaDocument::from_value(json!({
//!     "openapi": "3.0.3",
//!     "info": {"title": "Pets", "version": "1.0.0"},
//!     "paths": {}
//! }));
//!
//! let registry = RendererRegistry::documentation();
//! let mut context = RendererContext::new()
//!     .with_request("GET", "/docs/")
//!     .with_format_param("yaml");
//!
//! let (body, content_type) = registry.render(&schema, &mut context).await?;
//! assert_eq!(content_type, "application/yaml");
//! assert!(body.starts_with(b"openapi:"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod format_suffix;
pub mod negotiation;
pub mod registry;
pub mod renderer;
pub mod spec;
pub mod templates;
pub mod ui;
pub mod urls;

pub use error::{RenderError, RenderResult};
pub use registry::RendererRegistry;
pub use renderer::{Renderer, RendererContext, RequestInfo};
pub use spec::{SpecFormat, SpecRenderer};
pub use ui::{UIRenderer, Viewer};
pub use urls::{NamedRoutes, NoRoutes, UrlResolver, resolve_url};
