//! # apidocs-conf
//!
//! Settings for the documentation viewers served by apidocs.
//!
//! Two independent blocks are exposed:
//!
//! - [`SwaggerSettings`] - Swagger UI behavior flags, validator URL and the
//!   session-auth toggle with its login/logout URLs
//! - [`RedocSettings`] - ReDoc behavior flags
//!
//! Settings are assembled from layered sources (defaults, TOML/JSON files,
//! environment) and installed process-wide, where renderers read them at
//! render time.
//!
//! ## Example
//!
//! ```rust,no_run
//! use apidocs_conf::settings::{self, SettingsBuilder};
//! use apidocs_conf::sources::{EnvSource, TomlFileSource};
//!
//! let docs = SettingsBuilder::new()
//!     .add_source(TomlFileSource::new("apidocs.toml").optional(true))
//!     .add_source(EnvSource::new())
//!     .build()?;
//!
//! settings::configure(docs);
//! assert!(settings::get().swagger.use_session_auth);
//! # Ok::<(), apidocs_conf::SettingsError>(())
//! ```

mod de;
pub mod redoc;
pub mod settings;
pub mod sources;
pub mod swagger;

pub use redoc::RedocSettings;
pub use settings::{DocsSettings, SettingsBuilder, SettingsError};
pub use sources::{ConfigSource, SourceError};
pub use swagger::{SwaggerSettings, ValidatorUrl};
