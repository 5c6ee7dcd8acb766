//! # apidocs-codec
//!
//! Turns an in-memory API schema into spec document bytes.
//!
//! A [`Codec`] converts the schema to a JSON value tree, runs the configured
//! [`ValidatorSet`] over it and dumps the tree as JSON or YAML. Validators are
//! picked by name from a fixed set; see [`ValidatorKind`].
//!
//! ## Example
//!
//! ```rust
//! use apidocs_codec::{Codec, JsonCodec, SchemaDocument, ValidatorSet};
//! use serde_json::json;
//!
//! let schema = SchemaDocument::from_value(json!({
//!     "openapi": "3.0.3",
//!     "info": {"title": "Pets", "version": "1.0.0"},
//!     "paths": {}
//! }));
//!
//! let codec = JsonCodec::new(ValidatorSet::from_names(["structure"])?);
//! let bytes = codec.encode(&schema)?;
//! assert!(bytes.starts_with(b"{\"openapi\""));
//! # Ok::<(), apidocs_codec::CodecError>(())
//! ```

pub mod codec;
pub mod error;
pub mod schema;
pub mod validators;

pub use codec::{Codec, CodecKind, JsonCodec, YamlCodec};
pub use error::{CodecError, CodecResult, SpecValidationError};
pub use schema::{ApiSchema, SchemaDocument};
pub use validators::{ValidatorKind, ValidatorSet};

#[cfg(feature = "utoipa")]
pub use utoipa;
