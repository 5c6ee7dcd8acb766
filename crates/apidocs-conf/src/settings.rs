//! Process-wide documentation settings
//!
//! Renderers read [`get`] at render time, so settings installed with
//! [`configure`] take effect for every subsequent request.

use crate::redoc::RedocSettings;
use crate::sources::{ConfigSource, DefaultSource, SourceError, merge_into};
use crate::swagger::SwaggerSettings;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Both settings blocks read by the UI renderers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsSettings {
	/// Swagger UI options
	pub swagger: SwaggerSettings,

	/// ReDoc options
	pub redoc: RedocSettings,
}

/// Errors raised while assembling settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to load {description}: {source}")]
	Source {
		description: String,
		#[source]
		source: SourceError,
	},

	#[error("Invalid settings: {0}")]
	Invalid(#[from] serde_json::Error),
}

static SETTINGS: Lazy<RwLock<Arc<DocsSettings>>> =
	Lazy::new(|| RwLock::new(Arc::new(DocsSettings::default())));

/// Current process-wide settings
///
/// Returns the defaults until [`configure`] is called.
pub fn get() -> Arc<DocsSettings> {
	SETTINGS.read().clone()
}

/// Install process-wide settings
pub fn configure(settings: DocsSettings) {
	*SETTINGS.write() = Arc::new(settings);
	tracing::debug!("documentation settings configured");
}

/// Restore the built-in defaults
pub fn reset() {
	configure(DocsSettings::default());
}

/// Builder merging configuration sources by priority
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Create a builder seeded with the built-in defaults
	///
	/// # Examples
	///
	/// ```
	/// use apidocs_conf::SettingsBuilder;
	///
	/// let settings = SettingsBuilder::new().build().unwrap();
	/// assert_eq!(settings.swagger.doc_expansion.as_deref(), Some("list"));
	/// ```
	pub fn new() -> Self {
		Self {
			sources: vec![Box::new(DefaultSource)],
		}
	}

	/// Add a configuration source
	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Load every source and merge them, lowest priority first
	pub fn build(mut self) -> Result<DocsSettings, SettingsError> {
		self.sources.sort_by_key(|source| source.priority());

		let mut merged: IndexMap<String, Value> = IndexMap::new();
		for source in &self.sources {
			let layer = source.load().map_err(|source_err| SettingsError::Source {
				description: source.description(),
				source: source_err,
			})?;
			tracing::debug!(
				source = %source.description(),
				keys = layer.len(),
				"loaded settings layer"
			);
			merge_into(&mut merged, layer);
		}

		let object: serde_json::Map<String, Value> = merged.into_iter().collect();
		Ok(serde_json::from_value(Value::Object(object))?)
	}
}

impl Default for SettingsBuilder {
	fn default() -> Self {
		Self::new()
	}
}
