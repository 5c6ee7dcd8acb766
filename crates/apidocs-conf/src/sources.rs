//! Configuration sources for layered settings
//!
//! Sources are merged in priority order
//! (environment variables > JSON files > TOML files > defaults).
//! Each source yields a map of top-level sections (`swagger`, `redoc`) to
//! JSON values; nested objects are merged key by key.

use crate::settings::DocsSettings;
use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Default prefix for environment variables
pub const DEFAULT_ENV_PREFIX: &str = "APIDOCS_";

/// Separator between section and option in environment variable names
pub const ENV_SECTION_SEPARATOR: &str = "__";

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid source: {0}")]
	InvalidSource(String),
}

/// Built-in defaults, always the lowest layer
pub struct DefaultSource;

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		match serde_json::to_value(DocsSettings::default())? {
			Value::Object(map) => Ok(map.into_iter().collect()),
			_ => Err(SourceError::InvalidSource(
				"defaults did not serialize to an object".to_string(),
			)),
		}
	}

	fn priority(&self) -> u8 {
		0
	}

	fn description(&self) -> String {
		"Built-in defaults".to_string()
	}
}

/// TOML file configuration source
pub struct TomlFileSource {
	path: PathBuf,
	optional: bool,
}

impl TomlFileSource {
	/// Create a new TOML file source
	///
	/// # Examples
	///
	/// ```
	/// use apidocs_conf::sources::{ConfigSource, TomlFileSource};
	///
	/// let source = TomlFileSource::new("apidocs.toml");
	/// assert_eq!(source.priority(), 50);
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			optional: false,
		}
	}

	/// Treat a missing file as an empty layer instead of an error
	pub fn optional(mut self, optional: bool) -> Self {
		self.optional = optional;
		self
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let Some(content) = read_source_file(&self.path, self.optional)? else {
			return Ok(IndexMap::new());
		};

		let parsed: toml::Value = toml::from_str(&content)?;
		object_to_map(serde_json::to_value(parsed)?, &self.path)
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// JSON file configuration source
///
/// Unlike TOML, JSON can express `null`, which unsets an option.
pub struct JsonFileSource {
	path: PathBuf,
	optional: bool,
}

impl JsonFileSource {
	/// Create a new JSON file source
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			optional: false,
		}
	}

	/// Treat a missing file as an empty layer instead of an error
	pub fn optional(mut self, optional: bool) -> Self {
		self.optional = optional;
		self
	}
}

impl ConfigSource for JsonFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let Some(content) = read_source_file(&self.path, self.optional)? else {
			return Ok(IndexMap::new());
		};

		object_to_map(serde_json::from_str(&content)?, &self.path)
	}

	fn priority(&self) -> u8 {
		60
	}

	fn description(&self) -> String {
		format!("JSON file: {}", self.path.display())
	}
}

/// Environment variable configuration source
///
/// `APIDOCS_SWAGGER__DOC_EXPANSION=full` sets `swagger.doc_expansion`.
pub struct EnvSource {
	prefix: String,
	vars: Option<Vec<(String, String)>>,
}

impl EnvSource {
	/// Create a source reading the process environment with the default
	/// `APIDOCS_` prefix
	///
	/// # Examples
	///
	/// ```
	/// use apidocs_conf::sources::EnvSource;
	///
	/// let source = EnvSource::new().with_prefix("MYAPP_DOCS_");
	/// ```
	pub fn new() -> Self {
		Self {
			prefix: DEFAULT_ENV_PREFIX.to_string(),
			vars: None,
		}
	}

	/// Create a source over an explicit set of variables instead of the
	/// process environment
	///
	/// # Examples
	///
	/// ```
	/// use apidocs_conf::sources::{ConfigSource, EnvSource};
	///
	/// let source = EnvSource::from_vars([("APIDOCS_REDOC__HIDE_HOSTNAME", "true")]);
	/// let config = source.load().unwrap();
	/// assert_eq!(config["redoc"]["hide_hostname"], true);
	/// ```
	pub fn from_vars<I, K, V>(vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			prefix: DEFAULT_ENV_PREFIX.to_string(),
			vars: Some(
				vars.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}

	/// Set the prefix filter for environment variables
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		let vars: Vec<(String, String)> = match &self.vars {
			Some(vars) => vars.clone(),
			None => std::env::vars().collect(),
		};

		let mut config = IndexMap::new();

		for (key, value) in vars {
			let Some(clean_key) = key.strip_prefix(&self.prefix) else {
				continue;
			};

			let lower_key = clean_key.to_lowercase();
			let Some((section, option)) = lower_key.split_once(ENV_SECTION_SEPARATOR) else {
				tracing::warn!(variable = %key, "ignoring environment variable without a section");
				continue;
			};

			let entry = config
				.entry(section.to_string())
				.or_insert_with(|| Value::Object(serde_json::Map::new()));
			if let Value::Object(map) = entry {
				map.insert(option.to_string(), parse_env_value(&value));
			}
		}

		Ok(config)
	}

	fn priority(&self) -> u8 {
		100
	}

	fn description(&self) -> String {
		format!("Environment variables ({}*)", self.prefix)
	}
}

/// Parse an environment variable value into a typed JSON value
///
/// # Examples
///
/// ```
/// use apidocs_conf::sources::parse_env_value;
/// use serde_json::{Value, json};
///
/// assert_eq!(parse_env_value("true"), json!(true));
/// assert_eq!(parse_env_value("-1"), json!(-1));
/// assert_eq!(parse_env_value("none"), Value::Null);
/// assert_eq!(parse_env_value("alpha"), json!("alpha"));
/// ```
pub fn parse_env_value(value: &str) -> Value {
	let trimmed = value.trim();
	match trimmed.to_lowercase().as_str() {
		"true" => return Value::Bool(true),
		"false" => return Value::Bool(false),
		"null" | "none" => return Value::Null,
		_ => {}
	}

	if let Ok(n) = trimmed.parse::<i64>() {
		return Value::Number(n.into());
	}

	Value::String(trimmed.to_string())
}

/// Merge `overlay` into `base`, descending into nested objects
pub fn merge_into(base: &mut IndexMap<String, Value>, overlay: IndexMap<String, Value>) {
	for (key, value) in overlay {
		if let Value::Object(incoming) = value {
			if let Some(Value::Object(existing)) = base.get_mut(&key) {
				merge_objects(existing, incoming);
				continue;
			}
			base.insert(key, Value::Object(incoming));
		} else {
			base.insert(key, value);
		}
	}
}

fn merge_objects(base: &mut serde_json::Map<String, Value>, overlay: serde_json::Map<String, Value>) {
	for (key, value) in overlay {
		if let Value::Object(incoming) = value {
			if let Some(Value::Object(existing)) = base.get_mut(&key) {
				merge_objects(existing, incoming);
				continue;
			}
			base.insert(key, Value::Object(incoming));
		} else {
			base.insert(key, value);
		}
	}
}

fn read_source_file(path: &Path, optional: bool) -> Result<Option<String>, SourceError> {
	match fs::read_to_string(path) {
		Ok(content) => Ok(Some(content)),
		Err(e) if optional && e.kind() == std::io::ErrorKind::NotFound => {
			tracing::debug!(path = %path.display(), "optional settings file not found");
			Ok(None)
		}
		Err(source) => Err(SourceError::Io {
			path: path.to_path_buf(),
			source,
		}),
	}
}

fn object_to_map(value: Value, path: &Path) -> Result<IndexMap<String, Value>, SourceError> {
	match value {
		Value::Object(map) => Ok(map.into_iter().collect()),
		_ => Err(SourceError::InvalidSource(format!(
			"{} must contain a table at the top level",
			path.display()
		))),
	}
}
