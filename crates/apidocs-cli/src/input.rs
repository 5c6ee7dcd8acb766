//! Loading schema and settings files

use anyhow::{Context, bail};
use apidocs_codec::SchemaDocument;
use apidocs_conf::sources::{EnvSource, JsonFileSource, TomlFileSource};
use apidocs_conf::{DocsSettings, SettingsBuilder};
use std::path::Path;

/// Maximum schema file size (50 MB).
const MAX_SCHEMA_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Read a JSON or YAML schema document
///
/// `.json`, `.yaml` and `.yml` pick the parser; any other extension is tried
/// as JSON first, then YAML.
pub(crate) fn load_schema(path: &Path) -> anyhow::Result<SchemaDocument> {
	let metadata =
		std::fs::metadata(path).with_context(|| format!("Cannot access {}", path.display()))?;
	if metadata.len() > MAX_SCHEMA_FILE_SIZE {
		bail!(
			"Schema file exceeds maximum size ({} bytes, limit {} bytes)",
			metadata.len(),
			MAX_SCHEMA_FILE_SIZE
		);
	}

	let content = std::fs::read_to_string(path)
		.with_context(|| format!("Cannot read {}", path.display()))?;
	let extension = path
		.extension()
		.and_then(|s| s.to_str())
		.map(str::to_ascii_lowercase);

	let schema = match extension.as_deref() {
		Some("json") => SchemaDocument::from_json_str(&content)
			.with_context(|| format!("Invalid JSON in {}", path.display()))?,
		Some("yaml" | "yml") => SchemaDocument::from_yaml_str(&content)
			.with_context(|| format!("Invalid YAML in {}", path.display()))?,
		_ => match SchemaDocument::from_json_str(&content) {
			Ok(schema) => schema,
			Err(_) => SchemaDocument::from_yaml_str(&content).with_context(|| {
				format!("{} is neither JSON nor YAML", path.display())
			})?,
		},
	};

	tracing::info!(path = %path.display(), "loaded schema");
	Ok(schema)
}

/// Build viewer settings: defaults, then the optional file, then `env`
pub(crate) fn load_settings(path: Option<&Path>, env: EnvSource) -> anyhow::Result<DocsSettings> {
	let mut builder = SettingsBuilder::new();
	if let Some(path) = path {
		builder = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => builder.add_source(TomlFileSource::new(path)),
			Some("json") => builder.add_source(JsonFileSource::new(path)),
			other => bail!("Unsupported settings file format: {:?}", other),
		};
	}

	Ok(builder.add_source(env).build()?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use apidocs_codec::ApiSchema;
	use rstest::rstest;
	use std::io::Write;

	fn no_vars() -> [(&'static str, &'static str); 0] {
		[]
	}

	fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
		let path = dir.path().join(name);
		let mut file = std::fs::File::create(&path).unwrap();
		file.write_all(content.as_bytes()).unwrap();
		path
	}

	#[rstest]
	#[case("schema.json", r#"{"openapi": "3.0.3", "info": {"title": "Pets", "version": "1"}}"#)]
	#[case("schema.yaml", "openapi: 3.0.3\ninfo:\n  title: Pets\n  version: '1'\n")]
	#[case("schema.txt", "openapi: 3.0.3\ninfo:\n  title: Pets\n  version: '1'\n")]
	fn test_load_schema(#[case] name: &str, #[case] content: &str) {
		let dir = tempfile::tempdir().unwrap();
		let path = write_file(&dir, name, content);

		let schema = load_schema(&path).unwrap();
		assert_eq!(schema.title(), "Pets");
		assert_eq!(schema.version(), "1");
	}

	#[test]
	fn test_load_schema_reports_bad_json() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_file(&dir, "schema.json", "openapi: 3.0.3");

		let err = load_schema(&path).unwrap_err();
		assert!(err.to_string().starts_with("Invalid JSON in"));
	}

	#[test]
	fn test_load_settings_from_toml() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_file(
			&dir,
			"apidocs.toml",
			"[swagger]\ndoc_expansion = \"none\"\n\n[redoc]\nhide_hostname = true\n",
		);

		let settings = load_settings(Some(&path), EnvSource::from_vars(no_vars())).unwrap();
		assert_eq!(settings.swagger.doc_expansion.as_deref(), Some("none"));
		assert_eq!(settings.redoc.hide_hostname, Some(true));
	}

	#[test]
	fn test_environment_overrides_settings_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = write_file(&dir, "apidocs.json", r#"{"redoc": {"expand_responses": "all"}}"#);

		let env = EnvSource::from_vars([
			("APIDOCS_REDOC__EXPAND_RESPONSES", "200"),
			("APIDOCS_SWAGGER__DEEP_LINKING", "true"),
		]);
		let settings = load_settings(Some(&path), env).unwrap();
		assert_eq!(settings.redoc.expand_responses.as_deref(), Some("200"));
		assert_eq!(settings.swagger.deep_linking, Some(true));
	}

	#[test]
	fn test_load_settings_rejects_unknown_extension() {
		let err =
			load_settings(Some(Path::new("apidocs.ini")), EnvSource::from_vars(no_vars())).unwrap_err();
		assert!(err.to_string().contains("Unsupported settings file format"));
	}
}
