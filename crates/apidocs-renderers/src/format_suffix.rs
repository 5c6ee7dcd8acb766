//! Format suffix extraction for spec document URLs
//!
//! A request for `/swagger.json` selects the renderer whose format is `json`
//! just like `/swagger?format=json` would.
//!
//! # Examples
//!
//! ```
//! use apidocs_renderers::format_suffix::extract_format_suffix;
//!
//! let (path, format) = extract_format_suffix("/swagger.yml");
//! assert_eq!(path, "/swagger");
//! assert_eq!(format, Some("yaml"));
//!
//! let (path, format) = extract_format_suffix("/swagger/");
//! assert_eq!(path, "/swagger/");
//! assert_eq!(format, None);
//! ```

/// Recognized suffixes and the format each one selects
const SUFFIX_FORMATS: &[(&str, &str)] = &[("json", "json"), ("yaml", "yaml"), ("yml", "yaml")];

/// Splits a recognized format suffix off the last path segment
///
/// Returns `(path_without_suffix, format)`; the format is the renderer
/// format name, so `yml` comes back as `yaml`. Unknown suffixes and dots in
/// earlier segments are left alone.
pub fn extract_format_suffix(path: &str) -> (&str, Option<&'static str>) {
	let segment_start = path.rfind('/').map_or(0, |index| index + 1);
	if let Some(dot_index) = path[segment_start..].rfind('.') {
		let dot_index = segment_start + dot_index;
		if let Some(format) = format_for_suffix(&path[dot_index + 1..]) {
			return (&path[..dot_index], Some(format));
		}
	}

	(path, None)
}

/// Format selected by a suffix, if recognized
pub fn format_for_suffix(suffix: &str) -> Option<&'static str> {
	SUFFIX_FORMATS
		.iter()
		.find(|(known, _)| known.eq_ignore_ascii_case(suffix))
		.map(|(_, format)| *format)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/swagger.json", "/swagger", Some("json"))]
	#[case("/swagger.yaml", "/swagger", Some("yaml"))]
	#[case("/swagger.YML", "/swagger", Some("yaml"))]
	#[case("/swagger.xml", "/swagger.xml", None)]
	#[case("/api/v1.0/schema", "/api/v1.0/schema", None)]
	#[case("/v1.json/schema", "/v1.json/schema", None)]
	#[case("swagger.json", "swagger", Some("json"))]
	fn test_extract_format_suffix(
		#[case] input: &str,
		#[case] path: &str,
		#[case] format: Option<&str>,
	) {
		assert_eq!(extract_format_suffix(input), (path, format));
	}
}
