//! ReDoc settings

use serde::{Deserialize, Serialize};

/// ReDoc options. `None` leaves the option to ReDoc's own default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedocSettings {
	/// `lazyRendering`
	pub lazy_rendering: Option<bool>,

	/// `hideHostname`
	pub hide_hostname: Option<bool>,

	/// `expandResponses`: "all" or a comma-separated list of status codes
	#[serde(deserialize_with = "crate::de::lenient_string")]
	pub expand_responses: Option<String>,

	/// `pathInMiddle`
	pub path_in_middle: Option<bool>,
}

impl Default for RedocSettings {
	fn default() -> Self {
		Self {
			lazy_rendering: Some(true),
			hide_hostname: Some(false),
			expand_responses: Some("all".to_string()),
			path_in_middle: Some(false),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_defaults() {
		let settings = RedocSettings::default();
		assert_eq!(settings.lazy_rendering, Some(true));
		assert_eq!(settings.hide_hostname, Some(false));
		assert_eq!(settings.expand_responses.as_deref(), Some("all"));
		assert_eq!(settings.path_in_middle, Some(false));
	}

	#[test]
	fn test_partial_override() {
		let settings: RedocSettings =
			serde_json::from_value(json!({"expand_responses": "200,201"})).unwrap();
		assert_eq!(settings.expand_responses.as_deref(), Some("200,201"));
		assert_eq!(settings.lazy_rendering, Some(true));
	}
}
