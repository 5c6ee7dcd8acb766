//! Swagger UI settings

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Validator badge URL for Swagger UI.
///
/// Swagger UI distinguishes between "use my built-in validator", "no
/// validator" and "use this validator", so the setting is tri-state. In
/// settings files an empty string selects the viewer default and `null`
/// disables the badge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidatorUrl {
	/// Leave `validatorUrl` out of the UI configuration.
	#[default]
	ViewerDefault,
	/// Emit `validatorUrl: null`, which turns the badge off.
	Disabled,
	/// Emit the given URL.
	Url(String),
}

impl ValidatorUrl {
	/// Value to emit into the UI configuration, or `None` when the key must
	/// be left out entirely.
	///
	/// # Examples
	///
	/// ```
	/// use apidocs_conf::ValidatorUrl;
	/// use serde_json::{Value, json};
	///
	/// assert_eq!(ValidatorUrl::ViewerDefault.to_ui_value(), None);
	/// assert_eq!(ValidatorUrl::Disabled.to_ui_value(), Some(Value::Null));
	/// assert_eq!(
	///     ValidatorUrl::Url("https://validator.example".into()).to_ui_value(),
	///     Some(json!("https://validator.example"))
	/// );
	/// ```
	pub fn to_ui_value(&self) -> Option<serde_json::Value> {
		match self {
			ValidatorUrl::ViewerDefault => None,
			ValidatorUrl::Disabled => Some(serde_json::Value::Null),
			ValidatorUrl::Url(url) => Some(serde_json::Value::String(url.clone())),
		}
	}
}

impl Serialize for ValidatorUrl {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			ValidatorUrl::ViewerDefault => serializer.serialize_str(""),
			ValidatorUrl::Disabled => serializer.serialize_none(),
			ValidatorUrl::Url(url) => serializer.serialize_str(url),
		}
	}
}

impl<'de> Deserialize<'de> for ValidatorUrl {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(match Option::<String>::deserialize(deserializer)? {
			None => ValidatorUrl::Disabled,
			Some(url) if url.is_empty() => ValidatorUrl::ViewerDefault,
			Some(url) => ValidatorUrl::Url(url),
		})
	}
}

/// Swagger UI options.
///
/// `None` on an optional field means "unset": the option is not passed to
/// the viewer, which then applies its own default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwaggerSettings {
	/// Show the session login/logout controls
	pub use_session_auth: bool,

	/// Login URL or route name, resolved at render time
	#[serde(deserialize_with = "crate::de::lenient_string")]
	pub login_url: Option<String>,

	/// Logout URL or route name, resolved at render time
	#[serde(deserialize_with = "crate::de::lenient_string")]
	pub logout_url: Option<String>,

	/// Validator badge URL
	pub validator_url: ValidatorUrl,

	/// `operationsSorter`: "alpha", "method" or unset
	#[serde(deserialize_with = "crate::de::lenient_string")]
	pub operations_sorter: Option<String>,

	/// `tagsSorter`: "alpha" or unset
	#[serde(deserialize_with = "crate::de::lenient_string")]
	pub tags_sorter: Option<String>,

	/// `docExpansion`: "none", "list" or "full"
	#[serde(deserialize_with = "crate::de::lenient_string")]
	pub doc_expansion: Option<String>,

	/// `deepLinking`
	pub deep_linking: Option<bool>,

	/// `showExtensions`
	pub show_extensions: Option<bool>,

	/// `defaultModelRendering`: "model" or "example"
	#[serde(deserialize_with = "crate::de::lenient_string")]
	pub default_model_rendering: Option<String>,

	/// `defaultModelExpandDepth`; -1 hides the models section
	pub default_model_depth: Option<i64>,
}

impl Default for SwaggerSettings {
	fn default() -> Self {
		Self {
			use_session_auth: true,
			login_url: None,
			logout_url: None,
			validator_url: ValidatorUrl::ViewerDefault,
			operations_sorter: None,
			tags_sorter: None,
			doc_expansion: Some("list".to_string()),
			deep_linking: Some(false),
			show_extensions: Some(true),
			default_model_rendering: Some("model".to_string()),
			default_model_depth: Some(2),
		}
	}
}
