//! Lenient field deserializers

use serde::Deserialize;
use serde::de::{Deserializer, Error};
use serde_json::Value;

/// Deserialize an optional string option, accepting scalars as text.
///
/// Environment values are typed on the way in (`200` becomes a number), so
/// string options such as `expand_responses` must take them back as text.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	match Option::<Value>::deserialize(deserializer)? {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(s)) => Ok(Some(s)),
		Some(Value::Number(n)) => Ok(Some(n.to_string())),
		Some(Value::Bool(b)) => Ok(Some(b.to_string())),
		Some(other) => Err(D::Error::custom(format!(
			"invalid type: {other}, expected a string"
		))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[derive(Deserialize)]
	struct Holder {
		#[serde(default, deserialize_with = "lenient_string")]
		value: Option<String>,
	}

	#[rstest]
	#[case(json!({"value": "all"}), Some("all"))]
	#[case(json!({"value": 200}), Some("200"))]
	#[case(json!({"value": false}), Some("false"))]
	#[case(json!({"value": null}), None)]
	#[case(json!({}), None)]
	fn test_lenient_string(#[case] input: Value, #[case] expected: Option<&str>) {
		let holder: Holder = serde_json::from_value(input).unwrap();
		assert_eq!(holder.value.as_deref(), expected);
	}

	#[test]
	fn test_lenient_string_rejects_collections() {
		assert!(serde_json::from_value::<Holder>(json!({"value": [200, 201]})).is_err());
	}
}
