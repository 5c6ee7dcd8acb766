//! Structural checks: required fields, field types, allowed keys

use super::{SpecVersion, pointer_segment};
use serde_json::{Map, Value};

const PATH_ITEM_KEYS: &[&str] = &["parameters", "$ref", "summary", "description", "servers"];

pub(super) fn check(spec: &Value) -> Vec<String> {
	let mut errors = Vec::new();

	let Some(root) = spec.as_object() else {
		errors.push("document root must be an object".to_string());
		return errors;
	};

	let Some(version) = SpecVersion::detect(spec) else {
		errors.push(
			"document must declare `swagger: \"2.0\"` or `openapi: \"3.x\"`".to_string(),
		);
		return errors;
	};

	check_info(root, &mut errors);

	match root.get("paths") {
		None if version.requires_paths() => errors.push("/paths is required".to_string()),
		None => {}
		Some(Value::Object(paths)) => check_paths(paths, version, &mut errors),
		Some(_) => errors.push("/paths must be an object".to_string()),
	}

	errors
}

fn check_info(root: &Map<String, Value>, errors: &mut Vec<String>) {
	let Some(info) = root.get("info").and_then(Value::as_object) else {
		errors.push("/info must be an object".to_string());
		return;
	};

	for field in ["title", "version"] {
		if !info.get(field).is_some_and(Value::is_string) {
			errors.push(format!("/info/{field} must be a string"));
		}
	}
}

fn check_paths(paths: &Map<String, Value>, version: SpecVersion, errors: &mut Vec<String>) {
	for (path, item) in paths {
		if path.starts_with("x-") {
			continue;
		}

		let location = format!("/paths/{}", pointer_segment(path));
		if !path.starts_with('/') {
			errors.push(format!("{location}: path must start with `/`"));
		}

		let Some(item) = item.as_object() else {
			errors.push(format!("{location} must be an object"));
			continue;
		};

		for (key, value) in item {
			if version.http_methods().contains(&key.as_str()) {
				check_operation(value, &format!("{location}/{key}"), version, errors);
			} else if key == "parameters" {
				check_parameters(value, &format!("{location}/parameters"), version, errors);
			} else if !PATH_ITEM_KEYS.contains(&key.as_str()) && !key.starts_with("x-") {
				errors.push(format!("{location}: unexpected key `{key}`"));
			}
		}
	}
}

fn check_operation(operation: &Value, location: &str, version: SpecVersion, errors: &mut Vec<String>) {
	let Some(operation) = operation.as_object() else {
		errors.push(format!("{location} must be an object"));
		return;
	};

	match operation.get("responses").and_then(Value::as_object) {
		Some(responses) if !responses.is_empty() => {}
		_ => errors.push(format!("{location}/responses must be a non-empty object")),
	}

	if let Some(parameters) = operation.get("parameters") {
		check_parameters(parameters, &format!("{location}/parameters"), version, errors);
	}
}

fn check_parameters(parameters: &Value, location: &str, version: SpecVersion, errors: &mut Vec<String>) {
	let Some(parameters) = parameters.as_array() else {
		errors.push(format!("{location} must be an array"));
		return;
	};

	for (index, parameter) in parameters.iter().enumerate() {
		let location = format!("{location}/{index}");
		let Some(parameter) = parameter.as_object() else {
			errors.push(format!("{location} must be an object"));
			continue;
		};

		// references are checked by the semantics validator
		if parameter.contains_key("$ref") {
			continue;
		}

		if !parameter.get("name").is_some_and(Value::is_string) {
			errors.push(format!("{location}/name must be a string"));
		}

		match parameter.get("in").and_then(Value::as_str) {
			Some(place) if version.parameter_locations().contains(&place) => {
				if place == "path" && parameter.get("required") != Some(&Value::Bool(true)) {
					errors.push(format!("{location}: path parameters must be required"));
				}
			}
			Some(place) => errors.push(format!(
				"{location}/in: `{place}` is not one of {}",
				version.parameter_locations().join(", ")
			)),
			None => errors.push(format!("{location}/in must be a string")),
		}
	}
}
