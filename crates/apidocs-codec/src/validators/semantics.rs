//! Cross-reference checks
//!
//! Runs on documents that may be structurally broken, so anything of the
//! wrong shape is skipped rather than reported here.

use super::{SpecVersion, lookup_local, pointer_segment, resolve_local};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

pub(super) fn check(spec: &Value) -> Vec<String> {
	let mut errors = Vec::new();

	check_references(spec, spec, String::new(), &mut errors);

	let methods = SpecVersion::detect(spec)
		.unwrap_or(SpecVersion::OpenApi3 { minor: 0 })
		.http_methods();

	let Some(paths) = spec.get("paths").and_then(Value::as_object) else {
		return errors;
	};

	let mut operation_ids: HashMap<&str, String> = HashMap::new();

	for (path, item) in paths {
		let Some(item) = item.as_object() else {
			continue;
		};

		let templated = template_names(path);
		let shared = path_parameter_names(spec, item.get("parameters"));

		for (method, operation) in item {
			if !methods.contains(&method.as_str()) {
				continue;
			}
			let label = format!("{} {path}", method.to_uppercase());

			if let Some(id) = operation.get("operationId").and_then(Value::as_str) {
				match operation_ids.get(id) {
					Some(first) => errors.push(format!(
						"duplicate operationId `{id}` on {label} (first used on {first})"
					)),
					None => {
						operation_ids.insert(id, label.clone());
					}
				}
			}

			check_duplicate_parameters(spec, operation.get("parameters"), &label, &mut errors);

			let mut declared = shared.clone();
			declared.extend(path_parameter_names(spec, operation.get("parameters")));

			for name in templated.difference(&declared) {
				errors.push(format!("path parameter `{name}` of {label} is not declared"));
			}
			for name in declared.difference(&templated) {
				errors.push(format!(
					"{label} declares path parameter `{name}` missing from the path template"
				));
			}
		}
	}

	errors
}

/// Every local `$ref` must point inside the document
fn check_references(spec: &Value, node: &Value, location: String, errors: &mut Vec<String>) {
	match node {
		Value::Object(map) => {
			if let Some(reference) = map.get("$ref").and_then(Value::as_str)
				&& reference.starts_with('#')
				&& lookup_local(spec, reference).is_none()
			{
				let at = if location.is_empty() { "/" } else { location.as_str() };
				errors.push(format!("unresolvable reference `{reference}` at {at}"));
			}
			for (key, child) in map {
				check_references(spec, child, format!("{location}/{}", pointer_segment(key)), errors);
			}
		}
		Value::Array(items) => {
			for (index, child) in items.iter().enumerate() {
				check_references(spec, child, format!("{location}/{index}"), errors);
			}
		}
		_ => {}
	}
}

/// Names inside `{}` in a path template
fn template_names(path: &str) -> BTreeSet<String> {
	let mut names = BTreeSet::new();
	let mut rest = path;
	while let Some(start) = rest.find('{') {
		let Some(len) = rest[start + 1..].find('}') else {
			break;
		};
		names.insert(rest[start + 1..start + 1 + len].to_string());
		rest = &rest[start + 1 + len + 1..];
	}
	names
}

fn path_parameter_names(spec: &Value, parameters: Option<&Value>) -> BTreeSet<String> {
	parameters
		.and_then(Value::as_array)
		.into_iter()
		.flatten()
		.filter_map(|parameter| resolve_local(spec, parameter))
		.filter(|parameter| parameter.get("in").and_then(Value::as_str) == Some("path"))
		.filter_map(|parameter| parameter.get("name").and_then(Value::as_str))
		.map(str::to_string)
		.collect()
}

fn check_duplicate_parameters(
	spec: &Value,
	parameters: Option<&Value>,
	label: &str,
	errors: &mut Vec<String>,
) {
	let mut seen = BTreeSet::new();
	let resolved = parameters
		.and_then(Value::as_array)
		.into_iter()
		.flatten()
		.filter_map(|parameter| resolve_local(spec, parameter));

	for parameter in resolved {
		let (Some(name), Some(place)) = (
			parameter.get("name").and_then(Value::as_str),
			parameter.get("in").and_then(Value::as_str),
		) else {
			continue;
		};
		if !seen.insert((name, place)) {
			errors.push(format!("{label} declares parameter `{name}` in {place} more than once"));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn spec_with_paths(paths: Value) -> Value {
		json!({
			"openapi": "3.0.3",
			"info": {"title": "t", "version": "1"},
			"paths": paths,
			"components": {
				"parameters": {
					"PetId": {"name": "petId", "in": "path", "required": true, "schema": {"type": "string"}}
				},
				"schemas": {"Pet": {"type": "object"}}
			}
		})
	}

	fn ok() -> Value {
		json!({"200": {"description": "ok"}})
	}

	#[test]
	fn test_template_names() {
		let names = template_names("/users/{userId}/posts/{postId}");
		assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["postId", "userId"]);
		assert!(template_names("/health").is_empty());
		assert!(template_names("/broken/{open").is_empty());
	}

	#[test]
	fn test_valid_document_with_ref_parameter() {
		let spec = spec_with_paths(json!({
			"/pets/{petId}": {
				"parameters": [{"$ref": "#/components/parameters/PetId"}],
				"get": {"operationId": "getPet", "responses": ok()},
				"delete": {"operationId": "deletePet", "responses": ok()}
			}
		}));
		assert!(check(&spec).is_empty(), "{:?}", check(&spec));
	}

	#[test]
	fn test_percent_encoded_references_resolve() {
		let mut spec = spec_with_paths(json!({
			"/pets/{petId}": {
				"parameters": [{"$ref": "#/components/parameters/PetId"}],
				"get": {
					"responses": {
						"200": {
							"description": "ok",
							"content": {
								"application/json": {"schema": {"$ref": "#/components/schemas/Pet%20Record"}}
							}
						}
					}
				}
			},
			"/pets/{petId}/alias": {"$ref": "#/paths/~1pets~1%7BpetId%7D"}
		}));
		spec["components"]["schemas"]["Pet Record"] = json!({"type": "object"});

		assert!(check(&spec).is_empty(), "{:?}", check(&spec));
	}

	#[test]
	fn test_duplicate_operation_id() {
		let spec = spec_with_paths(json!({
			"/a": {"get": {"operationId": "list", "responses": ok()}},
			"/b": {"get": {"operationId": "list", "responses": ok()}}
		}));
		assert_eq!(
			check(&spec),
			vec!["duplicate operationId `list` on GET /b (first used on GET /a)"]
		);
	}

	#[test]
	fn test_undeclared_path_parameter() {
		let spec = spec_with_paths(json!({
			"/pets/{petId}": {"get": {"responses": ok()}}
		}));
		assert_eq!(
			check(&spec),
			vec!["path parameter `petId` of GET /pets/{petId} is not declared"]
		);
	}

	#[test]
	fn test_declared_parameter_missing_from_template() {
		let spec = spec_with_paths(json!({
			"/pets": {
				"get": {
					"parameters": [{"$ref": "#/components/parameters/PetId"}],
					"responses": ok()
				}
			}
		}));
		assert_eq!(
			check(&spec),
			vec!["GET /pets declares path parameter `petId` missing from the path template"]
		);
	}

	#[test]
	fn test_duplicate_parameter_in_operation() {
		let spec = spec_with_paths(json!({
			"/search": {
				"get": {
					"parameters": [
						{"name": "q", "in": "query"},
						{"name": "q", "in": "query"},
						{"name": "q", "in": "header"}
					],
					"responses": ok()
				}
			}
		}));
		assert_eq!(
			check(&spec),
			vec!["GET /search declares parameter `q` in query more than once"]
		);
	}

	#[test]
	fn test_unresolvable_reference() {
		let spec = spec_with_paths(json!({
			"/pets": {
				"get": {
					"responses": {
						"200": {
							"description": "ok",
							"content": {"application/json": {"schema": {"$ref": "#/components/schemas/Dog"}}}
						}
					}
				}
			}
		}));
		assert_eq!(
			check(&spec),
			vec![
				"unresolvable reference `#/components/schemas/Dog` at \
				 /paths/~1pets/get/responses/200/content/application~1json/schema"
			]
		);
	}

	#[test]
	fn test_external_references_are_ignored() {
		let spec = spec_with_paths(json!({
			"/pets": {"get": {"responses": {"200": {"$ref": "responses.yaml#/Ok"}}}}
		}));
		assert!(check(&spec).is_empty());
	}
}
