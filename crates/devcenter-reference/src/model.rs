//! OpenAPI-derived reference model.
//!
//! The reference browser works on three levels: sections group resources,
//! resources group operations. Resources point back at their section with
//! `x-section-id`; operations are grouped externally by resource name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP methods scanned when reading an OpenAPI document.
const HTTP_METHODS: [&str; 5] = ["get", "post", "put", "patch", "delete"];

/// Top-level grouping of resources.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(rename = "x-id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// An API resource (e.g., "Orders").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(rename = "x-id", default)]
    pub id: String,
    /// Weak back reference to the owning [`ApiSection`].
    #[serde(rename = "x-section-id")]
    pub section_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A single API operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId")]
    pub id: String,
    /// Dotted summary (e.g., "Create.an.order").
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Error returned when reference data cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid reference data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid OpenAPI document: {0}")]
    OpenApi(String),
}

/// In-memory reference model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiModel {
    #[serde(default)]
    pub sections: Vec<ApiSection>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Operations keyed by resource name.
    #[serde(default)]
    pub operations: BTreeMap<String, Vec<Operation>>,
}

impl ApiModel {
    /// Parse the model from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the model from an OpenAPI document.
    ///
    /// Tags carrying `x-section-id` become resources; other tags carrying
    /// `x-id` become sections. Each operation is grouped under its first
    /// tag.
    pub fn from_openapi(doc: &Value) -> Result<Self, ModelError> {
        let tags = doc
            .get("tags")
            .and_then(Value::as_array)
            .ok_or_else(|| ModelError::OpenApi("missing tags array".to_owned()))?;

        let mut model = Self::default();
        for tag in tags {
            let Some(name) = tag.get("name").and_then(Value::as_str) else {
                continue;
            };
            let description = str_field(tag, "description").unwrap_or_default();
            let id = str_field(tag, "x-id");

            if let Some(section_id) = str_field(tag, "x-section-id") {
                model.resources.push(Resource {
                    name: name.to_owned(),
                    id: id.unwrap_or_default(),
                    section_id,
                    description,
                });
            } else if let Some(id) = id {
                model.sections.push(ApiSection {
                    id,
                    name: name.to_owned(),
                    description,
                });
            }
        }

        let paths = doc.get("paths").and_then(Value::as_object);
        for (path, item) in paths.into_iter().flatten() {
            for method in HTTP_METHODS {
                let Some(op) = item.get(method) else {
                    continue;
                };
                let Some(resource) = op
                    .get("tags")
                    .and_then(Value::as_array)
                    .and_then(|t| t.first())
                    .and_then(Value::as_str)
                else {
                    tracing::debug!(path = %path, method, "Skipping untagged operation");
                    continue;
                };
                let operation = Operation {
                    id: str_field(op, "operationId").unwrap_or_else(|| format!("{method} {path}")),
                    summary: str_field(op, "summary").unwrap_or_default(),
                    verb: Some(method.to_uppercase()),
                    path: Some(path.clone()),
                    description: str_field(op, "description"),
                };
                model
                    .operations
                    .entry(resource.to_owned())
                    .or_default()
                    .push(operation);
            }
        }

        Ok(model)
    }

    /// Section by id.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&ApiSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Resource by name.
    #[must_use]
    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// Resources whose `x-section-id` matches `section_id`, in model order.
    #[must_use]
    pub fn resources_in_section(&self, section_id: &str) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.section_id == section_id)
            .collect()
    }

    /// Operations grouped under `resource_name` (empty if none).
    #[must_use]
    pub fn operations_for(&self, resource_name: &str) -> &[Operation] {
        self.operations
            .get(resource_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Resource name owning operation `id`, searching every resource.
    #[must_use]
    pub fn owner_of_operation(&self, id: &str) -> Option<&str> {
        self.operations
            .iter()
            .find(|(_, ops)| ops.iter().any(|o| o.id == id))
            .map(|(name, _)| name.as_str())
    }
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Two sections, three resources, a handful of operations.
    pub(crate) fn model() -> ApiModel {
        ApiModel::from_json(
            r#"{
                "sections": [
                    {"x-id": "auth", "name": "Authentication"},
                    {"x-id": "orders", "name": "Orders and Fulfillment"}
                ],
                "resources": [
                    {"name": "ApiClients", "x-id": "apiclients", "x-section-id": "auth"},
                    {"name": "SecurityProfiles", "x-id": "securityprofiles", "x-section-id": "auth"},
                    {"name": "Orders", "x-id": "orders", "x-section-id": "orders"}
                ],
                "operations": {
                    "ApiClients": [
                        {"operationId": "ApiClients.List", "summary": "Get.a.list.of.API.Clients"},
                        {"operationId": "ApiClients.Get", "summary": "Get.a.single.API.Client"}
                    ],
                    "Orders": [
                        {"operationId": "Orders.Create", "summary": "Create.a.new.order", "verb": "POST", "path": "/orders/{direction}"}
                    ]
                }
            }"#,
        )
        .unwrap()
    }
}
