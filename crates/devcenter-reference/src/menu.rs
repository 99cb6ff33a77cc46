//! View model for the reference menu.

use serde::Serialize;

use crate::model::{ApiModel, Operation};
use crate::navigation::NavigationState;

/// Menu data for the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReferenceMenu {
    pub sections: Vec<SectionEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionEntry {
    pub id: String,
    pub label: String,
    pub expanded: bool,
    /// Resources of this section; empty unless expanded.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    pub name: String,
    pub label: String,
    pub expanded: bool,
    /// Operations of this resource; empty unless expanded.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<OperationEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OperationEntry {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,
    pub selected: bool,
}

impl ReferenceMenu {
    /// Build the menu for `state`. Only the expanded branch is populated.
    #[must_use]
    pub fn build(model: &ApiModel, state: &NavigationState) -> Self {
        let sections = model
            .sections
            .iter()
            .map(|section| {
                let expanded = state.is_section_expanded(&section.id);
                let resources = if expanded {
                    model
                        .resources_in_section(&section.id)
                        .into_iter()
                        .map(|resource| {
                            let expanded = state.is_resource_expanded(&resource.name);
                            let operations = if expanded {
                                model
                                    .operations_for(&resource.name)
                                    .iter()
                                    .map(|op| OperationEntry::new(op, state))
                                    .collect()
                            } else {
                                Vec::new()
                            };
                            ResourceEntry {
                                name: resource.name.clone(),
                                label: format!("2. {}", resource.name),
                                expanded,
                                operations,
                            }
                        })
                        .collect()
                } else {
                    Vec::new()
                };
                SectionEntry {
                    id: section.id.clone(),
                    label: format!("1. {}", section.name),
                    expanded,
                    resources,
                }
            })
            .collect();

        Self { sections }
    }
}

impl OperationEntry {
    fn new(op: &Operation, state: &NavigationState) -> Self {
        Self {
            id: op.id.clone(),
            text: display_text(&op.summary),
            verb: op.verb.clone(),
            selected: state.is_operation_selected(&op.id),
        }
    }
}

/// Summary with every `.` replaced by a space.
#[must_use]
pub fn display_text(summary: &str) -> String {
    summary.replace('.', " ")
}
