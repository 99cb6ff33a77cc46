//! Navigation state for the API reference browser.
//!
//! The browser has three nested levels: section, resource, operation. The
//! open section, open resource and selected operation are owned here as one
//! optional id each, so siblings can never be expanded together; a menu
//! entry is expanded exactly when its id equals the stored one.
//!
//! Changing or collapsing the open section clears the open resource and the
//! selected operation. Changing or collapsing the open resource clears the
//! selected operation. Nothing ever points at a hidden entry.

use serde::Serialize;

use crate::model::{ApiModel, ApiSection, Operation};

/// Callbacks invoked by the rendering layer's change handlers.
///
/// All methods default to no-ops.
pub trait NavigationHandler {
    /// A section was expanded; its resource list is now visible.
    fn section_change(&mut self, _section: &ApiSection) {}

    /// A resource was expanded; its operation list should be populated.
    fn resource_change(&mut self, _resource_name: &str) {}

    /// An operation was selected; its detail pane should be displayed.
    fn operation_change(&mut self, _operation: &Operation) {}
}

/// Handler that ignores every change.
#[derive(Debug, Default)]
pub struct NoopHandler;

impl NavigationHandler for NoopHandler {}

/// A change notification, as recorded by [`RecordingHandler`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "id", rename_all = "camelCase")]
pub enum NavigationEvent {
    SectionChange(String),
    ResourceChange(String),
    OperationChange(String),
}

/// Handler that records every change in order.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    events: Vec<NavigationEvent>,
}

impl RecordingHandler {
    #[must_use]
    pub fn events(&self) -> &[NavigationEvent] {
        &self.events
    }
}

impl NavigationHandler for RecordingHandler {
    fn section_change(&mut self, section: &ApiSection) {
        self.events
            .push(NavigationEvent::SectionChange(section.id.clone()));
    }

    fn resource_change(&mut self, resource_name: &str) {
        self.events
            .push(NavigationEvent::ResourceChange(resource_name.to_owned()));
    }

    fn operation_change(&mut self, operation: &Operation) {
        self.events
            .push(NavigationEvent::OperationChange(operation.id.clone()));
    }
}

/// Expanded/selected ids. Initial state: everything collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    expanded_section: Option<String>,
    expanded_resource: Option<String>,
    selected_operation: Option<String>,
}

impl NavigationState {
    #[must_use]
    pub fn expanded_section(&self) -> Option<&str> {
        self.expanded_section.as_deref()
    }

    #[must_use]
    pub fn expanded_resource(&self) -> Option<&str> {
        self.expanded_resource.as_deref()
    }

    #[must_use]
    pub fn selected_operation(&self) -> Option<&str> {
        self.selected_operation.as_deref()
    }

    #[must_use]
    pub fn is_section_expanded(&self, id: &str) -> bool {
        self.expanded_section.as_deref() == Some(id)
    }

    #[must_use]
    pub fn is_resource_expanded(&self, name: &str) -> bool {
        self.expanded_resource.as_deref() == Some(name)
    }

    #[must_use]
    pub fn is_operation_selected(&self, id: &str) -> bool {
        self.selected_operation.as_deref() == Some(id)
    }
}

/// Outcome of a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Expanded,
    Collapsed,
    Selected,
}

/// Error returned for a selection that does not apply to the current state.
///
/// The state is left unchanged.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("unknown resource: {0}")]
    UnknownResource(String),

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("{kind} {id} is not visible in the current menu")]
    NotVisible { kind: &'static str, id: String },
}

/// Drives [`NavigationState`] over a loaded [`ApiModel`].
pub struct Navigator<'m, H> {
    model: &'m ApiModel,
    state: NavigationState,
    handler: H,
}

impl<'m, H: NavigationHandler> Navigator<'m, H> {
    pub fn new(model: &'m ApiModel, handler: H) -> Self {
        Self {
            model,
            state: NavigationState::default(),
            handler,
        }
    }

    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    #[must_use]
    pub fn model(&self) -> &'m ApiModel {
        self.model
    }

    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Toggle a section.
    ///
    /// Expanding invokes `section_change` once and closes any other
    /// section; collapsing invokes nothing. Both clear deeper selections.
    pub fn select_section(&mut self, id: &str) -> Result<Transition, NavigationError> {
        let section = self
            .model
            .section(id)
            .ok_or_else(|| NavigationError::UnknownSection(id.to_owned()))?;

        self.state.expanded_resource = None;
        self.state.selected_operation = None;

        if self.state.is_section_expanded(id) {
            self.state.expanded_section = None;
            tracing::debug!(section = id, "Section collapsed");
            return Ok(Transition::Collapsed);
        }

        self.state.expanded_section = Some(id.to_owned());
        tracing::debug!(section = id, "Section expanded");
        self.handler.section_change(section);
        Ok(Transition::Expanded)
    }

    /// Toggle a resource of the open section.
    ///
    /// Expanding invokes `resource_change` with the resource name once and
    /// closes any other resource. Both directions clear the selected
    /// operation.
    pub fn select_resource(&mut self, name: &str) -> Result<Transition, NavigationError> {
        let resource = self
            .model
            .resource(name)
            .ok_or_else(|| NavigationError::UnknownResource(name.to_owned()))?;

        if !self.state.is_section_expanded(&resource.section_id) {
            return Err(NavigationError::NotVisible {
                kind: "resource",
                id: name.to_owned(),
            });
        }

        self.state.selected_operation = None;

        if self.state.is_resource_expanded(name) {
            self.state.expanded_resource = None;
            tracing::debug!(resource = name, "Resource collapsed");
            return Ok(Transition::Collapsed);
        }

        self.state.expanded_resource = Some(name.to_owned());
        tracing::debug!(resource = name, "Resource expanded");
        self.handler.resource_change(&resource.name);
        Ok(Transition::Expanded)
    }

    /// Select an operation of the open resource.
    ///
    /// Invokes `operation_change` every time, including reselection, and
    /// never changes expansion.
    pub fn select_operation(&mut self, id: &str) -> Result<Transition, NavigationError> {
        let model = self.model;
        let visible = self
            .state
            .expanded_resource
            .as_deref()
            .map(|name| model.operations_for(name))
            .unwrap_or_default();

        let Some(operation) = visible.iter().find(|o| o.id == id) else {
            return Err(if model.owner_of_operation(id).is_some() {
                NavigationError::NotVisible {
                    kind: "operation",
                    id: id.to_owned(),
                }
            } else {
                NavigationError::UnknownOperation(id.to_owned())
            });
        };

        self.state.selected_operation = Some(id.to_owned());
        tracing::debug!(operation = id, "Operation selected");
        self.handler.operation_change(operation);
        Ok(Transition::Selected)
    }
}
