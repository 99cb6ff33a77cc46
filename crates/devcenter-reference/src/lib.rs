//! API reference browser for DevCenter.
//!
//! This crate provides:
//! - [`ApiModel`]: sections, resources and operations loaded from JSON or OpenAPI
//! - [`Navigator`]: the section/resource/operation accordion state machine
//! - [`ReferenceMenu`]: the menu view model for the current state
//!
//! # Quick Start
//!
//! ```
//! use devcenter_reference::{ApiModel, Navigator, RecordingHandler, ReferenceMenu};
//!
//! let model = ApiModel::from_json(r#"{
//!     "sections": [{"x-id": "auth", "name": "Authentication"}],
//!     "resources": [{"name": "ApiClients", "x-section-id": "auth"}],
//!     "operations": {"ApiClients": [{"operationId": "ApiClients.List", "summary": "List.clients"}]}
//! }"#)?;
//!
//! let mut nav = Navigator::new(&model, RecordingHandler::default());
//! nav.select_section("auth")?;
//! nav.select_resource("ApiClients")?;
//! nav.select_operation("ApiClients.List")?;
//!
//! let menu = ReferenceMenu::build(&model, nav.state());
//! assert_eq!(menu.sections[0].resources[0].operations[0].text, "List clients");
//! assert_eq!(nav.handler().events().len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod menu;
mod model;
mod navigation;

pub use menu::{OperationEntry, ReferenceMenu, ResourceEntry, SectionEntry, display_text};
pub use model::{ApiModel, ApiSection, ModelError, Operation, Resource};
pub use navigation::{
    NavigationError, NavigationEvent, NavigationHandler, NavigationState, Navigator, NoopHandler,
    RecordingHandler, Transition,
};
