//! `devcenter reference` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use devcenter_reference::{
    ApiModel, NavigationEvent, NavigationHandler, NavigationState, Navigator, RecordingHandler,
    ReferenceMenu,
};
use serde::Serialize;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the reference command.
#[derive(Args)]
pub(crate) struct ReferenceArgs {
    /// Reference model: model JSON or an OpenAPI document in JSON.
    #[arg(short, long)]
    model: PathBuf,

    /// Section to expand (by `x-id`).
    #[arg(long)]
    section: Option<String>,

    /// Resource to expand (by name).
    #[arg(long, requires = "section")]
    resource: Option<String>,

    /// Operation to select (by `operationId`).
    #[arg(long, requires = "resource")]
    operation: Option<String>,
}

#[derive(Serialize)]
struct ReferenceReport<'a> {
    state: &'a NavigationState,
    events: &'a [NavigationEvent],
    menu: ReferenceMenu,
}

impl ReferenceArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let model = load_model(&fs::read_to_string(&self.model)?)?;

        let mut nav = Navigator::new(&model, RecordingHandler::default());
        apply_selections(
            &mut nav,
            self.section.as_deref(),
            self.resource.as_deref(),
            self.operation.as_deref(),
        )?;

        let report = ReferenceReport {
            state: nav.state(),
            events: nav.handler().events(),
            menu: ReferenceMenu::build(&model, nav.state()),
        };
        output.json(&report)?;
        Ok(())
    }
}

/// Parse a model file, accepting OpenAPI documents as well as model JSON.
fn load_model(json: &str) -> Result<ApiModel, CliError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.get("openapi").is_some() || value.get("swagger").is_some() {
        Ok(ApiModel::from_openapi(&value)?)
    } else {
        Ok(serde_json::from_value(value)?)
    }
}

fn apply_selections<H: NavigationHandler>(
    nav: &mut Navigator<'_, H>,
    section: Option<&str>,
    resource: Option<&str>,
    operation: Option<&str>,
) -> Result<(), CliError> {
    if let Some(id) = section {
        nav.select_section(id)?;
    }
    if let Some(name) = resource {
        nav.select_resource(name)?;
    }
    if let Some(id) = operation {
        nav.select_operation(id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const MODEL: &str = r#"{
        "sections": [{"x-id": "auth", "name": "Authentication"}],
        "resources": [{"name": "ApiClients", "x-section-id": "auth"}],
        "operations": {"ApiClients": [{"operationId": "ApiClients.List", "summary": "List.clients"}]}
    }"#;

    #[test]
    fn test_load_model_json() {
        let model = load_model(MODEL).unwrap();
        assert_eq!(model.sections.len(), 1);
    }

    #[test]
    fn test_load_model_openapi() {
        let model = load_model(
            r#"{"openapi": "3.0.0", "tags": [{"name": "Authentication", "x-id": "auth"}], "paths": {}}"#,
        )
        .unwrap();
        assert_eq!(model.sections[0].id, "auth");
    }

    #[test]
    fn test_apply_selections_records_events() {
        let model = load_model(MODEL).unwrap();
        let mut nav = Navigator::new(&model, RecordingHandler::default());

        apply_selections(&mut nav, Some("auth"), Some("ApiClients"), Some("ApiClients.List")).unwrap();

        assert_eq!(nav.handler().events().len(), 3);
        assert!(nav.state().is_operation_selected("ApiClients.List"));
    }

    #[test]
    fn test_apply_selections_rejects_hidden_resource() {
        let model = load_model(MODEL).unwrap();
        let mut nav = Navigator::new(&model, RecordingHandler::default());

        let err = apply_selections(&mut nav, None, Some("ApiClients"), None).unwrap_err();
        assert!(matches!(err, CliError::Navigation(_)));
    }
}
