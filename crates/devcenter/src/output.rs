//! Terminal output for CLI commands.

use console::{Style, Term};
use serde::Serialize;

use crate::error::CliError;

/// Styled status lines on stderr, command results on stdout.
pub(crate) struct Output {
    status: Term,
    result: Term,
    label: Style,
    ok: Style,
    warn: Style,
    err: Style,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            result: Term::stdout(),
            label: Style::new().bold(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            err: Style::new().red().bold(),
        }
    }

    /// `label: value` status line with a bold label.
    pub(crate) fn field(&self, label: &str, value: impl std::fmt::Display) {
        let line = format!("{} {value}", self.label.apply_to(format!("{label}:")));
        let _ = self.status.write_line(&line);
    }

    pub(crate) fn success(&self, msg: &str) {
        let _ = self.status.write_line(&self.ok.apply_to(msg).to_string());
    }

    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.status.write_line(&self.warn.apply_to(msg).to_string());
    }

    pub(crate) fn error(&self, msg: &str) {
        let _ = self.status.write_line(&self.err.apply_to(msg).to_string());
    }

    /// Pretty-printed JSON result on stdout.
    pub(crate) fn json<T: Serialize>(&self, value: &T) -> Result<(), CliError> {
        self.result
            .write_line(&serde_json::to_string_pretty(value)?)?;
        Ok(())
    }
}
