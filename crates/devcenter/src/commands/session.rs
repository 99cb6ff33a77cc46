//! `devcenter session` command implementation.

use std::path::PathBuf;

use clap::Args;
use devcenter_config::{Config, SessionConfig};
use devcenter_session::{
    AuthState, CookieJar, CookieNames, CookieStore, HeaderView, SessionSettings, decode_session,
};
use serde::Serialize;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the session command.
#[derive(Args)]
pub(crate) struct SessionArgs {
    /// Path to configuration file (default: auto-discover devcenter.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Raw `Cookie` header, e.g. "DevCenter.token=...; DevCenter.firstName=Ada".
    #[arg(long, env = "DEVCENTER_COOKIE", conflicts_with = "token")]
    cookie: Option<String>,

    /// Session token, stored under the configured token cookie.
    #[arg(long)]
    token: Option<String>,
}

#[derive(Serialize)]
struct SessionReport {
    state: AuthState,
    header: HeaderView,
}

impl SessionArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let settings = session_settings(&config.session);

        let mut jar = self
            .cookie
            .as_deref()
            .map(CookieJar::parse_header)
            .unwrap_or_default();
        if let Some(token) = &self.token {
            jar.set(&settings.cookies.token, token);
        }

        let state = decode_session(&jar, &settings);
        if jar.get(&settings.cookies.token).is_some() && !state.authenticated {
            output.warning("Session token is expired or malformed");
        }

        let report = SessionReport {
            header: HeaderView::from_state(&state),
            state,
        };
        output.json(&report)?;
        Ok(())
    }
}

fn session_settings(config: &SessionConfig) -> SessionSettings {
    SessionSettings {
        cookies: CookieNames::new(
            config.token_cookie.clone(),
            config.first_name_cookie.clone(),
            config.email_cookie.clone(),
        ),
        clock_skew_secs: config.clock_skew_secs,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config_matches_default_settings() {
        assert_eq!(
            session_settings(&SessionConfig::default()),
            SessionSettings::default()
        );
    }
}
