//! Auth state derived from cookies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cookie::{CookieNames, CookieStore};
use crate::token::{DEFAULT_CLOCK_SKEW_SECS, decode_payload, is_token_expired};

/// Cookie names and expiry tolerance used to derive [`AuthState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub cookies: CookieNames,
    pub clock_skew_secs: i64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            cookies: CookieNames::default(),
            clock_skew_secs: DEFAULT_CLOCK_SKEW_SECS,
        }
    }
}

/// Header state, derived entirely from cookies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    /// Token present and not expired.
    pub authenticated: bool,
    pub username: String,
    pub first_name: String,
    pub email: String,
}

/// Derive the auth state from `cookies` at the current time.
pub fn decode_session<C: CookieStore + ?Sized>(cookies: &C, settings: &SessionSettings) -> AuthState {
    decode_session_at(cookies, settings, Utc::now())
}

/// Derive the auth state from `cookies` at `now`.
///
/// Never fails: a missing or malformed token yields an unauthenticated
/// state with empty fields. An expired token still fills the display
/// fields.
pub fn decode_session_at<C: CookieStore + ?Sized>(
    cookies: &C,
    settings: &SessionSettings,
    now: DateTime<Utc>,
) -> AuthState {
    let Some(token) = cookies
        .get(&settings.cookies.token)
        .filter(|t| !t.is_empty())
    else {
        return AuthState::default();
    };

    let claims = match decode_payload(&token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring malformed session token");
            return AuthState::default();
        }
    };

    let expired = is_token_expired(&claims, now, settings.clock_skew_secs);
    if expired {
        tracing::debug!(exp = ?claims.exp, "Session token expired");
    }

    AuthState {
        authenticated: !expired,
        username: claims.usr.unwrap_or_default(),
        first_name: cookies.get(&settings.cookies.first_name).unwrap_or_default(),
        email: cookies.get(&settings.cookies.email).unwrap_or_default(),
    }
}

/// Cookie store plus the state derived from it.
///
/// The state is recomputed after every change made through the session.
#[derive(Debug)]
pub struct Session<C> {
    cookies: C,
    settings: SessionSettings,
    state: AuthState,
}

impl<C: CookieStore> Session<C> {
    pub fn new(cookies: C, settings: SessionSettings) -> Self {
        let state = decode_session(&cookies, &settings);
        Self {
            cookies,
            settings,
            state,
        }
    }

    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    #[must_use]
    pub fn cookies(&self) -> &C {
        &self.cookies
    }

    pub fn into_cookies(self) -> C {
        self.cookies
    }

    /// Re-derive the state from the cookie store.
    pub fn refresh(&mut self) -> &AuthState {
        self.state = decode_session(&self.cookies, &self.settings);
        &self.state
    }

    /// Store the three session cookies and re-derive.
    pub fn login(&mut self, token: &str, first_name: &str, email: &str) -> &AuthState {
        let names = &self.settings.cookies;
        self.cookies.set(&names.token, token);
        self.cookies.set(&names.first_name, first_name);
        self.cookies.set(&names.email, email);
        self.refresh()
    }

    /// Remove the three session cookies and re-derive. Idempotent.
    pub fn logout(&mut self) -> &AuthState {
        let names = &self.settings.cookies;
        self.cookies.remove(&names.token);
        self.cookies.remove(&names.first_name);
        self.cookies.remove(&names.email);
        tracing::debug!("Session cookies removed");
        self.refresh()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::cookie::CookieJar;
    use crate::token::fixtures::token;

    fn jar_with(token: &str) -> CookieJar {
        let mut jar = CookieJar::new();
        jar.set("DevCenter.token", token);
        jar.set("DevCenter.firstName", "Ada");
        jar.set("DevCenter.email", "ada@example.com");
        jar
    }

    fn token_expiring_in(secs: i64) -> String {
        let exp = (Utc::now() + Duration::seconds(secs)).timestamp();
        token(&json!({"usr": "ada01", "exp": exp}))
    }

    #[test]
    fn test_valid_token_is_authenticated() {
        let state = decode_session(&jar_with(&token_expiring_in(3600)), &SessionSettings::default());

        assert_eq!(
            state,
            AuthState {
                authenticated: true,
                username: "ada01".to_owned(),
                first_name: "Ada".to_owned(),
                email: "ada@example.com".to_owned(),
            }
        );
    }

    #[test]
    fn test_expired_token_is_not_authenticated() {
        let state = decode_session(&jar_with(&token_expiring_in(-10)), &SessionSettings::default());

        assert!(!state.authenticated);
        assert_eq!(state.username, "ada01");
    }

    #[test]
    fn test_skew_is_applied() {
        let now = Utc::now();
        let jar = jar_with(&token(&json!({"exp": now.timestamp() - 1})));

        assert!(decode_session_at(&jar, &SessionSettings::default(), now).authenticated);

        let strict = SessionSettings {
            clock_skew_secs: 0,
            ..SessionSettings::default()
        };
        assert!(!decode_session_at(&jar, &strict, now).authenticated);
    }

    #[test]
    fn test_fractional_exp_is_authenticated() {
        let now = Utc::now();
        #[allow(clippy::cast_precision_loss)]
        let exp = now.timestamp() as f64 + 3600.5;
        let jar = jar_with(&token(&json!({"usr": "ada01", "exp": exp})));

        let state = decode_session_at(&jar, &SessionSettings::default(), now);

        assert!(state.authenticated);
        assert_eq!(state.username, "ada01");
        assert_eq!(state.first_name, "Ada");
    }

    #[test]
    fn test_absent_or_empty_cookie() {
        let settings = SessionSettings::default();

        assert_eq!(decode_session(&CookieJar::new(), &settings), AuthState::default());

        let mut jar = jar_with("");
        assert_eq!(decode_session(&jar, &settings), AuthState::default());
        jar.remove("DevCenter.token");
        assert_eq!(decode_session(&jar, &settings), AuthState::default());
    }

    #[test]
    fn test_malformed_token_is_unauthenticated() {
        let state = decode_session(&jar_with("not-a-jwt"), &SessionSettings::default());

        assert_eq!(state, AuthState::default());
    }

    #[test]
    fn test_custom_cookie_names() {
        let settings = SessionSettings {
            cookies: CookieNames::new("t", "f", "e"),
            ..SessionSettings::default()
        };
        let mut jar = CookieJar::new();
        jar.set("t", &token_expiring_in(60));
        jar.set("f", "Grace");

        let state = decode_session(&jar, &settings);

        assert!(state.authenticated);
        assert_eq!(state.first_name, "Grace");
        assert_eq!(state.email, "");
    }

    #[test]
    fn test_login_then_logout_twice() {
        let mut session = Session::new(CookieJar::new(), SessionSettings::default());
        assert!(!session.state().authenticated);

        let state = session.login(&token_expiring_in(3600), "Ada", "ada@example.com");
        assert!(state.authenticated);
        assert_eq!(session.cookies().len(), 3);

        assert_eq!(session.logout(), &AuthState::default());
        assert_eq!(session.logout(), &AuthState::default());
        assert!(session.cookies().is_empty());
    }

    #[test]
    fn test_logout_keeps_unrelated_cookies() {
        let mut jar = jar_with(&token_expiring_in(3600));
        jar.set("other", "1");
        let mut session = Session::new(jar, SessionSettings::default());
        assert!(session.state().authenticated);

        session.logout();

        assert_eq!(session.into_cookies().get("other").as_deref(), Some("1"));
    }
}
