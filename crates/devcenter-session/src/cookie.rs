//! Cookie storage.

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;

/// Key-value cookie access.
///
/// Writes are independent and last-writer-wins.
pub trait CookieStore {
    fn get(&self, name: &str) -> Option<String>;

    fn set(&mut self, name: &str, value: &str);

    /// Remove a cookie. Removing an absent cookie is a no-op.
    fn remove(&mut self, name: &str);
}

/// In-memory cookie store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: BTreeMap<String, String>,
}

impl CookieJar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a jar from a `Cookie` request header (`a=b; c=d`).
    ///
    /// Values are percent-decoded and surrounding double quotes are
    /// stripped. Pairs without `=` or with an empty name are skipped; for
    /// repeated names the last one wins.
    #[must_use]
    pub fn parse_header(header: &str) -> Self {
        let mut jar = Self::new();
        for pair in header.split(';') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            let decoded = percent_decode_str(value).decode_utf8_lossy();
            jar.set(name, &decoded);
        }
        jar
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl CookieStore for CookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        self.cookies.insert(name.to_owned(), value.to_owned());
    }

    fn remove(&mut self, name: &str) {
        self.cookies.remove(name);
    }
}

/// Names of the three session cookies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieNames {
    pub token: String,
    pub first_name: String,
    pub email: String,
}

impl CookieNames {
    pub fn new(
        token: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            first_name: first_name.into(),
            email: email.into(),
        }
    }
}

impl Default for CookieNames {
    fn default() -> Self {
        Self::new("DevCenter.token", "DevCenter.firstName", "DevCenter.email")
    }
}
