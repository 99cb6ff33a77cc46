//! In-place `${VAR}` expansion of string config fields.

use crate::ConfigError;

/// Expand environment references in each `(field path, value)` entry.
///
/// Values without `${` are left untouched. Expansion goes through
/// `shellexpand::env`, so `${VAR:-default}` falls back to `default`; an
/// unset variable without a default fails with the entry's field path.
pub(crate) fn expand_fields<'a>(
    fields: impl IntoIterator<Item = (&'static str, &'a mut String)>,
) -> Result<(), ConfigError> {
    for (field, value) in fields {
        if !value.contains("${") {
            continue;
        }
        let expanded = shellexpand::env(value.as_str())
            .map_err(|e| ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("${{{}}} not set", e.var_name),
            })?
            .into_owned();
        *value = expanded;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_expands_each_entry() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DEVCENTER_EXPAND_BRAND", "Acme");
            std::env::remove_var("DEVCENTER_EXPAND_UNSET");
        }
        let mut title = "${DEVCENTER_EXPAND_BRAND} Developers".to_owned();
        let mut cookie = "${DEVCENTER_EXPAND_UNSET:-DevCenter}.token".to_owned();
        let mut plain = "DevCenter.email".to_owned();

        expand_fields([
            ("build.site_title", &mut title),
            ("session.token_cookie", &mut cookie),
            ("session.email_cookie", &mut plain),
        ])
        .unwrap();

        assert_eq!(title, "Acme Developers");
        assert_eq!(cookie, "DevCenter.token");
        assert_eq!(plain, "DevCenter.email");
        unsafe {
            std::env::remove_var("DEVCENTER_EXPAND_BRAND");
        }
    }

    #[test]
    fn test_unset_variable_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DEVCENTER_EXPAND_MISSING");
        }
        let mut cookie = "${DEVCENTER_EXPAND_MISSING}".to_owned();

        let err = expand_fields([("session.first_name_cookie", &mut cookie)]).unwrap_err();

        assert!(matches!(
            &err,
            ConfigError::EnvVar { field, .. } if field == "session.first_name_cookie"
        ));
        assert!(err.to_string().contains("${DEVCENTER_EXPAND_MISSING} not set"));
    }

    #[test]
    fn test_bare_dollar_left_alone() {
        let mut value = "$HOME".to_owned();

        expand_fields([("build.site_title", &mut value)]).unwrap();

        assert_eq!(value, "$HOME");
    }
}
