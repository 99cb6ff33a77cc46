//! Site header view model.

use serde::Serialize;

use crate::session::AuthState;

/// Where a header entry leads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "href", rename_all = "camelCase")]
pub enum NavTarget {
    /// Route on the documentation site.
    Site(String),
    /// Route on the developer portal.
    Portal(String),
    /// Logs the user out.
    Logout,
    /// Not linked.
    None,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub target: NavTarget,
}

impl NavItem {
    fn new(label: &str, target: NavTarget) -> Self {
        Self {
            label: label.to_owned(),
            target,
        }
    }
}

/// Profile menu, shown only to authenticated users.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMenu {
    pub welcome: String,
    pub username: String,
    /// Used for the avatar.
    pub email: String,
    pub items: Vec<NavItem>,
}

/// Header view model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub nav: Vec<NavItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileMenu>,
}

impl HeaderView {
    #[must_use]
    pub fn from_state(state: &AuthState) -> Self {
        let nav = vec![
            NavItem::new("API Console", NavTarget::Portal("/console".to_owned())),
            NavItem::new("My Organizations", NavTarget::None),
            NavItem::new("Documentation", NavTarget::Site("/".to_owned())),
            NavItem::new("Blog", NavTarget::Site("/blog".to_owned())),
            NavItem::new(
                "API Release Notes",
                NavTarget::Site("/api-release-notes".to_owned()),
            ),
            NavItem::new("API Reference", NavTarget::Site("/api-reference".to_owned())),
        ];

        let profile = state.authenticated.then(|| ProfileMenu {
            welcome: format!("Welcome {}!", state.first_name),
            username: state.username.clone(),
            email: state.email.clone(),
            items: vec![
                NavItem::new("Profile", NavTarget::Portal("/profile".to_owned())),
                NavItem::new("Account", NavTarget::Portal("/profile/account".to_owned())),
                NavItem::new(
                    "Console Settings",
                    NavTarget::Site("/profile/console-settings".to_owned()),
                ),
                NavItem::new("Logout", NavTarget::Logout),
            ],
        });

        Self { nav, profile }
    }
}
