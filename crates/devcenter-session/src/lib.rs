//! Cookie-backed session state for the DevCenter header.
//!
//! The session token is a JWT decoded for display only: its signature is
//! never verified.
//!
//! # Quick Start
//!
//! ```
//! use devcenter_session::{CookieJar, HeaderView, SessionSettings, decode_session};
//!
//! let jar = CookieJar::parse_header("DevCenter.firstName=Ada");
//! let state = decode_session(&jar, &SessionSettings::default());
//!
//! assert!(!state.authenticated);
//! assert!(HeaderView::from_state(&state).profile.is_none());
//! ```

mod cookie;
mod header;
mod session;
mod token;

pub use cookie::{CookieJar, CookieNames, CookieStore};
pub use header::{HeaderView, NavItem, NavTarget, ProfileMenu};
pub use session::{AuthState, Session, SessionSettings, decode_session, decode_session_at};
pub use token::{Claims, DEFAULT_CLOCK_SKEW_SECS, TokenError, decode_payload, is_token_expired};
