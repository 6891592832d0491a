//! Access decisions for the admin area.
//!
//! The allow-list is a plain configuration value handed to whoever performs
//! the check; there is no process-wide list.

use serde::{Deserialize, Serialize};

/// Outcome of an admin access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAccess {
    Allow,
    /// No identity was presented; send the caller to the login flow.
    RequireLogin,
    /// Identified, but not on the allow-list.
    Forbidden,
}

/// Who may use the admin area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminPolicy {
    /// Allowed emails, compared case-insensitively. Empty means any
    /// authenticated user is allowed.
    pub emails: Vec<String>,
    /// Skip all checks. For local development only.
    pub dev_mode: bool,
}

impl AdminPolicy {
    /// Decides access for the caller's email, as reported by the auth proxy.
    ///
    /// The email is trimmed; an empty one counts as no identity.
    pub fn authorize(&self, email: Option<&str>) -> AdminAccess {
        if self.dev_mode {
            return AdminAccess::Allow;
        }

        let email = email.map(str::trim).filter(|e| !e.is_empty());
        match email {
            None => AdminAccess::RequireLogin,
            Some(_) if self.emails.is_empty() => AdminAccess::Allow,
            Some(e) if self.is_listed(e) => AdminAccess::Allow,
            Some(e) => {
                log::debug!("admin access denied for {e}");
                AdminAccess::Forbidden
            }
        }
    }

    fn is_listed(&self, email: &str) -> bool {
        let email = email.to_lowercase();
        self.emails
            .iter()
            .any(|admin| admin.trim().to_lowercase() == email)
    }
}
