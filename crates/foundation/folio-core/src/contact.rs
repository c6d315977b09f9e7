//! Contact form handling
//!
//! Submissions are validated and logged. Nothing is stored or sent.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please tell me your name")]
    MissingName,

    #[error("'{0}' does not look like an email address")]
    InvalidEmail(String),

    #[error("The message is empty")]
    MissingMessage,
}

/// A contact form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    /// Validate and log the submission
    pub fn submit(&self) -> Result<(), ContactError> {
        if let Err(e) = self.validate() {
            tracing::warn!(error = %e, "contact form rejected");
            return Err(e);
        }
        tracing::info!(
            name = %self.name.trim(),
            email = %self.email.trim(),
            length = self.message.len(),
            "contact form submitted"
        );
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: body.to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let msg = message("Ada", "ada@example.com", "Let's build something");
        assert_eq!(msg.validate(), Ok(()));
        assert_eq!(msg.submit(), Ok(()));
    }

    #[test]
    fn test_missing_name() {
        let msg = message("   ", "ada@example.com", "hi");
        assert_eq!(msg.validate(), Err(ContactError::MissingName));
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["", "ada", "ada@", "@example.com", "ada@example", "a b@example.com", "a@b@c.com"] {
            let msg = message("Ada", email, "hi");
            assert_eq!(
                msg.validate(),
                Err(ContactError::InvalidEmail(email.to_string())),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_missing_message() {
        let msg = message("Ada", "ada@example.com", "\n\t");
        assert_eq!(msg.submit(), Err(ContactError::MissingMessage));
    }
}
