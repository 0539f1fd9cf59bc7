use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::DomainError;

/// Email value object representing a syntactically valid email address
///
/// # Invariants
/// - Exactly one '@' with a non-empty local part
/// - Local part has no leading, trailing or doubled '.'
/// - Domain has two or more labels of letters, digits and '-',
///   no label starting or ending with '-'
/// - No whitespace, at most 254 characters
/// - Is immutable after construction
///
/// Deserialization runs the same checks, so every payload carrying an
/// email is validated on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Example
    /// ```
    /// use person_address_api::domain::value_objects::Email;
    ///
    /// let email = Email::new("ada@example.com").expect("valid email");
    /// assert_eq!(email.as_str(), "ada@example.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let email = email.into();
        if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err(DomainError::validation(format!(
                "Invalid email: {}",
                email
            )))
        }
    }

    fn is_valid(email: &str) -> bool {
        if email.len() > 254 || email.chars().any(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        Self::is_valid_local_part(local) && Self::is_valid_domain(domain)
    }

    /// Dot-separated atoms: no leading, trailing or doubled '.'
    fn is_valid_local_part(local: &str) -> bool {
        local.len() <= 64 && local.split('.').all(|atom| !atom.is_empty())
    }

    /// At least two labels of ASCII letters, digits or '-', none
    /// starting or ending with '-'
    fn is_valid_domain(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();
        labels.len() >= 2
            && labels.iter().all(|label| {
                !label.is_empty()
                    && label.len() <= 63
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            })
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
