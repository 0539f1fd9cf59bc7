//! Tri-state field for partial updates.
//!
//! A JSON update body distinguishes three cases per field: the key is
//! missing, the key is `null`, or the key carries a value. `Option<T>`
//! collapses the first two, so update payloads use [`Patch`] with
//! `#[serde(default)]` instead.

use serde::{Deserialize, Deserializer};

use crate::domain::errors::DomainError;

/// One field of an update payload
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    /// Key not present: leave the stored value alone
    Absent,
    /// Key present with `null`
    Null,
    /// Key present with a value
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    /// Merges into a nullable field; `null` clears it
    pub fn apply(self, target: &mut Option<T>) {
        match self {
            Patch::Absent => {}
            Patch::Null => *target = None,
            Patch::Value(value) => *target = Some(value),
        }
    }

    /// Merges into a non-nullable field; `null` is rejected
    pub fn apply_required(self, field: &str, target: &mut T) -> Result<(), DomainError> {
        match self {
            Patch::Absent => Ok(()),
            Patch::Null => Err(DomainError::validation(format!(
                "{} cannot be null",
                field
            ))),
            Patch::Value(value) => {
                *target = value;
                Ok(())
            }
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    // Only called when the key is present; a missing key falls back to
    // `Default` via `#[serde(default)]` on the containing struct.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        phone: Patch<String>,
    }

    #[test]
    fn missing_key_is_absent() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(body.phone, Patch::Absent);
    }

    #[test]
    fn null_key_is_null() {
        let body: Body = serde_json::from_str(r#"{"phone": null}"#).unwrap();
        assert_eq!(body.phone, Patch::Null);
    }

    #[test]
    fn value_key_is_value() {
        let body: Body = serde_json::from_str(r#"{"phone": "+44 20 7946 0958"}"#).unwrap();
        assert_eq!(body.phone, Patch::Value("+44 20 7946 0958".to_string()));
    }

    #[test]
    fn apply_clears_nullable_field_on_null() {
        let mut phone = Some("555".to_string());
        Patch::Null.apply(&mut phone);
        assert_eq!(phone, None);
    }

    #[test]
    fn apply_leaves_field_untouched_when_absent() {
        let mut phone = Some("555".to_string());
        Patch::Absent.apply(&mut phone);
        assert_eq!(phone.as_deref(), Some("555"));
    }

    #[test]
    fn apply_required_rejects_null() {
        let mut name = "Rex".to_string();
        let result = Patch::<String>::Null.apply_required("name", &mut name);

        assert_eq!(
            result,
            Err(DomainError::validation("name cannot be null"))
        );
        assert_eq!(name, "Rex");
    }

    #[test]
    fn apply_required_overwrites_with_value() {
        let mut name = "Rex".to_string();
        Patch::Value("Max".to_string())
            .apply_required("name", &mut name)
            .unwrap();
        assert_eq!(name, "Max");
    }
}
