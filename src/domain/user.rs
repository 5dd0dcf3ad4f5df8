use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

/// Payload accepted by `POST /users`.
///
/// Absent fields decode as empty strings so they fail the same
/// required-field check as explicitly empty ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Decodes a request body. Only a JSON object is accepted; serde would
    /// otherwise also take the positional array form.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "expected a JSON object",
            ));
        }
        serde_json::from_value(value)
    }

    /// Presence check only; the email shape is not inspected.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.username.is_empty() || self.email.is_empty() {
            return Err(DomainError::Validation(
                "Fields username and email are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_both_fields() {
        let user = NewUser::new("alice", "alice@example.com");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_username() {
        let user = NewUser::new("", "a@b.com");
        assert!(matches!(user.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_empty_email() {
        let user = NewUser::new("bob", "");
        assert!(matches!(user.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_validate_does_not_check_email_format() {
        let user = NewUser::new("carol", "not-an-email");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let user: NewUser = serde_json::from_str(r#"{"username":"dave"}"#).unwrap();
        assert_eq!(user.username, "dave");
        assert_eq!(user.email, "");
        assert!(user.validate().is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let user: NewUser =
            serde_json::from_str(r#"{"username":"eve","email":"eve@example.com","admin":true}"#)
                .unwrap();
        assert_eq!(user, NewUser::new("eve", "eve@example.com"));
    }

    #[test]
    fn test_wrong_field_type_fails_to_decode() {
        let result = NewUser::from_json(br#"{"username":1,"email":"x@y.z"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(NewUser::from_json(br#"["alice","alice@example.com"]"#).is_err());
        assert!(NewUser::from_json(b"null").is_err());
        assert!(NewUser::from_json(b"not json").is_err());
        assert!(NewUser::from_json(b"").is_err());
    }

    #[test]
    fn test_from_json_keeps_values_verbatim() {
        let user = NewUser::from_json(br#"{"username":" Alice ","email":"A@Example.com"}"#).unwrap();
        assert_eq!(user, NewUser::new(" Alice ", "A@Example.com"));
    }
}
