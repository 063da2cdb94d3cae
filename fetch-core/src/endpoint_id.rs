use std::fmt;

use thiserror::Error;

/// A validated operation identifier (e.g. `getUsers`, `putUsersId`).
///
/// Rules:
/// 1. Must start with an ASCII letter.
/// 2. Remaining characters must be ASCII alphanumeric or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointId(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointIdError {
    #[error("EndpointId cannot be empty")]
    Empty,
    #[error("EndpointId must start with an alphabetic character")]
    InvalidStartCharacter,
    #[error("EndpointId contains invalid character: '{0}'")]
    InvalidCharacter(char),
}

impl EndpointId {
    pub fn new<S: Into<String>>(id: S) -> Result<Self, EndpointIdError> {
        let s = id.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Checks an identifier without allocating.
    pub fn validate(s: &str) -> Result<(), EndpointIdError> {
        let mut chars = s.chars();

        match chars.next() {
            None => return Err(EndpointIdError::Empty),
            Some(c) if !c.is_ascii_alphabetic() => {
                return Err(EndpointIdError::InvalidStartCharacter)
            }
            _ => {}
        }

        if let Some(c) = chars.find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            return Err(EndpointIdError::InvalidCharacter(c));
        }

        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EndpointId> for String {
    fn from(id: EndpointId) -> Self {
        id.0
    }
}

impl TryFrom<&str> for EndpointId {
    type Error = EndpointIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
