use std::str::FromStr;

use crate::error::JrdError;
use crate::types::Jrd;

impl Jrd {
    /// Parse a raw JRD payload.
    ///
    /// Unknown members are ignored and all members are optional, so any
    /// JSON object with correctly typed members parses.
    ///
    /// # Errors
    /// Returns `JrdError` if the payload is not JSON, not an object, or a
    /// member has the wrong type (including non-string property values).
    pub fn parse(blob: &[u8]) -> Result<Self, JrdError> {
        let value: serde_json::Value = serde_json::from_slice(blob)?;
        Self::from_value(value)
    }

    /// Validate and convert an already-decoded JSON value.
    ///
    /// # Errors
    /// Same as [`Jrd::parse`], minus JSON syntax errors.
    pub fn from_value(value: serde_json::Value) -> Result<Self, JrdError> {
        if !value.is_object() {
            return Err(JrdError::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }
}

impl FromStr for Jrd {
    type Err = JrdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}
