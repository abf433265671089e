//! BuildId value object - the preview build token
//!
//! Preview deployments are addressed as `{build_id}.{domain}`, so the token
//! must be a valid DNS label. It is always exactly 8 lowercase hex characters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CompileError;

/// An 8-character lowercase hexadecimal build identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BuildId(String);

impl BuildId {
    /// Required token length
    pub const LEN: usize = 8;

    /// Parse and validate a build id
    pub fn parse(raw: &str) -> Result<Self, CompileError> {
        let valid = raw.len() == Self::LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !valid {
            return Err(CompileError::configuration(format!(
                "build id '{}' must be {} lowercase hex characters",
                raw,
                Self::LEN
            )));
        }
        Ok(Self(raw.to_string()))
    }

    /// Build an id from a random 32-bit value
    pub fn from_u32(value: u32) -> Self {
        Self(format!("{:08x}", value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BuildId {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BuildId {
    type Error = CompileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BuildId> for String {
    fn from(id: BuildId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_id_accepts_lowercase_hex() {
        let id = BuildId::parse("ab12cd34").unwrap();
        assert_eq!(id.as_str(), "ab12cd34");
    }

    #[test]
    fn build_id_rejects_uppercase() {
        assert!(BuildId::parse("AB12CD34").is_err());
    }

    #[test]
    fn build_id_rejects_wrong_length() {
        assert!(BuildId::parse("ab12cd3").is_err());
        assert!(BuildId::parse("ab12cd345").is_err());
        assert!(BuildId::parse("").is_err());
    }

    #[test]
    fn build_id_rejects_non_hex() {
        assert!(BuildId::parse("ab12cd3g").is_err());
    }

    #[test]
    fn build_id_from_u32_pads_to_eight() {
        assert_eq!(BuildId::from_u32(0).as_str(), "00000000");
        assert_eq!(BuildId::from_u32(0xdeadbeef).as_str(), "deadbeef");
        assert_eq!(BuildId::from_u32(u32::MAX).as_str(), "ffffffff");
    }

    #[test]
    fn build_id_serde_validates() {
        let ok: BuildId = serde_json::from_str("\"0a1b2c3d\"").unwrap();
        assert_eq!(ok.as_str(), "0a1b2c3d");
        assert!(serde_json::from_str::<BuildId>("\"nope\"").is_err());
    }
}
