use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Core identifier for any component managed by plugctl.
// Opaque string, conventionally two-part ("group.component").
// Equality is exact string match; ordering only matters for stable output.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ComponentId(String);

impl ComponentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace part of a "group.component" id, if present.
    pub fn group(&self) -> Option<&str> {
        self.0.split_once('.').map(|(g, _)| g)
    }

    /// Short name part of a "group.component" id ("component"),
    /// or the whole id when it has no namespace.
    pub fn short_name(&self) -> &str {
        self.0.split_once('.').map(|(_, n)| n).unwrap_or(&self.0)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Parsing logic centralized here.
// Ids stay opaque; we only reject strings that cannot name a directory entry.
impl FromStr for ComponentId {
    type Err = crate::error::PlugctlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.chars().any(char::is_whitespace) || s.contains('/') {
            return Err(crate::error::PlugctlError::InvalidComponentId(s.to_string()));
        }
        Ok(ComponentId(s.to_string()))
    }
}

// Manifest deserialization funnels through the same validation as CLI input.
impl TryFrom<String> for ComponentId {
    type Error = crate::error::PlugctlError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
