use serde::{Deserialize, Serialize};

/// `{type, locator}` packaging of a collaborator-built "TYPE=LOCATOR" string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorDescriptor {
    pub r#type: String,
    pub locator: String,
}

impl LocatorDescriptor {
    /// Split a locator target on the first `=`. A target without one keeps
    /// its whole text as the locator and an empty type.
    pub fn parse(target: &str) -> Self {
        match target.split_once('=') {
            Some((kind, locator)) => Self {
                r#type: kind.to_string(),
                locator: locator.to_string(),
            },
            None => Self {
                r#type: String::new(),
                locator: target.to_string(),
            },
        }
    }

    /// Reassemble the original "TYPE=LOCATOR" string.
    pub fn to_target(&self) -> String {
        format!("{}={}", self.r#type, self.locator)
    }
}
