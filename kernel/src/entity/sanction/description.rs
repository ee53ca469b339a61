use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SanctionDescription(String);

impl SanctionDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}

impl From<String> for SanctionDescription {
    fn from(description: String) -> Self {
        Self(description)
    }
}

impl AsRef<String> for SanctionDescription {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
