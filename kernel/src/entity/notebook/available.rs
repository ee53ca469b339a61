use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsAvailable(bool);

impl IsAvailable {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}

impl From<bool> for IsAvailable {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl AsRef<bool> for IsAvailable {
    fn as_ref(&self) -> &bool {
        &self.0
    }
}
