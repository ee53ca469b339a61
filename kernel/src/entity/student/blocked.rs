use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsBlocked(bool);

impl IsBlocked {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}

impl From<bool> for IsBlocked {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl AsRef<bool> for IsBlocked {
    fn as_ref(&self) -> &bool {
        &self.0
    }
}
