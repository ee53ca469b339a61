use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentName(String);

impl StudentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl From<String> for StudentName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<String> for StudentName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentLastname(String);

impl StudentLastname {
    pub fn new(lastname: impl Into<String>) -> Self {
        Self(lastname.into())
    }
}

impl From<String> for StudentLastname {
    fn from(lastname: String) -> Self {
        Self(lastname)
    }
}

impl AsRef<String> for StudentLastname {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
