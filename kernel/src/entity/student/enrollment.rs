use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentCampus(String);

impl StudentCampus {
    pub fn new(campus: impl Into<String>) -> Self {
        Self(campus.into())
    }
}

impl From<String> for StudentCampus {
    fn from(campus: String) -> Self {
        Self(campus)
    }
}

impl AsRef<String> for StudentCampus {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentCareer(String);

impl StudentCareer {
    pub fn new(career: impl Into<String>) -> Self {
        Self(career.into())
    }
}

impl From<String> for StudentCareer {
    fn from(career: String) -> Self {
        Self(career)
    }
}

impl AsRef<String> for StudentCareer {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
