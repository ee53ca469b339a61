use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentEmail(String);

impl StudentEmail {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }
}

impl From<String> for StudentEmail {
    fn from(email: String) -> Self {
        Self(email)
    }
}

impl AsRef<String> for StudentEmail {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentPhone(String);

impl StudentPhone {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }
}

impl From<String> for StudentPhone {
    fn from(phone: String) -> Self {
        Self(phone)
    }
}

impl AsRef<String> for StudentPhone {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
