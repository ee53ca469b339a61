use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotebookBrand(String);

impl NotebookBrand {
    pub fn new(brand: impl Into<String>) -> Self {
        Self(brand.into())
    }
}

impl From<String> for NotebookBrand {
    fn from(brand: String) -> Self {
        Self(brand)
    }
}

impl AsRef<String> for NotebookBrand {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotebookModel(String);

impl NotebookModel {
    pub fn new(model: impl Into<String>) -> Self {
        Self(model.into())
    }
}

impl From<String> for NotebookModel {
    fn from(model: String) -> Self {
        Self(model)
    }
}

impl AsRef<String> for NotebookModel {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotebookSerialNumber(String);

impl NotebookSerialNumber {
    pub fn new(serial_number: impl Into<String>) -> Self {
        Self(serial_number.into())
    }
}

impl From<String> for NotebookSerialNumber {
    fn from(serial_number: String) -> Self {
        Self(serial_number)
    }
}

impl AsRef<String> for NotebookSerialNumber {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
