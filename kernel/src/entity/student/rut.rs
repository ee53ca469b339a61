use serde::{Deserialize, Serialize};

/*
 * Body of the Chilean RUT, without the check digit.
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentRut(i32);

impl StudentRut {
    pub fn new(rut: impl Into<i32>) -> Self {
        Self(rut.into())
    }
}

impl From<i32> for StudentRut {
    fn from(rut: i32) -> Self {
        Self(rut)
    }
}

impl AsRef<i32> for StudentRut {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentDv(String);

impl StudentDv {
    pub fn new(dv: impl Into<String>) -> Self {
        Self(dv.into())
    }
}

impl From<String> for StudentDv {
    fn from(dv: String) -> Self {
        Self(dv)
    }
}

impl AsRef<String> for StudentDv {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
