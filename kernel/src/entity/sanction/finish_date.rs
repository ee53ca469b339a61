use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FinishDate(OffsetDateTime);

impl FinishDate {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }
}

impl From<OffsetDateTime> for FinishDate {
    fn from(time: OffsetDateTime) -> Self {
        Self(time)
    }
}

impl AsRef<OffsetDateTime> for FinishDate {
    fn as_ref(&self) -> &OffsetDateTime {
        &self.0
    }
}

impl Serialize for FinishDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        time::serde::rfc3339::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for FinishDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        time::serde::rfc3339::deserialize(deserializer).map(Self)
    }
}
