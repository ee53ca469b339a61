use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::marker::PhantomData;

/*
 * Optimistic-lock counter. Every successful update increments it by one,
 * and an update conditioned on a stale value must affect zero rows.
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version<T>(i64, PhantomData<T>);

impl<T> Version<T> {
    pub fn new(version: impl Into<i64>) -> Self {
        Self(version.into(), PhantomData)
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1, PhantomData)
    }
}

impl<T> From<i64> for Version<T> {
    fn from(version: i64) -> Self {
        Self(version, PhantomData)
    }
}

impl<T> AsRef<i64> for Version<T> {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

impl<T> Serialize for Version<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Version<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(|version| Self(version, PhantomData))
    }
}
