mod available;
mod detail;
mod id;

pub use self::{available::*, detail::*, id::*};
use crate::entity::common::Version;
use destructure::{Destructure, Mutation};

#[derive(Debug, Clone, Eq, PartialEq, Destructure, Mutation)]
pub struct Notebook {
    id: NotebookId,
    brand: NotebookBrand,
    model: NotebookModel,
    serial_number: NotebookSerialNumber,
    available: IsAvailable,
    version: Version<Notebook>,
}

impl Notebook {
    pub fn new(
        id: NotebookId,
        brand: NotebookBrand,
        model: NotebookModel,
        serial_number: NotebookSerialNumber,
        available: IsAvailable,
        version: Version<Notebook>,
    ) -> Self {
        Self {
            id,
            brand,
            model,
            serial_number,
            available,
            version,
        }
    }

    pub fn id(&self) -> &NotebookId {
        &self.id
    }

    pub fn brand(&self) -> &NotebookBrand {
        &self.brand
    }

    pub fn model(&self) -> &NotebookModel {
        &self.model
    }

    pub fn serial_number(&self) -> &NotebookSerialNumber {
        &self.serial_number
    }

    pub fn available(&self) -> &IsAvailable {
        &self.available
    }

    pub fn version(&self) -> &Version<Notebook> {
        &self.version
    }
}
