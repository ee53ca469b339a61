use crate::controller::Exhaust;
use kernel::prelude::entity::{
    DestructNotebook, IsAvailable, Notebook, NotebookBrand, NotebookId, NotebookModel,
    NotebookSerialNumber,
};
use serde::Serialize;

// The version counter is a storage concern and stays off the wire.
#[derive(Debug, Serialize)]
pub struct NotebookResponse {
    id: NotebookId,
    brand: NotebookBrand,
    model: NotebookModel,
    serial_number: NotebookSerialNumber,
    available: IsAvailable,
}

pub struct NotebookPresenter;

impl Exhaust<Vec<Notebook>> for NotebookPresenter {
    type To = axum::Json<Vec<NotebookResponse>>;
    fn emit(&self, input: Vec<Notebook>) -> Self::To {
        let result = input
            .into_iter()
            .map(|notebook| {
                let DestructNotebook {
                    id,
                    brand,
                    model,
                    serial_number,
                    available,
                    ..
                } = notebook.into_destruct();
                NotebookResponse {
                    id,
                    brand,
                    model,
                    serial_number,
                    available,
                }
            })
            .collect::<Vec<_>>();
        axum::Json::from(result)
    }
}
