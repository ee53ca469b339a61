use crate::database::Transaction;
use crate::entity::Notebook;
use crate::KernelError;

#[async_trait::async_trait]
pub trait NotebookModifier<Connection: Transaction>: Sync + Send + 'static {
    async fn create(
        &self,
        con: &mut Connection,
        notebook: &Notebook,
    ) -> error_stack::Result<(), KernelError>;

    /*
     * Guarded by the version the caller read. A stale version must leave
     * the row untouched and fail with KernelError::Concurrency.
     */
    async fn update(
        &self,
        con: &mut Connection,
        notebook: &Notebook,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnNotebookModifier<Connection: Transaction>: Sync + Send + 'static {
    type NotebookModifier: NotebookModifier<Connection>;
    fn notebook_modifier(&self) -> &Self::NotebookModifier;
}
