use crate::database::Transaction;
use crate::entity::{Notebook, NotebookId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait NotebookQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &NotebookId,
    ) -> error_stack::Result<Option<Notebook>, KernelError>;

    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Notebook>, KernelError>;

    async fn find_available(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Notebook>, KernelError>;
}

pub trait DependOnNotebookQuery<Connection: Transaction>: Sync + Send + 'static {
    type NotebookQuery: NotebookQuery<Connection>;
    fn notebook_query(&self) -> &Self::NotebookQuery;
}
