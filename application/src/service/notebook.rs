use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnNotebookQuery, NotebookQuery};
use kernel::prelude::entity::Notebook;
use kernel::KernelError;

#[async_trait::async_trait]
pub trait GetNotebookService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnNotebookQuery<Connection>
{
    async fn get_all_notebooks(&self) -> error_stack::Result<Vec<Notebook>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        self.notebook_query().find_all(&mut connection).await
    }

    async fn get_available_notebooks(&self) -> error_stack::Result<Vec<Notebook>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        self.notebook_query().find_available(&mut connection).await
    }
}

impl<Connection: Transaction, T> GetNotebookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnNotebookQuery<Connection>
{
}
