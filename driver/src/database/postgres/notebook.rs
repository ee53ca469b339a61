use error_stack::Report;
use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::{DependOnNotebookQuery, NotebookQuery};
use kernel::interface::update::{DependOnNotebookModifier, NotebookModifier};
use kernel::prelude::entity::{
    IsAvailable, Notebook, NotebookBrand, NotebookId, NotebookModel, NotebookSerialNumber, Version,
};
use kernel::KernelError;

use crate::database::postgres::{PgTransaction, PostgresDatabase};
use crate::error::ConvertError;

pub struct PostgresNotebookRepository;

#[async_trait::async_trait]
impl NotebookQuery<PgTransaction> for PostgresNotebookRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &NotebookId,
    ) -> error_stack::Result<Option<Notebook>, KernelError> {
        PgNotebookInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PgTransaction,
    ) -> error_stack::Result<Vec<Notebook>, KernelError> {
        PgNotebookInternal::find_all(con).await
    }

    async fn find_available(
        &self,
        con: &mut PgTransaction,
    ) -> error_stack::Result<Vec<Notebook>, KernelError> {
        PgNotebookInternal::find_available(con).await
    }
}

impl DependOnNotebookQuery<PgTransaction> for PostgresDatabase {
    type NotebookQuery = PostgresNotebookRepository;
    fn notebook_query(&self) -> &Self::NotebookQuery {
        &PostgresNotebookRepository
    }
}

#[async_trait::async_trait]
impl NotebookModifier<PgTransaction> for PostgresNotebookRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        notebook: &Notebook,
    ) -> error_stack::Result<(), KernelError> {
        PgNotebookInternal::create(con, notebook).await
    }

    async fn update(
        &self,
        con: &mut PgTransaction,
        notebook: &Notebook,
    ) -> error_stack::Result<(), KernelError> {
        PgNotebookInternal::update(con, notebook).await
    }
}

impl DependOnNotebookModifier<PgTransaction> for PostgresDatabase {
    type NotebookModifier = PostgresNotebookRepository;
    fn notebook_modifier(&self) -> &Self::NotebookModifier {
        &PostgresNotebookRepository
    }
}

#[derive(sqlx::FromRow)]
struct NotebookRow {
    id: Uuid,
    brand: String,
    model: String,
    serial_number: String,
    available: bool,
    version: i64,
}

impl From<NotebookRow> for Notebook {
    fn from(value: NotebookRow) -> Self {
        Notebook::new(
            NotebookId::new(value.id),
            NotebookBrand::new(value.brand),
            NotebookModel::new(value.model),
            NotebookSerialNumber::new(value.serial_number),
            IsAvailable::new(value.available),
            Version::new(value.version),
        )
    }
}

pub(in crate::database) struct PgNotebookInternal;

impl PgNotebookInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &NotebookId,
    ) -> error_stack::Result<Option<Notebook>, KernelError> {
        let row = sqlx::query_as::<_, NotebookRow>(
            // language=postgresql
            r#"
            SELECT id, brand, model, serial_number, available, version
            FROM notebooks
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Notebook::from))
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Notebook>, KernelError> {
        let rows = sqlx::query_as::<_, NotebookRow>(
            // language=postgresql
            r#"
            SELECT id, brand, model, serial_number, available, version
            FROM notebooks
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Notebook::from).collect())
    }

    async fn find_available(
        con: &mut PgConnection,
    ) -> error_stack::Result<Vec<Notebook>, KernelError> {
        let rows = sqlx::query_as::<_, NotebookRow>(
            // language=postgresql
            r#"
            SELECT id, brand, model, serial_number, available, version
            FROM notebooks
            WHERE available = TRUE
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Notebook::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        notebook: &Notebook,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO notebooks (id, brand, model, serial_number, available, version)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(notebook.id().as_ref())
        .bind(notebook.brand().as_ref())
        .bind(notebook.model().as_ref())
        .bind(notebook.serial_number().as_ref())
        .bind(notebook.available().as_ref())
        .bind(notebook.version().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    /*
     * Guarded on the version the caller read. The row version moves one
     * step forward on success, so a concurrent writer hits zero rows.
     */
    async fn update(
        con: &mut PgConnection,
        notebook: &Notebook,
    ) -> error_stack::Result<(), KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE notebooks
            SET brand = $2, model = $3, serial_number = $4, available = $5, version = version + 1
            WHERE id = $1 AND version = $6
            "#,
        )
        .bind(notebook.id().as_ref())
        .bind(notebook.brand().as_ref())
        .bind(notebook.model().as_ref())
        .bind(notebook.serial_number().as_ref())
        .bind(notebook.available().as_ref())
        .bind(notebook.version().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::Concurrency).attach_printable(format!(
                "notebook {} was updated by someone else",
                notebook.id().as_ref()
            )));
        }
        Ok(())
    }
}
