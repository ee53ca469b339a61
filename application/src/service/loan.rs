use error_stack::Report;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnLoanQuery, DependOnNotebookQuery, DependOnStudentQuery, LoanQuery, NotebookQuery,
    StudentQuery,
};
use kernel::interface::update::{
    DependOnLoanModifier, DependOnNotebookModifier, LoanModifier, NotebookModifier,
};
use kernel::prelude::entity::{
    BeginDate, EndDate, IsAvailable, Loan, LoanId, LoanState, NotebookId, StudentRut,
};
use kernel::KernelError;

use crate::transfer::{
    CreateLoanDto, GetLoanDto, GetLoansByRutDto, GetLoansByStateDto, ModifyLoanStateDto,
};

#[async_trait::async_trait]
pub trait CreateLoanService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnStudentQuery<Connection>
    + DependOnNotebookQuery<Connection>
    + DependOnLoanQuery<Connection>
    + DependOnLoanModifier<Connection>
    + DependOnNotebookModifier<Connection>
{
    async fn create_loan(&self, dto: CreateLoanDto) -> error_stack::Result<Loan, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rut = StudentRut::new(dto.student_rut);
        let student = self
            .student_query()
            .find_by_rut(&mut connection, &rut)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("student {} does not exist", dto.student_rut))
            })?;

        if *student.blocked().as_ref() {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("student {} is blocked", dto.student_rut)));
        }

        let open = self
            .loan_query()
            .find_open_by_rut(&mut connection, &rut)
            .await?;
        if !open.is_empty() {
            return Err(Report::new(KernelError::Conflict).attach_printable(format!(
                "student {} already holds a notebook",
                dto.student_rut
            )));
        }

        let notebook_id = NotebookId::new(dto.notebook_id);
        let notebook = self
            .notebook_query()
            .find_by_id(&mut connection, &notebook_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("notebook {} does not exist", dto.notebook_id))
            })?;

        if !*notebook.available().as_ref() {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("notebook {} is not available", dto.notebook_id)));
        }

        let loan = Loan::new(
            LoanId::new(Uuid::new_v4()),
            notebook_id,
            rut,
            LoanState::Active,
            BeginDate::new(OffsetDateTime::now_utc()),
            None,
        );
        self.loan_modifier().create(&mut connection, &loan).await?;

        let taken = notebook.reconstruct(|n| n.available = IsAvailable::new(false));
        self.notebook_modifier()
            .update(&mut connection, &taken)
            .await?;

        connection.commit().await?;

        Ok(loan)
    }
}

impl<Connection: Transaction, T> CreateLoanService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnStudentQuery<Connection>
        + DependOnNotebookQuery<Connection>
        + DependOnLoanQuery<Connection>
        + DependOnLoanModifier<Connection>
        + DependOnNotebookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait ModifyLoanStateService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnLoanQuery<Connection>
    + DependOnNotebookQuery<Connection>
    + DependOnLoanModifier<Connection>
    + DependOnNotebookModifier<Connection>
{
    async fn modify_loan_state(
        &self,
        dto: ModifyLoanStateDto,
    ) -> error_stack::Result<Loan, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let state = LoanState::try_from(dto.state).map_err(|error| {
            Report::new(error).attach_printable(format!("{} is not a loan state", dto.state))
        })?;

        let rut = StudentRut::new(dto.student_rut);
        let loan = self
            .loan_query()
            .find_latest_active_by_rut(&mut connection, &rut)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Conflict)
                    .attach_printable(format!("student {} has no active loan", dto.student_rut))
            })?;

        let loan = match state {
            LoanState::Finalized => {
                let notebook = self
                    .notebook_query()
                    .find_by_id(&mut connection, loan.notebook_id())
                    .await?
                    .ok_or_else(|| {
                        Report::new(KernelError::Internal)
                            .attach_printable("loan references a notebook that no longer exists")
                    })?;
                let freed = notebook.reconstruct(|n| n.available = IsAvailable::new(true));
                self.notebook_modifier()
                    .update(&mut connection, &freed)
                    .await?;

                loan.reconstruct(|l| {
                    l.state = LoanState::Finalized;
                    l.end_date = Some(EndDate::new(OffsetDateTime::now_utc()));
                })
            }
            state => loan.reconstruct(|l| l.state = state),
        };
        self.loan_modifier().update(&mut connection, &loan).await?;

        connection.commit().await?;

        Ok(loan)
    }
}

impl<Connection: Transaction, T> ModifyLoanStateService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnLoanQuery<Connection>
        + DependOnNotebookQuery<Connection>
        + DependOnLoanModifier<Connection>
        + DependOnNotebookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetLoanService<Connection: Transaction>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnLoanQuery<Connection>
{
    async fn get_loan_by_id(
        &self,
        dto: GetLoanDto,
    ) -> error_stack::Result<Option<Loan>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = LoanId::new(dto.id);
        self.loan_query().find_by_id(&mut connection, &id).await
    }

    async fn get_loans_by_rut(
        &self,
        dto: GetLoansByRutDto,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rut = StudentRut::new(dto.rut);
        self.loan_query().find_by_rut(&mut connection, &rut).await
    }

    async fn get_active_loans_by_rut(
        &self,
        dto: GetLoansByRutDto,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rut = StudentRut::new(dto.rut);
        self.loan_query()
            .find_active_by_rut(&mut connection, &rut)
            .await
    }

    async fn get_loans_by_state(
        &self,
        dto: GetLoansByStateDto,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        self.loan_query()
            .find_by_state(&mut connection, &dto.state)
            .await
    }
}

impl<Connection: Transaction, T> GetLoanService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnLoanQuery<Connection>
{
}
