use error_stack::Report;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnSanctionQuery, DependOnStudentQuery, SanctionQuery, StudentQuery,
};
use kernel::interface::update::{
    DependOnSanctionModifier, DependOnStudentModifier, SanctionModifier, StudentModifier,
};
use kernel::prelude::entity::{
    BeginDate, FinishDate, IsBlocked, LoanId, Sanction, SanctionDescription, SanctionId, Student,
    StudentRut,
};
use kernel::KernelError;

use crate::transfer::{ApplySanctionDto, GetSanctionsByRutDto, RemoveSanctionDto};

#[async_trait::async_trait]
pub trait ApplySanctionService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnStudentQuery<Connection>
    + DependOnStudentModifier<Connection>
    + DependOnSanctionModifier<Connection>
{
    async fn apply_sanction(
        &self,
        dto: ApplySanctionDto,
    ) -> error_stack::Result<Sanction, KernelError> {
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

        let sanction = Sanction::new(
            SanctionId::new(Uuid::new_v4()),
            rut,
            dto.loan_id.map(LoanId::new),
            SanctionDescription::new(dto.description),
            BeginDate::new(OffsetDateTime::now_utc()),
            FinishDate::new(dto.finish_date),
        );
        self.sanction_modifier()
            .create(&mut connection, &sanction)
            .await?;

        // Blocking rides along unconditionally, even over expired history.
        let blocked = student.reconstruct(|s| s.blocked = IsBlocked::new(true));
        self.student_modifier()
            .update(&mut connection, &blocked)
            .await?;

        connection.commit().await?;

        Ok(sanction)
    }
}

impl<Connection: Transaction, T> ApplySanctionService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnStudentQuery<Connection>
        + DependOnStudentModifier<Connection>
        + DependOnSanctionModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait RemoveSanctionService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnStudentQuery<Connection>
    + DependOnStudentModifier<Connection>
    + DependOnSanctionQuery<Connection>
    + DependOnSanctionModifier<Connection>
{
    /*
     * Expires the matching still-active sanctions and returns the first
     * one. Unblocking never happens unless the caller asked for it.
     */
    async fn remove_sanction(
        &self,
        dto: RemoveSanctionDto,
    ) -> error_stack::Result<Sanction, KernelError> {
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

        let now = OffsetDateTime::now_utc();
        let active = self
            .sanction_query()
            .find_active_by_rut(&mut connection, &rut, &now)
            .await?;
        let loan_id = dto.loan_id.map(LoanId::new);
        let mut targets = active
            .into_iter()
            .filter(|sanction| match &loan_id {
                Some(loan_id) => sanction.loan_id().as_ref() == Some(loan_id),
                None => true,
            })
            .map(|sanction| sanction.reconstruct(|s| s.finish_date = FinishDate::new(now)));

        let first = targets.next().ok_or_else(|| {
            Report::new(KernelError::NotFound).attach_printable(format!(
                "student {} has no active sanction to remove",
                dto.student_rut
            ))
        })?;
        self.sanction_modifier()
            .update(&mut connection, &first)
            .await?;
        for expired in targets {
            self.sanction_modifier()
                .update(&mut connection, &expired)
                .await?;
        }

        if dto.unblock_student {
            let unblocked = student.reconstruct(|s| s.blocked = IsBlocked::new(false));
            self.student_modifier()
                .update(&mut connection, &unblocked)
                .await?;
        }

        connection.commit().await?;

        Ok(first)
    }
}

impl<Connection: Transaction, T> RemoveSanctionService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnStudentQuery<Connection>
        + DependOnStudentModifier<Connection>
        + DependOnSanctionQuery<Connection>
        + DependOnSanctionModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetSanctionService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnStudentQuery<Connection>
    + DependOnSanctionQuery<Connection>
{
    async fn get_active_sanctions_by_rut(
        &self,
        dto: GetSanctionsByRutDto,
    ) -> error_stack::Result<Vec<Sanction>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rut = StudentRut::new(dto.rut);
        let now = OffsetDateTime::now_utc();
        self.sanction_query()
            .find_active_by_rut(&mut connection, &rut, &now)
            .await
    }

    // An unknown rut simply has no active sanctions.
    async fn has_active_sanction(
        &self,
        dto: GetSanctionsByRutDto,
    ) -> error_stack::Result<bool, KernelError> {
        let sanctions = self.get_active_sanctions_by_rut(dto).await?;
        Ok(!sanctions.is_empty())
    }

    async fn get_blocked_students(&self) -> error_stack::Result<Vec<Student>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        self.student_query().find_blocked(&mut connection).await
    }
}

impl<Connection: Transaction, T> GetSanctionService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnStudentQuery<Connection>
        + DependOnSanctionQuery<Connection>
{
}
