use error_stack::Report;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnSanctionQuery, DependOnStudentQuery, SanctionQuery, StudentQuery,
};
use kernel::interface::update::{DependOnStudentModifier, StudentModifier};
use kernel::prelude::entity::{
    IsBlocked, Student, StudentCampus, StudentCareer, StudentDv, StudentEmail, StudentId,
    StudentLastname, StudentName, StudentPhone, StudentRut,
};
use kernel::KernelError;

use crate::transfer::{CreateStudentDto, GetStudentByIdDto, GetStudentByRutDto};

#[async_trait::async_trait]
pub trait CreateStudentService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnStudentQuery<Connection>
    + DependOnStudentModifier<Connection>
{
    async fn create_student(
        &self,
        dto: CreateStudentDto,
    ) -> error_stack::Result<Student, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rut = StudentRut::new(dto.rut);
        let existing = self
            .student_query()
            .find_by_rut(&mut connection, &rut)
            .await?;
        if existing.is_some() {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("rut {} is already enrolled", dto.rut)));
        }

        let student = Student::new(
            StudentId::new(Uuid::new_v4()),
            rut,
            StudentDv::new(dto.dv),
            StudentName::new(dto.name),
            StudentLastname::new(dto.lastname),
            StudentEmail::new(dto.email),
            StudentPhone::new(dto.phone),
            StudentCampus::new(dto.campus),
            StudentCareer::new(dto.career),
            IsBlocked::new(false),
        );
        self.student_modifier()
            .create(&mut connection, &student)
            .await?;

        connection.commit().await?;

        Ok(student)
    }
}

impl<Connection: Transaction, T> CreateStudentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnStudentQuery<Connection>
        + DependOnStudentModifier<Connection>
{
}

/*
 * Single-student reads also report whether a sanction is currently
 * running, next to the stored blocked flag. The two are independent.
 */
#[async_trait::async_trait]
pub trait GetStudentService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnStudentQuery<Connection>
    + DependOnSanctionQuery<Connection>
{
    async fn get_student_by_id(
        &self,
        dto: GetStudentByIdDto,
    ) -> error_stack::Result<Option<(Student, bool)>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = StudentId::new(dto.id);
        let student = self.student_query().find_by_id(&mut connection, &id).await?;
        match student {
            None => Ok(None),
            Some(student) => {
                let now = OffsetDateTime::now_utc();
                let sanctions = self
                    .sanction_query()
                    .find_active_by_rut(&mut connection, student.rut(), &now)
                    .await?;
                Ok(Some((student, !sanctions.is_empty())))
            }
        }
    }

    async fn get_student_by_rut(
        &self,
        dto: GetStudentByRutDto,
    ) -> error_stack::Result<Option<(Student, bool)>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rut = StudentRut::new(dto.rut);
        let student = self
            .student_query()
            .find_by_rut(&mut connection, &rut)
            .await?;
        match student {
            None => Ok(None),
            Some(student) => {
                let now = OffsetDateTime::now_utc();
                let sanctions = self
                    .sanction_query()
                    .find_active_by_rut(&mut connection, &rut, &now)
                    .await?;
                Ok(Some((student, !sanctions.is_empty())))
            }
        }
    }
}

impl<Connection: Transaction, T> GetStudentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnStudentQuery<Connection>
        + DependOnSanctionQuery<Connection>
{
}
