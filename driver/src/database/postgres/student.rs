use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::{DependOnStudentQuery, StudentQuery};
use kernel::interface::update::{DependOnStudentModifier, StudentModifier};
use kernel::prelude::entity::{
    IsBlocked, Student, StudentCampus, StudentCareer, StudentDv, StudentEmail, StudentId,
    StudentLastname, StudentName, StudentPhone, StudentRut,
};
use kernel::KernelError;

use crate::database::postgres::{PgTransaction, PostgresDatabase};
use crate::error::ConvertError;

pub struct PostgresStudentRepository;

#[async_trait::async_trait]
impl StudentQuery<PgTransaction> for PostgresStudentRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &StudentId,
    ) -> error_stack::Result<Option<Student>, KernelError> {
        PgStudentInternal::find_by_id(con, id).await
    }

    async fn find_by_rut(
        &self,
        con: &mut PgTransaction,
        rut: &StudentRut,
    ) -> error_stack::Result<Option<Student>, KernelError> {
        PgStudentInternal::find_by_rut(con, rut).await
    }

    async fn find_blocked(
        &self,
        con: &mut PgTransaction,
    ) -> error_stack::Result<Vec<Student>, KernelError> {
        PgStudentInternal::find_blocked(con).await
    }
}

impl DependOnStudentQuery<PgTransaction> for PostgresDatabase {
    type StudentQuery = PostgresStudentRepository;
    fn student_query(&self) -> &Self::StudentQuery {
        &PostgresStudentRepository
    }
}

#[async_trait::async_trait]
impl StudentModifier<PgTransaction> for PostgresStudentRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        student: &Student,
    ) -> error_stack::Result<(), KernelError> {
        PgStudentInternal::create(con, student).await
    }

    async fn update(
        &self,
        con: &mut PgTransaction,
        student: &Student,
    ) -> error_stack::Result<(), KernelError> {
        PgStudentInternal::update(con, student).await
    }
}

impl DependOnStudentModifier<PgTransaction> for PostgresDatabase {
    type StudentModifier = PostgresStudentRepository;
    fn student_modifier(&self) -> &Self::StudentModifier {
        &PostgresStudentRepository
    }
}

#[derive(sqlx::FromRow)]
struct StudentRow {
    id: Uuid,
    rut: i32,
    dv: String,
    name: String,
    lastname: String,
    email: String,
    phone: String,
    campus: String,
    career: String,
    blocked: bool,
}

impl From<StudentRow> for Student {
    fn from(value: StudentRow) -> Self {
        Student::new(
            StudentId::new(value.id),
            StudentRut::new(value.rut),
            StudentDv::new(value.dv),
            StudentName::new(value.name),
            StudentLastname::new(value.lastname),
            StudentEmail::new(value.email),
            StudentPhone::new(value.phone),
            StudentCampus::new(value.campus),
            StudentCareer::new(value.career),
            IsBlocked::new(value.blocked),
        )
    }
}

pub(in crate::database) struct PgStudentInternal;

impl PgStudentInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &StudentId,
    ) -> error_stack::Result<Option<Student>, KernelError> {
        let row = sqlx::query_as::<_, StudentRow>(
            // language=postgresql
            r#"
            SELECT id, rut, dv, name, lastname, email, phone, campus, career, blocked
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Student::from))
    }

    async fn find_by_rut(
        con: &mut PgConnection,
        rut: &StudentRut,
    ) -> error_stack::Result<Option<Student>, KernelError> {
        let row = sqlx::query_as::<_, StudentRow>(
            // language=postgresql
            r#"
            SELECT id, rut, dv, name, lastname, email, phone, campus, career, blocked
            FROM students
            WHERE rut = $1
            "#,
        )
        .bind(rut.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Student::from))
    }

    async fn find_blocked(
        con: &mut PgConnection,
    ) -> error_stack::Result<Vec<Student>, KernelError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            // language=postgresql
            r#"
            SELECT id, rut, dv, name, lastname, email, phone, campus, career, blocked
            FROM students
            WHERE blocked = TRUE
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        student: &Student,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO students (id, rut, dv, name, lastname, email, phone, campus, career, blocked)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(student.id().as_ref())
        .bind(student.rut().as_ref())
        .bind(student.dv().as_ref())
        .bind(student.name().as_ref())
        .bind(student.lastname().as_ref())
        .bind(student.email().as_ref())
        .bind(student.phone().as_ref())
        .bind(student.campus().as_ref())
        .bind(student.career().as_ref())
        .bind(student.blocked().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        student: &Student,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE students
            SET dv = $2, name = $3, lastname = $4, email = $5, phone = $6, campus = $7, career = $8, blocked = $9
            WHERE id = $1
            "#,
        )
        .bind(student.id().as_ref())
        .bind(student.dv().as_ref())
        .bind(student.name().as_ref())
        .bind(student.lastname().as_ref())
        .bind(student.email().as_ref())
        .bind(student.phone().as_ref())
        .bind(student.campus().as_ref())
        .bind(student.career().as_ref())
        .bind(student.blocked().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
