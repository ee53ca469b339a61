use error_stack::Report;
use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::{DependOnLoanQuery, LoanQuery};
use kernel::interface::update::{DependOnLoanModifier, LoanModifier};
use kernel::prelude::entity::{
    BeginDate, EndDate, Loan, LoanId, LoanState, NotebookId, StudentRut,
};
use kernel::KernelError;

use crate::database::postgres::{PgTransaction, PostgresDatabase};
use crate::error::ConvertError;

pub struct PostgresLoanRepository;

#[async_trait::async_trait]
impl LoanQuery<PgTransaction> for PostgresLoanRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &LoanId,
    ) -> error_stack::Result<Option<Loan>, KernelError> {
        PgLoanInternal::find_by_id(con, id).await
    }

    async fn find_by_rut(
        &self,
        con: &mut PgTransaction,
        rut: &StudentRut,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        PgLoanInternal::find_by_rut(con, rut).await
    }

    async fn find_active_by_rut(
        &self,
        con: &mut PgTransaction,
        rut: &StudentRut,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        PgLoanInternal::find_active_by_rut(con, rut).await
    }

    async fn find_open_by_rut(
        &self,
        con: &mut PgTransaction,
        rut: &StudentRut,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        PgLoanInternal::find_open_by_rut(con, rut).await
    }

    async fn find_latest_active_by_rut(
        &self,
        con: &mut PgTransaction,
        rut: &StudentRut,
    ) -> error_stack::Result<Option<Loan>, KernelError> {
        PgLoanInternal::find_latest_active_by_rut(con, rut).await
    }

    async fn find_by_state(
        &self,
        con: &mut PgTransaction,
        state: &LoanState,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        PgLoanInternal::find_by_state(con, state).await
    }
}

impl DependOnLoanQuery<PgTransaction> for PostgresDatabase {
    type LoanQuery = PostgresLoanRepository;
    fn loan_query(&self) -> &Self::LoanQuery {
        &PostgresLoanRepository
    }
}

#[async_trait::async_trait]
impl LoanModifier<PgTransaction> for PostgresLoanRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        loan: &Loan,
    ) -> error_stack::Result<(), KernelError> {
        PgLoanInternal::create(con, loan).await
    }

    async fn update(
        &self,
        con: &mut PgTransaction,
        loan: &Loan,
    ) -> error_stack::Result<(), KernelError> {
        PgLoanInternal::update(con, loan).await
    }
}

impl DependOnLoanModifier<PgTransaction> for PostgresDatabase {
    type LoanModifier = PostgresLoanRepository;
    fn loan_modifier(&self) -> &Self::LoanModifier {
        &PostgresLoanRepository
    }
}

#[derive(sqlx::FromRow)]
struct LoanRow {
    id: Uuid,
    notebook_id: Uuid,
    student_rut: i32,
    state: i32,
    begin_date: OffsetDateTime,
    end_date: Option<OffsetDateTime>,
}

impl TryFrom<LoanRow> for Loan {
    type Error = Report<KernelError>;
    fn try_from(value: LoanRow) -> Result<Self, Self::Error> {
        let state = LoanState::try_from(value.state).map_err(Report::new)?;
        Ok(Loan::new(
            LoanId::new(value.id),
            NotebookId::new(value.notebook_id),
            StudentRut::new(value.student_rut),
            state,
            BeginDate::new(value.begin_date),
            value.end_date.map(EndDate::new),
        ))
    }
}

pub(in crate::database) struct PgLoanInternal;

impl PgLoanInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &LoanId,
    ) -> error_stack::Result<Option<Loan>, KernelError> {
        let row = sqlx::query_as::<_, LoanRow>(
            // language=postgresql
            r#"
            SELECT id, notebook_id, student_rut, state, begin_date, end_date
            FROM loans
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Loan::try_from).transpose()
    }

    async fn find_by_rut(
        con: &mut PgConnection,
        rut: &StudentRut,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        let rows = sqlx::query_as::<_, LoanRow>(
            // language=postgresql
            r#"
            SELECT id, notebook_id, student_rut, state, begin_date, end_date
            FROM loans
            WHERE student_rut = $1
            ORDER BY begin_date DESC
            "#,
        )
        .bind(rut.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Loan::try_from).collect()
    }

    async fn find_active_by_rut(
        con: &mut PgConnection,
        rut: &StudentRut,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        let rows = sqlx::query_as::<_, LoanRow>(
            // language=postgresql
            r#"
            SELECT id, notebook_id, student_rut, state, begin_date, end_date
            FROM loans
            WHERE student_rut = $1 AND state = $2
            ORDER BY begin_date DESC
            "#,
        )
        .bind(rut.as_ref())
        .bind(i32::from(LoanState::Active))
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Loan::try_from).collect()
    }

    async fn find_open_by_rut(
        con: &mut PgConnection,
        rut: &StudentRut,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        let rows = sqlx::query_as::<_, LoanRow>(
            // language=postgresql
            r#"
            SELECT id, notebook_id, student_rut, state, begin_date, end_date
            FROM loans
            WHERE student_rut = $1 AND state IN ($2, $3)
            ORDER BY begin_date DESC
            "#,
        )
        .bind(rut.as_ref())
        .bind(i32::from(LoanState::Active))
        .bind(i32::from(LoanState::Pending))
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Loan::try_from).collect()
    }

    async fn find_latest_active_by_rut(
        con: &mut PgConnection,
        rut: &StudentRut,
    ) -> error_stack::Result<Option<Loan>, KernelError> {
        let row = sqlx::query_as::<_, LoanRow>(
            // language=postgresql
            r#"
            SELECT id, notebook_id, student_rut, state, begin_date, end_date
            FROM loans
            WHERE student_rut = $1 AND state = $2
            ORDER BY begin_date DESC
            LIMIT 1
            "#,
        )
        .bind(rut.as_ref())
        .bind(i32::from(LoanState::Active))
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Loan::try_from).transpose()
    }

    async fn find_by_state(
        con: &mut PgConnection,
        state: &LoanState,
    ) -> error_stack::Result<Vec<Loan>, KernelError> {
        let rows = sqlx::query_as::<_, LoanRow>(
            // language=postgresql
            r#"
            SELECT id, notebook_id, student_rut, state, begin_date, end_date
            FROM loans
            WHERE state = $1
            ORDER BY begin_date DESC
            "#,
        )
        .bind(i32::from(*state))
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Loan::try_from).collect()
    }

    async fn create(con: &mut PgConnection, loan: &Loan) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO loans (id, notebook_id, student_rut, state, begin_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(loan.id().as_ref())
        .bind(loan.notebook_id().as_ref())
        .bind(loan.student_rut().as_ref())
        .bind(i32::from(*loan.state()))
        .bind(loan.begin_date().as_ref())
        .bind(loan.end_date().as_ref().map(|date| *date.as_ref()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, loan: &Loan) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE loans
            SET state = $2, end_date = $3
            WHERE id = $1
            "#,
        )
        .bind(loan.id().as_ref())
        .bind(i32::from(*loan.state()))
        .bind(loan.end_date().as_ref().map(|date| *date.as_ref()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::OffsetDateTime;
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::LoanQuery;
    use kernel::interface::update::{LoanModifier, NotebookModifier, StudentModifier};
    use kernel::prelude::entity::{
        BeginDate, EndDate, IsAvailable, IsBlocked, Loan, LoanId, LoanState, Notebook,
        NotebookBrand, NotebookId, NotebookModel, NotebookSerialNumber, Student, StudentCampus,
        StudentCareer, StudentDv, StudentEmail, StudentId, StudentLastname, StudentName,
        StudentPhone, StudentRut, Version,
    };
    use kernel::KernelError;
    use rand::Rng;

    use crate::database::postgres::{
        PostgresDatabase, PostgresLoanRepository, PostgresNotebookRepository,
        PostgresStudentRepository,
    };

    fn random_student() -> Student {
        let rut = rand::thread_rng().gen_range(1_000_000..=99_999_999);
        Student::new(
            StudentId::new(Uuid::new_v4()),
            StudentRut::new(rut),
            StudentDv::new("K"),
            StudentName::new("Grace"),
            StudentLastname::new("Hopper"),
            StudentEmail::new("grace@example.cl"),
            StudentPhone::new("987654321"),
            StudentCampus::new("Vitacura"),
            StudentCareer::new("Electronica"),
            IsBlocked::new(false),
        )
    }

    fn random_notebook() -> Notebook {
        Notebook::new(
            NotebookId::new(Uuid::new_v4()),
            NotebookBrand::new("HP"),
            NotebookModel::new("ProBook 440"),
            NotebookSerialNumber::new(Uuid::new_v4().to_string()),
            IsAvailable::new(true),
            Version::new(0),
        )
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let student = random_student();
        PostgresStudentRepository.create(&mut con, &student).await?;
        let notebook = random_notebook();
        PostgresNotebookRepository
            .create(&mut con, &notebook)
            .await?;

        let loan = Loan::new(
            LoanId::new(Uuid::new_v4()),
            notebook.id().clone(),
            student.rut().clone(),
            LoanState::Active,
            BeginDate::new(OffsetDateTime::now_utc()),
            None,
        );
        PostgresLoanRepository.create(&mut con, &loan).await?;

        // Timestamps lose sub-microsecond precision in postgres, so the
        // round trip is checked field by field.
        let found = PostgresLoanRepository
            .find_by_id(&mut con, loan.id())
            .await?
            .unwrap();
        assert_eq!(found.id(), loan.id());
        assert_eq!(found.notebook_id(), notebook.id());
        assert_eq!(found.student_rut(), student.rut());
        assert_eq!(found.state(), &LoanState::Active);
        assert!(found.end_date().is_none());

        let active = PostgresLoanRepository
            .find_active_by_rut(&mut con, student.rut())
            .await?;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id(), loan.id());

        let latest = PostgresLoanRepository
            .find_latest_active_by_rut(&mut con, student.rut())
            .await?;
        assert_eq!(latest.as_ref().map(Loan::id), Some(loan.id()));

        let open = PostgresLoanRepository
            .find_open_by_rut(&mut con, student.rut())
            .await?;
        assert_eq!(open.len(), 1);

        let returned = loan.reconstruct(|l| {
            l.state = LoanState::Finalized;
            l.end_date = Some(EndDate::new(OffsetDateTime::now_utc()));
        });
        PostgresLoanRepository.update(&mut con, &returned).await?;

        let open = PostgresLoanRepository
            .find_open_by_rut(&mut con, student.rut())
            .await?;
        assert!(open.is_empty());

        let all = PostgresLoanRepository
            .find_by_rut(&mut con, student.rut())
            .await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].state(), &LoanState::Finalized);
        assert!(all[0].end_date().is_some());

        Ok(())
    }
}
