use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::{DependOnSanctionQuery, SanctionQuery};
use kernel::interface::update::{DependOnSanctionModifier, SanctionModifier};
use kernel::prelude::entity::{
    BeginDate, FinishDate, LoanId, Sanction, SanctionDescription, SanctionId, StudentRut,
};
use kernel::KernelError;

use crate::database::postgres::{PgTransaction, PostgresDatabase};
use crate::error::ConvertError;

pub struct PostgresSanctionRepository;

#[async_trait::async_trait]
impl SanctionQuery<PgTransaction> for PostgresSanctionRepository {
    async fn find_active_by_rut(
        &self,
        con: &mut PgTransaction,
        rut: &StudentRut,
        now: &OffsetDateTime,
    ) -> error_stack::Result<Vec<Sanction>, KernelError> {
        PgSanctionInternal::find_active_by_rut(con, rut, now).await
    }
}

impl DependOnSanctionQuery<PgTransaction> for PostgresDatabase {
    type SanctionQuery = PostgresSanctionRepository;
    fn sanction_query(&self) -> &Self::SanctionQuery {
        &PostgresSanctionRepository
    }
}

#[async_trait::async_trait]
impl SanctionModifier<PgTransaction> for PostgresSanctionRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        sanction: &Sanction,
    ) -> error_stack::Result<(), KernelError> {
        PgSanctionInternal::create(con, sanction).await
    }

    async fn update(
        &self,
        con: &mut PgTransaction,
        sanction: &Sanction,
    ) -> error_stack::Result<(), KernelError> {
        PgSanctionInternal::update(con, sanction).await
    }
}

impl DependOnSanctionModifier<PgTransaction> for PostgresDatabase {
    type SanctionModifier = PostgresSanctionRepository;
    fn sanction_modifier(&self) -> &Self::SanctionModifier {
        &PostgresSanctionRepository
    }
}

#[derive(sqlx::FromRow)]
struct SanctionRow {
    id: Uuid,
    student_rut: i32,
    loan_id: Option<Uuid>,
    description: String,
    begin_date: OffsetDateTime,
    finish_date: OffsetDateTime,
}

impl From<SanctionRow> for Sanction {
    fn from(value: SanctionRow) -> Self {
        Sanction::new(
            SanctionId::new(value.id),
            StudentRut::new(value.student_rut),
            value.loan_id.map(LoanId::new),
            SanctionDescription::new(value.description),
            BeginDate::new(value.begin_date),
            FinishDate::new(value.finish_date),
        )
    }
}

pub(in crate::database) struct PgSanctionInternal;

impl PgSanctionInternal {
    async fn find_active_by_rut(
        con: &mut PgConnection,
        rut: &StudentRut,
        now: &OffsetDateTime,
    ) -> error_stack::Result<Vec<Sanction>, KernelError> {
        let rows = sqlx::query_as::<_, SanctionRow>(
            // language=postgresql
            r#"
            SELECT id, student_rut, loan_id, description, begin_date, finish_date
            FROM sanctions
            WHERE student_rut = $1 AND finish_date > $2
            ORDER BY begin_date DESC
            "#,
        )
        .bind(rut.as_ref())
        .bind(now)
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Sanction::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        sanction: &Sanction,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO sanctions (id, student_rut, loan_id, description, begin_date, finish_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(sanction.id().as_ref())
        .bind(sanction.student_rut().as_ref())
        .bind(sanction.loan_id().as_ref().map(|id| *id.as_ref()))
        .bind(sanction.description().as_ref())
        .bind(sanction.begin_date().as_ref())
        .bind(sanction.finish_date().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        sanction: &Sanction,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE sanctions
            SET description = $2, finish_date = $3
            WHERE id = $1
            "#,
        )
        .bind(sanction.id().as_ref())
        .bind(sanction.description().as_ref())
        .bind(sanction.finish_date().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
