mod description;
mod finish_date;
mod id;

pub use self::{description::*, finish_date::*, id::*};
use crate::entity::common::BeginDate;
use crate::entity::{LoanId, StudentRut};
use destructure::{Destructure, Mutation};
use time::OffsetDateTime;

#[derive(Debug, Clone, Eq, PartialEq, Destructure, Mutation)]
pub struct Sanction {
    id: SanctionId,
    student_rut: StudentRut,
    loan_id: Option<LoanId>,
    description: SanctionDescription,
    begin_date: BeginDate<Sanction>,
    finish_date: FinishDate,
}

impl Sanction {
    pub fn new(
        id: SanctionId,
        student_rut: StudentRut,
        loan_id: Option<LoanId>,
        description: SanctionDescription,
        begin_date: BeginDate<Sanction>,
        finish_date: FinishDate,
    ) -> Self {
        Self {
            id,
            student_rut,
            loan_id,
            description,
            begin_date,
            finish_date,
        }
    }

    pub fn id(&self) -> &SanctionId {
        &self.id
    }

    pub fn student_rut(&self) -> &StudentRut {
        &self.student_rut
    }

    pub fn loan_id(&self) -> &Option<LoanId> {
        &self.loan_id
    }

    pub fn description(&self) -> &SanctionDescription {
        &self.description
    }

    pub fn begin_date(&self) -> &BeginDate<Sanction> {
        &self.begin_date
    }

    pub fn finish_date(&self) -> &FinishDate {
        &self.finish_date
    }

    pub fn is_active(&self, now: OffsetDateTime) -> bool {
        *self.finish_date.as_ref() > now
    }
}
