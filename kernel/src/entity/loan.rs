mod end_date;
mod id;
mod state;
mod term;

pub use self::{end_date::*, id::*, state::*, term::*};
use crate::entity::common::BeginDate;
use crate::entity::{NotebookId, StudentRut};
use destructure::{Destructure, Mutation};
use time::OffsetDateTime;

#[derive(Debug, Clone, Eq, PartialEq, Destructure, Mutation)]
pub struct Loan {
    id: LoanId,
    notebook_id: NotebookId,
    student_rut: StudentRut,
    state: LoanState,
    begin_date: BeginDate<Loan>,
    end_date: Option<EndDate>,
}

impl Loan {
    pub fn new(
        id: LoanId,
        notebook_id: NotebookId,
        student_rut: StudentRut,
        state: LoanState,
        begin_date: BeginDate<Loan>,
        end_date: Option<EndDate>,
    ) -> Self {
        Self {
            id,
            notebook_id,
            student_rut,
            state,
            begin_date,
            end_date,
        }
    }

    pub fn id(&self) -> &LoanId {
        &self.id
    }

    pub fn notebook_id(&self) -> &NotebookId {
        &self.notebook_id
    }

    pub fn student_rut(&self) -> &StudentRut {
        &self.student_rut
    }

    pub fn state(&self) -> &LoanState {
        &self.state
    }

    pub fn begin_date(&self) -> &BeginDate<Loan> {
        &self.begin_date
    }

    pub fn end_date(&self) -> &Option<EndDate> {
        &self.end_date
    }

    /*
     * A stored-Active loan older than the term is shown as Pending.
     * The stored state itself never changes here.
     */
    pub fn display_state(&self, term: &LoanTerm, now: OffsetDateTime) -> LoanState {
        match self.state {
            LoanState::Active if now - *self.begin_date.as_ref() >= *term.as_ref() => {
                LoanState::Pending
            }
            state => state,
        }
    }
}
