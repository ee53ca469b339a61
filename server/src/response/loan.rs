use crate::controller::Exhaust;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::{
    BeginDate, DestructLoan, EndDate, Loan, LoanId, LoanState, LoanTerm, NotebookId, StudentRut,
};
use serde::Serialize;
use time::OffsetDateTime;

/*
 * `state` is what the store holds, `display_state` is what the counter
 * shows: a stored-Active loan past the term reads as Pending.
 */
#[derive(Debug, Serialize)]
pub struct LoanResponse {
    id: LoanId,
    notebook_id: NotebookId,
    student_rut: StudentRut,
    state: LoanState,
    display_state: LoanState,
    begin_date: BeginDate<Loan>,
    end_date: Option<EndDate>,
}

impl IntoResponse for LoanResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CreatedLoanResponse(LoanResponse);

impl IntoResponse for CreatedLoanResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

fn project(term: &LoanTerm, loan: Loan) -> LoanResponse {
    let display_state = loan.display_state(term, OffsetDateTime::now_utc());
    let DestructLoan {
        id,
        notebook_id,
        student_rut,
        state,
        begin_date,
        end_date,
    } = loan.into_destruct();
    LoanResponse {
        id,
        notebook_id,
        student_rut,
        state,
        display_state,
        begin_date,
        end_date,
    }
}

pub struct LoanPresenter {
    term: LoanTerm,
}

impl LoanPresenter {
    pub fn new(term: LoanTerm) -> Self {
        Self { term }
    }
}

impl Exhaust<Loan> for LoanPresenter {
    type To = LoanResponse;
    fn emit(&self, input: Loan) -> Self::To {
        project(&self.term, input)
    }
}

impl Exhaust<Option<Loan>> for LoanPresenter {
    type To = Option<LoanResponse>;
    fn emit(&self, input: Option<Loan>) -> Self::To {
        input.map(|loan| project(&self.term, loan))
    }
}

impl Exhaust<Vec<Loan>> for LoanPresenter {
    type To = Option<axum::Json<Vec<LoanResponse>>>;
    // An empty list is reported as missing, the way the legacy API did.
    fn emit(&self, input: Vec<Loan>) -> Self::To {
        if input.is_empty() {
            return None;
        }
        let result = input
            .into_iter()
            .map(|loan| project(&self.term, loan))
            .collect::<Vec<_>>();
        Some(axum::Json::from(result))
    }
}

pub struct CreatedLoanPresenter {
    term: LoanTerm,
}

impl CreatedLoanPresenter {
    pub fn new(term: LoanTerm) -> Self {
        Self { term }
    }
}

impl Exhaust<Loan> for CreatedLoanPresenter {
    type To = CreatedLoanResponse;
    fn emit(&self, input: Loan) -> Self::To {
        CreatedLoanResponse(project(&self.term, input))
    }
}
