use crate::controller::Exhaust;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::{
    BeginDate, DestructSanction, FinishDate, LoanId, Sanction, SanctionDescription, SanctionId,
    StudentRut,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SanctionResponse {
    id: SanctionId,
    student_rut: StudentRut,
    loan_id: Option<LoanId>,
    description: SanctionDescription,
    begin_date: BeginDate<Sanction>,
    finish_date: FinishDate,
}

impl IntoResponse for SanctionResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct SanctionCheckResponse {
    has_active_sanctions: bool,
}

impl IntoResponse for SanctionCheckResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

fn project(sanction: Sanction) -> SanctionResponse {
    let DestructSanction {
        id,
        student_rut,
        loan_id,
        description,
        begin_date,
        finish_date,
    } = sanction.into_destruct();
    SanctionResponse {
        id,
        student_rut,
        loan_id,
        description,
        begin_date,
        finish_date,
    }
}

pub struct SanctionPresenter;

impl Exhaust<Sanction> for SanctionPresenter {
    type To = SanctionResponse;
    fn emit(&self, input: Sanction) -> Self::To {
        project(input)
    }
}

impl Exhaust<Vec<Sanction>> for SanctionPresenter {
    type To = axum::Json<Vec<SanctionResponse>>;
    fn emit(&self, input: Vec<Sanction>) -> Self::To {
        let result = input.into_iter().map(project).collect::<Vec<_>>();
        axum::Json::from(result)
    }
}

impl Exhaust<bool> for SanctionPresenter {
    type To = SanctionCheckResponse;
    fn emit(&self, input: bool) -> Self::To {
        SanctionCheckResponse {
            has_active_sanctions: input,
        }
    }
}

#[cfg(test)]
mod test {
    use super::SanctionPresenter;
    use crate::controller::Exhaust;

    #[test]
    fn check_response_uses_the_legacy_key() {
        let json = serde_json::to_value(SanctionPresenter.emit(true)).unwrap();
        assert_eq!(json["has_active_sanctions"], true);
    }
}
